use thiserror::Error;

#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error("invalid agent profile: {0}")]
    Profile(String),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
