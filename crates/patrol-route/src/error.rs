use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("route parse error: {0}")]
    Parse(String),

    #[error("route ids must be contiguous from 0: route {0} is missing")]
    MissingRoute(u32),

    #[error("route {route}: duplicate waypoint seq {seq}")]
    DuplicateSeq { route: u32, seq: u32 },

    #[error("route {0}: rows disagree on cycle mode")]
    CycleMismatch(u32),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RouteResult<T> = Result<T, RouteError>;
