use patrol_behavior::BehaviorError;
use patrol_core::{AgentId, CoreError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration: {0}")]
    Config(#[from] CoreError),

    #[error("invalid profile for {agent}: {source}")]
    Profile {
        agent:  AgentId,
        source: BehaviorError,
    },

    #[error("no such agent: {0}")]
    UnknownAgent(AgentId),

    #[error("a simulation needs at least one agent")]
    NoAgents,
}

pub type SimResult<T> = Result<T, SimError>;
