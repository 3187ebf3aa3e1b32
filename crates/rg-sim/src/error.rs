use rg_agent::AgentError;
use rg_core::AgentId;
use rg_grid::GridError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    #[error("grid construction failed: {0}")]
    Grid(#[from] GridError),

    #[error("{count} agents exceeds the supported maximum")]
    TooManyAgents { count: usize },

    #[error("{agent} failed: {source}")]
    Agent {
        agent:  AgentId,
        #[source]
        source: AgentError,
    },
}

pub type SimResult<T> = Result<T, SimError>;
