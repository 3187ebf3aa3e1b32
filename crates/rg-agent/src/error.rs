use rg_core::{AgentId, CoreError};
use rg_grid::{GridBounds, GridError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AgentError {
    #[error("agent {0} has already been placed on the grid")]
    AlreadyPlaced(AgentId),

    #[error("agent {0} must be placed on a grid before it can move or report")]
    NotPlaced(AgentId),

    /// The agent's node id only means something on the grid it was placed on.
    #[error("agent {agent} was placed on grid {placed} but driven on grid {given}")]
    WrongGrid {
        agent:  AgentId,
        placed: GridBounds,
        given:  GridBounds,
    },

    /// Commands before `position` have already been applied.
    #[error("agent {agent}: malformed command {symbol:?} at position {position}")]
    MalformedCommand {
        agent:    AgentId,
        symbol:   char,
        position: usize,
    },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Grid(#[from] GridError),
}

pub type AgentResult<T> = Result<T, AgentError>;
