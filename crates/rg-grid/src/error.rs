//! Grid error type.

use thiserror::Error;

use crate::GridBounds;

/// Errors produced by `rg-grid`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Adjacency wiring is four-neighbour only: exactly the offsets
    /// (0,1), (1,0), (0,-1), (-1,0), each once.
    #[error("invalid direction set: {reason}")]
    InvalidDirectionSet { reason: String },

    #[error("grid {0} has too many cells to index or allocate")]
    TooLarge(GridBounds),

    #[error("coordinate ({x}, {y}) is outside grid {bounds}")]
    OutOfBounds { x: i64, y: i64, bounds: GridBounds },
}

pub type GridResult<T> = Result<T, GridError>;
