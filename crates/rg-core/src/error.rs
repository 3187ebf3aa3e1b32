//! Core error type.
//!
//! Downstream crates wrap `CoreError` as one variant of their own enums via
//! `#[from]`, so a failed heading lookup surfaces unchanged at the top.

use thiserror::Error;

/// Errors produced by `rg-core`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A heading index or name that is not part of the direction set.
    #[error("unknown direction {0}")]
    UnknownDirection(String),

    /// A direction set whose shape cannot support rotation or grid wiring.
    #[error("invalid direction set: {0}")]
    InvalidDirectionSet(String),
}

/// Shorthand result type for `rg-core`.
pub type CoreResult<T> = Result<T, CoreError>;
