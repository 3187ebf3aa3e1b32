//! `rg-core`: foundational types for the `rover_grid` simulator.
//!
//! This crate is a dependency of every other `rg-*` crate.  It has no `rg-*`
//! dependencies and a single external one (`thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`ids`]       | `NodeId`, `AgentId`, `HeadingId`                      |
//! | [`heading`]   | `Heading`, `DirectionSet`                             |
//! | [`command`]   | `Command`, `Rotation`                                 |
//! | [`error`]     | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod command;
pub mod error;
pub mod heading;
pub mod ids;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use command::{Command, Rotation};
pub use error::{CoreError, CoreResult};
pub use heading::{DirectionSet, Heading};
pub use ids::{AgentId, HeadingId, NodeId};
