//! `rg-agent`: agent movement and command execution.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                    |
//! |----------------|-------------------------------------------------------------|
//! | [`agent`]      | `Agent` (heading + node, rotate/advance), `Pose`            |
//! | [`controller`] | `AgentController` state machine, `FinalState` report        |
//! | [`error`]      | `AgentError`, `AgentResult<T>`                              |
//!
//! # Movement model
//!
//! 1. `rotate` turns the agent a quarter step, modulo the direction count.
//! 2. `advance` follows the grid's adjacency slot for the current heading.
//!    A `None` slot is the grid edge: the agent stays where it is and no
//!    error is raised.
//! 3. The grid is only ever read, so any number of agents can share one.

pub mod agent;
pub mod controller;
pub mod error;

#[cfg(test)]
mod tests;

pub use agent::{Agent, Pose};
pub use controller::{AgentController, ControllerState, FinalState};
pub use error::{AgentError, AgentResult};
