//! The `AgentController`: drives one agent through its command stream.
//!
//! # State machine
//!
//! ```text
//! Unplaced ──place──▶ Placed ──execute (ok)──▶ Done
//!                       │  ▲                    │
//!                       └──┘ execute (err)      └──execute──▶ Done
//! ```
//!
//! `execute` and `report` before `place` fail with
//! [`AgentError::NotPlaced`]; a second `place` fails with
//! [`AgentError::AlreadyPlaced`].  A malformed command aborts the rest of the
//! stream but keeps every command applied before it.
//!
//! The controller remembers the bounds of the grid it was placed on and
//! rejects any later call made with a grid of different bounds
//! ([`AgentError::WrongGrid`]).  Callers must still pass the same grid, not
//! merely an equally sized one.

use std::fmt;

use log::debug;

use rg_core::{AgentId, Command, HeadingId};
use rg_grid::{Grid, GridBounds};

use crate::{Agent, AgentError, AgentResult};

/// Lifecycle of an [`AgentController`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// No agent on the grid yet.
    Unplaced,
    /// Agent placed; commands not (fully) executed.
    Placed,
    /// A command stream ran to completion.
    Done,
}

/// Final agent report: coordinates plus heading name.
///
/// Renders as `"x y H"`, e.g. `"1 3 N"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FinalState {
    pub x:       u32,
    pub y:       u32,
    pub heading: String,
}

impl fmt::Display for FinalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.heading)
    }
}

/// Owns one agent and applies commands to it against a shared grid.
#[derive(Debug, Clone)]
pub struct AgentController {
    id:    AgentId,
    agent: Option<Agent>,
    state: ControllerState,
    /// Bounds of the grid `agent` was placed on.
    placed_on: Option<GridBounds>,
}

impl AgentController {
    pub fn new(id: AgentId) -> Self {
        Self { id, agent: None, state: ControllerState::Unplaced, placed_on: None }
    }

    #[inline]
    pub fn id(&self) -> AgentId {
        self.id
    }

    #[inline]
    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// The agent, once placed.
    #[inline]
    pub fn agent(&self) -> Option<&Agent> {
        self.agent.as_ref()
    }

    /// Put the agent on `grid` at `(x, y)` facing `heading`.
    ///
    /// # Errors
    ///
    /// - [`AgentError::AlreadyPlaced`] on a second call.
    /// - [`AgentError::Grid`] if `(x, y)` is outside the grid.
    /// - [`AgentError::Core`] if `heading` is not in the grid's direction set.
    pub fn place(&mut self, grid: &Grid, x: u32, y: u32, heading: HeadingId) -> AgentResult<()> {
        if self.agent.is_some() {
            return Err(AgentError::AlreadyPlaced(self.id));
        }
        // Resolve the name so an unknown heading id fails here, not at report.
        grid.directions().name_of(heading)?;
        let node = grid.require_node(x as i64, y as i64)?;

        debug!("{} placed at ({x}, {y}) heading {heading}", self.id);
        self.agent = Some(Agent::new(node, heading));
        self.state = ControllerState::Placed;
        self.placed_on = Some(grid.bounds());
        Ok(())
    }

    /// Like [`place`](Self::place) with the heading given by name.
    pub fn place_named(&mut self, grid: &Grid, x: u32, y: u32, heading: &str) -> AgentResult<()> {
        let heading = grid.directions().index_of(heading)?;
        self.place(grid, x, y, heading)
    }

    /// Apply `commands` strictly in order on the grid the agent was placed on.
    pub fn execute(&mut self, grid: &Grid, commands: &[Command]) -> AgentResult<()> {
        self.check_grid(grid)?;
        let agent = self.agent.as_mut().ok_or(AgentError::NotPlaced(self.id))?;
        for &command in commands {
            apply(agent, grid, command);
        }
        self.state = ControllerState::Done;
        Ok(())
    }

    /// Apply a command-letter stream (`L`, `R`, `M`) strictly in order.
    ///
    /// The first unrecognised letter fails with
    /// [`AgentError::MalformedCommand`]; letters before it stay applied.
    pub fn execute_symbols(&mut self, grid: &Grid, symbols: &str) -> AgentResult<()> {
        self.check_grid(grid)?;
        let id = self.id;
        let agent = self.agent.as_mut().ok_or(AgentError::NotPlaced(id))?;
        for (position, symbol) in symbols.chars().enumerate() {
            let command = Command::from_symbol(symbol)
                .ok_or(AgentError::MalformedCommand { agent: id, symbol, position })?;
            apply(agent, grid, command);
        }
        self.state = ControllerState::Done;
        Ok(())
    }

    /// Current position and heading name.
    pub fn report(&self, grid: &Grid) -> AgentResult<FinalState> {
        self.check_grid(grid)?;
        let agent = self.agent.as_ref().ok_or(AgentError::NotPlaced(self.id))?;
        let pose = agent.current_state(grid);
        let heading = grid.directions().name_of(pose.heading)?;
        Ok(FinalState { x: pose.x, y: pose.y, heading: heading.to_owned() })
    }

    /// `NotPlaced` before placement, `WrongGrid` for a grid of other bounds.
    fn check_grid(&self, grid: &Grid) -> AgentResult<()> {
        match self.placed_on {
            None => Err(AgentError::NotPlaced(self.id)),
            Some(placed) if placed != grid.bounds() => Err(AgentError::WrongGrid {
                agent: self.id,
                placed,
                given: grid.bounds(),
            }),
            Some(_) => Ok(()),
        }
    }
}

#[inline]
fn apply(agent: &mut Agent, grid: &Grid, command: Command) {
    match command.rotation() {
        Some(rotation) => agent.rotate(rotation, grid.directions()),
        None => {
            agent.advance(grid);
        }
    }
}
