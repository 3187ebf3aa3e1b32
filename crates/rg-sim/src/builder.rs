//! Fluent builder for constructing a [`Simulation`].

use log::debug;

use rg_grid::{Grid, GridBounds};
use rg_input::{AgentRecord, MissionInput};

use crate::{SimConfig, SimError, SimResult, Simulation};

/// Fluent builder for [`Simulation`].
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                                  |
/// |-----------------|------------------------------------------|
/// | `.config(c)`    | `SimConfig::default()` (Abort + compass) |
/// | `.agents(v)`    | no agents                                |
/// | `.agent(r)`     | appends one agent                        |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(GridBounds::new(5, 5))
///     .config(SimConfig::with_policy(FailurePolicy::Isolate))
///     .agents(records)
///     .build()?;
/// let report = sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    bounds: GridBounds,
    config: SimConfig,
    agents: Vec<AgentRecord>,
}

impl SimBuilder {
    pub fn new(bounds: GridBounds) -> Self {
        Self { bounds, config: SimConfig::default(), agents: Vec::new() }
    }

    /// Start from a parsed mission (bounds + agents).
    pub fn from_mission(mission: MissionInput) -> Self {
        Self::new(mission.bounds).agents(mission.agents)
    }

    pub fn config(mut self, config: SimConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the agent list.  Agents run in the order given.
    pub fn agents(mut self, agents: Vec<AgentRecord>) -> Self {
        self.agents = agents;
        self
    }

    /// Append one agent after those already added.
    pub fn agent(mut self, agent: AgentRecord) -> Self {
        self.agents.push(agent);
        self
    }

    /// Build the grid and return a ready-to-run [`Simulation`].
    ///
    /// # Errors
    ///
    /// - [`SimError::Grid`] if the configured direction set is not a
    ///   four-heading set, or the bounds are too large.
    /// - [`SimError::TooManyAgents`] if agent ids would overflow.
    pub fn build(self) -> SimResult<Simulation> {
        if u32::try_from(self.agents.len()).is_err() {
            return Err(SimError::TooManyAgents { count: self.agents.len() });
        }

        let grid = Grid::new(self.bounds, self.config.directions.clone())?;
        debug!("simulation ready: {} agents", self.agents.len());

        Ok(Simulation {
            config:      self.config,
            grid,
            controllers: Vec::with_capacity(self.agents.len()),
            agents:      self.agents,
        })
    }
}
