//! The `Simulation` struct and its run loop.

use log::{info, warn};

use rg_agent::{AgentController, AgentError, AgentResult, FinalState};
use rg_core::AgentId;
use rg_grid::Grid;
use rg_input::AgentRecord;

use crate::{FailurePolicy, SimConfig, SimError, SimObserver, SimResult};

// ── Per-agent results ─────────────────────────────────────────────────────────

/// What one agent produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentOutcome {
    pub agent:  AgentId,
    pub result: AgentResult<FinalState>,
}

/// Outcomes of a completed run, one per agent, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimReport {
    pub outcomes: Vec<AgentOutcome>,
}

impl SimReport {
    /// Final states of every agent that succeeded, in input order.
    pub fn final_states(&self) -> impl Iterator<Item = &FinalState> + '_ {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().ok())
    }

    /// `(agent, error)` for every agent that failed.
    pub fn failures(&self) -> impl Iterator<Item = (AgentId, &AgentError)> + '_ {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.agent, e)))
    }

    /// `true` if every agent reported a final state.
    pub fn is_complete(&self) -> bool {
        self.outcomes.iter().all(|o| o.result.is_ok())
    }
}

// ── Simulation ────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// Owns the grid (and through it the direction set), the agent records in
/// input order, and the controller built for each agent by the last run.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Simulation {
    /// Run configuration.
    pub config: SimConfig,

    /// Shared, read-only grid.
    pub grid: Grid,

    /// Agent inputs, indexed by `AgentId`.
    pub agents: Vec<AgentRecord>,

    /// Controllers from the most recent [`run`](Self::run), indexed by
    /// `AgentId`.  Agents that never started (aborted runs) are absent.
    pub controllers: Vec<AgentController>,
}

impl Simulation {
    // ── Public API ────────────────────────────────────────────────────────

    /// Place and run every agent in input order.
    ///
    /// Each call starts from fresh controllers, so repeated runs give the same
    /// result.  Under [`FailurePolicy::Abort`] the first failing agent's
    /// error is returned as [`SimError::Agent`]; under
    /// [`FailurePolicy::Isolate`] failures are recorded in the report.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<SimReport> {
        info!(
            "running {} agents on grid {} ({:?})",
            self.agents.len(),
            self.grid.bounds(),
            self.config.failure_policy
        );
        observer.on_run_start(&self.grid, self.agents.len());

        self.controllers.clear();
        let mut report = SimReport { outcomes: Vec::with_capacity(self.agents.len()) };

        for (i, record) in self.agents.iter().enumerate() {
            // SimBuilder caps the agent count at u32::MAX.
            let agent = AgentId(i as u32);
            observer.on_agent_start(agent);

            let mut controller = AgentController::new(agent);
            let result = run_agent(&mut controller, &self.grid, record);
            self.controllers.push(controller);

            let outcome = AgentOutcome { agent, result };
            observer.on_agent_end(&outcome);

            if let Err(e) = &outcome.result {
                match self.config.failure_policy {
                    FailurePolicy::Abort => {
                        return Err(SimError::Agent { agent, source: e.clone() });
                    }
                    FailurePolicy::Isolate => warn!("{agent} failed, continuing: {e}"),
                }
            }
            report.outcomes.push(outcome);
        }

        info!(
            "run complete: {} ok, {} failed",
            report.final_states().count(),
            report.failures().count()
        );
        observer.on_run_end(&report);
        Ok(report)
    }

    /// Number of agents in input order.
    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }
}

/// Place, execute and report a single agent.
fn run_agent(
    controller: &mut AgentController,
    grid:       &Grid,
    record:     &AgentRecord,
) -> AgentResult<FinalState> {
    controller.place_named(grid, record.start_x, record.start_y, &record.heading)?;
    controller.execute_symbols(grid, &record.commands)?;
    controller.report(grid)
}
