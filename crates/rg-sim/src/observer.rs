//! Simulation observer trait for progress reporting and output collection.

use rg_core::AgentId;
use rg_grid::Grid;

use crate::{AgentOutcome, SimReport};

/// Callbacks invoked by [`Simulation::run`][crate::Simulation::run].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: line printer
///
/// ```rust,ignore
/// struct Printer;
///
/// impl SimObserver for Printer {
///     fn on_agent_end(&mut self, outcome: &AgentOutcome) {
///         if let Ok(state) = &outcome.result {
///             println!("{state}");
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once after the grid is in place, before the first agent.
    fn on_run_start(&mut self, _grid: &Grid, _agent_count: usize) {}

    /// Called before an agent is placed.
    fn on_agent_start(&mut self, _agent: AgentId) {}

    /// Called after an agent reports, or fails.
    ///
    /// Under [`FailurePolicy::Abort`][crate::FailurePolicy::Abort] this is
    /// still called for the failing agent before the run stops.
    fn on_agent_end(&mut self, _outcome: &AgentOutcome) {}

    /// Called once after the last agent of a run that was not aborted.
    fn on_run_end(&mut self, _report: &SimReport) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
