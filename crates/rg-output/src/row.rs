//! Plain data row type written by output backends.

use rg_agent::FinalState;
use rg_sim::AgentOutcome;

/// One agent's line of output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalStateRow {
    /// Position in input order.
    pub agent:  u32,
    /// Final state, or the rendered error for an agent that failed.
    pub result: Result<FinalState, String>,
}

impl FinalStateRow {
    pub fn from_outcome(outcome: &AgentOutcome) -> Self {
        Self {
            agent:  outcome.agent.0,
            result: outcome.result.clone().map_err(|e| e.to_string()),
        }
    }
}
