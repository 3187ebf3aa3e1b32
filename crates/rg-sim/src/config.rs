//! Run configuration.

use rg_core::DirectionSet;

/// What a failing agent does to the rest of the run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FailurePolicy {
    /// Stop at the first failing agent and return its error.
    #[default]
    Abort,
    /// Record the failure against that agent and carry on with the next.
    Isolate,
}

/// Top-level simulation configuration.
///
/// Typically assembled by the application from command-line flags and passed
/// to [`SimBuilder::config`](crate::SimBuilder::config).
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Default: [`FailurePolicy::Abort`].
    #[cfg_attr(feature = "serde", serde(default))]
    pub failure_policy: FailurePolicy,

    /// Headings used for grid wiring, rotation and reporting.  The grid only
    /// accepts four-heading sets.  Default: [`DirectionSet::compass`].
    #[cfg_attr(feature = "serde", serde(default))]
    pub directions: DirectionSet,
}

impl SimConfig {
    pub fn with_policy(failure_policy: FailurePolicy) -> Self {
        Self { failure_policy, ..Self::default() }
    }
}
