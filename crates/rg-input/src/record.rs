//! Typed mission records.

use rg_grid::GridBounds;

/// One agent's starting pose and command letters, exactly as read.
///
/// `heading` is a compass letter (`N`, `E`, `S`, `W`) and `commands` is a
/// non-empty string over `L`, `R`, `M`.  Both are upper-case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentRecord {
    pub start_x:  u32,
    pub start_y:  u32,
    pub heading:  String,
    pub commands: String,
}

/// A complete mission: grid bounds plus agents in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissionInput {
    pub bounds: GridBounds,
    pub agents: Vec<AgentRecord>,
}
