//! Per-agent pose and movement primitives.

use log::trace;

use rg_core::{DirectionSet, HeadingId, NodeId, Rotation};
use rg_grid::Grid;

/// An agent standing on a grid node, facing a heading.
///
/// The agent holds a [`NodeId`] into exactly one [`Grid`]; every method that
/// needs coordinates or adjacency takes that grid by shared reference and
/// must be given that same grid.  Agents are created by
/// [`AgentController::place`](crate::AgentController::place).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Agent {
    heading:  HeadingId,
    position: NodeId,
}

/// Observable agent state: cell coordinates plus heading id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pose {
    pub x:       u32,
    pub y:       u32,
    pub heading: HeadingId,
}

impl Agent {
    /// Callers guarantee `position` is a node of the grid the agent will move
    /// on and `heading` is in that grid's direction set.
    /// [`AgentController::place`](crate::AgentController::place) checks both.
    #[inline]
    pub(crate) fn new(position: NodeId, heading: HeadingId) -> Self {
        Self { heading, position }
    }

    #[inline]
    pub fn heading(&self) -> HeadingId {
        self.heading
    }

    #[inline]
    pub fn position(&self) -> NodeId {
        self.position
    }

    /// Turn a quarter step.  Never fails.
    #[inline]
    pub fn rotate(&mut self, rotation: Rotation, directions: &DirectionSet) {
        self.heading = directions.rotate(self.heading, rotation);
    }

    /// Step to the neighbouring node along the current heading.
    ///
    /// Returns `false` (and leaves the position unchanged) when the heading
    /// points off the grid edge.
    pub fn advance(&mut self, grid: &Grid) -> bool {
        match grid.neighbor(self.position, self.heading) {
            Some(next) => {
                self.position = next;
                true
            }
            None => {
                let node = grid.node(self.position);
                trace!("edge at ({}, {}) heading {}; staying put", node.x, node.y, self.heading);
                false
            }
        }
    }

    /// Coordinates and heading of the agent on `grid`.
    pub fn current_state(&self, grid: &Grid) -> Pose {
        let node = grid.node(self.position);
        Pose { x: node.x, y: node.y, heading: self.heading }
    }
}
