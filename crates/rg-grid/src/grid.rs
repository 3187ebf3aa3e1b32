//! Grid graph representation and construction.
//!
//! # Data layout
//!
//! Nodes live in a flat arena indexed by [`NodeId`].  Cell `(x, y)` is stored
//! at
//!
//! ```text
//! id = x * (max_y + 1) + y
//! ```
//!
//! which is the order the construction loop visits cells (x outer, y inner).
//! Adjacency is a fixed array of [`NEIGHBOR_SLOTS`] `Option<NodeId>` slots per
//! node, indexed by [`HeadingId`].  A `None` slot is a grid edge; a slot is
//! never missing, so following any heading from any node is a total lookup.
//!
//! Nodes refer to each other by id rather than by reference, so the cyclic
//! neighbour graph has no ownership or lifetime entanglement.  The grid is
//! never mutated after [`Grid::new`] returns and can be shared freely.

use log::debug;

use rg_core::{DirectionSet, HeadingId, NodeId};

use crate::{GridBounds, GridError, GridResult};

/// Adjacency slots per node.  Wiring assumes axis-aligned four-neighbour
/// connectivity, so only four-heading direction sets are accepted.
pub const NEIGHBOR_SLOTS: usize = 4;

// ── Node ──────────────────────────────────────────────────────────────────────

/// A single grid cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub x: u32,
    pub y: u32,
    /// Neighbour in each heading, indexed by `HeadingId`.
    neighbors: [Option<NodeId>; NEIGHBOR_SLOTS],
}

impl Node {
    fn unwired(x: u32, y: u32) -> Self {
        Self { x, y, neighbors: [None; NEIGHBOR_SLOTS] }
    }

    /// The adjacent node in `heading`, or `None` at the grid edge (or for a
    /// heading id outside the set).
    #[inline]
    pub fn neighbor(&self, heading: HeadingId) -> Option<NodeId> {
        self.neighbors.get(heading.index()).copied().flatten()
    }

    /// All adjacency slots, indexed by `HeadingId`.
    #[inline]
    pub fn neighbors(&self) -> &[Option<NodeId>; NEIGHBOR_SLOTS] {
        &self.neighbors
    }

    /// `true` if at least one heading leads off the grid.
    pub fn is_boundary(&self) -> bool {
        self.neighbors.iter().any(Option::is_none)
    }
}

// ── Grid ──────────────────────────────────────────────────────────────────────

/// Every cell of a rectangle plus its directional adjacency.
///
/// Construct with [`Grid::new`]; the result is dense over its bounds, so every
/// in-bounds coordinate resolves to a node.
#[derive(Clone, Debug)]
pub struct Grid {
    bounds:     GridBounds,
    directions: DirectionSet,
    /// Indexed by `NodeId`.
    nodes:      Vec<Node>,
}

impl Grid {
    /// Build the grid for `bounds`, wiring adjacency along every heading in
    /// `directions`.
    ///
    /// # Errors
    ///
    /// - [`GridError::InvalidDirectionSet`] unless `directions` is exactly the
    ///   four axis-aligned unit offsets, in any order and under any names.
    /// - [`GridError::TooLarge`] if the cell count does not fit a `NodeId` or
    ///   the node arena cannot be allocated.
    pub fn new(bounds: GridBounds, directions: DirectionSet) -> GridResult<Self> {
        check_four_neighbour(&directions)?;
        let cell_count = usize::try_from(bounds.cell_count())
            .ok()
            .filter(|&n| n - 1 <= u32::MAX as usize)
            .ok_or(GridError::TooLarge(bounds))?;

        // ── Pass 1: create every node ─────────────────────────────────────
        let mut nodes = Vec::new();
        nodes
            .try_reserve_exact(cell_count)
            .map_err(|_| GridError::TooLarge(bounds))?;
        for x in 0..=bounds.max_x {
            for y in 0..=bounds.max_y {
                nodes.push(Node::unwired(x, y));
            }
        }
        debug_assert_eq!(nodes.len(), cell_count);

        // ── Pass 2: wire adjacency ────────────────────────────────────────
        //
        // All nodes exist before any wiring, so every in-bounds target is
        // already in the arena.
        for node in &mut nodes {
            for heading in directions.iter() {
                let tx = node.x as i64 + heading.dx as i64;
                let ty = node.y as i64 + heading.dy as i64;
                node.neighbors[heading.id.index()] = if bounds.contains(tx, ty) {
                    Some(id_for(bounds, tx as u32, ty as u32))
                } else {
                    None
                };
            }
        }

        debug!("built grid {bounds}: {cell_count} nodes");
        Ok(Self { bounds, directions, nodes })
    }

    /// Shorthand for a grid over the reference N/E/S/W compass.
    pub fn compass(bounds: GridBounds) -> GridResult<Self> {
        Self::new(bounds, DirectionSet::compass())
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    #[inline]
    pub fn bounds(&self) -> GridBounds {
        self.bounds
    }

    /// The direction set adjacency was wired against.
    #[inline]
    pub fn directions(&self) -> &DirectionSet {
        &self.directions
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    /// Is `(x, y)` a cell of this grid?
    #[inline]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        self.bounds.contains(x, y)
    }

    /// Id of the node at `(x, y)`, or `None` if outside the bounds.
    pub fn node_at(&self, x: i64, y: i64) -> Option<NodeId> {
        self.contains(x, y).then(|| id_for(self.bounds, x as u32, y as u32))
    }

    /// Like [`node_at`](Self::node_at) but reports the miss as an error.
    pub fn require_node(&self, x: i64, y: i64) -> GridResult<NodeId> {
        self.node_at(x, y)
            .ok_or(GridError::OutOfBounds { x, y, bounds: self.bounds })
    }

    /// The node with id `id`.
    ///
    /// # Panics
    /// Panics if `id` did not come from this grid.
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// The node adjacent to `id` in `heading`, `None` at the grid edge.
    #[inline]
    pub fn neighbor(&self, id: NodeId, heading: HeadingId) -> Option<NodeId> {
        self.node(id).neighbor(heading)
    }

    /// Iterator over `(NodeId, &Node)` in arena order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId(i as u32), n))
    }
}

/// Offsets a four-neighbour grid can wire: N, E, S, W in some order.
const UNIT_OFFSETS: [(i32, i32); NEIGHBOR_SLOTS] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Every unit offset exactly once, so no two headings of a node share a
/// neighbour and no node is its own neighbour.
fn check_four_neighbour(directions: &DirectionSet) -> GridResult<()> {
    if directions.count() != NEIGHBOR_SLOTS {
        return Err(GridError::InvalidDirectionSet {
            reason: format!("grid wiring needs exactly 4 headings, got {}", directions.count()),
        });
    }
    let mut seen = [false; NEIGHBOR_SLOTS];
    for heading in directions.iter() {
        let slot = UNIT_OFFSETS.iter().position(|&o| o == (heading.dx, heading.dy));
        match slot {
            Some(i) if !seen[i] => seen[i] = true,
            Some(_) => {
                return Err(GridError::InvalidDirectionSet {
                    reason: format!(
                        "heading {:?} repeats offset ({}, {})",
                        heading.name, heading.dx, heading.dy
                    ),
                });
            }
            None => {
                return Err(GridError::InvalidDirectionSet {
                    reason: format!(
                        "heading {:?} has offset ({}, {}); only axis-aligned unit steps are allowed",
                        heading.name, heading.dx, heading.dy
                    ),
                });
            }
        }
    }
    Ok(())
}

/// Arena position of in-bounds cell `(x, y)`.
#[inline]
fn id_for(bounds: GridBounds, x: u32, y: u32) -> NodeId {
    NodeId((x as u64 * bounds.height() + y as u64) as u32)
}
