//! `rg-grid`: the rectangular grid graph.
//!
//! # Crate layout
//!
//! | Module     | Contents                                              |
//! |------------|-------------------------------------------------------|
//! | [`bounds`] | `GridBounds`, the inclusive upper-right corner          |
//! | [`grid`]   | `Grid` (node arena + adjacency), `Node`               |
//! | [`error`]  | `GridError`, `GridResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                |
//! |---------|-------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `GridBounds`.    |

pub mod bounds;
pub mod error;
pub mod grid;


pub use bounds::GridBounds;
pub use error::{GridError, GridResult};
pub use grid::{Grid, Node, NEIGHBOR_SLOTS};
