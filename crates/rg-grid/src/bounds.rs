//! Grid extent.

use std::fmt;

/// Upper-right corner of the grid.  The grid spans `[0, max_x] × [0, max_y]`
/// inclusive, origin at `(0, 0)`, so even `(0, 0)` bounds hold one cell.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridBounds {
    pub max_x: u32,
    pub max_y: u32,
}

impl GridBounds {
    #[inline]
    pub fn new(max_x: u32, max_y: u32) -> Self {
        Self { max_x, max_y }
    }

    /// Cells per row.
    #[inline]
    pub fn width(self) -> u64 {
        self.max_x as u64 + 1
    }

    /// Cells per column.
    #[inline]
    pub fn height(self) -> u64 {
        self.max_y as u64 + 1
    }

    /// Total number of cells, `(max_x + 1) * (max_y + 1)`.
    #[inline]
    pub fn cell_count(self) -> u64 {
        self.width() * self.height()
    }

    /// Is `(x, y)` inside the grid?  Takes signed coordinates so callers can
    /// test `x + dx` without pre-checking for underflow.
    #[inline]
    pub fn contains(self, x: i64, y: i64) -> bool {
        (0..=self.max_x as i64).contains(&x) && (0..=self.max_y as i64).contains(&y)
    }
}

impl fmt::Display for GridBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.max_x, self.max_y)
    }
}
