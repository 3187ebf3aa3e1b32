//! The `OutputWriter` trait implemented by all backend writers.

use crate::{FinalStateRow, OutputResult};

/// Trait implemented by the text and CSV writers.
///
/// Errors are stored by [`SimOutputObserver`](crate::SimOutputObserver) and
/// retrieved with its `take_error`.
pub trait OutputWriter {
    /// Write one agent's row.  Rows arrive in input order.
    fn write_row(&mut self, row: &FinalStateRow) -> OutputResult<()>;

    /// Flush the underlying sink.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
