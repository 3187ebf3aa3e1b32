//! Plain-text backend: the `x y H` report format.

use std::io::Write;

use crate::writer::OutputWriter;
use crate::{FinalStateRow, OutputResult};

/// Writes one line per agent to any [`Write`] sink.
///
/// Successful agents render as `x y H`.  Failed agents (only seen under the
/// isolate policy) render as `ERROR: <reason>` so line `n` always belongs to
/// agent `n`.
pub struct TextWriter<W: Write> {
    out:      W,
    finished: bool,
}

impl<W: Write> TextWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, finished: false }
    }

    /// Unwrap the underlying sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> OutputWriter for TextWriter<W> {
    fn write_row(&mut self, row: &FinalStateRow) -> OutputResult<()> {
        match &row.result {
            Ok(state) => writeln!(self.out, "{state}")?,
            Err(reason) => writeln!(self.out, "ERROR: {reason}")?,
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
