//! `SimOutputObserver<W>` bridges `SimObserver` to an `OutputWriter`.

use log::debug;

use rg_sim::{AgentOutcome, SimObserver, SimReport};

use crate::row::FinalStateRow;
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes one row per finished agent to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
///
/// The writer is only flushed by `on_run_end`, which an aborted run never
/// reaches.  Wrap a buffer when aborted runs must leave no output behind.
pub struct SimOutputObserver<W: OutputWriter> {
    writer:       W,
    rows_written: usize,
    last_error:   Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, rows_written: 0, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Unwrap the inner writer (e.g. to read back a buffer after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_agent_end(&mut self, outcome: &AgentOutcome) {
        let row = FinalStateRow::from_outcome(outcome);
        let result = self.writer.write_row(&row);
        if result.is_ok() {
            self.rows_written += 1;
        }
        self.store_err(result);
    }

    fn on_run_end(&mut self, _report: &SimReport) {
        debug!("flushing {} output rows", self.rows_written);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
