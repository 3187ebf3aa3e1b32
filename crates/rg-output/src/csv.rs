//! CSV output backend.
//!
//! Columns: `agent,x,y,heading,error`.  Exactly one of the position columns
//! or `error` is filled per row.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{FinalStateRow, OutputResult};

const HEADER: [&str; 5] = ["agent", "x", "y", "heading", "error"];

/// Writes final states as CSV rows.
pub struct CsvWriter<W: Write> {
    rows:     Writer<W>,
    finished: bool,
}

impl<W: Write> CsvWriter<W> {
    /// Wrap `out` and write the header row.
    pub fn new(out: W) -> OutputResult<Self> {
        let mut rows = Writer::from_writer(out);
        rows.write_record(HEADER)?;
        Ok(Self { rows, finished: false })
    }

    /// Flush and unwrap the underlying sink.
    pub fn into_inner(self) -> OutputResult<W> {
        self.rows.into_inner().map_err(|e| e.into_error().into())
    }
}

impl CsvWriter<File> {
    /// Create (or truncate) `path` and write the header row.
    pub fn create(path: &Path) -> OutputResult<Self> {
        Self::new(File::create(path)?)
    }
}

impl<W: Write> OutputWriter for CsvWriter<W> {
    fn write_row(&mut self, row: &FinalStateRow) -> OutputResult<()> {
        let agent = row.agent.to_string();
        match &row.result {
            Ok(state) => {
                let (x, y) = (state.x.to_string(), state.y.to_string());
                self.rows.write_record([agent.as_str(), x.as_str(), y.as_str(), state.heading.as_str(), ""])?;
            }
            Err(reason) => self.rows.write_record([agent.as_str(), "", "", "", reason.as_str()])?,
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.rows.flush()?;
        Ok(())
    }
}
