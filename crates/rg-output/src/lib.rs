//! `rg-output`: final-state writers for the rover_grid simulator.
//!
//! | Writer       | Format                                               |
//! |--------------|------------------------------------------------------|
//! | `TextWriter` | one `x y H` line per agent                           |
//! | `CsvWriter`  | `agent,x,y,heading,error` with a header row          |
//!
//! Both implement [`OutputWriter`] and are driven by [`SimOutputObserver`],
//! which implements `rg_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use rg_output::{SimOutputObserver, TextWriter};
//!
//! let mut obs = SimOutputObserver::new(TextWriter::new(std::io::stdout()));
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod text;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::FinalStateRow;
pub use text::TextWriter;
pub use writer::OutputWriter;
