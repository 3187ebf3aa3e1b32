//! CSV agent loader.
//!
//! # CSV format
//!
//! One row per agent, in run order.  Grid bounds are supplied by the caller.
//!
//! ```csv
//! x,y,heading,commands
//! 1,2,N,LMLMLMLMM
//! 3,3,E,MMRMMRMRRM
//! ```
//!
//! `heading` and `commands` are upper-cased before validation, the same as
//! the text format.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use rg_grid::GridBounds;

use crate::validate::{in_bounds, is_command_line, is_heading};
use crate::{AgentRecord, InputError, InputResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct AgentRow {
    x:        u32,
    y:        u32,
    heading:  String,
    commands: String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load agent records from a CSV file.
pub fn load_agents_csv(path: &Path, bounds: GridBounds) -> InputResult<Vec<AgentRecord>> {
    let file = std::fs::File::open(path)?;
    load_agents_reader(file, bounds)
}

/// Like [`load_agents_csv`] but accepts any `Read` source.
///
/// Line numbers in errors count the header as line 1.
pub fn load_agents_reader<R: Read>(reader: R, bounds: GridBounds) -> InputResult<Vec<AgentRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut agents = Vec::new();

    for (i, result) in csv_reader.deserialize::<AgentRow>().enumerate() {
        let line = i + 2;
        let row = result.map_err(|e| InputError::Parse(e.to_string()))?;

        let heading = row.heading.to_uppercase();
        if !is_heading(&heading) {
            return Err(InputError::MalformedStart {
                line,
                text: format!("{} {} {}", row.x, row.y, row.heading),
            });
        }
        let commands = row.commands.to_uppercase();
        if !is_command_line(&commands) {
            return Err(InputError::MalformedCommands { line, text: commands });
        }
        if !in_bounds(bounds, row.x, row.y) {
            return Err(InputError::StartOutOfBounds { line, x: row.x, y: row.y, bounds });
        }

        agents.push(AgentRecord { start_x: row.x, start_y: row.y, heading, commands });
    }

    if agents.is_empty() {
        return Err(InputError::NoAgents);
    }
    Ok(agents)
}
