//! Plain-text mission loader.
//!
//! # Format
//!
//! ```text
//! 5 5
//! 1 2 N
//! LMLMLMLMM
//! 3 3 E
//! MMRMMRMRRM
//! ```
//!
//! The first line is the grid's upper-right corner.  Every following pair of
//! lines is one agent: `x y H` then a command string over `L`, `R`, `M`.
//! The bounds line must match `^[0-9]+ [0-9]+$` exactly, with no surrounding
//! whitespace.  Agent lines are upper-cased and trimmed before validation, so
//! `1 2 n` and `lmm` are accepted.  Trailing blank lines are ignored; any other blank line
//! is a malformed record.

use std::io::Read;
use std::path::Path;

use log::debug;

use crate::validate::{in_bounds, is_command_line, parse_bounds, parse_start};
use crate::{AgentRecord, InputError, InputResult, MissionInput};

/// Read and parse a mission file.
pub fn load_mission(path: &Path) -> InputResult<MissionInput> {
    let file = std::fs::File::open(path)?;
    load_mission_reader(file)
}

/// Like [`load_mission`] but accepts any `Read` source.
pub fn load_mission_reader<R: Read>(mut reader: R) -> InputResult<MissionInput> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_mission(&text)
}

/// Parse mission text already held in memory.
pub fn parse_mission(text: &str) -> InputResult<MissionInput> {
    let mut lines: Vec<&str> = text.lines().collect();
    while lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }

    let Some((first, rest)) = lines.split_first() else {
        return Err(InputError::Empty);
    };

    let bounds = parse_bounds(first).ok_or_else(|| InputError::MalformedBounds {
        line: 1,
        text: (*first).to_owned(),
    })?;

    if rest.is_empty() {
        return Err(InputError::NoAgents);
    }

    let mut agents = Vec::with_capacity(rest.len() / 2);
    for (i, pair) in rest.chunks(2).enumerate() {
        // Line 1 is the bounds; agent `i` starts on line 2 + 2i.
        let start_line = 2 + 2 * i;
        let [start, commands] = pair else {
            return Err(InputError::MissingCommands { line: start_line });
        };
        agents.push(parse_agent(bounds, start_line, start, commands)?);
    }

    debug!("parsed mission: grid {bounds}, {} agents", agents.len());
    Ok(MissionInput { bounds, agents })
}

fn parse_agent(
    bounds:     rg_grid::GridBounds,
    start_line: usize,
    start:      &str,
    commands:   &str,
) -> InputResult<AgentRecord> {
    let start = start.trim().to_uppercase();
    let commands = commands.trim().to_uppercase();

    let (x, y, heading) = parse_start(&start).ok_or_else(|| InputError::MalformedStart {
        line: start_line,
        text: start.clone(),
    })?;
    if !is_command_line(&commands) {
        return Err(InputError::MalformedCommands { line: start_line + 1, text: commands });
    }
    if !in_bounds(bounds, x, y) {
        return Err(InputError::StartOutOfBounds { line: start_line, x, y, bounds });
    }

    Ok(AgentRecord { start_x: x, start_y: y, heading: heading.to_owned(), commands })
}
