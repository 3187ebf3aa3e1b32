use rg_grid::GridBounds;
use thiserror::Error;

/// Errors produced while reading a mission.  Line numbers are 1-based.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("input file is empty")]
    Empty,

    #[error("line {line}: mal-formed or missing top-right coordinates {text:?}")]
    MalformedBounds { line: usize, text: String },

    #[error("no rover data encountered in input")]
    NoAgents,

    #[error("line {line}: rover start has no command line after it")]
    MissingCommands { line: usize },

    #[error("line {line}: mal-formed rover initial location {text:?}")]
    MalformedStart { line: usize, text: String },

    #[error("line {line}: mal-formed rover control commands {text:?}")]
    MalformedCommands { line: usize, text: String },

    #[error("line {line}: rover coordinates ({x}, {y}) are outside of grid {bounds}")]
    StartOutOfBounds { line: usize, x: u32, y: u32, bounds: GridBounds },

    #[error("agent CSV parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type InputResult<T> = Result<T, InputError>;
