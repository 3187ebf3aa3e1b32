//! rovers: run a rover mission file and print each rover's final position.
//!
//! ```text
//! rovers <input_file> [--format text|csv] [--on-error abort|isolate]
//! ```
//!
//! The input file holds the grid's top-right corner on the first line, then
//! two lines per rover: its start (`x y H`) and its command letters.
//!
//! ```text
//! 5 5
//! 1 2 N
//! LMLMLMLMM
//! 3 3 E
//! MMRMMRMRRM
//! ```
//!
//! Logging goes to stderr; set `RUST_LOG=debug` for placement detail.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use rg_input::load_mission;
use rg_output::{CsvWriter, OutputWriter, SimOutputObserver, TextWriter};
use rg_sim::{FailurePolicy, SimBuilder, SimConfig};

const USAGE: &str = "usage: rovers <input_file_path>";

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "rovers", about = "Drive rovers across a bounded grid.")]
struct Cli {
    /// Mission file to run.  Exactly one is accepted; any other count prints
    /// the usage line.
    #[arg(value_name = "INPUT_FILE")]
    inputs: Vec<PathBuf>,

    /// How final states are rendered.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// What a failing rover does to the rest of the run.
    #[arg(long = "on-error", value_enum, default_value_t = OnError::Abort)]
    on_error: OnError,
}

#[derive(ValueEnum, Copy, Clone, Debug)]
enum Format {
    Text,
    Csv,
}

#[derive(ValueEnum, Copy, Clone, Debug)]
enum OnError {
    Abort,
    Isolate,
}

impl From<OnError> for FailurePolicy {
    fn from(value: OnError) -> Self {
        match value {
            OnError::Abort => FailurePolicy::Abort,
            OnError::Isolate => FailurePolicy::Isolate,
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> ExitCode {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let Some(input) = single_input(&cli.inputs) else {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    };

    let rendered = match cli.format {
        Format::Text => run(input, cli.on_error, TextWriter::new(Vec::new()))
            .map(TextWriter::into_inner),
        Format::Csv => CsvWriter::new(Vec::new())
            .context("writing CSV header")
            .and_then(|w| run(input, cli.on_error, w))
            .and_then(|w| w.into_inner().context("flushing CSV output")),
    };

    let result = rendered.and_then(|bytes| {
        let mut out = io::stdout().lock();
        out.write_all(&bytes)?;
        out.flush()?;
        Ok(())
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("An error has been encountered");
            println!("\tInput File: {}", input.display());
            println!("\tReason: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// The input path when exactly one was given.
fn single_input(inputs: &[PathBuf]) -> Option<&Path> {
    match inputs {
        [input] => Some(input.as_path()),
        _ => None,
    }
}

/// Load, build and run the mission, rendering into `writer`.
///
/// Output is buffered so an aborted run prints nothing but the error.
fn run<W: OutputWriter>(input: &Path, on_error: OnError, writer: W) -> Result<W> {
    let mission = load_mission(input)?;
    info!("loaded {} rovers from {}", mission.agents.len(), input.display());

    let mut sim = SimBuilder::from_mission(mission)
        .config(SimConfig::with_policy(on_error.into()))
        .build()?;

    let mut obs = SimOutputObserver::new(writer);
    sim.run(&mut obs)?;
    if let Some(e) = obs.take_error() {
        return Err(e.into());
    }
    Ok(obs.into_writer())
}
