//! Signal-driven navigator.
//!
//! Reads a binary control signal and steers a subject through the built-in
//! house layout (or a custom room layout) or through a bounded grid, printing
//! the subject's position after every step.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use navigator::core::environment::Environment;
use navigator::core::graph::GraphEnvironment;
use navigator::core::grid::{Cell, GridEnvironment};
use navigator::core::signal::ControlSignal;
use navigator::driver::{
    CancelToken, DriveOptions, NavigationRequest, Observer, StopReason, navigate,
};
use navigator::exit_codes;
use navigator::io::config::{DEFAULT_CONFIG_FILE, load_config};
use navigator::io::console::ConsoleObserver;
use navigator::io::layout::load_layout;
use navigator::io::pacing::SleepPacer;
use navigator::io::signal_file::load_signal;
use navigator::io::trace_log::write_trace;
use navigator::logging;

#[derive(Parser)]
#[command(
    name = "navigator",
    version,
    about = "Steer a subject through rooms or a grid with a binary control signal"
)]
struct Cli {
    /// Config file (missing file means defaults).
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Override the pacing delay between steps, in milliseconds.
    #[arg(long, global = true)]
    pace_ms: Option<u64>,

    /// Write the run trace as JSON to this file.
    #[arg(long, global = true)]
    trace: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Move between named rooms.
    Graph {
        /// Signal file (`0`/`1` text, or a JSON array).
        #[arg(long)]
        signal: PathBuf,
        /// Starting room.
        #[arg(long, default_value = "liv")]
        start: String,
        /// Room layout file (defaults to the built-in house).
        #[arg(long)]
        layout: Option<PathBuf>,
    },
    /// Move on a bounded grid.
    Grid {
        /// Signal file (`0`/`1` text, or a JSON array).
        #[arg(long)]
        signal: PathBuf,
        #[arg(long, default_value_t = 5, allow_hyphen_values = true)]
        x: i64,
        #[arg(long, default_value_t = 5, allow_hyphen_values = true)]
        y: i64,
    },
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    let mut cfg = load_config(&cli.config)?;
    if let Some(pace_ms) = cli.pace_ms {
        cfg.set_pace_ms(pace_ms);
    }

    match cli.command {
        Command::Graph {
            signal,
            start,
            layout,
        } => {
            let env = match layout {
                Some(path) => load_layout(&path)?,
                None => GraphEnvironment::house(),
            };
            let signal = read_signal(&signal)?;
            let stdout = std::io::stdout();
            let mut observer = ConsoleObserver::new(stdout.lock()).with_room_coordinates(&env);
            drive(
                &env,
                start,
                &signal,
                &cfg.graph_options(),
                cli.trace.as_deref(),
                &mut observer,
            )
        }
        Command::Grid { signal, x, y } => {
            let env = GridEnvironment::new(cfg.grid).context("build grid")?;
            let signal = read_signal(&signal)?;
            let stdout = std::io::stdout();
            let mut observer = ConsoleObserver::new(stdout.lock());
            drive(
                &env,
                Cell::new(x, y),
                &signal,
                &cfg.grid_options(),
                cli.trace.as_deref(),
                &mut observer,
            )
        }
    }
}

/// Load a signal and reject samples outside `{0, 1}` before any step runs.
fn read_signal(path: &Path) -> Result<ControlSignal> {
    let signal = load_signal(path)?;
    signal
        .validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(signal)
}

fn drive<E, O>(
    env: &E,
    start: E::Position,
    signal: &ControlSignal,
    options: &DriveOptions,
    trace_path: Option<&Path>,
    observer: &mut O,
) -> Result<i32>
where
    E: Environment,
    E::Position: Serialize,
    O: Observer<E::Position>,
{
    let trace = navigate(
        &NavigationRequest {
            env,
            start,
            signal,
            options,
        },
        observer,
        &SleepPacer,
        &CancelToken::new(),
    )?;

    if let Some(path) = trace_path {
        write_trace(path, &trace)?;
    }

    let mut stdout = std::io::stdout();
    writeln!(
        stdout,
        "done: steps={} position={} cursor={}/{} stop={}",
        trace.steps.len(),
        trace.final_position,
        trace.bits_consumed(),
        trace.signal_len,
        trace.stop.as_str()
    )
    .context("write summary")?;

    Ok(match trace.stop {
        StopReason::SignalExhausted => exit_codes::OK,
        StopReason::Cancelled | StopReason::ObserverClosed => exit_codes::INTERRUPTED,
    })
}
