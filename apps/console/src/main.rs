//! rover-console — interactive shell around the rover_grid mission core.
//!
//! Reads descriptor lines from stdin (or replays them from a file with
//! `--input`), hands them to [`rover_mission::run_mission`], and prints
//! the report.  All simulation logic lives behind that one call; this
//! binary only moves text.

use std::fs;
use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use rover_mission::run_mission;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "rover-console", about = "Simulate rovers on a bounded grid")]
struct Cli {
    /// Replay a mission from a file instead of reading stdin.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

// ── Logging ───────────────────────────────────────────────────────────────────

fn init_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let report = match cli.input {
        Some(path) => {
            let text = fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            let mut lines = text.lines().map(str::to_owned);
            run_mission(move || lines.next())
        }
        None => {
            println!("=== rover mission console ===");
            println!("First line:   <width> <height>              e.g. 4 8");
            println!("Then, each:   (<x>, <y>, <D>) <moves>       e.g. (2, 3, E) LFRFF");
            println!("Finish with a blank line.");
            println!();

            let stdin = io::stdin();
            let mut lines = stdin.lock().lines();
            // An I/O error on stdin reads as end-of-input.
            run_mission(move || lines.next().and_then(|l| l.ok()))
        }
    };

    println!();
    println!("{report}");
    Ok(())
}
