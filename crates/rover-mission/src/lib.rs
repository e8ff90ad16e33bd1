//! `rover-mission` — session building and the mission entry point.
//!
//! A mission is one pass over a line source: the first line sizes the
//! grid, each further line describes a rover, and a blank line (or running
//! out of lines) starts the simulation.  [`run_mission`] is the only entry
//! point the interactive shell needs:
//!
//! ```rust,ignore
//! let mut lines = io::stdin().lock().lines();
//! let report = run_mission(move || lines.next().and_then(|l| l.ok()));
//! println!("{report}");
//! ```
//!
//! Failures never produce partial reports — the first parse error aborts
//! the whole session and `run_mission` returns a single user-facing
//! sentence instead.  A rover going LOST mid-run is not a failure; it is
//! part of the report.

pub mod error;
pub mod session;

#[cfg(test)]
mod tests;

pub use error::{MissionError, MissionResult};
pub use session::build_setup;

use tracing::warn;

/// Run one full mission over a line source and return the final report.
///
/// Pure with respect to the environment: all input arrives through
/// `next_line` (a `None` signals end-of-input) and the report is the
/// return value.  On failure the report is the error's user sentence with
/// a retry suffix.
pub fn run_mission<F>(next_line: F) -> String
where
    F: FnMut() -> Option<String>,
{
    match build_setup(next_line) {
        Ok(setup) => {
            let outcomes = rover_sim::run(&setup);
            rover_report::render_report(&outcomes)
        }
        Err(err) => {
            warn!(error = ?err, "mission aborted");
            format!("{err}. Please try again")
        }
    }
}
