//! The input session state machine.
//!
//! Reads raw lines one at a time and accumulates a validated
//! [`SimulationSetup`].  Two states, iterated by a plain loop (never
//! recursed, so long inputs cannot grow the stack): before the grid size
//! is known, and after.  A blank line or line-source exhaustion
//! terminates the session; the first parse failure aborts it.

use rover_core::SimulationSetup;
use rover_parse::{parse_grid_size, parse_rover_descriptor};
use tracing::debug;

use crate::{MissionError, MissionResult};

/// Accumulating session state: nothing read yet, or a grid plus the
/// rovers appended so far.
enum SessionState {
    AwaitingGridSize,
    AwaitingRovers(SimulationSetup),
}

/// Consume lines from `next_line` until a blank line or `None`, producing
/// a validated setup.
///
/// The first line must be a grid size; every further line a rover
/// descriptor checked against that grid, appended in input order.
/// Termination with no grid size at all is [`MissionError::NoInput`];
/// with a grid but zero rovers, [`MissionError::NoRovers`].
pub fn build_setup<F>(mut next_line: F) -> MissionResult<SimulationSetup>
where
    F: FnMut() -> Option<String>,
{
    let mut state = SessionState::AwaitingGridSize;

    loop {
        let line = match next_line() {
            // A whitespace-only line and end-of-input both terminate.
            Some(l) if !l.trim().is_empty() => l,
            _ => break,
        };

        state = match state {
            SessionState::AwaitingGridSize => {
                let grid = parse_grid_size(&line)?;
                debug!(%grid, "grid size accepted");
                SessionState::AwaitingRovers(SimulationSetup { grid, rovers: Vec::new() })
            }
            SessionState::AwaitingRovers(mut setup) => {
                let rover = parse_rover_descriptor(&line, setup.grid)?;
                setup.rovers.push(rover);
                SessionState::AwaitingRovers(setup)
            }
        };
    }

    match state {
        SessionState::AwaitingGridSize => Err(MissionError::NoInput),
        SessionState::AwaitingRovers(setup) if setup.rovers.is_empty() => {
            Err(MissionError::NoRovers)
        }
        SessionState::AwaitingRovers(setup) => {
            debug!(rovers = setup.rovers.len(), "session complete");
            Ok(setup)
        }
    }
}
