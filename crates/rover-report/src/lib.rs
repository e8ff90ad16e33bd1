//! `rover-report` — renders rover outcomes as the final mission report.
//!
//! Pure formatting over [`rover_sim::RoverOutcome`] values; no error
//! conditions and no I/O.  Error sentences for failed sessions are not
//! rendered here — they belong to `rover-mission`.

pub mod formatter;


pub use formatter::{render_outcome, render_report};
