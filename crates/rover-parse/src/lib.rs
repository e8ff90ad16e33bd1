//! `rover-parse` — raw descriptor lines into typed rover_grid values.
//!
//! Two line shapes exist: the grid size (`"4 8"`) and a rover descriptor
//! (`"(2, 3, E) LFRFF"`).  [`parse_grid_size`] and
//! [`parse_rover_descriptor`] each take one raw line; the session layer
//! decides which parser a given line must satisfy.
//!
//! Error messages here are diagnostic (they quote the offending line for
//! logs).  The single user-facing sentence per failure is chosen one layer
//! up, in `rover-mission`.

pub mod descriptor;
pub mod error;

#[cfg(test)]
mod tests;

pub use descriptor::{parse_grid_size, parse_rover_descriptor};
pub use error::{BadGridSize, RoverParseError};
