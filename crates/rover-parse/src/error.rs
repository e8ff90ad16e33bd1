//! Parse error types.

use rover_core::{GridSize, RoverPosition};
use thiserror::Error;

/// A grid-size line that failed to parse.
///
/// Covers every malformation of the first input line: wrong token count,
/// non-integer tokens, or a negative dimension.
#[derive(Debug, Error)]
#[error("bad grid size line {line:?}: expected two non-negative integers")]
pub struct BadGridSize {
    /// The offending input line, verbatim.
    pub line: String,
}

/// A rover line that failed to parse or validate.
#[derive(Debug, Error)]
pub enum RoverParseError {
    /// The line does not match `(<x>, <y>, <D>) <moves>`, or uses letters
    /// outside the heading/instruction alphabets.
    #[error("bad rover line {0:?}: expected \"(<x>, <y>, <D>) <moves>\"")]
    InvalidDetails(String),

    /// Syntactically valid, but the start position is off the grid.
    ///
    /// Distinct from [`InvalidDetails`](RoverParseError::InvalidDetails):
    /// the line was well-formed, the rover just cannot be placed.
    #[error("rover start {start} is outside the {grid} grid")]
    OutOfBounds { start: RoverPosition, grid: GridSize },
}
