//! Mission-level errors and their user-facing sentences.

use rover_parse::{BadGridSize, RoverParseError};
use thiserror::Error;

/// Why a mission aborted before producing a report.
///
/// `Display` gives the exact sentence shown to the user (the entry point
/// appends a retry suffix); the wrapped sources keep the diagnostic
/// detail — offending line, grid bounds — for logs.  Every variant is
/// terminal: no retry, no partial report.
#[derive(Debug, Error)]
pub enum MissionError {
    /// The grid-size line was missing or malformed.
    #[error("Could not parse the map size")]
    MapSize(#[source] BadGridSize),

    /// A rover line failed the format or letter grammar.
    #[error("Could not parse the rover details")]
    RoverDetails(#[source] RoverParseError),

    /// A rover line was well-formed but starts off the grid.
    #[error("The specified rover is out of bounds")]
    RoverOutOfBounds(#[source] RoverParseError),

    /// A grid size was read but input ended with zero rovers.
    #[error("No rover data was entered")]
    NoRovers,

    /// Input ended before any line was read.
    #[error("No map or rover data was entered")]
    NoInput,
}

/// Shorthand result type for the mission layer.
pub type MissionResult<T> = Result<T, MissionError>;

impl From<BadGridSize> for MissionError {
    fn from(err: BadGridSize) -> Self {
        MissionError::MapSize(err)
    }
}

impl From<RoverParseError> for MissionError {
    /// Routes the two rover parse failures to their distinct user
    /// sentences; the parse error rides along as the source.
    fn from(err: RoverParseError) -> Self {
        match err {
            RoverParseError::InvalidDetails(_) => MissionError::RoverDetails(err),
            RoverParseError::OutOfBounds { .. } => MissionError::RoverOutOfBounds(err),
        }
    }
}
