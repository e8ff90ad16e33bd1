//! Per-rover terminal states.

use rover_core::RoverPosition;

/// The terminal state of one rover after its movement program.
///
/// Produced once by the runner and immutable thereafter.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoverOutcome {
    /// The rover executed every instruction and remains on the grid.
    Settled(RoverPosition),
    /// A Forward would have left the grid; the rover holds the last valid
    /// position, heading unchanged.
    Lost(RoverPosition),
}

impl RoverOutcome {
    /// The reported position — final for a settled rover, last-valid for a
    /// lost one.
    #[inline]
    pub fn position(self) -> RoverPosition {
        match self {
            RoverOutcome::Settled(p) | RoverOutcome::Lost(p) => p,
        }
    }

    #[inline]
    pub fn is_lost(self) -> bool {
        matches!(self, RoverOutcome::Lost(_))
    }
}
