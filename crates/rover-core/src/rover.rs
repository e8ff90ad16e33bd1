//! Rover value types: a position, one parsed descriptor, and a full setup.
//!
//! All three are immutable after construction.  Movement produces a new
//! `RoverPosition` each step; nothing is ever updated in place.

use std::fmt;

use crate::{Coordinates, Direction, GridSize, Instruction};

// ── RoverPosition ─────────────────────────────────────────────────────────────

/// Where a rover is and which way it faces.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoverPosition {
    pub coords: Coordinates,
    pub heading: Direction,
}

impl RoverPosition {
    #[inline]
    pub fn new(x: i32, y: i32, heading: Direction) -> Self {
        Self { coords: Coordinates::new(x, y), heading }
    }

    /// The position one cell ahead, heading unchanged.  No bounds check.
    #[inline]
    pub fn advanced(self) -> RoverPosition {
        RoverPosition { coords: self.coords.translated(self.heading), ..self }
    }

    /// Same cell, heading rotated 90° counter-clockwise.
    #[inline]
    pub fn turned_left(self) -> RoverPosition {
        RoverPosition { heading: self.heading.turned_left(), ..self }
    }

    /// Same cell, heading rotated 90° clockwise.
    #[inline]
    pub fn turned_right(self) -> RoverPosition {
        RoverPosition { heading: self.heading.turned_right(), ..self }
    }
}

impl fmt::Display for RoverPosition {
    /// Renders the report form: `(x, y, D)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.coords.x, self.coords.y, self.heading)
    }
}

// ── RoverDescriptor ───────────────────────────────────────────────────────────

/// One parsed rover input line: a validated start position plus its
/// movement program, in input order.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoverDescriptor {
    pub start: RoverPosition,
    pub instructions: Vec<Instruction>,
}

// ── SimulationSetup ───────────────────────────────────────────────────────────

/// A validated mission: the grid plus every rover to run over it.
///
/// Built incrementally by the session layer; read-only once handed to the
/// runner.  Rover order is input order and is preserved through to the
/// report.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationSetup {
    pub grid: GridSize,
    pub rovers: Vec<RoverDescriptor>,
}
