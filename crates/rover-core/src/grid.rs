//! Grid coordinates and the bounded plateau they live on.

use std::fmt;

use crate::Direction;

// ── Coordinates ───────────────────────────────────────────────────────────────

/// A cell on the grid, stored as signed integers.
///
/// Signed because descriptor lines may carry negative values; only the
/// [`GridSize`] bounds check decides validity.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinates {
    pub x: i32,
    pub y: i32,
}

impl Coordinates {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell one unit away in `heading`: North is +y, East is +x.
    ///
    /// Pure translation — no bounds check.
    #[inline]
    pub fn translated(self, heading: Direction) -> Coordinates {
        match heading {
            Direction::North => Coordinates { y: self.y + 1, ..self },
            Direction::South => Coordinates { y: self.y - 1, ..self },
            Direction::East => Coordinates { x: self.x + 1, ..self },
            Direction::West => Coordinates { x: self.x - 1, ..self },
        }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ── GridSize ──────────────────────────────────────────────────────────────────

/// The plateau bounds: valid cells span `[0, width] × [0, height]`,
/// inclusive on both axes.
///
/// Both dimensions are non-negative (the parser enforces this).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSize {
    pub width: i32,
    pub height: i32,
}

impl GridSize {
    #[inline]
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// `true` iff `coords` lies within the inclusive
    /// `[0, width] × [0, height]` range.
    // TODO: double check what constitutes valid coordinates — whether the
    // maxima should be exclusive.  Callers rely on the inclusive check, so
    // any change has to ripple through the parser's bounds validation too.
    #[inline]
    pub fn contains(self, coords: Coordinates) -> bool {
        coords.x >= 0 && coords.x <= self.width && coords.y >= 0 && coords.y <= self.height
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
