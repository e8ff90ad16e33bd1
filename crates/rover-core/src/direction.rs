//! Compass headings and 90° turn logic.
//!
//! Turning is table-driven: the four headings live in a fixed clockwise
//! `COMPASS` array and a turn is an index shift of ±1 mod 4.  Both turns
//! are total and closed over the enum, so four applications of either are
//! always the identity.

use std::fmt;

/// The four compass headings a rover can face.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    East,
    South,
    West,
}

/// The compass rose in clockwise order.  `turned_right` walks forward
/// through this table; `turned_left` walks backward.
const COMPASS: [Direction; 4] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
];

impl Direction {
    /// Parse a single heading letter (`N`, `E`, `S`, `W`).
    pub fn from_letter(c: char) -> Option<Direction> {
        match c {
            'N' => Some(Direction::North),
            'E' => Some(Direction::East),
            'S' => Some(Direction::South),
            'W' => Some(Direction::West),
            _ => None,
        }
    }

    /// The single-letter form used in descriptors and reports.
    pub fn as_letter(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::East => 'E',
            Direction::South => 'S',
            Direction::West => 'W',
        }
    }

    /// The heading 90° clockwise of `self` (N → E → S → W → N).
    #[inline]
    pub fn turned_right(self) -> Direction {
        COMPASS[(self.compass_idx() + 1) % 4]
    }

    /// The heading 90° counter-clockwise of `self` (N → W → S → E → N).
    #[inline]
    pub fn turned_left(self) -> Direction {
        // +3 ≡ −1 mod 4, keeping the index unsigned.
        COMPASS[(self.compass_idx() + 3) % 4]
    }

    /// Index of `self` within the clockwise compass table.
    #[inline]
    fn compass_idx(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_letter())
    }
}
