//! Line-level parsers for the two descriptor kinds.
//!
//! # Input grammar
//!
//! ```text
//! grid size:  <width> <height>          e.g. "4 8"
//! rover:      (<x>, <y>, <D>) <moves>   e.g. "(2, 3, E) LFRFF"
//! ```
//!
//! `<D>` is one of `N E S W`; `<moves>` is one or more of `F L R` with no
//! separators.  Coordinate tokens may carry a minus sign — the sign
//! survives the grammar and is rejected by the bounds check instead, so a
//! negative start reads as an out-of-bounds rover, not a malformed line.

use std::sync::LazyLock;

use regex::Regex;

use rover_core::{Coordinates, Direction, GridSize, Instruction, RoverDescriptor, RoverPosition};

use crate::{BadGridSize, RoverParseError};

/// Anchored shape of one rover line: `(<int>, <int>, <letter>) <letters>`.
///
/// Letter classes are deliberately wider than the real alphabets so that
/// `(1, 2, Q) FXF` fails on the enum lookup (same error kind) rather than
/// falling out of the grammar with no captures to report.
static ROVER_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\((-?\d+), (-?\d+), ([A-Za-z])\) ([A-Za-z]+)$").expect("rover line pattern")
});

/// Parse a `"<width> <height>"` grid-size line.
///
/// The line must split on a single space into exactly two tokens, both
/// non-negative integers.  Everything else is [`BadGridSize`].
pub fn parse_grid_size(line: &str) -> Result<GridSize, BadGridSize> {
    let err = || BadGridSize { line: line.to_owned() };

    let mut tokens = line.split(' ');
    let (Some(width), Some(height), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(err());
    };

    let width: i32 = width.parse().map_err(|_| err())?;
    let height: i32 = height.parse().map_err(|_| err())?;
    if width < 0 || height < 0 {
        return Err(err());
    }

    Ok(GridSize::new(width, height))
}

/// Parse a `"(<x>, <y>, <D>) <moves>"` rover line against `grid`.
///
/// Format and letter failures are
/// [`RoverParseError::InvalidDetails`]; a well-formed line whose start
/// lies off the grid is [`RoverParseError::OutOfBounds`], checked after
/// all format validation and before the descriptor is built.
pub fn parse_rover_descriptor(
    line: &str,
    grid: GridSize,
) -> Result<RoverDescriptor, RoverParseError> {
    let invalid = || RoverParseError::InvalidDetails(line.to_owned());

    let caps = ROVER_LINE.captures(line).ok_or_else(invalid)?;

    // Integer tokens matched the grammar but may still overflow i32.
    let x: i32 = caps[1].parse().map_err(|_| invalid())?;
    let y: i32 = caps[2].parse().map_err(|_| invalid())?;

    let heading = caps[3]
        .chars()
        .next()
        .and_then(Direction::from_letter)
        .ok_or_else(invalid)?;

    let instructions: Vec<Instruction> = caps[4]
        .chars()
        .map(|c| Instruction::from_letter(c).ok_or_else(invalid))
        .collect::<Result<_, _>>()?;

    let start = RoverPosition { coords: Coordinates::new(x, y), heading };
    if !grid.contains(start.coords) {
        return Err(RoverParseError::OutOfBounds { start, grid });
    }

    Ok(RoverDescriptor { start, instructions })
}
