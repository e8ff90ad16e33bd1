//! Movement instructions.

/// One step of a rover's movement program.
///
/// Produced once from parsed instruction letters and never mutated.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Instruction {
    /// Advance one cell in the current heading.
    Forward,
    /// Rotate 90° counter-clockwise in place.
    TurnLeft,
    /// Rotate 90° clockwise in place.
    TurnRight,
}

impl Instruction {
    /// Parse a single instruction letter (`F`, `L`, `R`).
    pub fn from_letter(c: char) -> Option<Instruction> {
        match c {
            'F' => Some(Instruction::Forward),
            'L' => Some(Instruction::TurnLeft),
            'R' => Some(Instruction::TurnRight),
            _ => None,
        }
    }

    /// The single-letter form used in descriptors.
    pub fn as_letter(self) -> char {
        match self {
            Instruction::Forward => 'F',
            Instruction::TurnLeft => 'L',
            Instruction::TurnRight => 'R',
        }
    }
}
