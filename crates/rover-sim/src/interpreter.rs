//! Single-instruction interpretation.

use rover_core::{GridSize, Instruction, RoverPosition};

/// Apply one instruction to one rover position.
///
/// Turns always succeed and never change the cell.  `Forward` succeeds iff
/// the translated cell is still on `grid`; otherwise the rover is lost and
/// `Err` carries the pre-move position, heading unchanged — the marker the
/// report renders with `LOST`.
pub fn apply_instruction(
    position: RoverPosition,
    instruction: Instruction,
    grid: GridSize,
) -> Result<RoverPosition, RoverPosition> {
    match instruction {
        Instruction::TurnLeft => Ok(position.turned_left()),
        Instruction::TurnRight => Ok(position.turned_right()),
        Instruction::Forward => {
            let next = position.advanced();
            if grid.contains(next.coords) {
                Ok(next)
            } else {
                Err(position)
            }
        }
    }
}
