//! The mission runner: folds each rover's program over its start position.

use rover_core::{GridSize, RoverDescriptor, SimulationSetup};

use crate::{RoverOutcome, apply_instruction};

/// Run every rover in `setup`, returning one outcome per rover in input
/// order.
///
/// Rovers are independent: each folds over its own instruction list, and
/// one rover going lost never affects another.
pub fn run(setup: &SimulationSetup) -> Vec<RoverOutcome> {
    setup
        .rovers
        .iter()
        .map(|rover| run_rover(rover, setup.grid))
        .collect()
}

/// Fold one rover's instruction list over its start position.
///
/// First-loss-wins: the fold stops at the first failed `Forward` and the
/// remaining instructions are never applied, so a lost rover can neither
/// move nor turn again.
pub fn run_rover(rover: &RoverDescriptor, grid: GridSize) -> RoverOutcome {
    let mut position = rover.start;
    for &instruction in &rover.instructions {
        match apply_instruction(position, instruction, grid) {
            Ok(next) => position = next,
            Err(lost_at) => return RoverOutcome::Lost(lost_at),
        }
    }
    RoverOutcome::Settled(position)
}
