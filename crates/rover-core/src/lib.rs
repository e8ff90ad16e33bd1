//! `rover-core` — foundational value types for the rover_grid simulator.
//!
//! This crate is a dependency of every other `rover-*` crate.  It has no
//! `rover-*` dependencies and only one optional external one (`serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`direction`]   | `Direction`, 90° turn logic                           |
//! | [`instruction`] | `Instruction`                                         |
//! | [`grid`]        | `Coordinates`, `GridSize`, the bounds check           |
//! | [`rover`]       | `RoverPosition`, `RoverDescriptor`, `SimulationSetup` |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod direction;
pub mod grid;
pub mod instruction;
pub mod rover;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use direction::Direction;
pub use grid::{Coordinates, GridSize};
pub use instruction::Instruction;
pub use rover::{RoverDescriptor, RoverPosition, SimulationSetup};
