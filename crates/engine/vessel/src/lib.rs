//! Connected voxel structure detection and rigid-body transforms.
//!
//! A [`Vessel`] is a connected set of blocks discovered by a bounded
//! flood fill from a seed coordinate. Once captured it moves as a unit:
//! unit translation along its heading and 90° yaw rotation about its
//! bounding-box midpoint, with directional block data (rails, stairs,
//! furnaces, levers, doors, ...) remapped so the blocks stay consistent
//! with the new orientation.
//!
//! The hosting world is abstracted behind [`BlockGrid`]; [`MemoryGrid`]
//! is the in-process implementation used by tests and tools.

mod block;
mod fleet;
mod grid;
mod heading;
pub mod io;
mod mover;
mod scan;
mod spin;
mod vessel;

pub use block::{BlockSample, Material};
pub use fleet::{Fleet, FleetError};
pub use grid::{BlockGrid, MemoryGrid};
pub use heading::{Heading, Turn};
pub use mover::{Mover, DEFAULT_PERIOD};
pub use scan::{scan, ScanError, Topology, MAX_BLOCKS};
pub use spin::rotated_data;
pub use vessel::{Occupant, Vessel};
