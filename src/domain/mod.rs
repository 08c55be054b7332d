mod algorithm;
mod cell;
mod grid;
mod snapshot;
mod universe;

pub use algorithm::{EvolutionStrategy, PARALLEL_THRESHOLD};
pub use cell::Cell;
pub use grid::Grid;
pub use snapshot::Snapshot;
pub use universe::Universe;
