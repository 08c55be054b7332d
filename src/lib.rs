// Domain layer - the automaton engine
pub mod domain;

// Application layer - pacing and run control
pub mod application;

pub mod config;
pub mod error;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, EvolutionStrategy, Grid, Snapshot, Universe};
pub use application::{Driver, DriverState, FrameOutcome, FrameQueue, FrameToken, Scheduler};
pub use config::Config;
pub use error::{Result, UniverseError};
