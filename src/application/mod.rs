mod driver;
mod fps;
mod scheduler;

pub use driver::{Driver, DriverState, FrameOutcome};
pub use fps::{FpsCounter, FpsStats};
pub use scheduler::{FrameQueue, FrameToken, Scheduler};
