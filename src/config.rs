//! Startup configuration for the universe, its driver and the window.
//!
//! Defaults reproduce the classic setup: a 50x50 torus seeded at 50%,
//! advanced one generation per display frame.

use crate::domain::EvolutionStrategy;
use crate::error::{Result, UniverseError, check_density};

pub const DEFAULT_WIDTH: usize = 50;
pub const DEFAULT_HEIGHT: usize = 50;
/// Density used at startup, on restart, and after every resize
pub const DEFAULT_DENSITY: f64 = 0.5;
/// Cells added or removed on each side per grow/shrink
pub const RESIZE_STEP: usize = 1;
/// Shrinking never takes either side below this
pub const MIN_SIDE: usize = 10;
pub const DEFAULT_STEPS_PER_FRAME: u32 = 1;
pub const DEFAULT_WINDOW_TITLE: &str = "Game of Life";
/// The window is never opened shorter than this, whatever the grid size
pub const DEFAULT_MIN_WINDOW_HEIGHT: u32 = 560;

#[derive(Clone, Debug, PartialEq)]
pub struct UniverseConfig {
    pub width: usize,
    pub height: usize,
    pub density: f64,
    /// Fixed RNG seed; `None` seeds from the OS
    pub seed: Option<u64>,
    pub strategy: EvolutionStrategy,
    pub resize_step: usize,
    pub min_side: usize,
}

impl Default for UniverseConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            density: DEFAULT_DENSITY,
            seed: None,
            strategy: EvolutionStrategy::default(),
            resize_step: RESIZE_STEP,
            min_side: MIN_SIDE,
        }
    }
}

impl UniverseConfig {
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_strategy(mut self, strategy: EvolutionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_resize_policy(mut self, resize_step: usize, min_side: usize) -> Self {
        self.resize_step = resize_step;
        self.min_side = min_side;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(UniverseError::InvalidDimension {
                width: self.width,
                height: self.height,
            });
        }
        if self.resize_step == 0 || self.min_side == 0 {
            return Err(UniverseError::InvalidResizePolicy {
                step: self.resize_step,
                min_side: self.min_side,
            });
        }
        check_density(self.density).map(|_| ())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DriverConfig {
    /// Generations advanced per paced frame
    pub steps_per_frame: u32,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            steps_per_frame: DEFAULT_STEPS_PER_FRAME,
        }
    }
}

impl DriverConfig {
    pub fn with_steps_per_frame(mut self, steps_per_frame: u32) -> Self {
        self.steps_per_frame = steps_per_frame;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.steps_per_frame == 0 {
            return Err(UniverseError::InvalidStepsPerFrame);
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindowConfig {
    pub title: String,
    pub min_height: u32,
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_WINDOW_TITLE.to_owned(),
            min_height: DEFAULT_MIN_WINDOW_HEIGHT,
            resizable: true,
        }
    }
}

impl WindowConfig {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_min_height(mut self, min_height: u32) -> Self {
        self.min_height = min_height;
        self
    }

    pub fn with_resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    /// Window height for a canvas `canvas_height` pixels tall
    pub fn height_for(&self, canvas_height: f32) -> u32 {
        (canvas_height.ceil() as u32).max(self.min_height)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_height == 0 {
            return Err(UniverseError::InvalidWindowHeight);
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Config {
    pub universe: UniverseConfig,
    pub driver: DriverConfig,
    pub window: WindowConfig,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        self.universe.validate()?;
        self.driver.validate()?;
        self.window.validate()
    }
}
