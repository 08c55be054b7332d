//! Errors raised by the universe and its driver.

use thiserror::Error;

/// Every failure is synchronous and leaves the grid in its prior state.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UniverseError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimension { width: usize, height: usize },
    #[error("density {0} must be between 0.0 and 1.0")]
    InvalidDensity(f64),
    #[error("cell ({row}, {col}) is outside the {width}x{height} grid")]
    OutOfBounds {
        row: i64,
        col: i64,
        width: usize,
        height: usize,
    },
    #[error("grid cannot shrink below {min}x{min}")]
    MinimumSizeReached { min: usize },
    #[error("resize step {step} and minimum side {min_side} must both be positive")]
    InvalidResizePolicy { step: usize, min_side: usize },
    #[error("window minimum height must be positive")]
    InvalidWindowHeight,
    #[error("steps per frame must be at least 1")]
    InvalidStepsPerFrame,
}

pub type Result<T> = std::result::Result<T, UniverseError>;

/// Reject densities outside `[0, 1]`, including NaN.
pub fn check_density(density: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&density) {
        Ok(density)
    } else {
        Err(UniverseError::InvalidDensity(density))
    }
}
