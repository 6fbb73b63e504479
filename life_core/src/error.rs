// error.rs - Precondition failures reported by the core

use thiserror::Error;

/// Errors returned by fallible grid operations.
///
/// All of them are caller-detectable precondition violations. A failed call
/// never leaves the grid half-modified.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LifeError {
    /// Width or height was zero, or their product does not fit in `usize`.
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimension { width: usize, height: usize },

    /// Reseed probability outside `[0, 1]` (NaN included).
    #[error("probability {0} is outside [0, 1]")]
    InvalidProbability(f64),

    /// Cell index or coordinate outside the grid.
    #[error("cell index {index} out of range for grid of {len} cells")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, LifeError>;
