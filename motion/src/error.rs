//! Error type shared by every constructor that validates its input.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MotionError>;

/// Rejected animation parameters or out-of-range UI selections.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MotionError {
    /// Cubic-bezier x control points must stay in `[0, 1]`, otherwise the
    /// curve is not a function of time.
    #[error("cubic-bezier control point {axis} = {value} is outside [0, 1]")]
    InvalidControlPoint { axis: &'static str, value: f64 },

    #[error("animation duration must be a positive finite number of milliseconds, got {0}")]
    InvalidDuration(f64),

    #[error("spring {field} = {value} is not allowed")]
    InvalidSpring { field: &'static str, value: f64 },

    #[error("index {index} is out of range for {len} entries")]
    IndexOutOfRange { index: usize, len: usize },
}
