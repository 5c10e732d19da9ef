//! Error types for canvas validation and painter configuration

use std::fmt;

/// Main error type for all painting operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaintError {
    /// Canvas is absent or smaller than the minimum paintable size
    InvalidInput {
        /// Canvas width in pixels
        width: usize,
        /// Canvas height in pixels
        height: usize,
        /// Explanation of why the canvas was rejected
        reason: String,
    },

    /// Configuration or construction parameter failed validation
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for PaintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput {
                width,
                height,
                reason,
            } => {
                write!(f, "Invalid canvas ({width}x{height}): {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for PaintError {}

/// Convenience type alias for painting results
pub type Result<T> = std::result::Result<T, PaintError>;

/// Create an invalid input error for a canvas of the given size
pub fn invalid_input(width: usize, height: usize, reason: &impl ToString) -> PaintError {
    PaintError::InvalidInput {
        width,
        height,
        reason: reason.to_string(),
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PaintError {
    PaintError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
