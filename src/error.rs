//! Error types for the quaternion-algebra library
//!
//! This module provides the main error and result types used throughout the library.
//! All errors use the `thiserror` crate for automatic trait implementations.

use std::num::ParseFloatError;
use thiserror::Error;

/// Main result type used throughout the quaternion-algebra library
pub type QuaternionResult<T> = Result<T, QuaternionError>;

/// Main error type for the quaternion-algebra library
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuaternionError {
    /// Division by a quaternion or scalar whose magnitude is at or below
    /// [`DIVISION_EPSILON`](crate::scalar::DIVISION_EPSILON)
    #[error("Division by zero: divisor {divisor} is too close to zero")]
    DivisionByZero { divisor: String },

    /// Text that does not describe a quaternion
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid input parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl QuaternionError {
    pub(crate) fn division_by_zero(divisor: impl ToString) -> Self {
        QuaternionError::DivisionByZero {
            divisor: divisor.to_string(),
        }
    }
}

impl From<ParseFloatError> for QuaternionError {
    fn from(err: ParseFloatError) -> Self {
        QuaternionError::Parse(format!("Failed to parse float: {err}"))
    }
}
