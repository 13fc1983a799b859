//! Regression error types.

use thiserror::Error;

/// Errors that can occur during regression operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegressionError {
    /// Insufficient training examples for the operation.
    #[error("Insufficient data: need at least {required} examples, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Invalid parameter value.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Series and target counts do not line up.
    #[error("Shape mismatch: {series} series but {targets} targets")]
    ShapeMismatch { series: usize, targets: usize },

    /// Invalid training or prediction input.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Model has not been fitted yet.
    #[error("Model must be fitted before prediction")]
    NotFitted,

    /// Numerical computation error.
    #[error("Numerical error: {0}")]
    NumericalError(String),
}
