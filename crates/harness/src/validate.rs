//! Post-predict validation.
//!
//! Checks run in a fixed order and the first failure wins, so the error
//! always names the property that was violated: length match first, then
//! finiteness, then the error ceiling.

use thiserror::Error;

use crate::metrics::mse;

/// Default ceiling for the mean squared error check.
///
/// A regression guard, not an accuracy target; tune it per dataset via
/// [`crate::Evaluation::with_error_ceiling`].
pub const DEFAULT_ERROR_CEILING: f64 = 1e6;

/// A failed validation check, naming the violated property.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    /// Prediction count does not match the held-out target count.
    #[error("Length mismatch: expected {expected} predictions, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// A prediction is NaN or infinite.
    #[error("Non-finite prediction at index {index}: {value}")]
    NonFinite { index: usize, value: f64 },

    /// Mean squared error breached the ceiling.
    #[error("Error ceiling exceeded: mse {mse} >= {ceiling}")]
    CeilingExceeded { mse: f64, ceiling: f64 },
}

/// Summary of a passed validation.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    /// Number of validated predictions.
    pub len: usize,
    /// Mean squared error against the held-out targets.
    pub mse: f64,
}

/// Check predictions against held-out targets.
pub fn validate(
    predictions: &[f64],
    expected: &[f64],
    ceiling: f64,
) -> Result<ValidationReport, ValidationError> {
    if predictions.len() != expected.len() {
        return Err(ValidationError::LengthMismatch {
            expected: expected.len(),
            actual: predictions.len(),
        });
    }

    for (index, &value) in predictions.iter().enumerate() {
        if !value.is_finite() {
            return Err(ValidationError::NonFinite { index, value });
        }
    }

    // Written so a NaN mse also fails the check.
    let mse = mse(expected, predictions);
    if !(mse < ceiling) {
        return Err(ValidationError::CeilingExceeded { mse, ceiling });
    }

    Ok(ValidationReport {
        len: predictions.len(),
        mse,
    })
}
