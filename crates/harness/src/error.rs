//! Harness error type.

use thiserror::Error;

use crate::validate::ValidationError;
use dataset::DatasetError;
use regressor_facade::RegressionError;

/// Errors surfaced by an evaluation run.
///
/// Every variant is an immediate propagated failure; the harness never
/// retries. Dependency-gated skips are not errors, see
/// [`crate::evaluation::Outcome`].
#[derive(Debug, Error)]
pub enum HarnessError {
    /// Invalid harness configuration.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Dataset could not be loaded or constructed.
    #[error(transparent)]
    Data(#[from] DatasetError),

    /// Fit or predict failed.
    #[error(transparent)]
    Regression(#[from] RegressionError),

    /// A post-predict check failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_error_wraps_transparently() {
        let error: HarnessError = DatasetError::Empty.into();
        assert_eq!(error.to_string(), "Dataset is empty");
    }

    #[test]
    fn test_regression_error_wraps_transparently() {
        let error: HarnessError = RegressionError::NotFitted.into();
        assert_eq!(error.to_string(), "Model must be fitted before prediction");
    }

    #[test]
    fn test_invalid_parameter_display() {
        let error = HarnessError::InvalidParameter {
            name: "train_fraction".to_string(),
            reason: "must be in (0, 1)".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid parameter 'train_fraction': must be in (0, 1)"
        );
    }
}
