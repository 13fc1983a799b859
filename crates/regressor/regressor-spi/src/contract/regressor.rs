//! Time series regressor trait.

use crate::error::RegressionError;

/// Result type for regressor operations.
pub type Result<T> = std::result::Result<T, RegressionError>;

/// Common trait for supervised time series regressors.
///
/// A regressor consumes a panel of univariate series, each labeled with a
/// scalar target, and predicts targets for unseen series. Implementations
/// own their fitted state; a value is reusable for any number of `predict`
/// calls after one successful `fit`.
pub trait TimeSeriesRegressor {
    /// Fit the model to labeled training series.
    ///
    /// `series` and `targets` must have the same length. Inputs containing
    /// non-finite values are rejected.
    fn fit(&mut self, series: &[Vec<f64>], targets: &[f64]) -> Result<()>;

    /// Predict one scalar target per input series.
    fn predict(&self, series: &[Vec<f64>]) -> Result<Vec<f64>>;

    /// Check if the model has been fitted.
    fn is_fitted(&self) -> bool;
}
