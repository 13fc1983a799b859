//! Regressor Service Provider Interface
//!
//! Defines the contract for supervised time series regression:
//! - [`TimeSeriesRegressor`] - fit on labeled series, predict scalar targets
//! - [`RegressionError`] - standardized error type for all variants

pub mod contract;
pub mod error;

// Re-export all public items at the crate root for convenience
pub use contract::TimeSeriesRegressor;
pub use error::RegressionError;

/// Result type for regressor operations.
pub type Result<T> = std::result::Result<T, RegressionError>;
