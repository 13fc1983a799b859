//! Error module containing regressor error types.

mod regression_error;

pub use regression_error::RegressionError;
