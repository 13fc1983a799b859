//! Time series regressor implementations
//!
//! This crate provides the concrete regressor variants, organized by
//! approach:
//!
//! - [`rocket`]: convolution-based (random kernel transform + ridge readout)
//! - [`tsfresh`]: feature-based (summary statistics + bagged ridge readouts)
//! - [`rist`]: hybrid (random intervals + autoregressive features), behind
//!   the optional `stats` feature
//!
//! ## Example
//!
//! ```rust
//! use regressor_core::prelude::*;
//!
//! let series: Vec<Vec<f64>> = (0..12)
//!     .map(|i| (0..20).map(|t| (i + t) as f64 * 0.1).collect())
//!     .collect();
//! let targets: Vec<f64> = (0..12).map(|i| i as f64 * 0.5).collect();
//!
//! let mut model = RocketRegressor::new(RocketConfig::new(100, 42)).unwrap();
//! model.fit(&series, &targets).unwrap();
//! let predictions = model.predict(&series).unwrap();
//! assert_eq!(predictions.len(), series.len());
//! ```

pub mod features;
pub mod readout;
pub mod rocket;
pub mod tsfresh;

#[cfg(feature = "stats")]
pub mod rist;

// Re-export from SPI
pub use regressor_spi::{RegressionError, Result, TimeSeriesRegressor};

pub use rocket::RocketRegressor;
pub use tsfresh::TsFreshRegressor;

#[cfg(feature = "stats")]
pub use rist::RistRegressor;

/// Whether the statistical-modeling feature set was compiled in.
///
/// The hybrid interval regressor is only available when this returns true.
pub fn stats_support() -> bool {
    cfg!(feature = "stats")
}

/// Validate a labeled training panel before fitting.
pub(crate) fn check_training_inputs(series: &[Vec<f64>], targets: &[f64]) -> Result<()> {
    if series.len() != targets.len() {
        return Err(RegressionError::ShapeMismatch {
            series: series.len(),
            targets: targets.len(),
        });
    }
    if series.len() < 2 {
        return Err(RegressionError::InsufficientData {
            required: 2,
            actual: series.len(),
        });
    }
    for (i, s) in series.iter().enumerate() {
        if s.is_empty() {
            return Err(RegressionError::InvalidData(format!("series {} is empty", i)));
        }
        if s.iter().any(|v| !v.is_finite()) {
            return Err(RegressionError::InvalidData(format!(
                "series {} contains non-finite values",
                i
            )));
        }
    }
    if let Some(i) = targets.iter().position(|t| !t.is_finite()) {
        return Err(RegressionError::InvalidData(format!(
            "target {} is non-finite",
            i
        )));
    }
    Ok(())
}

/// Validate a prediction panel.
pub(crate) fn check_prediction_inputs(series: &[Vec<f64>]) -> Result<()> {
    for (i, s) in series.iter().enumerate() {
        if s.is_empty() {
            return Err(RegressionError::InvalidData(format!("series {} is empty", i)));
        }
        if s.iter().any(|v| !v.is_finite()) {
            return Err(RegressionError::InvalidData(format!(
                "series {} contains non-finite values",
                i
            )));
        }
    }
    Ok(())
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use regressor_api::{RistConfig, RocketConfig, TsFreshConfig};
    pub use regressor_spi::{RegressionError, Result, TimeSeriesRegressor};

    pub use crate::rocket::RocketRegressor;
    pub use crate::tsfresh::TsFreshRegressor;

    #[cfg(feature = "stats")]
    pub use crate::rist::RistRegressor;
}
