//! Regressor Facade
//!
//! High-level API for the time series regressor stack. Re-exports all
//! public types for convenient usage.
//!
//! # Example
//!
//! ```ignore
//! use regressor_facade::prelude::*;
//!
//! let mut model = RocketRegressor::new(RocketConfig::new(500, 42))?;
//! model.fit(&train_series, &train_targets)?;
//! let predictions = model.predict(&test_series)?;
//! ```

// Re-export everything from core (which includes API and SPI)
pub use regressor_core::*;

/// Prelude module for convenient imports
pub mod prelude {
    // Traits
    pub use regressor_spi::TimeSeriesRegressor;

    // Configuration types
    pub use regressor_api::{RistConfig, RocketConfig, TsFreshConfig};

    // Error types
    pub use regressor_spi::{RegressionError, Result};

    // Implementations
    pub use regressor_core::{stats_support, RocketRegressor, TsFreshRegressor};

    #[cfg(feature = "stats")]
    pub use regressor_core::RistRegressor;
}
