//! Regressor configuration types.
//!
//! Each regressor variant recognizes its own options; construction from a
//! config performs no computation. Stochastic variants take an explicit
//! `random_state` seed and are deterministic given the seed.

use serde::{Deserialize, Serialize};

/// Configuration for the convolution-kernel regressor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RocketConfig {
    /// Number of random convolution kernels.
    pub n_kernels: usize,
    /// Seed for kernel generation.
    pub random_state: u64,
    /// Ridge penalty for the readout.
    pub ridge_lambda: f64,
}

impl Default for RocketConfig {
    fn default() -> Self {
        Self {
            n_kernels: 1000,
            random_state: 0,
            ridge_lambda: 1.0,
        }
    }
}

impl RocketConfig {
    /// Create a configuration with the given kernel count and seed.
    pub fn new(n_kernels: usize, random_state: u64) -> Self {
        Self {
            n_kernels,
            random_state,
            ..Self::default()
        }
    }

    /// Set the ridge penalty.
    pub fn with_ridge_lambda(mut self, ridge_lambda: f64) -> Self {
        self.ridge_lambda = ridge_lambda;
        self
    }
}

/// Configuration for the summary-feature regressor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TsFreshConfig {
    /// Seed for bootstrap resampling of the readout ensemble.
    pub random_state: u64,
    /// Number of bagged readouts.
    pub n_estimators: usize,
    /// Ridge penalty for each readout.
    pub ridge_lambda: f64,
}

impl Default for TsFreshConfig {
    fn default() -> Self {
        Self {
            random_state: 0,
            n_estimators: 10,
            ridge_lambda: 1.0,
        }
    }
}

impl TsFreshConfig {
    /// Create a configuration with the given seed.
    pub fn new(random_state: u64) -> Self {
        Self {
            random_state,
            ..Self::default()
        }
    }

    /// Set the ensemble size.
    pub fn with_n_estimators(mut self, n_estimators: usize) -> Self {
        self.n_estimators = n_estimators;
        self
    }
}

/// Configuration for the hybrid interval regressor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RistConfig {
    /// Number of random intervals to sample per series.
    pub n_intervals: usize,
    /// Order of the autoregressive features fitted per interval.
    pub ar_order: usize,
    /// Seed for interval sampling.
    pub random_state: u64,
    /// Ridge penalty for the readout.
    pub ridge_lambda: f64,
}

impl Default for RistConfig {
    fn default() -> Self {
        Self {
            n_intervals: 12,
            ar_order: 3,
            random_state: 0,
            ridge_lambda: 1.0,
        }
    }
}

impl RistConfig {
    /// Create a configuration with the given seed.
    pub fn new(random_state: u64) -> Self {
        Self {
            random_state,
            ..Self::default()
        }
    }

    /// Set the number of sampled intervals.
    pub fn with_n_intervals(mut self, n_intervals: usize) -> Self {
        self.n_intervals = n_intervals;
        self
    }

    /// Set the autoregressive order.
    pub fn with_ar_order(mut self, ar_order: usize) -> Self {
        self.ar_order = ar_order;
        self
    }
}
