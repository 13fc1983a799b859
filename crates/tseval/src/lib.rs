//! # tseval
//!
//! Held-out evaluation for time series regression: labeled datasets, a
//! chronological train/test split, regressor variants behind a common
//! fit/predict trait, and a validation pipeline with a soft-dependency
//! skip policy.
//!
//! ## Example
//!
//! ```rust
//! use tseval::prelude::*;
//!
//! let repository = BundledRepository::new();
//! let mut model = RocketRegressor::new(RocketConfig::new(100, 42)).unwrap();
//!
//! let report = Evaluation::new("outbreak-3month")
//!     .run(&repository, &mut model)
//!     .unwrap();
//! assert!(report.mse < 1e6);
//! ```

pub use dataset;
pub use harness;
pub use regressor_facade as regressor;

/// Prelude module for convenient imports
pub mod prelude {
    pub use dataset::{BundledRepository, Dataset, DatasetError, DatasetRepository};
    pub use harness::{
        holdout_split, is_available, validate, Evaluation, EvaluationReport, HarnessError,
        Outcome, SoftDependency, ValidationError,
    };
    pub use regressor_facade::prelude::*;
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_full_pipeline_through_facade() {
        let repository = BundledRepository::new();
        let mut model = TsFreshRegressor::new(TsFreshConfig::new(0)).unwrap();

        let report = Evaluation::new("outbreak-3month")
            .run(&repository, &mut model)
            .unwrap();

        assert_eq!(report.predictions.len(), report.test_len);
        assert!(report.mse < 1e6);
    }
}
