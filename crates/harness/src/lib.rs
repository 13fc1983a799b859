//! Held-out evaluation harness for time series regressors
//!
//! The harness runs a linear, single-pass pipeline over one dataset and one
//! regressor: load, split chronologically, fit on the train partition,
//! predict on the test partition, and validate the predictions. There are
//! no retries, no concurrency, and no state shared between runs.
//!
//! ## Example
//!
//! ```rust
//! use dataset::BundledRepository;
//! use harness::Evaluation;
//! use regressor_facade::prelude::*;
//!
//! let repository = BundledRepository::new();
//! let mut model = RocketRegressor::new(RocketConfig::new(100, 42)).unwrap();
//!
//! let report = Evaluation::new("outbreak-3month")
//!     .run(&repository, &mut model)
//!     .unwrap();
//! assert_eq!(report.predictions.len(), report.test_len);
//! ```

pub mod capability;
pub mod evaluation;
pub mod metrics;
pub mod split;
pub mod validate;

mod error;

pub use capability::{is_available, SoftDependency};
pub use error::HarnessError;
pub use evaluation::{Evaluation, EvaluationReport, Outcome};
pub use split::{holdout_split, DatasetView};
pub use validate::{validate, ValidationError, ValidationReport, DEFAULT_ERROR_CEILING};
