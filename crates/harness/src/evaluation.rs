//! The evaluation pipeline.

use regressor_facade::{RegressionError, TimeSeriesRegressor};

use crate::capability::{is_available, SoftDependency};
use crate::error::HarnessError;
use crate::split::holdout_split;
use crate::validate::{validate, DEFAULT_ERROR_CEILING};
use dataset::DatasetRepository;

/// Result of a completed evaluation run.
#[derive(Debug, Clone)]
pub struct EvaluationReport {
    /// Number of training examples.
    pub train_len: usize,
    /// Number of held-out examples.
    pub test_len: usize,
    /// Predictions over the held-out examples, in order.
    pub predictions: Vec<f64>,
    /// Mean squared error against the held-out targets.
    pub mse: f64,
}

/// Outcome of a dependency-gated evaluation.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// The run executed and every check passed.
    Completed(EvaluationReport),
    /// The run was skipped because an optional dependency is missing.
    Skipped { dependency: &'static str },
}

/// A configured train/predict/validate cycle.
///
/// Each run loads its own dataset and owns its regressor for the duration
/// of the call; nothing is cached between runs.
#[derive(Debug, Clone)]
pub struct Evaluation {
    dataset: String,
    train_fraction: f64,
    error_ceiling: f64,
    truncate: Option<usize>,
}

impl Evaluation {
    /// Create an evaluation over the named dataset with default settings:
    /// 80/20 split and the default error ceiling.
    pub fn new(dataset: &str) -> Self {
        Self {
            dataset: dataset.to_string(),
            train_fraction: 0.8,
            error_ceiling: DEFAULT_ERROR_CEILING,
            truncate: None,
        }
    }

    /// Set the train fraction.
    pub fn with_train_fraction(mut self, train_fraction: f64) -> Self {
        self.train_fraction = train_fraction;
        self
    }

    /// Set the mean-squared-error ceiling.
    pub fn with_error_ceiling(mut self, error_ceiling: f64) -> Self {
        self.error_ceiling = error_ceiling;
        self
    }

    /// Evaluate on only the first `n` examples of the dataset.
    pub fn with_truncate(mut self, n: usize) -> Self {
        self.truncate = Some(n);
        self
    }

    /// Execute the load, split, fit, predict, validate pipeline.
    pub fn run(
        &self,
        repository: &dyn DatasetRepository,
        regressor: &mut dyn TimeSeriesRegressor,
    ) -> Result<EvaluationReport, HarnessError> {
        tracing::debug!(dataset = %self.dataset, "loading dataset");
        let mut data = repository.load(&self.dataset)?;
        if let Some(n) = self.truncate {
            data.truncate(n);
        }

        let (train, test) = holdout_split(&data, self.train_fraction)?;
        tracing::debug!(train = train.len(), test = test.len(), "fitting regressor");

        regressor.fit(train.series(), train.targets())?;
        let predictions = regressor.predict(test.series())?;

        let report = validate(&predictions, test.targets(), self.error_ceiling)?;
        tracing::info!(
            dataset = %self.dataset,
            test = report.len,
            mse = report.mse,
            "evaluation passed"
        );

        Ok(EvaluationReport {
            train_len: train.len(),
            test_len: test.len(),
            predictions,
            mse: report.mse,
        })
    }

    /// Execute the pipeline only when `dependency` is available, skipping
    /// the whole run otherwise.
    ///
    /// The regressor is built by `build` *after* the probe passes, so a
    /// missing dependency never reaches construction.
    pub fn run_gated(
        &self,
        dependency: SoftDependency,
        repository: &dyn DatasetRepository,
        build: impl FnOnce() -> Result<Box<dyn TimeSeriesRegressor>, RegressionError>,
    ) -> Result<Outcome, HarnessError> {
        if !is_available(dependency) {
            tracing::info!(
                dependency = dependency.as_str(),
                "skipped: missing optional dependency"
            );
            return Ok(Outcome::Skipped {
                dependency: dependency.as_str(),
            });
        }

        let mut regressor = build()?;
        let report = self.run(repository, regressor.as_mut())?;
        Ok(Outcome::Completed(report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dataset::{Dataset, DatasetError};

    /// Repository with one tiny in-memory dataset.
    struct FixedRepository;

    impl DatasetRepository for FixedRepository {
        fn name(&self) -> &str {
            "fixed"
        }

        fn load(&self, name: &str) -> Result<Dataset, DatasetError> {
            if name != "fixed" {
                return Err(DatasetError::UnknownDataset(name.to_string()));
            }
            let series: Vec<Vec<f64>> = (0..10)
                .map(|i| (0..12).map(|t| (i + t) as f64 * 0.1).collect())
                .collect();
            let targets: Vec<f64> = (0..10).map(|i| i as f64 * 0.2).collect();
            Dataset::new(series, targets)
        }
    }

    /// Regressor that predicts a constant.
    struct ConstantRegressor {
        value: f64,
        fitted: bool,
    }

    impl TimeSeriesRegressor for ConstantRegressor {
        fn fit(&mut self, _series: &[Vec<f64>], targets: &[f64]) -> Result<(), RegressionError> {
            self.value = targets.iter().sum::<f64>() / targets.len() as f64;
            self.fitted = true;
            Ok(())
        }

        fn predict(&self, series: &[Vec<f64>]) -> Result<Vec<f64>, RegressionError> {
            if !self.fitted {
                return Err(RegressionError::NotFitted);
            }
            Ok(vec![self.value; series.len()])
        }

        fn is_fitted(&self) -> bool {
            self.fitted
        }
    }

    #[test]
    fn test_run_produces_report() {
        let mut regressor = ConstantRegressor {
            value: 0.0,
            fitted: false,
        };
        let report = Evaluation::new("fixed")
            .run(&FixedRepository, &mut regressor)
            .unwrap();

        assert_eq!(report.train_len, 8);
        assert_eq!(report.test_len, 2);
        assert_eq!(report.predictions.len(), 2);
        assert!(report.mse.is_finite());
    }

    #[test]
    fn test_unknown_dataset_propagates() {
        let mut regressor = ConstantRegressor {
            value: 0.0,
            fitted: false,
        };
        let result = Evaluation::new("missing").run(&FixedRepository, &mut regressor);
        assert!(matches!(result, Err(HarnessError::Data(_))));
    }

    #[test]
    fn test_tight_ceiling_fails_validation() {
        let mut regressor = ConstantRegressor {
            value: 0.0,
            fitted: false,
        };
        let result = Evaluation::new("fixed")
            .with_error_ceiling(1e-12)
            .run(&FixedRepository, &mut regressor);
        assert!(matches!(result, Err(HarnessError::Validation(_))));
    }

    #[test]
    fn test_invalid_fraction_rejected_before_fit() {
        let mut regressor = ConstantRegressor {
            value: 0.0,
            fitted: false,
        };
        let result = Evaluation::new("fixed")
            .with_train_fraction(1.5)
            .run(&FixedRepository, &mut regressor);
        assert!(matches!(result, Err(HarnessError::InvalidParameter { .. })));
        assert!(!regressor.is_fitted());
    }

    #[test]
    fn test_truncate_limits_examples() {
        let mut regressor = ConstantRegressor {
            value: 0.0,
            fitted: false,
        };
        let report = Evaluation::new("fixed")
            .with_truncate(5)
            .run(&FixedRepository, &mut regressor)
            .unwrap();
        assert_eq!(report.train_len, 4);
        assert_eq!(report.test_len, 1);
    }
}
