//! Summary-feature regressor
//!
//! Extracts a fixed panel of summary statistics per series (see
//! [`crate::features`]) and fits a small bagged ensemble of ridge readouts
//! over bootstrap resamples of the training set. Predictions are the
//! ensemble average. The `random_state` seed drives the resampling, so a
//! fitted model is fully reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use regressor_api::TsFreshConfig;
use regressor_spi::{RegressionError, Result, TimeSeriesRegressor};

use crate::features::summary_features;
use crate::readout::RidgeReadout;
use crate::{check_prediction_inputs, check_training_inputs};

/// Summary-feature time series regressor with a bagged ridge readout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TsFreshRegressor {
    config: TsFreshConfig,
    readouts: Vec<RidgeReadout>,
    fitted: bool,
}

impl TsFreshRegressor {
    /// Create a new regressor from its configuration.
    pub fn new(config: TsFreshConfig) -> Result<Self> {
        if config.n_estimators < 1 {
            return Err(RegressionError::InvalidParameter {
                name: "n_estimators".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        // Validate the penalty up front; per-readout values are built at fit time.
        RidgeReadout::new(config.ridge_lambda)?;
        Ok(Self {
            config,
            readouts: Vec::new(),
            fitted: false,
        })
    }

    /// Ensemble size.
    pub fn n_estimators(&self) -> usize {
        self.config.n_estimators
    }

    fn transform(series: &[Vec<f64>]) -> Vec<Vec<f64>> {
        series.iter().map(|s| summary_features(s)).collect()
    }
}

impl TimeSeriesRegressor for TsFreshRegressor {
    fn fit(&mut self, series: &[Vec<f64>], targets: &[f64]) -> Result<()> {
        check_training_inputs(series, targets)?;

        let features = Self::transform(series);
        let n = features.len();
        let mut rng = StdRng::seed_from_u64(self.config.random_state);

        let mut readouts = Vec::with_capacity(self.config.n_estimators);
        for _ in 0..self.config.n_estimators {
            let mut boot_features = Vec::with_capacity(n);
            let mut boot_targets = Vec::with_capacity(n);
            for _ in 0..n {
                let idx = rng.gen_range(0..n);
                boot_features.push(features[idx].clone());
                boot_targets.push(targets[idx]);
            }

            let mut readout = RidgeReadout::new(self.config.ridge_lambda)?;
            readout.fit(&boot_features, &boot_targets)?;
            readouts.push(readout);
        }

        self.readouts = readouts;
        self.fitted = true;
        Ok(())
    }

    fn predict(&self, series: &[Vec<f64>]) -> Result<Vec<f64>> {
        if !self.fitted {
            return Err(RegressionError::NotFitted);
        }
        check_prediction_inputs(series)?;

        let features = Self::transform(series);
        let mut combined = vec![0.0; features.len()];
        for readout in &self.readouts {
            let predictions = readout.predict(&features)?;
            for (c, p) in combined.iter_mut().zip(predictions.iter()) {
                *c += p;
            }
        }
        let count = self.readouts.len() as f64;
        for c in combined.iter_mut() {
            *c /= count;
        }
        Ok(combined)
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel(n: usize, len: usize) -> (Vec<Vec<f64>>, Vec<f64>) {
        let series: Vec<Vec<f64>> = (0..n)
            .map(|i| {
                (0..len)
                    .map(|t| (t as f64 * 0.1 * (i + 1) as f64).sin() + i as f64 * 0.1)
                    .collect()
            })
            .collect();
        // target tracks the series mean level
        let targets: Vec<f64> = series
            .iter()
            .map(|s| s.iter().sum::<f64>() / s.len() as f64)
            .collect();
        (series, targets)
    }

    #[test]
    fn test_fit_predict_lengths() {
        let (series, targets) = panel(14, 30);
        let mut model = TsFreshRegressor::new(TsFreshConfig::new(0)).unwrap();
        model.fit(&series, &targets).unwrap();

        let predictions = model.predict(&series[..4]).unwrap();
        assert_eq!(predictions.len(), 4);
    }

    #[test]
    fn test_predictions_are_finite() {
        let (series, targets) = panel(14, 30);
        let mut model = TsFreshRegressor::new(TsFreshConfig::new(0)).unwrap();
        model.fit(&series, &targets).unwrap();

        assert!(model.predict(&series).unwrap().iter().all(|p| p.is_finite()));
    }

    #[test]
    fn test_tracks_mean_level_target() {
        let (series, targets) = panel(16, 40);
        let mut model = TsFreshRegressor::new(TsFreshConfig::new(3)).unwrap();
        model.fit(&series, &targets).unwrap();

        let predictions = model.predict(&series).unwrap();
        // The mean is one of the extracted features, so in-sample error
        // should be small relative to the target spread.
        for (pred, actual) in predictions.iter().zip(targets.iter()) {
            assert!((pred - actual).abs() < 0.5);
        }
    }

    #[test]
    fn test_same_seed_same_predictions() {
        let (series, targets) = panel(12, 24);

        let mut a = TsFreshRegressor::new(TsFreshConfig::new(5)).unwrap();
        let mut b = TsFreshRegressor::new(TsFreshConfig::new(5)).unwrap();
        a.fit(&series, &targets).unwrap();
        b.fit(&series, &targets).unwrap();

        assert_eq!(a.predict(&series).unwrap(), b.predict(&series).unwrap());
    }

    #[test]
    fn test_variable_length_series() {
        let series: Vec<Vec<f64>> = (0..10)
            .map(|i| (0..(12 + i)).map(|t| t as f64 * 0.3).collect())
            .collect();
        let targets: Vec<f64> = (0..10).map(|i| i as f64).collect();

        let mut model = TsFreshRegressor::new(TsFreshConfig::new(1)).unwrap();
        model.fit(&series, &targets).unwrap();
        assert!(model.predict(&series).unwrap().iter().all(|p| p.is_finite()));
    }

    #[test]
    fn test_zero_estimators_rejected() {
        let config = TsFreshConfig::new(0).with_n_estimators(0);
        assert!(TsFreshRegressor::new(config).is_err());
    }

    #[test]
    fn test_predict_before_fit_fails() {
        let model = TsFreshRegressor::new(TsFreshConfig::default()).unwrap();
        assert!(matches!(
            model.predict(&[vec![1.0, 2.0]]),
            Err(RegressionError::NotFitted)
        ));
    }
}
