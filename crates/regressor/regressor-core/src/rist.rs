//! Hybrid random-interval regressor
//!
//! Samples random intervals from a seeded RNG and describes each interval
//! with distribution statistics and low-order autoregressive coefficients,
//! then fits a single ridge readout over the concatenated interval
//! features. Only compiled with the `stats` feature, which supplies the
//! statistical toolkit the interval descriptors use.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

use regressor_api::RistConfig;
use regressor_spi::{RegressionError, Result, TimeSeriesRegressor};

use crate::features::skewness;
use crate::readout::RidgeReadout;
use crate::{check_prediction_inputs, check_training_inputs};

/// Hybrid interval time series regressor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RistRegressor {
    config: RistConfig,
    /// Sampled `[start, end)` intervals, relative to the training reference length.
    intervals: Vec<(usize, usize)>,
    readout: RidgeReadout,
    fitted: bool,
}

impl RistRegressor {
    /// Create a new regressor from its configuration.
    pub fn new(config: RistConfig) -> Result<Self> {
        if config.n_intervals < 1 {
            return Err(RegressionError::InvalidParameter {
                name: "n_intervals".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        let readout = RidgeReadout::new(config.ridge_lambda)?;
        Ok(Self {
            config,
            intervals: Vec::new(),
            readout,
            fitted: false,
        })
    }

    /// Number of sampled intervals.
    pub fn n_intervals(&self) -> usize {
        self.config.n_intervals
    }

    fn sample_intervals(&self, reference_len: usize) -> Vec<(usize, usize)> {
        let mut rng = StdRng::seed_from_u64(self.config.random_state);
        let min_len = 2.min(reference_len).max(1);

        (0..self.config.n_intervals)
            .map(|_| {
                let max_start = reference_len.saturating_sub(min_len);
                let start = rng.gen_range(0..=max_start);
                let remaining = reference_len - start;
                let ilen = rng.gen_range(min_len..=remaining);
                (start, start + ilen)
            })
            .collect()
    }

    /// Describe one interval of one series.
    fn interval_features(&self, slice: &[f64]) -> Vec<f64> {
        let mut features = Vec::with_capacity(5 + self.config.ar_order);
        if slice.len() < 2 {
            let v = slice.first().copied().unwrap_or(0.0);
            features.extend_from_slice(&[v, 0.0, v, v, 0.0]);
        } else {
            let mean = slice.mean();
            let std = slice.std_dev();
            features.push(mean);
            features.push(std);
            features.push(slice.min());
            features.push(slice.max());
            features.push(skewness(slice, mean, std));
        }
        features.extend(ar_coefficients(slice, self.config.ar_order));
        features
    }

    fn transform(&self, series: &[Vec<f64>]) -> Vec<Vec<f64>> {
        series
            .iter()
            .map(|s| {
                let len = s.len();
                let mut row =
                    Vec::with_capacity(self.intervals.len() * (5 + self.config.ar_order));
                for &(start, end) in &self.intervals {
                    let s0 = start.min(len.saturating_sub(1));
                    let e0 = end.min(len).max(s0 + 1);
                    row.extend(self.interval_features(&s[s0..e0]));
                }
                row
            })
            .collect()
    }
}

impl TimeSeriesRegressor for RistRegressor {
    fn fit(&mut self, series: &[Vec<f64>], targets: &[f64]) -> Result<()> {
        check_training_inputs(series, targets)?;

        let reference_len = series.iter().map(Vec::len).min().unwrap_or(1);
        self.intervals = self.sample_intervals(reference_len);

        let features = self.transform(series);
        self.readout.fit(&features, targets)?;
        self.fitted = true;
        Ok(())
    }

    fn predict(&self, series: &[Vec<f64>]) -> Result<Vec<f64>> {
        if !self.fitted {
            return Err(RegressionError::NotFitted);
        }
        check_prediction_inputs(series)?;
        self.readout.predict(&self.transform(series))
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }
}

/// Autoregressive coefficients by the Levinson-Durbin recursion.
///
/// Returns exactly `order` coefficients, zero-padded when the series is too
/// short or the recursion terminates early.
fn ar_coefficients(series: &[f64], order: usize) -> Vec<f64> {
    let mut coefficients = vec![0.0; order];
    let n = series.len();
    if order == 0 || n < 2 {
        return coefficients;
    }

    let mean = series.iter().sum::<f64>() / n as f64;
    let centered: Vec<f64> = series.iter().map(|v| v - mean).collect();

    let max_lag = order.min(n - 1);
    let mut autocovariance = vec![0.0; max_lag + 1];
    for (lag, cov) in autocovariance.iter_mut().enumerate() {
        *cov = centered
            .iter()
            .zip(centered.iter().skip(lag))
            .map(|(a, b)| a * b)
            .sum::<f64>()
            / n as f64;
    }

    if autocovariance[0] < 1e-12 {
        return coefficients;
    }

    let mut phi = vec![0.0; max_lag + 1];
    let mut error = autocovariance[0];
    for k in 1..=max_lag {
        let mut acc = autocovariance[k];
        for j in 1..k {
            acc -= phi[j] * autocovariance[k - j];
        }
        let reflection = acc / error;
        if !reflection.is_finite() {
            break;
        }

        let previous = phi.clone();
        phi[k] = reflection;
        for j in 1..k {
            phi[j] = previous[j] - reflection * previous[k - j];
        }

        error *= 1.0 - reflection * reflection;
        if error.abs() < 1e-12 {
            break;
        }
    }

    coefficients[..max_lag].copy_from_slice(&phi[1..=max_lag]);
    coefficients
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel(n: usize, len: usize) -> (Vec<Vec<f64>>, Vec<f64>) {
        let series: Vec<Vec<f64>> = (0..n)
            .map(|i| {
                let phase = i as f64 * 0.4;
                (0..len).map(|t| (t as f64 * 0.3 + phase).sin() * (1.0 + i as f64 * 0.1)).collect()
            })
            .collect();
        let targets: Vec<f64> = (0..n).map(|i| 0.05 * i as f64).collect();
        (series, targets)
    }

    #[test]
    fn test_fit_predict_lengths() {
        let (series, targets) = panel(10, 28);
        let mut model = RistRegressor::new(RistConfig::new(0)).unwrap();
        model.fit(&series, &targets).unwrap();

        let predictions = model.predict(&series[..3]).unwrap();
        assert_eq!(predictions.len(), 3);
    }

    #[test]
    fn test_predictions_are_finite() {
        let (series, targets) = panel(10, 28);
        let mut model = RistRegressor::new(RistConfig::new(0)).unwrap();
        model.fit(&series, &targets).unwrap();

        assert!(model.predict(&series).unwrap().iter().all(|p| p.is_finite()));
    }

    #[test]
    fn test_tiny_training_set() {
        // 8 train examples, the smallest panel the hybrid scenario uses
        let (series, targets) = panel(8, 28);
        let mut model = RistRegressor::new(RistConfig::new(0)).unwrap();
        model.fit(&series, &targets).unwrap();

        let predictions = model.predict(&series[..2]).unwrap();
        assert_eq!(predictions.len(), 2);
        assert!(predictions.iter().all(|p| p.is_finite()));
    }

    #[test]
    fn test_same_seed_same_predictions() {
        let (series, targets) = panel(9, 20);

        let mut a = RistRegressor::new(RistConfig::new(11)).unwrap();
        let mut b = RistRegressor::new(RistConfig::new(11)).unwrap();
        a.fit(&series, &targets).unwrap();
        b.fit(&series, &targets).unwrap();

        assert_eq!(a.predict(&series).unwrap(), b.predict(&series).unwrap());
    }

    #[test]
    fn test_ar_coefficients_length() {
        let series: Vec<f64> = (0..30).map(|t| (t as f64 * 0.5).sin()).collect();
        assert_eq!(ar_coefficients(&series, 3).len(), 3);
        assert_eq!(ar_coefficients(&series, 0).len(), 0);
    }

    #[test]
    fn test_ar_coefficients_constant_series() {
        let coefficients = ar_coefficients(&[2.0; 12], 3);
        assert!(coefficients.iter().all(|c| *c == 0.0));
    }

    #[test]
    fn test_ar_coefficients_recover_ar1() {
        // x[t] = 0.7 x[t-1] + noise-free start
        let mut series = vec![1.0];
        for _ in 0..200 {
            let last = *series.last().unwrap();
            series.push(0.7 * last + 0.1);
        }
        let coefficients = ar_coefficients(&series, 1);
        assert!((coefficients[0] - 0.7).abs() < 0.2);
    }

    #[test]
    fn test_zero_intervals_rejected() {
        let config = RistConfig::new(0).with_n_intervals(0);
        assert!(RistRegressor::new(config).is_err());
    }

    #[test]
    fn test_predict_before_fit_fails() {
        let model = RistRegressor::new(RistConfig::default()).unwrap();
        assert!(matches!(
            model.predict(&[vec![1.0, 2.0]]),
            Err(RegressionError::NotFitted)
        ));
    }
}
