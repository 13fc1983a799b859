//! Random convolution kernel regressor
//!
//! Transforms each series with a bank of random convolution kernels and
//! fits a ridge readout over the pooled kernel activations.
//!
//! ## How It Works
//!
//! 1. Draw `n_kernels` random kernels (length, weights, bias, dilation,
//!    padding) from a seeded RNG
//! 2. Convolve every series with every kernel, pooling each activation map
//!    into two features: the proportion of positive values and the maximum
//! 3. Fit a ridge readout from the pooled features to the targets
//!
//! Kernel generation happens at fit time so dilations can be scaled to the
//! observed series length. Out-of-range positions read as zero, which also
//! covers shorter series at prediction time.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use serde::{Deserialize, Serialize};

use regressor_api::RocketConfig;
use regressor_spi::{RegressionError, Result, TimeSeriesRegressor};

use crate::readout::RidgeReadout;
use crate::{check_prediction_inputs, check_training_inputs};

const KERNEL_LENGTHS: [usize; 3] = [7, 9, 11];

/// One random convolution kernel.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Kernel {
    weights: Vec<f64>,
    bias: f64,
    dilation: usize,
    padding: usize,
}

impl Kernel {
    /// Pool the activation map into (proportion positive, max).
    fn apply(&self, series: &[f64]) -> (f64, f64) {
        let len = series.len() as isize;
        let klen = self.weights.len();

        // Clamp dilation so the receptive field fits the series.
        let dilation = if klen <= 1 || len <= 1 {
            1
        } else {
            self.dilation.min((len as usize - 1) / (klen - 1)).max(1)
        };
        let span = ((klen - 1) * dilation) as isize;
        let padding = self.padding as isize;

        let first = -padding;
        let last = (len + padding - span - 1).max(first);

        let mut positive = 0usize;
        let mut count = 0usize;
        let mut max = f64::NEG_INFINITY;

        let mut start = first;
        while start <= last {
            let mut sum = self.bias;
            for (j, w) in self.weights.iter().enumerate() {
                let idx = start + (j * dilation) as isize;
                if idx >= 0 && idx < len {
                    sum += w * series[idx as usize];
                }
            }
            if sum > 0.0 {
                positive += 1;
            }
            if sum > max {
                max = sum;
            }
            count += 1;
            start += 1;
        }

        (positive as f64 / count as f64, max)
    }
}

/// Convolution-kernel time series regressor.
///
/// # Example
///
/// ```rust
/// use regressor_core::rocket::RocketRegressor;
/// use regressor_core::TimeSeriesRegressor;
/// use regressor_api::RocketConfig;
///
/// let series: Vec<Vec<f64>> = (0..10)
///     .map(|i| (0..20).map(|t| ((i + t) as f64 * 0.3).sin()).collect())
///     .collect();
/// let targets: Vec<f64> = (0..10).map(|i| i as f64 * 0.1).collect();
///
/// let mut model = RocketRegressor::new(RocketConfig::new(50, 42)).unwrap();
/// model.fit(&series, &targets).unwrap();
/// let predictions = model.predict(&series).unwrap();
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RocketRegressor {
    config: RocketConfig,
    kernels: Vec<Kernel>,
    readout: RidgeReadout,
    fitted: bool,
}

impl RocketRegressor {
    /// Create a new regressor from its configuration.
    ///
    /// Construction performs no computation; kernels are drawn at fit time.
    pub fn new(config: RocketConfig) -> Result<Self> {
        if config.n_kernels < 1 {
            return Err(RegressionError::InvalidParameter {
                name: "n_kernels".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        let readout = RidgeReadout::new(config.ridge_lambda)?;
        Ok(Self {
            config,
            kernels: Vec::new(),
            readout,
            fitted: false,
        })
    }

    /// Number of configured kernels.
    pub fn n_kernels(&self) -> usize {
        self.config.n_kernels
    }

    fn generate_kernels(&self, reference_len: usize) -> Vec<Kernel> {
        let mut rng = StdRng::seed_from_u64(self.config.random_state);

        (0..self.config.n_kernels)
            .map(|_| {
                let candidate = KERNEL_LENGTHS[rng.gen_range(0..KERNEL_LENGTHS.len())];
                let klen = candidate.min(reference_len).max(1);

                let mut weights: Vec<f64> =
                    (0..klen).map(|_| rng.sample(StandardNormal)).collect();
                let mean = weights.iter().sum::<f64>() / klen as f64;
                for w in weights.iter_mut() {
                    *w -= mean;
                }

                let dilation = if klen <= 1 || reference_len <= 1 {
                    1
                } else {
                    let exponent_max =
                        ((reference_len - 1) as f64 / (klen - 1) as f64).log2().max(0.0);
                    let drawn = 2f64.powf(rng.gen_range(0.0..=exponent_max)).floor() as usize;
                    drawn.max(1)
                };

                let padding = if rng.gen_bool(0.5) {
                    ((klen - 1) * dilation) / 2
                } else {
                    0
                };

                Kernel {
                    weights,
                    bias: rng.gen_range(-1.0..=1.0),
                    dilation,
                    padding,
                }
            })
            .collect()
    }

    fn transform(&self, series: &[Vec<f64>]) -> Vec<Vec<f64>> {
        series
            .iter()
            .map(|s| {
                let mut row = Vec::with_capacity(self.kernels.len() * 2);
                for kernel in &self.kernels {
                    let (ppv, max) = kernel.apply(s);
                    row.push(ppv);
                    row.push(max);
                }
                row
            })
            .collect()
    }
}

impl TimeSeriesRegressor for RocketRegressor {
    fn fit(&mut self, series: &[Vec<f64>], targets: &[f64]) -> Result<()> {
        check_training_inputs(series, targets)?;

        let reference_len = series.iter().map(Vec::len).min().unwrap_or(1);
        self.kernels = self.generate_kernels(reference_len);

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

#[cfg(test)]
mod tests {
    use super::*;

    fn panel(n: usize, len: usize) -> (Vec<Vec<f64>>, Vec<f64>) {
        let series: Vec<Vec<f64>> = (0..n)
            .map(|i| {
                (0..len)
                    .map(|t| ((i * 3 + t) as f64 * 0.21).sin() + i as f64 * 0.05)
                    .collect()
            })
            .collect();
        let targets: Vec<f64> = (0..n).map(|i| 0.1 + i as f64 * 0.02).collect();
        (series, targets)
    }

    #[test]
    fn test_fit_predict_lengths() {
        let (series, targets) = panel(12, 24);
        let mut model = RocketRegressor::new(RocketConfig::new(80, 42)).unwrap();
        model.fit(&series, &targets).unwrap();

        let predictions = model.predict(&series[..5]).unwrap();
        assert_eq!(predictions.len(), 5);
    }

    #[test]
    fn test_predictions_are_finite() {
        let (series, targets) = panel(12, 24);
        let mut model = RocketRegressor::new(RocketConfig::new(80, 42)).unwrap();
        model.fit(&series, &targets).unwrap();

        let predictions = model.predict(&series).unwrap();
        assert!(predictions.iter().all(|p| p.is_finite()));
    }

    #[test]
    fn test_same_seed_same_predictions() {
        let (series, targets) = panel(10, 20);

        let mut a = RocketRegressor::new(RocketConfig::new(60, 7)).unwrap();
        let mut b = RocketRegressor::new(RocketConfig::new(60, 7)).unwrap();
        a.fit(&series, &targets).unwrap();
        b.fit(&series, &targets).unwrap();

        assert_eq!(a.predict(&series).unwrap(), b.predict(&series).unwrap());
    }

    #[test]
    fn test_different_seeds_differ() {
        let (series, targets) = panel(10, 20);

        let mut a = RocketRegressor::new(RocketConfig::new(60, 1)).unwrap();
        let mut b = RocketRegressor::new(RocketConfig::new(60, 2)).unwrap();
        a.fit(&series, &targets).unwrap();
        b.fit(&series, &targets).unwrap();

        assert_ne!(a.predict(&series).unwrap(), b.predict(&series).unwrap());
    }

    #[test]
    fn test_variable_length_series() {
        let mut series: Vec<Vec<f64>> = Vec::new();
        for i in 0..8 {
            let len = 16 + (i % 4) * 3;
            series.push((0..len).map(|t| (t as f64 * 0.2).cos()).collect());
        }
        let targets: Vec<f64> = (0..8).map(|i| i as f64).collect();

        let mut model = RocketRegressor::new(RocketConfig::new(40, 3)).unwrap();
        model.fit(&series, &targets).unwrap();
        let predictions = model.predict(&series).unwrap();
        assert!(predictions.iter().all(|p| p.is_finite()));
    }

    #[test]
    fn test_short_series_clamps_kernels() {
        let series: Vec<Vec<f64>> = (0..6).map(|i| vec![i as f64, i as f64 + 1.0, 0.5]).collect();
        let targets: Vec<f64> = (0..6).map(|i| i as f64).collect();

        let mut model = RocketRegressor::new(RocketConfig::new(30, 11)).unwrap();
        model.fit(&series, &targets).unwrap();
        assert!(model.predict(&series).unwrap().iter().all(|p| p.is_finite()));
    }

    #[test]
    fn test_zero_kernels_rejected() {
        assert!(RocketRegressor::new(RocketConfig::new(0, 0)).is_err());
    }

    #[test]
    fn test_predict_before_fit_fails() {
        let model = RocketRegressor::new(RocketConfig::default()).unwrap();
        assert!(matches!(
            model.predict(&[vec![1.0, 2.0]]),
            Err(RegressionError::NotFitted)
        ));
    }

    #[test]
    fn test_nan_input_rejected() {
        let series = vec![vec![1.0, f64::NAN], vec![2.0, 3.0]];
        let targets = vec![0.1, 0.2];
        let mut model = RocketRegressor::new(RocketConfig::new(10, 0)).unwrap();
        assert!(matches!(
            model.fit(&series, &targets),
            Err(RegressionError::InvalidData(_))
        ));
    }
}
