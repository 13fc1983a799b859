//! Ridge least-squares readout shared by the regressor variants.
//!
//! Each variant turns a series into a fixed-length feature vector; this
//! module maps feature vectors to scalar targets. Features are
//! column-standardized before solving, and the regularized normal equations
//! are solved by Cholesky factorization. When features outnumber training
//! examples the dual (Gram) formulation is used so the solve stays at
//! `n x n` rather than `p x p`.

use serde::{Deserialize, Serialize};

use regressor_spi::{RegressionError, Result};

/// Ridge regression readout over fixed-length feature vectors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RidgeReadout {
    /// Ridge penalty.
    lambda: f64,
    /// Fitted weights, one per feature.
    weights: Vec<f64>,
    /// Fitted intercept (mean training target).
    intercept: f64,
    /// Per-column means used for standardization.
    feature_means: Vec<f64>,
    /// Per-column scales used for standardization.
    feature_scales: Vec<f64>,
    /// Whether the readout has been fitted.
    fitted: bool,
}

impl RidgeReadout {
    /// Create a new readout with the given ridge penalty.
    pub fn new(lambda: f64) -> Result<Self> {
        if !lambda.is_finite() || lambda <= 0.0 {
            return Err(RegressionError::InvalidParameter {
                name: "ridge_lambda".to_string(),
                reason: "must be a positive finite number".to_string(),
            });
        }
        Ok(Self {
            lambda,
            weights: Vec::new(),
            intercept: 0.0,
            feature_means: Vec::new(),
            feature_scales: Vec::new(),
            fitted: false,
        })
    }

    /// Whether the readout has been fitted.
    pub fn is_fitted(&self) -> bool {
        self.fitted
    }

    /// Fit the readout to a feature matrix and aligned targets.
    pub fn fit(&mut self, features: &[Vec<f64>], targets: &[f64]) -> Result<()> {
        let n = features.len();
        if n != targets.len() {
            return Err(RegressionError::ShapeMismatch {
                series: n,
                targets: targets.len(),
            });
        }
        if n < 1 {
            return Err(RegressionError::InsufficientData {
                required: 1,
                actual: 0,
            });
        }
        let p = features[0].len();
        if p == 0 || features.iter().any(|row| row.len() != p) {
            return Err(RegressionError::InvalidData(
                "feature rows must be non-empty and equal length".to_string(),
            ));
        }

        let (means, scales) = column_standardization(features, p);
        let x: Vec<Vec<f64>> = features
            .iter()
            .map(|row| standardize_row(row, &means, &scales))
            .collect();

        let intercept = targets.iter().sum::<f64>() / n as f64;
        let centered: Vec<f64> = targets.iter().map(|t| t - intercept).collect();

        let weights = if p <= n {
            self.solve_primal(&x, &centered, p)?
        } else {
            self.solve_dual(&x, &centered, n, p)?
        };

        self.weights = weights;
        self.intercept = intercept;
        self.feature_means = means;
        self.feature_scales = scales;
        self.fitted = true;
        Ok(())
    }

    /// Predict one target per feature row.
    pub fn predict(&self, features: &[Vec<f64>]) -> Result<Vec<f64>> {
        if !self.fitted {
            return Err(RegressionError::NotFitted);
        }
        let p = self.weights.len();
        let mut predictions = Vec::with_capacity(features.len());
        for row in features {
            if row.len() != p {
                return Err(RegressionError::InvalidData(format!(
                    "expected {} features per row, got {}",
                    p,
                    row.len()
                )));
            }
            let z = standardize_row(row, &self.feature_means, &self.feature_scales);
            let dot: f64 = z.iter().zip(self.weights.iter()).map(|(a, w)| a * w).sum();
            predictions.push(self.intercept + dot);
        }
        Ok(predictions)
    }

    /// Solve (X'X + lambda I) w = X'y.
    fn solve_primal(&self, x: &[Vec<f64>], y: &[f64], p: usize) -> Result<Vec<f64>> {
        let mut gram = vec![vec![0.0; p]; p];
        for row in x {
            for i in 0..p {
                for j in i..p {
                    gram[i][j] += row[i] * row[j];
                }
            }
        }
        for i in 0..p {
            for j in 0..i {
                gram[i][j] = gram[j][i];
            }
            gram[i][i] += self.lambda;
        }

        let mut rhs = vec![0.0; p];
        for (row, &t) in x.iter().zip(y.iter()) {
            for (r, &v) in rhs.iter_mut().zip(row.iter()) {
                *r += v * t;
            }
        }

        cholesky_solve(&mut gram, &rhs)
    }

    /// Solve (XX' + lambda I) a = y, then w = X'a.
    fn solve_dual(&self, x: &[Vec<f64>], y: &[f64], n: usize, p: usize) -> Result<Vec<f64>> {
        let mut kernel = vec![vec![0.0; n]; n];
        for i in 0..n {
            for j in i..n {
                let dot: f64 = x[i].iter().zip(x[j].iter()).map(|(a, b)| a * b).sum();
                kernel[i][j] = dot;
                kernel[j][i] = dot;
            }
            kernel[i][i] += self.lambda;
        }

        let alpha = cholesky_solve(&mut kernel, y)?;

        let mut weights = vec![0.0; p];
        for (row, &a) in x.iter().zip(alpha.iter()) {
            for (w, &v) in weights.iter_mut().zip(row.iter()) {
                *w += a * v;
            }
        }
        Ok(weights)
    }
}

/// Per-column mean and scale for standardization.
///
/// Near-constant columns get scale 1.0 so they standardize to zero instead
/// of blowing up.
fn column_standardization(features: &[Vec<f64>], p: usize) -> (Vec<f64>, Vec<f64>) {
    let n = features.len() as f64;
    let mut means = vec![0.0; p];
    for row in features {
        for (m, &v) in means.iter_mut().zip(row.iter()) {
            *m += v;
        }
    }
    for m in means.iter_mut() {
        *m /= n;
    }

    let mut scales = vec![0.0; p];
    for row in features {
        for ((s, &v), &m) in scales.iter_mut().zip(row.iter()).zip(means.iter()) {
            *s += (v - m).powi(2);
        }
    }
    for s in scales.iter_mut() {
        *s = (*s / n).sqrt();
        if *s < 1e-10 {
            *s = 1.0;
        }
    }

    (means, scales)
}

fn standardize_row(row: &[f64], means: &[f64], scales: &[f64]) -> Vec<f64> {
    row.iter()
        .zip(means.iter())
        .zip(scales.iter())
        .map(|((&v, &m), &s)| (v - m) / s)
        .collect()
}

/// Solve `a * x = b` for symmetric positive definite `a` in place.
fn cholesky_solve(a: &mut [Vec<f64>], b: &[f64]) -> Result<Vec<f64>> {
    let n = b.len();

    // Factor a = L L' (lower triangle of `a` becomes L)
    for i in 0..n {
        for j in 0..=i {
            let mut sum = a[i][j];
            for k in 0..j {
                sum -= a[i][k] * a[j][k];
            }
            if i == j {
                if sum <= 0.0 || !sum.is_finite() {
                    return Err(RegressionError::NumericalError(
                        "system is not positive definite".to_string(),
                    ));
                }
                a[i][j] = sum.sqrt();
            } else {
                a[i][j] = sum / a[j][j];
            }
        }
    }

    // Forward substitution: L z = b
    let mut z = vec![0.0; n];
    for i in 0..n {
        let mut sum = b[i];
        for k in 0..i {
            sum -= a[i][k] * z[k];
        }
        z[i] = sum / a[i][i];
    }

    // Back substitution: L' x = z
    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let mut sum = z[i];
        for k in (i + 1)..n {
            sum -= a[k][i] * x[k];
        }
        x[i] = sum / a[i][i];
    }

    Ok(x)
}
