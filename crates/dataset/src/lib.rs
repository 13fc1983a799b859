//! Labeled time series datasets
//!
//! A [`Dataset`] pairs an ordered collection of univariate series with one
//! scalar target per series. The counts are checked at construction and
//! preserved by every operation, so downstream consumers can rely on the
//! alignment invariant.
//!
//! Benchmarks ship through a [`DatasetRepository`]; the bundled repository
//! serves datasets compiled into the binary.

mod error;
mod repository;

pub use error::{DatasetError, Result};
pub use repository::{BundledRepository, DatasetRepository};

use serde::{Deserialize, Serialize};

/// An ordered collection of labeled time series examples.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    series: Vec<Vec<f64>>,
    targets: Vec<f64>,
}

impl Dataset {
    /// Create a dataset from aligned series and targets.
    pub fn new(series: Vec<Vec<f64>>, targets: Vec<f64>) -> Result<Self> {
        if series.len() != targets.len() {
            return Err(DatasetError::Misaligned {
                series: series.len(),
                targets: targets.len(),
            });
        }
        if series.is_empty() {
            return Err(DatasetError::Empty);
        }
        Ok(Self { series, targets })
    }

    /// Parse a dataset from CSV text, one example per line:
    /// `target,v0,v1,...`.
    pub fn from_csv_str(text: &str) -> Result<Self> {
        let mut series = Vec::new();
        let mut targets = Vec::new();

        for (idx, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let mut values = line.split(',').map(|field| {
                field.trim().parse::<f64>().map_err(|_| DatasetError::Malformed {
                    line: idx + 1,
                    reason: format!("'{}' is not a number", field.trim()),
                })
            });

            let target = values.next().ok_or(DatasetError::Malformed {
                line: idx + 1,
                reason: "empty line".to_string(),
            })??;
            let observations = values.collect::<Result<Vec<f64>>>()?;
            if observations.is_empty() {
                return Err(DatasetError::Malformed {
                    line: idx + 1,
                    reason: "expected at least one observation after the target".to_string(),
                });
            }

            targets.push(target);
            series.push(observations);
        }

        Self::new(series, targets)
    }

    /// Number of examples.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Whether the dataset holds no examples.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// The time series, in original order.
    pub fn series(&self) -> &[Vec<f64>] {
        &self.series
    }

    /// The targets, aligned with [`Dataset::series`].
    pub fn targets(&self) -> &[f64] {
        &self.targets
    }

    /// Keep only the first `n` examples, preserving order.
    pub fn truncate(&mut self, n: usize) {
        self.series.truncate(n);
        self.targets.truncate(n);
    }
}
