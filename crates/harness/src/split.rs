//! Chronological holdout split.

use dataset::Dataset;

use crate::error::HarnessError;

/// Borrowed view over a contiguous run of dataset examples.
#[derive(Debug, Clone, Copy)]
pub struct DatasetView<'a> {
    series: &'a [Vec<f64>],
    targets: &'a [f64],
}

impl<'a> DatasetView<'a> {
    /// Number of examples in the view.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Whether the view holds no examples.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// The time series, in original order.
    pub fn series(&self) -> &'a [Vec<f64>] {
        self.series
    }

    /// The targets, aligned with the series.
    pub fn targets(&self) -> &'a [f64] {
        self.targets
    }
}

/// Split a dataset into train and test partitions, preserving order.
///
/// The train partition holds the first `floor(train_fraction * N)` examples
/// and the test partition the remainder; there is no shuffling, so the same
/// inputs always produce the same partitions. A fraction that leaves one
/// side empty is allowed here — whether that is workable is the regressor's
/// call, not the split's.
pub fn holdout_split(
    dataset: &Dataset,
    train_fraction: f64,
) -> Result<(DatasetView<'_>, DatasetView<'_>), HarnessError> {
    if !train_fraction.is_finite() || train_fraction <= 0.0 || train_fraction >= 1.0 {
        return Err(HarnessError::InvalidParameter {
            name: "train_fraction".to_string(),
            reason: "must be in (0, 1)".to_string(),
        });
    }

    let n = dataset.len();
    let train_len = (train_fraction * n as f64).floor() as usize;

    let train = DatasetView {
        series: &dataset.series()[..train_len],
        targets: &dataset.targets()[..train_len],
    };
    let test = DatasetView {
        series: &dataset.series()[train_len..],
        targets: &dataset.targets()[train_len..],
    };
    Ok((train, test))
}
