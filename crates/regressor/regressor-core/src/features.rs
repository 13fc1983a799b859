//! Summary-statistic features over a single series.
//!
//! All helpers are total over finite input: degenerate series (constant or
//! very short) produce 0.0 for the undefined statistics rather than NaN, so
//! downstream feature matrices stay finite.

/// Number of features produced by [`summary_features`].
pub const SUMMARY_FEATURE_COUNT: usize = 16;

/// Extract the fixed summary-statistic panel for one series.
///
/// The panel covers location and spread (mean, std, min, max, quartiles),
/// shape (skewness, kurtosis), change statistics, energy, short-lag
/// autocorrelations, trend slope, and the fraction of observations above
/// the mean.
pub fn summary_features(series: &[f64]) -> Vec<f64> {
    let n = series.len() as f64;
    let mean = mean(series);
    let std = std_dev(series, mean);

    let mut sorted = series.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let above = series.iter().filter(|&&v| v > mean).count() as f64;

    vec![
        mean,
        std,
        sorted[0],
        sorted[sorted.len() - 1],
        quantile_sorted(&sorted, 0.5),
        quantile_sorted(&sorted, 0.25),
        quantile_sorted(&sorted, 0.75),
        skewness(series, mean, std),
        kurtosis(series, mean, std),
        mean_abs_change(series),
        abs_energy(series) / n,
        autocorrelation(series, 1),
        autocorrelation(series, 2),
        autocorrelation(series, 3),
        trend_slope(series),
        above / n,
    ]
}

/// Arithmetic mean.
pub fn mean(series: &[f64]) -> f64 {
    if series.is_empty() {
        return 0.0;
    }
    series.iter().sum::<f64>() / series.len() as f64
}

/// Population standard deviation.
pub fn std_dev(series: &[f64], mean: f64) -> f64 {
    if series.is_empty() {
        return 0.0;
    }
    let variance =
        series.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / series.len() as f64;
    variance.sqrt()
}

/// Linear-interpolated quantile of an already sorted slice.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    if sorted.len() == 1 {
        return sorted[0];
    }
    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

/// Sample skewness; 0.0 for constant or too-short series.
pub fn skewness(series: &[f64], mean: f64, std: f64) -> f64 {
    if series.len() < 3 || std < 1e-10 {
        return 0.0;
    }
    let n = series.len() as f64;
    series.iter().map(|v| ((v - mean) / std).powi(3)).sum::<f64>() / n
}

/// Excess kurtosis; 0.0 for constant or too-short series.
pub fn kurtosis(series: &[f64], mean: f64, std: f64) -> f64 {
    if series.len() < 4 || std < 1e-10 {
        return 0.0;
    }
    let n = series.len() as f64;
    series.iter().map(|v| ((v - mean) / std).powi(4)).sum::<f64>() / n - 3.0
}

/// Mean absolute first difference.
pub fn mean_abs_change(series: &[f64]) -> f64 {
    if series.len() < 2 {
        return 0.0;
    }
    series
        .windows(2)
        .map(|w| (w[1] - w[0]).abs())
        .sum::<f64>()
        / (series.len() - 1) as f64
}

/// Sum of squared observations.
pub fn abs_energy(series: &[f64]) -> f64 {
    series.iter().map(|v| v * v).sum()
}

/// Autocorrelation at the given lag; 0.0 when undefined.
pub fn autocorrelation(series: &[f64], lag: usize) -> f64 {
    if series.len() <= lag || lag == 0 {
        return 0.0;
    }
    let mean = mean(series);
    let denom: f64 = series.iter().map(|v| (v - mean).powi(2)).sum();
    if denom < 1e-10 {
        return 0.0;
    }
    let num: f64 = series
        .windows(lag + 1)
        .map(|w| (w[0] - mean) * (w[lag] - mean))
        .sum();
    num / denom
}

/// OLS slope of the series against its time index.
pub fn trend_slope(series: &[f64]) -> f64 {
    if series.len() < 2 {
        return 0.0;
    }
    let n = series.len() as f64;
    let sum_t: f64 = (0..series.len()).map(|i| i as f64).sum();
    let sum_y: f64 = series.iter().sum();
    let sum_t2: f64 = (0..series.len()).map(|i| (i * i) as f64).sum();
    let sum_ty: f64 = series.iter().enumerate().map(|(i, &y)| i as f64 * y).sum();

    let denominator = n * sum_t2 - sum_t * sum_t;
    if denominator.abs() < 1e-10 {
        return 0.0;
    }
    (n * sum_ty - sum_t * sum_y) / denominator
}
