//! Dataset repository trait and the bundled benchmark repository.

use crate::error::{DatasetError, Result};
use crate::Dataset;

/// Trait for components that can serve named benchmark datasets.
pub trait DatasetRepository: Send + Sync {
    /// Repository name.
    fn name(&self) -> &str;

    /// Load the dataset registered under `name`.
    fn load(&self, name: &str) -> Result<Dataset>;
}

/// 48 synthetic three-month outbreak case-rate curves, 28 weekly
/// observations each, labeled with an end-of-window fatality rate.
const OUTBREAK_3MONTH: &str = include_str!("../data/outbreak_3month.csv");

/// Repository serving the benchmarks compiled into the binary.
#[derive(Debug, Clone, Default)]
pub struct BundledRepository;

impl BundledRepository {
    /// Create a new bundled repository.
    pub fn new() -> Self {
        Self
    }

    /// Names of the bundled datasets.
    pub fn names(&self) -> &'static [&'static str] {
        &["outbreak-3month"]
    }
}

impl DatasetRepository for BundledRepository {
    fn name(&self) -> &str {
        "bundled"
    }

    fn load(&self, name: &str) -> Result<Dataset> {
        match name {
            "outbreak-3month" => Dataset::from_csv_str(OUTBREAK_3MONTH),
            _ => Err(DatasetError::UnknownDataset(name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_bundled_benchmark() {
        let repository = BundledRepository::new();
        let dataset = repository.load("outbreak-3month").unwrap();

        assert_eq!(dataset.len(), 48);
        assert_eq!(dataset.series().len(), dataset.targets().len());
        assert!(dataset.series().iter().all(|s| s.len() == 28));
    }

    #[test]
    fn test_bundled_benchmark_is_finite() {
        let repository = BundledRepository::new();
        let dataset = repository.load("outbreak-3month").unwrap();

        assert!(dataset
            .series()
            .iter()
            .all(|s| s.iter().all(|v| v.is_finite())));
        assert!(dataset.targets().iter().all(|t| t.is_finite()));
    }

    #[test]
    fn test_unknown_name_fails() {
        let repository = BundledRepository::new();
        let result = repository.load("no-such-benchmark");
        assert!(matches!(result, Err(DatasetError::UnknownDataset(_))));
    }

    #[test]
    fn test_names_lists_bundled_datasets() {
        let repository = BundledRepository::new();
        assert!(repository.names().contains(&"outbreak-3month"));
    }
}
