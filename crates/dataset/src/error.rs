//! Dataset error types.

use thiserror::Error;

/// Errors raised while loading or constructing datasets.
#[derive(Debug, Clone, Error)]
pub enum DatasetError {
    /// No dataset registered under the requested name.
    #[error("Unknown dataset '{0}'")]
    UnknownDataset(String),

    /// A row of the source data could not be parsed.
    #[error("Malformed data at line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    /// Series and target counts do not line up.
    #[error("Misaligned dataset: {series} series but {targets} targets")]
    Misaligned { series: usize, targets: usize },

    /// The dataset holds no examples.
    #[error("Dataset is empty")]
    Empty,
}

/// Result type for dataset operations.
pub type Result<T> = std::result::Result<T, DatasetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_dataset_display() {
        let error = DatasetError::UnknownDataset("nope".to_string());
        assert_eq!(error.to_string(), "Unknown dataset 'nope'");
    }

    #[test]
    fn test_malformed_display() {
        let error = DatasetError::Malformed {
            line: 3,
            reason: "'x' is not a number".to_string(),
        };
        assert_eq!(error.to_string(), "Malformed data at line 3: 'x' is not a number");
    }

    #[test]
    fn test_misaligned_display() {
        let error = DatasetError::Misaligned {
            series: 5,
            targets: 4,
        };
        assert_eq!(error.to_string(), "Misaligned dataset: 5 series but 4 targets");
    }

    #[test]
    fn test_empty_display() {
        assert_eq!(DatasetError::Empty.to_string(), "Dataset is empty");
    }

    #[test]
    fn test_error_implements_std_error() {
        fn assert_std_error<E: std::error::Error>() {}
        assert_std_error::<DatasetError>();
    }
}
