//! Integration tests for the dataset crate.

use dataset::{BundledRepository, Dataset, DatasetError, DatasetRepository};

#[test]
fn test_repository_through_trait_object() {
    let repository: Box<dyn DatasetRepository> = Box::new(BundledRepository::new());
    let dataset = repository.load("outbreak-3month").unwrap();
    assert!(!dataset.is_empty());
}

#[test]
fn test_loading_twice_yields_identical_data() {
    let repository = BundledRepository::new();
    let first = repository.load("outbreak-3month").unwrap();
    let second = repository.load("outbreak-3month").unwrap();

    assert_eq!(first.targets(), second.targets());
    assert_eq!(first.series(), second.series());
}

#[test]
fn test_truncated_view_matches_prefix() {
    let repository = BundledRepository::new();
    let full = repository.load("outbreak-3month").unwrap();
    let mut truncated = repository.load("outbreak-3month").unwrap();
    truncated.truncate(10);

    assert_eq!(truncated.len(), 10);
    assert_eq!(truncated.targets(), &full.targets()[..10]);
    assert_eq!(truncated.series(), &full.series()[..10]);
}

#[test]
fn test_error_propagates_for_unknown_dataset() {
    fn load_or_bubble(name: &str) -> Result<Dataset, DatasetError> {
        let repository = BundledRepository::new();
        let dataset = repository.load(name)?;
        Ok(dataset)
    }

    assert!(load_or_bubble("outbreak-3month").is_ok());
    assert!(load_or_bubble("missing").is_err());
}
