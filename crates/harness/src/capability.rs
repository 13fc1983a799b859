//! Soft-dependency probe.
//!
//! Some regressor variants lean on optional dependencies. The probe answers
//! whether a dependency was compiled in, so callers can decide to skip a
//! variant before constructing it instead of relying on construction
//! failure.

/// Optional dependencies a regressor variant may require.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoftDependency {
    /// Statistical-modeling toolkit used by the hybrid interval regressor.
    StatisticalModeling,
}

impl SoftDependency {
    /// Stable name for reporting.
    pub fn as_str(&self) -> &'static str {
        match self {
            SoftDependency::StatisticalModeling => "statistical-modeling",
        }
    }
}

/// Whether the given soft dependency is available in this build.
pub fn is_available(dependency: SoftDependency) -> bool {
    match dependency {
        SoftDependency::StatisticalModeling => regressor_facade::stats_support(),
    }
}
