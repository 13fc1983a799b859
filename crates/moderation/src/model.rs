//! Pull request models.

use serde::{Deserialize, Serialize};

/// Lifecycle state of a pull request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PullRequestState {
    Open,
    Closed,
}

/// A pull request with the fields the moderation action needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequest {
    /// Pull request number.
    pub number: u64,
    /// Title, for logging.
    pub title: String,
    /// Current label names.
    pub labels: Vec<String>,
    /// Current state.
    pub state: PullRequestState,
}
