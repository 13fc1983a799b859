//! The moderation action.

use async_trait::async_trait;

use crate::error::Result;
use crate::model::PullRequest;

/// Label that marks a pull request as spam.
pub const SPAM_LABEL: &str = "AI Spam";

/// Comment posted when closing a spam pull request.
pub const SPAM_COMMENT: &str = "This pull request has been flagged as AI-generated spam and \
has been closed. If you believe this is a mistake, please open an issue describing the \
intent of the change.";

/// Trait for hosting services that can fetch and moderate pull requests.
#[async_trait]
pub trait PullRequestHost: Send + Sync {
    /// Fetch a pull request with its current label set.
    async fn fetch(&self, number: u64) -> Result<PullRequest>;

    /// Post a comment on a pull request.
    async fn comment(&self, number: u64, body: &str) -> Result<()>;

    /// Transition a pull request to the closed state.
    async fn close(&self, number: u64) -> Result<()>;
}

/// What the moderation action did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModerationOutcome {
    /// The spam label was present: one comment posted, pull request closed.
    Closed,
    /// No spam label: nothing was changed.
    Ignored,
}

impl std::fmt::Display for ModerationOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModerationOutcome::Closed => write!(f, "closed"),
            ModerationOutcome::Ignored => write!(f, "ignored"),
        }
    }
}

/// Check one pull request and close it if it carries the spam label.
pub async fn moderate(host: &dyn PullRequestHost, number: u64) -> Result<ModerationOutcome> {
    let pull_request = host.fetch(number).await?;

    if !pull_request.labels.iter().any(|label| label == SPAM_LABEL) {
        tracing::debug!(number, "no spam label, leaving pull request alone");
        return Ok(ModerationOutcome::Ignored);
    }

    host.comment(number, SPAM_COMMENT).await?;
    host.close(number).await?;
    tracing::info!(number, title = %pull_request.title, "closed spam pull request");

    Ok(ModerationOutcome::Closed)
}
