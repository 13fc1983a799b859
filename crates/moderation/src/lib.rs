//! # moderation
//!
//! One-shot pull request moderation for CI: if a pull request carries the
//! spam label, post a fixed comment and close it; otherwise leave it alone.
//! Closing an already-closed pull request is a no-op at the hosting-service
//! level, so the action is idempotent in intent and defines no retries.
//!
//! Configuration is read from the process environment once per invocation
//! and passed around as an explicit [`ModerationConfig`] value.

mod action;
mod config;
mod error;
mod github;
mod model;

pub use action::{moderate, ModerationOutcome, PullRequestHost, SPAM_COMMENT, SPAM_LABEL};
pub use config::ModerationConfig;
pub use error::{ModerationError, Result};
pub use github::GitHubHost;
pub use model::{PullRequest, PullRequestState};
