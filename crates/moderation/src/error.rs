//! Moderation error types.

use thiserror::Error;

/// Errors raised by the moderation action.
#[derive(Debug, Error)]
pub enum ModerationError {
    /// A required environment variable is not set.
    #[error("Missing environment variable: {0}")]
    MissingEnv(String),

    /// HTTP request failed before a response arrived.
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The hosting service answered with an error status.
    #[error("API error [{status}]: {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse a response body.
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Result type for moderation operations.
pub type Result<T> = std::result::Result<T, ModerationError>;
