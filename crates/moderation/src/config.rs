//! Moderation configuration.

use std::env;

use crate::error::{ModerationError, Result};

/// Explicit configuration for one moderation invocation.
#[derive(Debug, Clone)]
pub struct ModerationConfig {
    /// Base URL of the hosting-service API.
    pub api_base: String,
    /// Repository in `owner/name` form.
    pub repository: String,
    /// API token used for authentication.
    pub token: String,
}

impl ModerationConfig {
    /// Create a configuration from explicit values.
    pub fn new(api_base: &str, repository: &str, token: &str) -> Self {
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            repository: repository.to_string(),
            token: token.to_string(),
        }
    }

    /// Read the configuration from the process environment.
    ///
    /// `GITHUB_API_URL` is optional and defaults to the public API;
    /// `GITHUB_REPOSITORY` and `GITHUB_TOKEN` are required.
    pub fn from_env() -> Result<Self> {
        let api_base =
            env::var("GITHUB_API_URL").unwrap_or_else(|_| "https://api.github.com".to_string());
        let repository = env::var("GITHUB_REPOSITORY")
            .map_err(|_| ModerationError::MissingEnv("GITHUB_REPOSITORY".to_string()))?;
        let token = env::var("GITHUB_TOKEN")
            .map_err(|_| ModerationError::MissingEnv("GITHUB_TOKEN".to_string()))?;

        Ok(Self::new(&api_base, &repository, &token))
    }
}
