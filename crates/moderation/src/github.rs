//! GitHub REST implementation of the pull request host.

use async_trait::async_trait;
use serde::Deserialize;

use crate::action::PullRequestHost;
use crate::config::ModerationConfig;
use crate::error::{ModerationError, Result};
use crate::model::{PullRequest, PullRequestState};

/// GitHub API response structures
#[derive(Debug, Deserialize)]
struct PullResponse {
    number: u64,
    title: String,
    state: PullRequestState,
    labels: Vec<LabelResponse>,
}

#[derive(Debug, Deserialize)]
struct LabelResponse {
    name: String,
}

/// Pull request host backed by the GitHub REST API.
#[derive(Debug, Clone)]
pub struct GitHubHost {
    http: reqwest::Client,
    config: ModerationConfig,
}

impl GitHubHost {
    /// Create a new host from a configuration.
    pub fn new(config: ModerationConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent("moderate-prs")
            .build()
            .map_err(|e| ModerationError::RequestFailed(e.to_string()))?;
        Ok(Self { http, config })
    }

    fn pulls_url(&self, number: u64) -> String {
        format!(
            "{}/repos/{}/pulls/{}",
            self.config.api_base, self.config.repository, number
        )
    }

    fn comments_url(&self, number: u64) -> String {
        format!(
            "{}/repos/{}/issues/{}/comments",
            self.config.api_base, self.config.repository, number
        )
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ModerationError::ApiError {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl PullRequestHost for GitHubHost {
    async fn fetch(&self, number: u64) -> Result<PullRequest> {
        let response = self
            .http
            .get(self.pulls_url(number))
            .bearer_auth(&self.config.token)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .send()
            .await
            .map_err(|e| ModerationError::RequestFailed(e.to_string()))?;

        let body: PullResponse = Self::check_status(response)
            .await?
            .json()
            .await
            .map_err(|e| ModerationError::ParseError(e.to_string()))?;

        Ok(PullRequest {
            number: body.number,
            title: body.title,
            labels: body.labels.into_iter().map(|label| label.name).collect(),
            state: body.state,
        })
    }

    async fn comment(&self, number: u64, body: &str) -> Result<()> {
        let response = self
            .http
            .post(self.comments_url(number))
            .bearer_auth(&self.config.token)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .json(&serde_json::json!({ "body": body }))
            .send()
            .await
            .map_err(|e| ModerationError::RequestFailed(e.to_string()))?;

        Self::check_status(response).await?;
        Ok(())
    }

    async fn close(&self, number: u64) -> Result<()> {
        let response = self
            .http
            .patch(self.pulls_url(number))
            .bearer_auth(&self.config.token)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .json(&serde_json::json!({ "state": "closed" }))
            .send()
            .await
            .map_err(|e| ModerationError::RequestFailed(e.to_string()))?;

        Self::check_status(response).await?;
        Ok(())
    }
}
