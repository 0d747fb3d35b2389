//! Reqwest-backed key source for GitHub's `{user}.keys` endpoints.

use crate::core::fetcher::{classify_response, KeySource};
use crate::domain::config::FetchConfig;
use crate::domain::error::GhKeysResult;
use crate::domain::result::{FetchError, FetchOutcome, FetchResult};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Fetches keys over one shared HTTP client
pub struct GitHubKeySource {
    client: Client,
    base_url: String,
}

impl GitHubKeySource {
    /// Build a source with an explicit per-request timeout and user agent.
    pub fn new(base_url: &str, timeout: Duration, user_agent: &str) -> GhKeysResult<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &FetchConfig) -> GhKeysResult<Self> {
        Self::new(
            &config.base_url,
            Duration::from_secs(config.timeout_secs),
            &config.user_agent,
        )
    }

    pub fn keys_url(&self, user: &str) -> String {
        format!("{}/{}.keys", self.base_url, user)
    }

    async fn request(&self, user: &str) -> Result<(u16, String), FetchError> {
        let url = self.keys_url(user);
        debug!(%url, "requesting keys");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(map_transport_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(map_transport_error)?;

        debug!(user, status, bytes = body.len(), "response received");
        Ok((status, body))
    }
}

#[async_trait]
impl KeySource for GitHubKeySource {
    async fn fetch(&self, user: &str) -> FetchResult {
        let outcome = match self.request(user).await {
            Ok((status, body)) => classify_response(status, &body),
            Err(error) => FetchOutcome::Failed(error),
        };

        let result = FetchResult {
            user: user.to_string(),
            outcome,
        };
        if let Some(error) = result.error() {
            debug!(user, %error, "fetch failed");
        }
        result
    }
}

fn map_transport_error(error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Transport(error.to_string())
    }
}
