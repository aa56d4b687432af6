//! Brevet times HTTP client.
//!
//! Issues a single GET per query with a bounded timeout. No retries,
//! no caching, no authentication.

use std::time::Duration;

use tracing::debug;

use crate::domain::TimesQuery;

use super::BrevetApi;
use super::error::ApiError;

/// Default base URL for the brevet times API.
const DEFAULT_BASE_URL: &str = "http://laptop:5000";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the brevet times client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the remote API (host + port).
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl ApiConfig {
    /// Create a new config with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// HTTP client for the brevet times API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// The base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl BrevetApi for ApiClient {
    async fn fetch_times(&self, query: &TimesQuery) -> Result<String, ApiError> {
        let url = query.url(&self.base_url);
        debug!(%url, "fetching brevet times");

        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}
