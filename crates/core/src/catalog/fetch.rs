//! Fetching the raw catalog document.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::config::CatalogConfig;

/// Errors from a catalog fetch attempt. All of them are recoverable at the
/// repository level, which falls back to the cached snapshot.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request timeout")]
    Timeout,

    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("response is not valid JSON: {0}")]
    MalformedBody(String),
}

/// Trait for catalog document sources.
#[async_trait]
pub trait CatalogFetcher: Send + Sync {
    /// Source name for logging.
    fn name(&self) -> &str;

    /// Fetch the current catalog document.
    async fn fetch(&self) -> Result<Value, FetchError>;
}

/// HTTP implementation fetching the published JSON document.
pub struct HttpCatalogFetcher {
    client: Client,
    url: String,
}

impl HttpCatalogFetcher {
    /// Create a fetcher for the configured catalog URL. The configured
    /// timeout is applied to the whole request.
    pub fn new(config: &CatalogConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs as u64))
            .build()
            .map_err(|e| FetchError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }
}

#[async_trait]
impl CatalogFetcher for HttpCatalogFetcher {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch(&self) -> Result<Value, FetchError> {
        debug!(url = %self.url, "fetching catalog");

        // Cache-busting headers so intermediaries hand us the current
        // document rather than a stale edge copy.
        let response = self
            .client
            .get(&self.url)
            .header("Cache-Control", "no-cache")
            .header("Pragma", "no-cache")
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    FetchError::Timeout
                } else {
                    FetchError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| FetchError::MalformedBody(e.to_string()))
    }
}
