//! Apibay-style search index client.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::config::SearchConfig;

use super::{SearchError, TorrentResult, TorrentSearcher};

/// The index answers an empty query result with a single placeholder row
/// carrying this name.
const NO_RESULTS_SENTINEL: &str = "No results returned";

/// Client for an apibay-compatible `q.php` search endpoint.
pub struct ApibaySearcher {
    client: Client,
    base_url: String,
    user_agent: String,
}

impl ApibaySearcher {
    pub fn new(config: &SearchConfig) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs as u64))
            .build()
            .map_err(|e| SearchError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            user_agent: config.user_agent.clone(),
        })
    }

    fn build_query_url(&self, term: &str) -> String {
        format!("{}/q.php?q={}", self.base_url, urlencoding::encode(term))
    }
}

#[async_trait]
impl TorrentSearcher for ApibaySearcher {
    fn name(&self) -> &str {
        "apibay"
    }

    async fn search(&self, term: &str) -> Result<Vec<TorrentResult>, SearchError> {
        let url = self.build_query_url(term);
        debug!(term = %term, "searching torrent index");

        let response = self
            .client
            .get(&url)
            .header("User-Agent", &self.user_agent)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SearchError::Timeout
                } else if e.is_connect() {
                    SearchError::ConnectionFailed(e.to_string())
                } else {
                    SearchError::ApiError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::ApiError(format!("HTTP {}", status)));
        }

        let items: Vec<ApibayItem> = response
            .json()
            .await
            .map_err(|e| SearchError::ApiError(format!("Failed to parse response: {}", e)))?;

        let results = parse_results(items);
        debug!(results = results.len(), "torrent index search complete");
        Ok(results)
    }
}

/// Map raw index rows into results, dropping the no-results sentinel.
///
/// The index reports every numeric field as a string; anything that does
/// not parse is treated as zero rather than failing the whole search.
fn parse_results(items: Vec<ApibayItem>) -> Vec<TorrentResult> {
    items
        .into_iter()
        .filter(|item| item.name != NO_RESULTS_SENTINEL)
        .map(|item| TorrentResult {
            name: item.name,
            size_bytes: item.size.parse().unwrap_or(0),
            seeders: item.seeders.parse().unwrap_or(0),
            leechers: item.leechers.parse().unwrap_or(0),
            info_hash: item.info_hash.to_lowercase(),
            added_at: item
                .added
                .and_then(|raw| raw.parse::<i64>().ok())
                .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0)),
        })
        .collect()
}

// Raw index response row.
#[derive(Debug, Deserialize)]
struct ApibayItem {
    name: String,
    info_hash: String,
    #[serde(default)]
    size: String,
    #[serde(default)]
    seeders: String,
    #[serde(default)]
    leechers: String,
    #[serde(default)]
    added: Option<String>,
}
