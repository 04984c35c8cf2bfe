//! Types for the torrent index client.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single result from the search index. Consumed by the scoring engine
/// and the presentation layer, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TorrentResult {
    pub name: String,
    pub size_bytes: u64,
    pub seeders: u32,
    pub leechers: u32,
    /// Hex info hash as reported by the index.
    pub info_hash: String,
    /// When the torrent was added to the index, if reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_at: Option<DateTime<Utc>>,
}

impl TorrentResult {
    /// Magnet link for this result.
    pub fn magnet_uri(&self) -> String {
        format!("magnet:?xt=urn:btih:{}", self.info_hash)
    }
}

/// Render a byte count as a short human-readable size.
pub fn format_size(size_bytes: u64) -> String {
    let mut value = size_bytes as f64;
    for unit in ["B", "KB", "MB", "GB"] {
        if value < 1024.0 {
            return format!("{:.2} {}", value, unit);
        }
        value /= 1024.0;
    }
    format!("{:.2} TB", value)
}

/// Errors from the search index.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search index connection failed: {0}")]
    ConnectionFailed(String),

    #[error("search index API error: {0}")]
    ApiError(String),

    #[error("request timeout")]
    Timeout,
}

/// Trait for torrent search backends.
#[async_trait]
pub trait TorrentSearcher: Send + Sync {
    /// Backend name for logging.
    fn name(&self) -> &str;

    /// Run a free-text search. An empty result set is a normal outcome,
    /// not an error.
    async fn search(&self, term: &str) -> Result<Vec<TorrentResult>, SearchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnet_uri() {
        let result = TorrentResult {
            name: "Some.Release".to_string(),
            size_bytes: 1024,
            seeders: 1,
            leechers: 1,
            info_hash: "abc123def456".to_string(),
            added_at: None,
        };
        assert_eq!(result.magnet_uri(), "magnet:?xt=urn:btih:abc123def456");
    }

    #[test]
    fn test_format_size_units() {
        assert_eq!(format_size(512), "512.00 B");
        assert_eq!(format_size(2048), "2.00 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.00 MB");
        assert_eq!(format_size(45_000_000_000), "41.91 GB");
        assert_eq!(format_size(3 * 1024 * 1024 * 1024 * 1024), "3.00 TB");
    }

    #[test]
    fn test_format_size_above_tb_stays_tb() {
        let two_pb = 2 * 1024u64.pow(5);
        assert_eq!(format_size(two_pb), "2048.00 TB");
    }
}
