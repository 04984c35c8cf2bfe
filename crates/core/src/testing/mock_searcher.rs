//! Mock torrent searcher for testing.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::search::{SearchError, TorrentResult, TorrentSearcher};

/// Mock implementation of the [`TorrentSearcher`] trait.
///
/// Provides controllable behavior for testing:
/// - Return configurable results
/// - Track searched terms for assertions
/// - Fail the next search with an injected error
pub struct MockTorrentSearcher {
    results: Arc<RwLock<Vec<TorrentResult>>>,
    searches: Arc<RwLock<Vec<String>>>,
    next_error: Arc<RwLock<Option<SearchError>>>,
}

impl Default for MockTorrentSearcher {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTorrentSearcher {
    pub fn new() -> Self {
        Self {
            results: Arc::new(RwLock::new(Vec::new())),
            searches: Arc::new(RwLock::new(Vec::new())),
            next_error: Arc::new(RwLock::new(None)),
        }
    }

    /// Set the results returned by subsequent searches.
    pub async fn set_results(&self, results: Vec<TorrentResult>) {
        *self.results.write().await = results;
    }

    /// Configure the next search to fail with the given error.
    pub async fn set_next_error(&self, error: SearchError) {
        *self.next_error.write().await = Some(error);
    }

    /// Terms searched so far.
    pub async fn recorded_terms(&self) -> Vec<String> {
        self.searches.read().await.clone()
    }
}

#[async_trait]
impl TorrentSearcher for MockTorrentSearcher {
    fn name(&self) -> &str {
        "mock"
    }

    async fn search(&self, term: &str) -> Result<Vec<TorrentResult>, SearchError> {
        if let Some(err) = self.next_error.write().await.take() {
            return Err(err);
        }

        self.searches.write().await.push(term.to_string());
        Ok(self.results.read().await.clone())
    }
}
