//! Mock catalog fetcher for testing.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::catalog::{CatalogFetcher, FetchError};

/// Mock implementation of the [`CatalogFetcher`] trait.
///
/// Provides controllable behavior for testing:
/// - Return a configurable payload
/// - Fail the next fetch with an injected error
/// - Count fetch attempts for assertions
pub struct MockCatalogFetcher {
    payload: Arc<RwLock<Option<Value>>>,
    next_error: Arc<RwLock<Option<FetchError>>>,
    fetch_count: Arc<RwLock<usize>>,
}

impl Default for MockCatalogFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCatalogFetcher {
    /// Create a mock with no payload configured; fetching fails with a
    /// connection error until one is set.
    pub fn new() -> Self {
        Self {
            payload: Arc::new(RwLock::new(None)),
            next_error: Arc::new(RwLock::new(None)),
            fetch_count: Arc::new(RwLock::new(0)),
        }
    }

    /// Set the payload served by subsequent fetches.
    pub async fn set_payload(&self, payload: Value) {
        *self.payload.write().await = Some(payload);
    }

    /// Configure the next fetch to fail with the given error.
    pub async fn set_next_error(&self, error: FetchError) {
        *self.next_error.write().await = Some(error);
    }

    /// How many times fetch was called.
    pub async fn fetch_count(&self) -> usize {
        *self.fetch_count.read().await
    }
}

#[async_trait]
impl CatalogFetcher for MockCatalogFetcher {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch(&self) -> Result<Value, FetchError> {
        *self.fetch_count.write().await += 1;

        if let Some(err) = self.next_error.write().await.take() {
            return Err(err);
        }

        match self.payload.read().await.clone() {
            Some(payload) => Ok(payload),
            None => Err(FetchError::ConnectionFailed(
                "no payload configured".to_string(),
            )),
        }
    }
}
