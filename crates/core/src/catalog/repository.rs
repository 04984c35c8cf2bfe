//! Catalog loading with cache fallback.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::cache::SnapshotCache;

use super::{CatalogError, CatalogFetcher, CatalogTree};

/// Loads the catalog tree, shielding callers from transient network
/// failure.
///
/// Load order: fresh cached snapshot, then the network (persisting the
/// result), then the cached snapshot regardless of age. Only when every
/// tier comes up empty does the caller see [`CatalogError::Unavailable`].
pub struct CatalogRepository {
    fetcher: Arc<dyn CatalogFetcher>,
    cache: SnapshotCache,
}

impl CatalogRepository {
    pub fn new(fetcher: Arc<dyn CatalogFetcher>, cache: SnapshotCache) -> Self {
        Self { fetcher, cache }
    }

    /// Load the catalog tree.
    ///
    /// A cached or fetched document that does not match the catalog grammar
    /// is treated as a cache miss or fetch failure respectively; it never
    /// aborts the fallback ladder.
    pub async fn get_catalog(&self) -> Result<CatalogTree, CatalogError> {
        if let Some(payload) = self.cache.load() {
            match CatalogTree::from_value(&payload) {
                Ok(tree) => {
                    debug!("catalog served from fresh snapshot");
                    return Ok(tree);
                }
                Err(e) => {
                    warn!(error = %e, "fresh snapshot does not match the catalog grammar, refetching");
                }
            }
        }

        match self.fetcher.fetch().await {
            Ok(payload) => match CatalogTree::from_value(&payload) {
                Ok(tree) => {
                    self.cache.save(&payload);
                    info!(source = self.fetcher.name(), "catalog fetched");
                    Ok(tree)
                }
                Err(e) => {
                    warn!(error = %e, "fetched catalog is malformed, trying cached copy");
                    self.stale_fallback()
                }
            },
            Err(e) => {
                warn!(error = %e, "catalog fetch failed, trying cached copy");
                self.stale_fallback()
            }
        }
    }

    /// Serve the snapshot regardless of its age. Stale data beats no data.
    fn stale_fallback(&self) -> Result<CatalogTree, CatalogError> {
        match self.cache.load_stale() {
            Some(payload) => match CatalogTree::from_value(&payload) {
                Ok(tree) => {
                    info!("catalog served from stale snapshot");
                    Ok(tree)
                }
                Err(e) => {
                    warn!(error = %e, "stale snapshot does not match the catalog grammar");
                    Err(CatalogError::Unavailable)
                }
            },
            None => Err(CatalogError::Unavailable),
        }
    }
}
