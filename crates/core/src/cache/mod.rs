//! Single-slot snapshot cache for the fetched catalog document.
//!
//! The cache shields catalog loading from transient network failure: the
//! last successfully fetched payload is kept on disk together with its fetch
//! time, and served instead of the network while it is fresh. An expired
//! snapshot is reported as absent by [`SnapshotCache::load`] but kept on
//! disk so [`SnapshotCache::load_stale`] can still serve it when a refetch
//! fails. A file that no longer decodes is deleted and treated as a miss.

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

/// How long a snapshot counts as fresh.
pub const SNAPSHOT_TTL_SECS: i64 = 3600;

/// A stored catalog payload with its fetch time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheSnapshot {
    pub payload: Value,
    pub fetched_at: DateTime<Utc>,
}

impl CacheSnapshot {
    /// Whether the snapshot is older than the given TTL.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        Utc::now() - self.fetched_at > ttl
    }
}

/// File-backed single-slot cache. Saving overwrites the previous snapshot.
pub struct SnapshotCache {
    path: PathBuf,
    ttl: Duration,
}

impl SnapshotCache {
    pub fn new(path: PathBuf) -> Self {
        Self::with_ttl(path, Duration::seconds(SNAPSHOT_TTL_SECS))
    }

    pub fn with_ttl(path: PathBuf, ttl: Duration) -> Self {
        Self { path, ttl }
    }

    /// Persist a payload with the current timestamp, replacing any prior
    /// snapshot. Failures are reported but not surfaced; the cache is an
    /// optimization, never a required write.
    pub fn save(&self, payload: &Value) {
        let snapshot = CacheSnapshot {
            payload: payload.clone(),
            fetched_at: Utc::now(),
        };

        let bytes = match serde_json::to_vec(&snapshot) {
            Ok(b) => b,
            Err(e) => {
                warn!(error = %e, "failed to serialize catalog snapshot");
                return;
            }
        };

        if let Err(e) = fs::write(&self.path, bytes) {
            warn!(path = %self.path.display(), error = %e, "failed to write catalog snapshot");
        } else {
            debug!(path = %self.path.display(), "catalog snapshot saved");
        }
    }

    /// Return the cached payload if a snapshot exists and is still fresh.
    pub fn load(&self) -> Option<Value> {
        let snapshot = self.read_snapshot()?;
        if snapshot.is_expired(self.ttl) {
            debug!(path = %self.path.display(), "catalog snapshot expired");
            return None;
        }
        Some(snapshot.payload)
    }

    /// Return the cached payload regardless of age. Used after a failed
    /// refetch, where stale data beats no data.
    pub fn load_stale(&self) -> Option<Value> {
        self.read_snapshot().map(|s| s.payload)
    }

    /// Read and decode the snapshot file. A file that cannot be decoded is
    /// deleted so the next fetch starts from a clean slate.
    fn read_snapshot(&self) -> Option<CacheSnapshot> {
        let bytes = match fs::read(&self.path) {
            Ok(b) => b,
            Err(_) => return None,
        };

        match serde_json::from_slice(&bytes) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "corrupt catalog snapshot, removing");
                if let Err(e) = fs::remove_file(&self.path) {
                    warn!(path = %self.path.display(), error = %e, "failed to remove corrupt snapshot");
                }
                None
            }
        }
    }
}
