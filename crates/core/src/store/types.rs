use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A favorited link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    /// The link itself; unique across the table.
    pub url: String,
    /// Label the link carried when it was favorited.
    pub title: String,
    /// Catalog path the link was reached through.
    pub category_path: String,
    pub added_at: DateTime<Utc>,
}

/// Result of an [`crate::store::ActivityStore::add_favorite`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteOutcome {
    Added,
    /// The url was already favorited; nothing was written.
    Duplicate,
}

/// A grouped view over the visit history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentPath {
    pub path: String,
    pub last_visit: DateTime<Utc>,
    pub visit_count: u32,
}

/// Errors from the persistence layer. Callers report these and keep going;
/// a failing store must never crash navigation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store database error: {0}")]
    Database(String),
}
