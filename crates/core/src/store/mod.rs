//! Persistent favorites and visit history.

mod sqlite;
mod types;

pub use sqlite::SqliteActivityStore;
pub use types::{FavoriteEntry, FavoriteOutcome, RecentPath, StoreError};

/// Trait for the operator's local activity record.
///
/// Implementations must tolerate concurrent access from independent
/// short-lived sessions; no operation may hold state across calls beyond
/// the schema itself.
pub trait ActivityStore: Send + Sync {
    /// Insert a favorite unless the url is already present.
    /// A duplicate is a signal to the caller, not an error.
    fn add_favorite(
        &self,
        url: &str,
        title: &str,
        category_path: &str,
    ) -> Result<FavoriteOutcome, StoreError>;

    /// Delete a favorite. Deleting a url that is not present succeeds.
    fn remove_favorite(&self, url: &str) -> Result<(), StoreError>;

    /// All favorites, newest first.
    fn list_favorites(&self) -> Result<Vec<FavoriteEntry>, StoreError>;

    /// Append a visit for the given path.
    fn record_visit(&self, path: &str) -> Result<(), StoreError>;

    /// Visited paths grouped by path, most recently visited first.
    fn recent_paths(&self, limit: u32) -> Result<Vec<RecentPath>, StoreError>;

    /// Drop the whole visit history.
    fn clear_history(&self) -> Result<(), StoreError>;
}
