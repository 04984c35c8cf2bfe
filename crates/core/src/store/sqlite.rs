//! SQLite-backed activity store.
//!
//! Every operation opens a connection scoped to that call, so a second
//! process journaling visits never contends with a held handle here. WAL
//! journaling allows those concurrent readers alongside a single writer.

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};

use super::{ActivityStore, FavoriteEntry, FavoriteOutcome, RecentPath, StoreError};

const BUSY_TIMEOUT: Duration = Duration::from_secs(30);

/// SQLite-backed favorites and history store.
///
/// Holds only the database path; connections are per-call.
pub struct SqliteActivityStore {
    path: PathBuf,
}

impl SqliteActivityStore {
    /// Create the store, initializing the schema if needed.
    pub fn new(path: &Path) -> Result<Self, StoreError> {
        let store = Self {
            path: path.to_path_buf(),
        };
        let conn = store.connect()?;
        Self::initialize_schema(&conn)?;
        Ok(store)
    }

    fn connect(&self) -> Result<Connection, StoreError> {
        let conn =
            Connection::open(&self.path).map_err(|e| StoreError::Database(e.to_string()))?;
        conn.busy_timeout(BUSY_TIMEOUT)
            .map_err(|e| StoreError::Database(e.to_string()))?;
        // journal_mode returns the resulting mode as a row, so it cannot go
        // through execute().
        let _: String = conn
            .query_row("PRAGMA journal_mode=WAL", [], |row| row.get(0))
            .map_err(|e| StoreError::Database(e.to_string()))?;
        Ok(conn)
    }

    fn initialize_schema(conn: &Connection) -> Result<(), StoreError> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS favorites (
                url TEXT PRIMARY KEY,
                title TEXT NOT NULL,
                category_path TEXT NOT NULL,
                added_at TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS history (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                path TEXT NOT NULL,
                visited_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_history_path ON history(path);
            CREATE INDEX IF NOT EXISTS idx_history_visited_at ON history(visited_at);
            "#,
        )
        .map_err(|e| StoreError::Database(e.to_string()))
    }

    fn insert_favorite(
        &self,
        url: &str,
        title: &str,
        category_path: &str,
        added_at: DateTime<Utc>,
    ) -> Result<FavoriteOutcome, StoreError> {
        let conn = self.connect()?;
        let inserted = conn
            .execute(
                "INSERT OR IGNORE INTO favorites (url, title, category_path, added_at) VALUES (?, ?, ?, ?)",
                params![url, title, category_path, added_at.to_rfc3339()],
            )
            .map_err(|e| StoreError::Database(e.to_string()))?;

        if inserted == 0 {
            Ok(FavoriteOutcome::Duplicate)
        } else {
            Ok(FavoriteOutcome::Added)
        }
    }

    fn insert_visit(&self, path: &str, visited_at: DateTime<Utc>) -> Result<(), StoreError> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO history (path, visited_at) VALUES (?, ?)",
            params![path, visited_at.to_rfc3339()],
        )
        .map_err(|e| StoreError::Database(e.to_string()))?;
        Ok(())
    }

    fn parse_timestamp(raw: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now())
    }
}

impl ActivityStore for SqliteActivityStore {
    fn add_favorite(
        &self,
        url: &str,
        title: &str,
        category_path: &str,
    ) -> Result<FavoriteOutcome, StoreError> {
        self.insert_favorite(url, title, category_path, Utc::now())
    }

    fn remove_favorite(&self, url: &str) -> Result<(), StoreError> {
        let conn = self.connect()?;
        conn.execute("DELETE FROM favorites WHERE url = ?", params![url])
            .map_err(|e| StoreError::Database(e.to_string()))?;
        Ok(())
    }

    fn list_favorites(&self) -> Result<Vec<FavoriteEntry>, StoreError> {
        let conn = self.connect()?;
        let mut stmt = conn
            .prepare(
                "SELECT url, title, category_path, added_at FROM favorites
                 ORDER BY added_at DESC, rowid DESC",
            )
            .map_err(|e| StoreError::Database(e.to_string()))?;

        let rows = stmt
            .query_map([], |row| {
                let added_at_str: String = row.get(3)?;
                Ok(FavoriteEntry {
                    url: row.get(0)?,
                    title: row.get(1)?,
                    category_path: row.get(2)?,
                    added_at: Self::parse_timestamp(&added_at_str),
                })
            })
            .map_err(|e| StoreError::Database(e.to_string()))?;

        let mut favorites = Vec::new();
        for row in rows {
            favorites.push(row.map_err(|e| StoreError::Database(e.to_string()))?);
        }
        Ok(favorites)
    }

    fn record_visit(&self, path: &str) -> Result<(), StoreError> {
        self.insert_visit(path, Utc::now())
    }

    fn recent_paths(&self, limit: u32) -> Result<Vec<RecentPath>, StoreError> {
        let conn = self.connect()?;
        let mut stmt = conn
            .prepare(
                "SELECT path, MAX(visited_at) AS last_visit, COUNT(*) FROM history
                 GROUP BY path
                 ORDER BY last_visit DESC
                 LIMIT ?",
            )
            .map_err(|e| StoreError::Database(e.to_string()))?;

        let rows = stmt
            .query_map(params![limit], |row| {
                let last_visit_str: String = row.get(1)?;
                Ok(RecentPath {
                    path: row.get(0)?,
                    last_visit: Self::parse_timestamp(&last_visit_str),
                    visit_count: row.get(2)?,
                })
            })
            .map_err(|e| StoreError::Database(e.to_string()))?;

        let mut paths = Vec::new();
        for row in rows {
            paths.push(row.map_err(|e| StoreError::Database(e.to_string()))?);
        }
        Ok(paths)
    }

    fn clear_history(&self) -> Result<(), StoreError> {
        let conn = self.connect()?;
        conn.execute("DELETE FROM history", [])
            .map_err(|e| StoreError::Database(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration as ChronoDuration;

    fn create_test_store() -> (tempfile::TempDir, SqliteActivityStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = SqliteActivityStore::new(&dir.path().join("test.db")).unwrap();
        (dir, store)
    }

    #[test]
    fn test_add_and_list_favorites() {
        let (_dir, store) = create_test_store();

        let outcome = store
            .add_favorite("https://a.example", "Site A", "Tools > Editors")
            .unwrap();
        assert_eq!(outcome, FavoriteOutcome::Added);

        let favorites = store.list_favorites().unwrap();
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].url, "https://a.example");
        assert_eq!(favorites[0].title, "Site A");
        assert_eq!(favorites[0].category_path, "Tools > Editors");
    }

    #[test]
    fn test_duplicate_favorite_is_a_signal_not_an_error() {
        let (_dir, store) = create_test_store();

        store.add_favorite("https://a.example", "A", "X").unwrap();
        let outcome = store.add_favorite("https://a.example", "A again", "Y").unwrap();
        assert_eq!(outcome, FavoriteOutcome::Duplicate);

        // Exactly one row, with the original title.
        let favorites = store.list_favorites().unwrap();
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].title, "A");
    }

    #[test]
    fn test_favorites_newest_first() {
        let (_dir, store) = create_test_store();
        let now = Utc::now();

        store
            .insert_favorite("https://old.example", "Old", "X", now - ChronoDuration::hours(2))
            .unwrap();
        store
            .insert_favorite("https://new.example", "New", "X", now)
            .unwrap();
        store
            .insert_favorite("https://mid.example", "Mid", "X", now - ChronoDuration::hours(1))
            .unwrap();

        let urls: Vec<String> = store
            .list_favorites()
            .unwrap()
            .into_iter()
            .map(|f| f.url)
            .collect();
        assert_eq!(
            urls,
            vec!["https://new.example", "https://mid.example", "https://old.example"]
        );
    }

    #[test]
    fn test_remove_favorite_is_idempotent() {
        let (_dir, store) = create_test_store();

        store.add_favorite("https://a.example", "A", "X").unwrap();
        store.remove_favorite("https://a.example").unwrap();
        assert!(store.list_favorites().unwrap().is_empty());

        // Removing again succeeds.
        store.remove_favorite("https://a.example").unwrap();
    }

    #[test]
    fn test_visits_collapse_per_path() {
        let (_dir, store) = create_test_store();
        let now = Utc::now();

        for i in 0..5 {
            store
                .insert_visit("Tools > Editors", now - ChronoDuration::minutes(i))
                .unwrap();
        }

        let recent = store.recent_paths(10).unwrap();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].path, "Tools > Editors");
        assert_eq!(recent[0].visit_count, 5);
        // The grouped view reports the most recent visit.
        assert_eq!(recent[0].last_visit, now);
    }

    #[test]
    fn test_recent_paths_ordered_and_limited() {
        let (_dir, store) = create_test_store();
        let now = Utc::now();

        for i in 0..12 {
            store
                .insert_visit(&format!("Path {}", i), now - ChronoDuration::minutes(i))
                .unwrap();
        }

        let recent = store.recent_paths(10).unwrap();
        assert_eq!(recent.len(), 10);
        assert_eq!(recent[0].path, "Path 0");
        assert_eq!(recent[9].path, "Path 9");
        for pair in recent.windows(2) {
            assert!(pair[0].last_visit >= pair[1].last_visit);
        }
    }

    #[test]
    fn test_clear_history() {
        let (_dir, store) = create_test_store();

        store.record_visit("Somewhere").unwrap();
        store.record_visit("Elsewhere").unwrap();
        assert!(!store.recent_paths(10).unwrap().is_empty());

        store.clear_history().unwrap();
        assert!(store.recent_paths(10).unwrap().is_empty());
    }

    #[test]
    fn test_history_does_not_touch_favorites() {
        let (_dir, store) = create_test_store();

        store.add_favorite("https://a.example", "A", "X").unwrap();
        store.record_visit("X").unwrap();
        store.clear_history().unwrap();

        assert_eq!(store.list_favorites().unwrap().len(), 1);
    }

    #[test]
    fn test_two_store_handles_same_file() {
        // A second short-lived session against the same database must see
        // and extend the same data.
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("shared.db");

        let first = SqliteActivityStore::new(&db_path).unwrap();
        let second = SqliteActivityStore::new(&db_path).unwrap();

        first.record_visit("From first").unwrap();
        second.record_visit("From second").unwrap();

        let recent = first.recent_paths(10).unwrap();
        assert_eq!(recent.len(), 2);
    }
}
