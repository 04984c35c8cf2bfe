//! Testing utilities and mock implementations.
//!
//! Mock implementations of the external collaborator traits, allowing the
//! catalog fallback ladder and the search flow to be exercised without real
//! infrastructure.

mod mock_fetcher;
mod mock_searcher;

pub use mock_fetcher::MockCatalogFetcher;
pub use mock_searcher::MockTorrentSearcher;

/// Test fixtures and helper functions.
pub mod fixtures {
    use serde_json::{json, Value};

    use crate::search::TorrentResult;

    /// A small catalog document covering every node shape.
    pub fn catalog_value() -> Value {
        json!({
            "Tools": {
                "Editors": {
                    "Helix": {"url": "https://helix.example", "descrição": "modal editor"},
                    "Zed": {"url": "https://zed.example"},
                },
                "Mirrors": [
                    "https://mirror-a.example",
                    {"url": "https://mirror-b.example", "descrição": "backup mirror"},
                ],
            },
            "Docs": "https://docs.example",
        })
    }

    /// Create a test search result with reasonable defaults.
    pub fn torrent_result(name: &str, size_bytes: u64, seeders: u32, leechers: u32) -> TorrentResult {
        TorrentResult {
            name: name.to_string(),
            size_bytes,
            seeders,
            leechers,
            info_hash: "0123456789abcdef0123456789abcdef01234567".to_string(),
            added_at: None,
        }
    }
}
