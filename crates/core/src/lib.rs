pub mod auth;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod nav;
pub mod scoring;
pub mod search;
pub mod store;
pub mod testing;

pub use auth::AccessGate;
pub use cache::{CacheSnapshot, SnapshotCache};
pub use catalog::{
    CatalogError, CatalogFetcher, CatalogNode, CatalogRepository, CatalogTree, FetchError,
    HttpCatalogFetcher, LinkEntry, NodeKind,
};
pub use config::{load_config, load_config_from_str, validate_config, Config, ConfigError};
pub use nav::{CatalogCursor, LinkView, NavError, SearchPager, Selection};
pub use scoring::{RiskTier, ScoreChecks, TrustScoringEngine, TrustVerdict};
pub use search::{format_size, ApibaySearcher, SearchError, TorrentResult, TorrentSearcher};
pub use store::{
    ActivityStore, FavoriteEntry, FavoriteOutcome, RecentPath, SqliteActivityStore, StoreError,
};
