use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub access: AccessConfig,
}

/// Remote catalog source configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// URL of the published catalog JSON document
    #[serde(default = "default_catalog_url")]
    pub url: String,
    /// Fetch timeout in seconds (default: 10)
    #[serde(default = "default_fetch_timeout")]
    pub timeout_secs: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            url: default_catalog_url(),
            timeout_secs: default_fetch_timeout(),
        }
    }
}

fn default_catalog_url() -> String {
    "https://raw.githubusercontent.com/linkvault/catalog/refs/heads/main/catalog.json".to_string()
}

fn default_fetch_timeout() -> u32 {
    10
}

/// Catalog snapshot cache configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    #[serde(default = "default_cache_path")]
    pub path: PathBuf,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            path: default_cache_path(),
        }
    }
}

fn default_cache_path() -> PathBuf {
    PathBuf::from("linkvault_cache.json")
}

/// Database configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_path")]
    pub path: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

fn default_db_path() -> PathBuf {
    PathBuf::from("linkvault.db")
}

/// Torrent search index configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Base URL of the search index (e.g., "https://apibay.org")
    #[serde(default = "default_search_url")]
    pub base_url: String,
    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_fetch_timeout")]
    pub timeout_secs: u32,
    /// User-Agent header sent with search requests
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: default_search_url(),
            timeout_secs: default_fetch_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_search_url() -> String {
    "https://apibay.org".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36".to_string()
}

/// Operator access gate configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AccessConfig {
    /// Passphrase required at startup. When unset, the gate is open.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passphrase: Option<String>,
}
