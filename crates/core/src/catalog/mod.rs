//! The remotely-published link catalog: data model, fetching, and the
//! cache-with-fallback repository.

mod fetch;
mod repository;
mod tree;

pub use fetch::{CatalogFetcher, FetchError, HttpCatalogFetcher};
pub use repository::CatalogRepository;
pub use tree::{CatalogNode, CatalogTree, LinkEntry, NodeKind};

use thiserror::Error;

/// Errors from catalog loading and traversal.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The fetch failed and no cached snapshot exists.
    #[error("catalog unavailable: fetch failed and no cached copy exists")]
    Unavailable,

    /// The document does not match the catalog grammar.
    #[error("malformed catalog payload: {0}")]
    MalformedPayload(String),

    /// A label was not present in the current folder.
    #[error("no catalog entry named {0:?}")]
    NotFound(String),
}
