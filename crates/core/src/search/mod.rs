//! Querying the external torrent index.

mod apibay;
mod types;

pub use apibay::ApibaySearcher;
pub use types::{format_size, SearchError, TorrentResult, TorrentSearcher};
