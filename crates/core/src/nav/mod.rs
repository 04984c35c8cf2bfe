//! Navigation state over the catalog tree and search results.
//!
//! Everything here is sans-IO: the cli crate renders the state and feeds
//! selections back in. Visits are written through to the activity store as
//! navigation happens; a failing store is reported and never stops the
//! operator.

mod cursor;
mod pager;
mod types;

pub use cursor::{CatalogCursor, LinkView, Selection};
pub use pager::{SearchPager, DEFAULT_PAGE_SIZE};
pub use types::NavError;
