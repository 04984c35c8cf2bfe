//! Pagination over search results.

use crate::search::TorrentResult;

use super::NavError;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Pages through a full result set.
///
/// Result numbering is continuous across pages, and selection is by that
/// absolute number: picking item 15 works from any page, picking past the
/// end does not work from any page.
pub struct SearchPager {
    results: Vec<TorrentResult>,
    page: usize,
    page_size: usize,
}

impl SearchPager {
    pub fn new(results: Vec<TorrentResult>) -> Self {
        Self::with_page_size(results, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(results: Vec<TorrentResult>, page_size: usize) -> Self {
        Self {
            results,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_count(&self) -> usize {
        self.results.len().div_ceil(self.page_size).max(1)
    }

    /// Absolute bounds of the current page: `start` is a zero-based offset,
    /// `end` is exclusive.
    fn bounds(&self) -> (usize, usize) {
        let start = (self.page - 1) * self.page_size;
        let end = (start + self.page_size).min(self.results.len());
        (start, end)
    }

    /// The current page's results with their absolute 1-based numbers.
    pub fn current_page(&self) -> Vec<(usize, &TorrentResult)> {
        let (start, end) = self.bounds();
        self.results[start..end]
            .iter()
            .enumerate()
            .map(|(offset, result)| (start + offset + 1, result))
            .collect()
    }

    /// Advance a page. Returns false when already on the last page.
    pub fn next(&mut self) -> bool {
        if self.page < self.page_count() {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Go back a page. Returns false when already on the first page.
    pub fn prev(&mut self) -> bool {
        if self.page > 1 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// Resolve an absolute 1-based result number, regardless of which page
    /// is showing.
    pub fn select(&self, index: usize) -> Result<&TorrentResult, NavError> {
        if index == 0 || index > self.results.len() {
            return Err(NavError::NotFound(index.to_string()));
        }
        Ok(&self.results[index - 1])
    }
}
