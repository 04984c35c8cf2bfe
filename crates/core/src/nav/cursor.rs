//! Folder navigation over an immutable catalog tree.

use tracing::warn;

use crate::catalog::{CatalogNode, CatalogTree, LinkEntry, NodeKind};
use crate::store::ActivityStore;

use super::NavError;

/// Separator between labels in a recorded path.
pub const PATH_SEPARATOR: &str = " > ";

/// A terminal view over one labelled link list.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkView<'a> {
    /// Label the links were reached under.
    pub title: &'a str,
    /// Full path including the title, already joined for display and
    /// favorites.
    pub path: String,
    pub links: &'a [LinkEntry],
}

impl<'a> LinkView<'a> {
    /// Resolve a 1-based link index.
    pub fn link(&self, index: usize) -> Result<&'a LinkEntry, NavError> {
        if index == 0 || index > self.links.len() {
            return Err(NavError::OutOfRange(index));
        }
        Ok(&self.links[index - 1])
    }
}

/// Outcome of selecting a menu entry.
#[derive(Debug, PartialEq)]
pub enum Selection<'a> {
    /// Descended into a folder; the cursor now points at it.
    Folder,
    /// Hit a terminal node; the cursor did not move.
    Links(LinkView<'a>),
}

/// Position within the catalog during a browse session.
///
/// The cursor only ever reads the tree; the tree is rebuilt wholesale on
/// the next catalog load. Each descent or link view writes a visit through
/// the store reference.
pub struct CatalogCursor<'a> {
    store: &'a dyn ActivityStore,
    stack: Vec<&'a CatalogNode>,
    path: Vec<&'a str>,
}

impl<'a> CatalogCursor<'a> {
    pub fn new(tree: &'a CatalogTree, store: &'a dyn ActivityStore) -> Self {
        Self {
            store,
            stack: vec![tree.root()],
            path: Vec::new(),
        }
    }

    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// The current path, joined for display. Empty at the root.
    pub fn path_display(&self) -> String {
        self.path.join(PATH_SEPARATOR)
    }

    /// Labels and kinds of the current folder's entries, in document order.
    pub fn entries(&self) -> Vec<(&'a str, NodeKind)> {
        self.current().entries()
    }

    /// Resolve a 1-based menu selection.
    ///
    /// Folders move the cursor down; terminal nodes return a link view and
    /// leave the cursor in place. Both record a visit.
    pub fn select(&mut self, index: usize) -> Result<Selection<'a>, NavError> {
        let entries = self.entries();
        if index == 0 || index > entries.len() {
            return Err(NavError::NotFound(index.to_string()));
        }
        let (label, _) = entries[index - 1];

        // The label came out of the current folder, so resolution cannot
        // fail here.
        let node = self
            .current()
            .select(label)
            .map_err(|_| NavError::NotFound(label.to_string()))?;

        if node.is_terminal() {
            let path = self.joined_with(label);
            self.record_visit(&path);
            Ok(Selection::Links(LinkView {
                title: label,
                path,
                links: node.links(),
            }))
        } else {
            self.stack.push(node);
            self.path.push(label);
            let path = self.path_display();
            self.record_visit(&path);
            Ok(Selection::Folder)
        }
    }

    /// Pop one level. Returns false when already at the root, which is the
    /// caller's cue to leave the browse screen.
    pub fn back(&mut self) -> bool {
        if self.path.is_empty() {
            return false;
        }
        self.stack.pop();
        self.path.pop();
        true
    }

    fn current(&self) -> &'a CatalogNode {
        self.stack
            .last()
            .copied()
            .expect("cursor stack always holds the root")
    }

    fn joined_with(&self, label: &str) -> String {
        if self.path.is_empty() {
            label.to_string()
        } else {
            format!("{}{}{}", self.path_display(), PATH_SEPARATOR, label)
        }
    }

    /// Write-through history append. Failures are reported, never
    /// propagated; a broken store must not stop navigation.
    fn record_visit(&self, path: &str) {
        if let Err(e) = self.store.record_visit(path) {
            warn!(path = %path, error = %e, "failed to record visit");
        }
    }
}
