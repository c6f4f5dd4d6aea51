//! Multi-item selection
//!
//! A set of item ids scoped to the active page. The owning session clears it
//! on every page or locale change.

use std::collections::BTreeSet;

/// Ids of the currently selected items
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionTracker {
    selected: BTreeSet<String>,
}

impl SelectionTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `id` if unselected, deselect it otherwise
    ///
    /// Returns whether `id` is selected afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.selected.remove(id) {
            false
        } else {
            self.selected.insert(id.to_string());
            true
        }
    }

    /// Add every id in `visible_ids`; ids already selected elsewhere stay
    pub fn select_all<I, S>(&mut self, visible_ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected.extend(visible_ids.into_iter().map(Into::into));
    }

    /// Remove every id in `visible_ids`; ids outside it stay selected
    pub fn deselect_all<I, S>(&mut self, visible_ids: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for id in visible_ids {
            self.selected.remove(id.as_ref());
        }
    }

    /// Empty the selection
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.selected.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Selected ids in sorted order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.selected.iter().map(String::as_str)
    }
}
