//! Catalog store
//!
//! Holds the two item lists fetched from the content API together with the
//! aggregate tag universe in the default locale.

pub mod types;

pub use types::{
    ApiErrorBody, CatalogItem, Category, ContentsEnvelope, RawCatalogItem, UNKNOWN_AUTHOR,
    parse_tags,
};

use std::collections::BTreeSet;

/// In-memory catalog populated by one load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogStore {
    plugins: Vec<CatalogItem>,
    scripts: Vec<CatalogItem>,
    all_tags: BTreeSet<String>,
}

impl CatalogStore {
    /// Build a store from the two category lists
    #[must_use]
    pub fn new(plugins: Vec<CatalogItem>, scripts: Vec<CatalogItem>) -> Self {
        let all_tags = plugins
            .iter()
            .chain(&scripts)
            .flat_map(|item| item.tags.iter().cloned())
            .collect();

        Self {
            plugins,
            scripts,
            all_tags,
        }
    }

    /// Build a store from raw API records
    #[must_use]
    pub fn from_raw(plugins: Vec<RawCatalogItem>, scripts: Vec<RawCatalogItem>) -> Self {
        Self::new(
            plugins.into_iter().map(CatalogItem::from).collect(),
            scripts.into_iter().map(CatalogItem::from).collect(),
        )
    }

    /// Items of one category, in upstream order
    #[must_use]
    pub fn items(&self, category: Category) -> &[CatalogItem] {
        match category {
            Category::Plugins => &self.plugins,
            Category::Scripts => &self.scripts,
        }
    }

    /// Look up an item by id across both categories
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&CatalogItem> {
        self.plugins.iter().chain(&self.scripts).find(|item| item.id == id)
    }

    /// Every default-locale tag used by any item in either category
    #[must_use]
    pub const fn all_tags(&self) -> &BTreeSet<String> {
        &self.all_tags
    }

    /// Total number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.plugins.len() + self.scripts.len()
    }

    /// Whether both lists are empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty() && self.scripts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::item;

    #[test]
    fn test_store_items_by_category() {
        let store = CatalogStore::new(
            vec![item("1", "A", "x")],
            vec![item("2", "B", "y"), item("3", "C", "")],
        );
        assert_eq!(store.items(Category::Plugins).len(), 1);
        assert_eq!(store.items(Category::Scripts).len(), 2);
        assert_eq!(store.len(), 3);
        assert!(!store.is_empty());
    }

    #[test]
    fn test_store_find_across_categories() {
        let store = CatalogStore::new(vec![item("1", "A", "")], vec![item("2", "B", "")]);
        assert_eq!(store.find("2").map(|i| i.name.as_str()), Some("B"));
        assert_eq!(store.find("1").map(|i| i.name.as_str()), Some("A"));
        assert!(store.find("9").is_none());
    }

    #[test]
    fn test_store_all_tags_union() {
        let store = CatalogStore::new(
            vec![item("1", "A", "x,y")],
            vec![item("2", "B", "y,z")],
        );
        let tags: Vec<_> = store.all_tags().iter().cloned().collect();
        assert_eq!(tags, vec!["x", "y", "z"]);
    }

    #[test]
    fn test_store_default_is_empty() {
        let store = CatalogStore::default();
        assert!(store.is_empty());
        assert!(store.all_tags().is_empty());
    }
}
