//! Item filtering used by the list command and the browse view
//!
//! An item is visible when it passes both the free-text search and the tag
//! filter. Filtering is stable: the visible list keeps the relative order of
//! the input.
//!
//! # Iterator Adapters
//!
//! [`ItemFilterExt`] adds the same filter as a fluent method on any iterator
//! of item references:
//!
//! ```ignore
//! use cathub::filter::ItemFilterExt;
//!
//! let visible = store
//!     .items(Category::Plugins)
//!     .iter()
//!     .matching(&filter, Locale::En);
//! ```

use crate::catalog::CatalogItem;
use crate::locale::{Locale, resolve_tags};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::str::FromStr;

/// How multiple selected tags are combined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagMatchMode {
    /// Item has at least one selected tag (OR logic)
    #[default]
    Any,
    /// Item has every selected tag (AND logic)
    All,
}

impl TagMatchMode {
    /// The other mode
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Any => Self::All,
            Self::All => Self::Any,
        }
    }

    /// Short label for the tag panel
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Any => "OR",
            Self::All => "AND",
        }
    }
}

impl fmt::Display for TagMatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Any => "any",
            Self::All => "all",
        })
    }
}

impl FromStr for TagMatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "any" | "or" => Ok(Self::Any),
            "all" | "and" => Ok(Self::All),
            other => Err(format!("Unknown tag mode '{other}' (expected any or all)")),
        }
    }
}

/// Search text plus selected tags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Case-insensitive substring query
    pub search_query: String,
    /// Tags to filter by, compared verbatim
    pub selected_tags: BTreeSet<String>,
    /// How `selected_tags` combine
    pub tag_mode: TagMatchMode,
}

impl FilterState {
    /// Empty filter with the given tag mode
    #[must_use]
    pub fn new(tag_mode: TagMatchMode) -> Self {
        Self {
            tag_mode,
            ..Self::default()
        }
    }

    /// Set the search query
    #[must_use]
    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search_query = query.into();
        self
    }

    /// Add selected tags
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Select a tag if unselected, deselect it otherwise
    ///
    /// Returns whether the tag is selected afterwards.
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        if self.selected_tags.remove(tag) {
            false
        } else {
            self.selected_tags.insert(tag.to_string());
            true
        }
    }

    /// Whether a tag is selected
    #[must_use]
    pub fn is_tag_selected(&self, tag: &str) -> bool {
        self.selected_tags.contains(tag)
    }

    /// Drop every selected tag
    pub fn clear_tags(&mut self) {
        self.selected_tags.clear();
    }

    /// Keep only selected tags that appear in `universe`
    pub fn retain_tags_in(&mut self, universe: &[String]) {
        self.selected_tags.retain(|tag| universe.contains(tag));
    }

    /// Whether any criterion is active
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.search_query.is_empty() || !self.selected_tags.is_empty()
    }

    /// Whether an item passes both the search and the tag filter
    #[must_use]
    pub fn matches(&self, item: &CatalogItem, locale: Locale) -> bool {
        search_matches(item, &self.search_query) && tag_matches(item, self, locale)
    }
}

/// Free-text match against names and descriptions in both locales
///
/// The empty query matches everything.
#[must_use]
pub fn search_matches(item: &CatalogItem, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();

    [
        Some(item.name.as_str()),
        item.description.as_deref(),
        item.name_localized.as_deref(),
        item.description_localized.as_deref(),
    ]
    .into_iter()
    .any(|field| field.unwrap_or_default().to_lowercase().contains(&needle))
}

/// Tag match under the filter's mode, using the tags displayed for `locale`
#[must_use]
pub fn tag_matches(item: &CatalogItem, filter: &FilterState, locale: Locale) -> bool {
    if filter.selected_tags.is_empty() {
        return true;
    }
    let item_tags: HashSet<&str> = resolve_tags(item, locale).iter().map(String::as_str).collect();

    match filter.tag_mode {
        TagMatchMode::Any => filter
            .selected_tags
            .iter()
            .any(|tag| item_tags.contains(tag.as_str())),
        TagMatchMode::All => filter
            .selected_tags
            .iter()
            .all(|tag| item_tags.contains(tag.as_str())),
    }
}

/// Items passing the filter, in input order
#[must_use]
pub fn visible_items<'a>(
    items: impl IntoIterator<Item = &'a CatalogItem>,
    filter: &FilterState,
    locale: Locale,
) -> Vec<&'a CatalogItem> {
    items
        .into_iter()
        .filter(|item| filter.matches(item, locale))
        .collect()
}

/// Extension trait for filtering iterators of catalog items
pub trait ItemFilterExt<'a>: IntoIterator<Item = &'a CatalogItem> + Sized {
    /// Keep items passing `filter` under `locale`
    fn matching(self, filter: &FilterState, locale: Locale) -> Vec<&'a CatalogItem> {
        visible_items(self, filter, locale)
    }

    /// Keep items carrying at least one of `tags`
    fn with_any_tag(self, tags: &[String], locale: Locale) -> Vec<&'a CatalogItem> {
        let filter = FilterState::new(TagMatchMode::Any).with_tags(tags.iter().cloned());
        visible_items(self, &filter, locale)
    }

    /// Keep items carrying every one of `tags`
    fn with_all_tags(self, tags: &[String], locale: Locale) -> Vec<&'a CatalogItem> {
        let filter = FilterState::new(TagMatchMode::All).with_tags(tags.iter().cloned());
        visible_items(self, &filter, locale)
    }
}

impl<'a, I> ItemFilterExt<'a> for I where I: IntoIterator<Item = &'a CatalogItem> {}
