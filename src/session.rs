//! Browsing session state
//!
//! [`HubSession`] owns everything a browsing front end needs: the loaded
//! catalog, the active page and locale, the filter and the selection. Every
//! mutation goes through a method here so that the compound transitions
//! (page change, locale change) are applied as one step and the visible list
//! derived afterwards is always consistent.

use crate::catalog::{CatalogItem, CatalogStore, Category};
use crate::dispatch::{self, DispatchOutcome, LinkKind, LinkOpener};
use crate::fetch::{self, CatalogSource, FetchError};
use crate::filter::{FilterState, TagMatchMode, visible_items};
use crate::guide;
use crate::locale::{Locale, sorted_display_tags};
use crate::nav::Page;
use crate::selection::SelectionTracker;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Item layout of the browse view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Two-line cards with description
    #[default]
    Grid,
    /// One line per item
    List,
}

impl ViewMode {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Grid => Self::List,
            Self::List => Self::Grid,
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Grid => "grid",
            Self::List => "list",
        })
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "grid" => Ok(Self::Grid),
            "list" => Ok(Self::List),
            other => Err(format!("Unknown view mode '{other}' (expected grid or list)")),
        }
    }
}

/// Why the catalog is not available
#[derive(Debug, Error)]
pub enum LoadError {
    /// Required configuration is missing; no request was made
    #[error("{0}")]
    NotConfigured(String),
    /// A catalog request failed
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Catalog load status
#[derive(Debug, Default)]
pub enum LoadState {
    #[default]
    NotLoaded,
    Loading,
    Ready,
    Failed(LoadError),
}

impl LoadState {
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    /// The failure, if the last load failed
    #[must_use]
    pub const fn error(&self) -> Option<&LoadError> {
        match self {
            Self::Failed(e) => Some(e),
            _ => None,
        }
    }
}

/// Explicit state container for one browsing session
#[derive(Debug)]
pub struct HubSession {
    page: Page,
    locale: Locale,
    store: CatalogStore,
    load_state: LoadState,
    filter: FilterState,
    selection: SelectionTracker,
    view_mode: ViewMode,
    display_tags: Vec<String>,
    guide_dir: Option<PathBuf>,
    guide: String,
}

impl Default for HubSession {
    fn default() -> Self {
        Self::new(Locale::default(), TagMatchMode::default(), ViewMode::default())
    }
}

impl HubSession {
    /// Empty session on the plugins page
    #[must_use]
    pub fn new(locale: Locale, tag_mode: TagMatchMode, view_mode: ViewMode) -> Self {
        Self {
            page: Page::default(),
            locale,
            store: CatalogStore::default(),
            load_state: LoadState::NotLoaded,
            filter: FilterState::new(tag_mode),
            selection: SelectionTracker::new(),
            view_mode,
            display_tags: Vec::new(),
            guide_dir: None,
            guide: String::new(),
        }
    }

    /// Set the directory the installation guide is read from and load it
    #[must_use]
    pub fn with_guide_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.guide_dir = dir;
        self.refresh_guide();
        self
    }

    /// Session already holding `store`, for front ends that load up front
    #[must_use]
    pub fn with_store(mut self, store: CatalogStore) -> Self {
        self.apply_load(Ok(store));
        self
    }

    #[must_use]
    pub const fn page(&self) -> Page {
        self.page
    }

    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    #[must_use]
    pub const fn store(&self) -> &CatalogStore {
        &self.store
    }

    #[must_use]
    pub const fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    #[must_use]
    pub const fn filter(&self) -> &FilterState {
        &self.filter
    }

    #[must_use]
    pub const fn selection(&self) -> &SelectionTracker {
        &self.selection
    }

    #[must_use]
    pub const fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Installation guide markdown for the current locale (empty if unavailable)
    #[must_use]
    pub fn guide(&self) -> &str {
        &self.guide
    }

    /// Category of the active page, if it is a catalog page
    #[must_use]
    pub const fn category(&self) -> Option<Category> {
        self.page.category()
    }

    /// Sorted tag universe of the active category under the current locale
    #[must_use]
    pub fn display_tags(&self) -> &[String] {
        &self.display_tags
    }

    /// Items of the active category passing the filter, in upstream order
    ///
    /// Empty on the informational pages.
    #[must_use]
    pub fn visible_items(&self) -> Vec<&CatalogItem> {
        self.category().map_or_else(Vec::new, |category| {
            visible_items(self.store.items(category), &self.filter, self.locale)
        })
    }

    /// Ids of [`Self::visible_items`]
    #[must_use]
    pub fn visible_ids(&self) -> Vec<String> {
        self.visible_items().into_iter().map(|item| item.id.clone()).collect()
    }

    /// Go to `page`
    ///
    /// Returns `false` if `page` is already active. Otherwise the selection
    /// is cleared, the tag universe is recomputed for the new page and
    /// selected tags missing from it are dropped.
    pub fn navigate(&mut self, page: Page) -> bool {
        if page == self.page {
            return false;
        }
        debug!(from = %self.page, to = %page, "navigating");

        self.page = page;
        self.selection.clear();
        self.refresh_display_tags();
        self.filter.retain_tags_in(&self.display_tags);
        true
    }

    /// Switch the display language
    ///
    /// Returns `false` if `locale` is already active. Otherwise the
    /// selection and the selected tags are cleared, the tag universe is
    /// recomputed and the guide is reloaded; the caller persists the
    /// preference.
    pub fn switch_locale(&mut self, locale: Locale) -> bool {
        if locale == self.locale {
            return false;
        }
        debug!(from = %self.locale, to = %locale, "switching locale");

        self.locale = locale;
        self.selection.clear();
        self.filter.clear_tags();
        self.refresh_display_tags();
        self.refresh_guide();
        true
    }

    /// Replace the search query
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.filter.search_query = query.into();
    }

    /// Toggle one tag of the filter; returns whether it is now selected
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        self.filter.toggle_tag(tag)
    }

    pub fn clear_tags(&mut self) {
        self.filter.clear_tags();
    }

    pub const fn set_tag_mode(&mut self, mode: TagMatchMode) {
        self.filter.tag_mode = mode;
    }

    /// Flip between ANY and ALL; returns the new mode
    pub const fn toggle_tag_mode(&mut self) -> TagMatchMode {
        self.filter.tag_mode = self.filter.tag_mode.toggled();
        self.filter.tag_mode
    }

    pub const fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    /// Toggle one item's selection; returns whether it is now selected
    pub fn toggle_selection(&mut self, id: &str) -> bool {
        self.selection.toggle(id)
    }

    /// Add every visible item to the selection
    pub fn select_all_visible(&mut self) {
        let ids = self.visible_ids();
        self.selection.select_all(ids);
    }

    /// Remove every visible item from the selection
    pub fn deselect_all_visible(&mut self) {
        let ids = self.visible_ids();
        self.selection.deselect_all(ids);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Mark a load as started
    ///
    /// The previous catalog and error are discarded so a reload starts from
    /// scratch.
    pub fn begin_load(&mut self) {
        self.store = CatalogStore::default();
        self.selection.clear();
        self.display_tags.clear();
        self.load_state = LoadState::Loading;
    }

    /// Install the result of a load
    ///
    /// On failure the catalog stays empty and the error is kept in the
    /// load state.
    pub fn apply_load(&mut self, result: Result<CatalogStore, LoadError>) {
        match result {
            Ok(store) => {
                info!(items = store.len(), "catalog ready");
                self.store = store;
                self.load_state = LoadState::Ready;
            }
            Err(e) => {
                warn!("catalog load failed: {e}");
                self.store = CatalogStore::default();
                self.load_state = LoadState::Failed(e);
            }
        }
        self.selection.clear();
        self.refresh_display_tags();
        self.filter.retain_tags_in(&self.display_tags);
    }

    /// Fetch both categories again from `source`
    pub async fn reload(&mut self, source: &dyn CatalogSource) {
        self.begin_load();
        let result = fetch::load_catalog(source).await.map_err(LoadError::from);
        self.apply_load(result);
    }

    /// Open the `kind` link of every selected item
    ///
    /// The selection is cleared when at least one link opened.
    pub fn batch_open(&mut self, kind: LinkKind, opener: &dyn LinkOpener) -> DispatchOutcome {
        let outcome = dispatch::batch_open(kind, self.selection.ids(), &self.store, opener);
        if outcome.opened > 0 {
            self.selection.clear();
        }
        debug!(
            %kind,
            requested = outcome.requested,
            opened = outcome.opened,
            "batch open finished"
        );
        outcome
    }

    fn refresh_display_tags(&mut self) {
        self.display_tags = self.category().map_or_else(Vec::new, |category| {
            sorted_display_tags(self.store.items(category), self.locale)
        });
    }

    fn refresh_guide(&mut self) {
        self.guide = guide::load_guide(self.guide_dir.as_deref(), self.locale);
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
