//! Testing utilities for cathub
//!
//! Fixture builders plus in-memory stand-ins for the two external
//! collaborators: the catalog source and the link opener.
//!
//! Only available when compiled with `cfg(test)`.

use crate::catalog::{CatalogItem, Category, RawCatalogItem, parse_tags};
use crate::dispatch::LinkOpener;
use crate::fetch::{CatalogSource, FetchError};
use async_trait::async_trait;
use std::cell::RefCell;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Build an item with an id, a default-locale name and comma-separated tags
pub fn item(id: &str, name: &str, tags: &str) -> CatalogItem {
    CatalogItem {
        id: id.to_string(),
        name: name.to_string(),
        tags: parse_tags(tags),
        ..CatalogItem::default()
    }
}

/// Build a raw API record with an id and comma-separated tags
pub fn raw(id: &str, tags: &str) -> RawCatalogItem {
    RawCatalogItem {
        id: id.to_string(),
        name: Some(format!("item {id}")),
        tags: Some(tags.to_string()),
        ..RawCatalogItem::default()
    }
}

/// Catalog source serving fixed records, or failing one category
#[derive(Debug, Default)]
pub struct MockSource {
    plugins: Vec<RawCatalogItem>,
    scripts: Vec<RawCatalogItem>,
    fail: Option<(Category, u16, String)>,
    calls: AtomicUsize,
}

impl MockSource {
    /// Source that returns the given records
    pub fn new(plugins: Vec<RawCatalogItem>, scripts: Vec<RawCatalogItem>) -> Self {
        Self {
            plugins,
            scripts,
            ..Self::default()
        }
    }

    /// Source whose `category` request answers with `status`
    pub fn failing(category: Category, status: u16, message: &str) -> Self {
        Self {
            fail: Some((category, status, message.to_string())),
            ..Self::default()
        }
    }

    /// Number of category requests served so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogSource for MockSource {
    async fn fetch_category(&self, category: Category) -> Result<Vec<RawCatalogItem>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some((failing, status, message)) = &self.fail
            && *failing == category
        {
            return Err(FetchError::Status {
                category,
                status: *status,
                message: message.clone(),
            });
        }

        Ok(match category {
            Category::Plugins => self.plugins.clone(),
            Category::Scripts => self.scripts.clone(),
        })
    }
}

/// Link opener that records every URL instead of opening it
#[derive(Debug, Default)]
pub struct RecordingOpener {
    opened: RefCell<Vec<String>>,
    fail: bool,
}

impl RecordingOpener {
    /// Opener that rejects every URL
    pub fn failing() -> Self {
        Self {
            opened: RefCell::default(),
            fail: true,
        }
    }

    /// URLs opened so far
    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }
}

impl LinkOpener for RecordingOpener {
    fn open(&self, url: &str) -> Result<(), String> {
        if self.fail {
            return Err(format!("{url}: no browser available"));
        }
        self.opened.borrow_mut().push(url.to_string());
        Ok(())
    }
}
