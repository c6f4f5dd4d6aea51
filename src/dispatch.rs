//! Batch link dispatch
//!
//! Opens the detail or download link of every selected item. Items whose
//! link is missing or a placeholder are skipped; the caller decides what to
//! do with the outcome (clear the selection, show the "no links" notice).

use crate::catalog::{CatalogItem, CatalogStore};
use std::fmt;
use tracing::{debug, warn};

/// Placeholder the content source uses for "no link"
pub const PLACEHOLDER_URL: &str = "#";

/// Which link of an item to open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// Details page (`rel_link`)
    Detail,
    /// Download page (`url`)
    Download,
}

impl LinkKind {
    /// The item's link of this kind, if usable
    #[must_use]
    pub fn url_of(self, item: &CatalogItem) -> Option<&str> {
        let url = match self {
            Self::Detail => item.detail_url.as_deref(),
            Self::Download => item.download_url.as_deref(),
        };
        url.map(str::trim)
            .filter(|u| !u.is_empty() && *u != PLACEHOLDER_URL)
    }
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Detail => "detail",
            Self::Download => "download",
        })
    }
}

/// Something that can open an external link
///
/// The default implementation hands the URL to the system browser; tests
/// use a recording implementation.
pub trait LinkOpener {
    /// Open `url`
    ///
    /// # Errors
    /// Returns an error message if the link could not be opened.
    fn open(&self, url: &str) -> Result<(), String>;
}

/// Opens links with the system's default handler
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl LinkOpener for SystemOpener {
    fn open(&self, url: &str) -> Result<(), String> {
        open::that(url).map_err(|e| format!("{url}: {e}"))
    }
}

/// Result of a batch open
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// Number of ids processed
    pub requested: usize,
    /// Number of links actually opened
    pub opened: usize,
    /// Ids skipped because they have no usable link or are unknown
    pub skipped: Vec<String>,
    /// Links the opener failed on
    pub errors: Vec<String>,
}

impl DispatchOutcome {
    /// Selection was non-empty but none of it had a usable link
    ///
    /// Links that exist but failed to open are reported in `errors` instead.
    #[must_use]
    pub fn no_links_available(&self) -> bool {
        self.requested > 0 && self.opened == 0 && self.errors.is_empty()
    }
}

/// Open the `kind` link of every id in `ids`
///
/// Ids are resolved against both categories of `store`.
pub fn batch_open<'a>(
    kind: LinkKind,
    ids: impl IntoIterator<Item = &'a str>,
    store: &CatalogStore,
    opener: &dyn LinkOpener,
) -> DispatchOutcome {
    let mut outcome = DispatchOutcome::default();

    for id in ids {
        outcome.requested += 1;

        let Some(url) = store.find(id).and_then(|item| kind.url_of(item)) else {
            debug!(id, %kind, "no usable link, skipping");
            outcome.skipped.push(id.to_string());
            continue;
        };

        match opener.open(url) {
            Ok(()) => outcome.opened += 1,
            Err(e) => {
                warn!(id, %kind, "failed to open link: {e}");
                outcome.errors.push(e);
            }
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{RecordingOpener, item};

    fn store() -> CatalogStore {
        let mut one = item("1", "A", "");
        one.detail_url = Some("https://example.com/1".into());
        let mut two = item("2", "B", "");
        two.download_url = Some("https://example.com/2.zip".into());
        two.detail_url = Some("#".into());
        CatalogStore::new(vec![one], vec![two])
    }

    #[test]
    fn test_download_skips_missing_link() {
        let opener = RecordingOpener::default();
        let outcome = batch_open(LinkKind::Download, ["1", "2"], &store(), &opener);
        assert_eq!(outcome.opened, 1);
        assert_eq!(outcome.skipped, vec!["1"]);
        assert_eq!(opener.opened(), vec!["https://example.com/2.zip"]);
        assert!(!outcome.no_links_available());
    }

    #[test]
    fn test_placeholder_link_is_skipped() {
        let opener = RecordingOpener::default();
        let outcome = batch_open(LinkKind::Detail, ["2"], &store(), &opener);
        assert_eq!(outcome.opened, 0);
        assert!(outcome.no_links_available());
        assert!(opener.opened().is_empty());
    }

    #[test]
    fn test_unknown_id_is_skipped() {
        let opener = RecordingOpener::default();
        let outcome = batch_open(LinkKind::Detail, ["1", "404"], &store(), &opener);
        assert_eq!(outcome.requested, 2);
        assert_eq!(outcome.opened, 1);
        assert_eq!(outcome.skipped, vec!["404"]);
    }

    #[test]
    fn test_empty_selection_is_not_no_links() {
        let opener = RecordingOpener::default();
        let outcome = batch_open(LinkKind::Detail, std::iter::empty(), &store(), &opener);
        assert_eq!(outcome.requested, 0);
        assert!(!outcome.no_links_available());
    }

    #[test]
    fn test_opener_failure_does_not_count() {
        let opener = RecordingOpener::failing();
        let outcome = batch_open(LinkKind::Detail, ["1"], &store(), &opener);
        assert_eq!(outcome.opened, 0);
        assert_eq!(outcome.errors, vec!["https://example.com/1: no browser available"]);
        assert!(!outcome.no_links_available());
    }

    #[test]
    fn test_failure_next_to_missing_link_is_an_error() {
        let opener = RecordingOpener::failing();
        let outcome = batch_open(LinkKind::Detail, ["1", "2"], &store(), &opener);
        assert_eq!(outcome.skipped, vec!["2"]);
        assert_eq!(outcome.errors.len(), 1);
        assert!(!outcome.no_links_available());
    }

    #[test]
    fn test_url_of_trims_and_rejects_blank() {
        let mut it = item("x", "X", "");
        it.detail_url = Some("  ".into());
        it.download_url = Some(" https://d ".into());
        assert_eq!(LinkKind::Detail.url_of(&it), None);
        assert_eq!(LinkKind::Download.url_of(&it), Some("https://d"));
    }
}
