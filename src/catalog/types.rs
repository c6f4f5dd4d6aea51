//! Catalog data types
//!
//! Two shapes live here: the wire record exactly as the content API sends it
//! (`RawCatalogItem`) and the typed item the rest of the crate works with
//! (`CatalogItem`). Conversion happens once, when a response is decoded, so
//! the comma-separated tag strings are never re-parsed downstream.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Literal shown for items without attribution
pub const UNKNOWN_AUTHOR: &str = "unknown";

/// Top-level catalog partition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Plugin entries
    #[default]
    Plugins,
    /// Script entries
    Scripts,
}

impl Category {
    /// Both categories, in display order
    pub const ALL: [Self; 2] = [Self::Plugins, Self::Scripts];

    /// API endpoint name for this category
    #[must_use]
    pub const fn endpoint(self) -> &'static str {
        match self {
            Self::Plugins => "plugins",
            Self::Scripts => "scripts",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.endpoint())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "plugins" | "plugin" => Ok(Self::Plugins),
            "scripts" | "script" => Ok(Self::Scripts),
            other => Err(format!("Unknown category '{other}' (expected plugins or scripts)")),
        }
    }
}

/// Response envelope returned by the content API list endpoints
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentsEnvelope {
    #[serde(default)]
    pub contents: Vec<RawCatalogItem>,
}

/// Error body returned by the content API on non-success status
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// A catalog record as delivered by the content API
///
/// Every field except `id` is optional upstream; absent fields are kept as
/// `None` here and resolved by the conversion into [`CatalogItem`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawCatalogItem {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub name_en: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub description_en: Option<String>,
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub tags_en: Option<String>,
    #[serde(default, alias = "detailUrl")]
    pub rel_link: Option<String>,
    #[serde(default, alias = "downloadUrl")]
    pub url: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
}

/// Parse a comma-separated tag string into an ordered list of tags
///
/// Entries are trimmed and empty entries dropped, so `"a, ,b"` yields
/// `["a", "b"]` and `""` yields an empty list.
#[must_use]
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// A catalog entry with parsed tags and explicit localized fields
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct CatalogItem {
    /// Stable identifier assigned by the content source
    pub id: String,
    /// Display name in the default locale
    pub name: String,
    /// Display name in the non-default locale
    pub name_localized: Option<String>,
    /// Free-text description in the default locale
    pub description: Option<String>,
    /// Free-text description in the non-default locale
    pub description_localized: Option<String>,
    /// Tags in the default locale, in upstream order
    pub tags: Vec<String>,
    /// Tags in the non-default locale; `None` when absent or empty
    pub tags_localized: Option<Vec<String>>,
    /// Link to a details page
    pub detail_url: Option<String>,
    /// Link to a download page
    pub download_url: Option<String>,
    /// Attribution
    pub author: Option<String>,
}

impl CatalogItem {
    /// Create an item with just an id and a name
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Author for display, or the `unknown` placeholder
    #[must_use]
    pub fn author_or_unknown(&self) -> &str {
        self.author
            .as_deref()
            .filter(|a| !a.trim().is_empty())
            .unwrap_or(UNKNOWN_AUTHOR)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl From<RawCatalogItem> for CatalogItem {
    fn from(raw: RawCatalogItem) -> Self {
        let tags_localized = raw
            .tags_en
            .as_deref()
            .map(parse_tags)
            .filter(|tags| !tags.is_empty());

        Self {
            id: raw.id,
            name: raw.name.unwrap_or_default(),
            name_localized: raw.name_en,
            description: raw.description,
            description_localized: raw.description_en,
            tags: raw.tags.as_deref().map(parse_tags).unwrap_or_default(),
            tags_localized,
            detail_url: non_empty(raw.rel_link),
            download_url: non_empty(raw.url),
            author: raw.author,
        }
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
