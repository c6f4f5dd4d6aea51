//! Locale resolution for catalog items
//!
//! The catalog carries every text field in the default locale (`ja`) and,
//! optionally, a localized variant for the non-default locale (`en`). The
//! functions here pick the variant to display. A localized value is used
//! only when the active locale is the non-default one AND the value is
//! present and non-empty; otherwise the default field is shown.

pub mod labels;

pub use labels::Labels;

use crate::catalog::CatalogItem;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::str::FromStr;

/// Display language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Japanese, the catalog's default locale
    #[default]
    Ja,
    /// English, served from the `*_en` fields
    En,
}

impl Locale {
    /// Short language code
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Ja => "ja",
            Self::En => "en",
        }
    }

    /// Whether this locale reads the localized item fields
    #[must_use]
    pub const fn is_localized(self) -> bool {
        matches!(self, Self::En)
    }

    /// The other locale
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Ja => Self::En,
            Self::En => Self::Ja,
        }
    }

    /// UI labels for this locale
    #[must_use]
    pub const fn labels(self) -> &'static Labels {
        Labels::for_locale(self)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ja" | "jp" | "japanese" => Ok(Self::Ja),
            "en" | "english" => Ok(Self::En),
            other => Err(format!("Unknown language '{other}' (expected ja or en)")),
        }
    }
}

fn localized<'a>(default: Option<&'a str>, localized: Option<&'a str>, locale: Locale) -> Option<&'a str> {
    if locale.is_localized()
        && let Some(value) = localized.filter(|v| !v.is_empty())
    {
        return Some(value);
    }
    default
}

/// Tags to display for an item under the given locale
#[must_use]
pub fn resolve_tags(item: &CatalogItem, locale: Locale) -> &[String] {
    if locale.is_localized()
        && let Some(tags) = item.tags_localized.as_deref().filter(|t| !t.is_empty())
    {
        return tags;
    }
    &item.tags
}

/// Name to display for an item under the given locale
#[must_use]
pub fn resolve_name(item: &CatalogItem, locale: Locale) -> &str {
    localized(Some(item.name.as_str()), item.name_localized.as_deref(), locale).unwrap_or_default()
}

/// Description to display for an item, if any
#[must_use]
pub fn resolve_description(item: &CatalogItem, locale: Locale) -> Option<&str> {
    localized(
        item.description.as_deref(),
        item.description_localized.as_deref(),
        locale,
    )
    .filter(|d| !d.is_empty())
}

/// Union of the displayed tags of every item
#[must_use]
pub fn all_display_tags<'a>(
    items: impl IntoIterator<Item = &'a CatalogItem>,
    locale: Locale,
) -> HashSet<String> {
    items
        .into_iter()
        .flat_map(|item| resolve_tags(item, locale).iter().cloned())
        .collect()
}

/// Displayed tag universe in lexicographic order, for the tag panel
#[must_use]
pub fn sorted_display_tags<'a>(
    items: impl IntoIterator<Item = &'a CatalogItem>,
    locale: Locale,
) -> Vec<String> {
    all_display_tags(items, locale)
        .into_iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::item;

    fn bilingual() -> CatalogItem {
        let mut it = item("1", "ぼかし", "エフェクト,フィルタ");
        it.name_localized = Some("Blur".into());
        it.description = Some("画像をぼかします".into());
        it.description_localized = Some("Blurs the image".into());
        it.tags_localized = Some(vec!["Effect".into(), "Filter".into()]);
        it
    }

    #[test]
    fn test_default_locale_uses_default_fields() {
        let it = bilingual();
        assert_eq!(resolve_name(&it, Locale::Ja), "ぼかし");
        assert_eq!(resolve_description(&it, Locale::Ja), Some("画像をぼかします"));
        assert_eq!(resolve_tags(&it, Locale::Ja), ["エフェクト", "フィルタ"]);
    }

    #[test]
    fn test_localized_locale_uses_localized_fields() {
        let it = bilingual();
        assert_eq!(resolve_name(&it, Locale::En), "Blur");
        assert_eq!(resolve_description(&it, Locale::En), Some("Blurs the image"));
        assert_eq!(resolve_tags(&it, Locale::En), ["Effect", "Filter"]);
    }

    #[test]
    fn test_localized_falls_back_when_absent() {
        let it = item("2", "音声", "audio");
        assert_eq!(resolve_name(&it, Locale::En), "音声");
        assert_eq!(resolve_tags(&it, Locale::En), ["audio"]);
        assert_eq!(resolve_description(&it, Locale::En), None);
    }

    #[test]
    fn test_localized_falls_back_when_empty() {
        let mut it = bilingual();
        it.name_localized = Some(String::new());
        it.description_localized = Some(String::new());
        it.tags_localized = Some(Vec::new());
        assert_eq!(resolve_name(&it, Locale::En), "ぼかし");
        assert_eq!(resolve_description(&it, Locale::En), Some("画像をぼかします"));
        assert_eq!(resolve_tags(&it, Locale::En), ["エフェクト", "フィルタ"]);
    }

    #[test]
    fn test_untagged_item_resolves_to_empty() {
        let it = item("3", "x", "");
        assert!(resolve_tags(&it, Locale::Ja).is_empty());
        assert!(resolve_tags(&it, Locale::En).is_empty());
    }

    #[test]
    fn test_all_display_tags_per_locale() {
        let items = vec![bilingual(), item("2", "b", "フィルタ,音声")];
        let ja = all_display_tags(&items, Locale::Ja);
        assert_eq!(ja.len(), 3);
        assert!(ja.contains("音声"));

        let en = all_display_tags(&items, Locale::En);
        assert!(en.contains("Effect"));
        assert!(en.contains("フィルタ"));
        assert!(!en.contains("エフェクト"));
    }

    #[test]
    fn test_sorted_display_tags_is_deterministic() {
        let items = vec![item("1", "a", "zeta,alpha"), item("2", "b", "mid,alpha")];
        assert_eq!(sorted_display_tags(&items, Locale::Ja), vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_locale_parse_and_toggle() {
        assert_eq!("EN".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("ja".parse::<Locale>().unwrap(), Locale::Ja);
        assert!("fr".parse::<Locale>().is_err());
        assert_eq!(Locale::Ja.toggled(), Locale::En);
        assert_eq!(Locale::default(), Locale::Ja);
    }
}
