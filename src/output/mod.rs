//! Output formatting for CLI display
//!
//! Colored one-line and multi-line renderings of catalog items and tags.
//! Every text field goes through the locale resolver so that the CLI shows
//! exactly what the browse view would.

use crate::catalog::CatalogItem;
use crate::dispatch::LinkKind;
use crate::locale::{Locale, resolve_description, resolve_name, resolve_tags};
use colored::Colorize;

/// Format an item with its tags on one line
///
/// In quiet mode only the id is printed, for piping into `cathub open`.
#[must_use]
pub fn item_line(item: &CatalogItem, locale: Locale, quiet: bool) -> String {
    if quiet {
        return item.id.clone();
    }

    let name = resolve_name(item, locale);
    let tags = resolve_tags(item, locale);
    if tags.is_empty() {
        format!("  {}  {}", item.id.dimmed(), name.bold())
    } else {
        format!(
            "  {}  {} [{}]",
            item.id.dimmed(),
            name.bold(),
            tags.join(", ").magenta()
        )
    }
}

/// Format an item as a card: name, description, author and links
#[must_use]
pub fn item_card(item: &CatalogItem, locale: Locale) -> Vec<String> {
    let labels = locale.labels();
    let mut lines = vec![item_line(item, locale, false)];

    let description = resolve_description(item, locale).unwrap_or(labels.no_description);
    lines.extend(description.lines().map(|line| format!("      {}", line.dimmed())));

    lines.push(format!("      {}: {}", labels.author, item.author_or_unknown()));

    for (label, kind) in [(labels.detail, LinkKind::Detail), (labels.download, LinkKind::Download)] {
        if let Some(url) = kind.url_of(item) {
            lines.push(format!("      {label}: {}", url.cyan().underline()));
        }
    }

    lines
}

/// Format a tag with usage count
#[must_use]
pub fn tag_with_count(tag: &str, count: usize, quiet: bool) -> String {
    if quiet {
        tag.to_string()
    } else {
        format!("  {} ({count})", tag.magenta())
    }
}

/// Format a section header, e.g. the page title
#[must_use]
pub fn header(title: &str, subtitle: &str) -> String {
    format!("{}\n{}", title.bold().underline(), subtitle.dimmed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::item;

    #[test]
    fn test_quiet_item_line_is_id_only() {
        let item = item("abc", "Name", "x,y");
        assert_eq!(item_line(&item, Locale::Ja, true), "abc");
    }

    #[test]
    fn test_item_line_uses_localized_fields() {
        colored::control::set_override(false);
        let mut item = item("1", "名前", "音声");
        item.name_localized = Some("Name".into());
        item.tags_localized = Some(vec!["Audio".into()]);

        let line = item_line(&item, Locale::En, false);
        assert!(line.contains("Name"));
        assert!(line.contains("[Audio]"));

        let line = item_line(&item, Locale::Ja, false);
        assert!(line.contains("名前"));
        assert!(line.contains("音声"));
    }

    #[test]
    fn test_item_card_placeholders() {
        colored::control::set_override(false);
        let mut item = item("1", "A", "");
        item.download_url = Some("#".into());
        item.detail_url = Some("https://example.com".into());

        let card = item_card(&item, Locale::En).join("\n");
        assert!(card.contains("No description available."));
        assert!(card.contains("unknown"));
        assert!(card.contains("https://example.com"));
        assert!(!card.contains("Download:"));
    }

    #[test]
    fn test_tag_with_count() {
        colored::control::set_override(false);
        assert_eq!(tag_with_count("audio", 3, true), "audio");
        assert_eq!(tag_with_count("audio", 3, false), "  audio (3)");
    }
}
