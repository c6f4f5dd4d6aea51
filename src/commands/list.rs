//! List command - print the filtered items of one category

use crate::{
    HubError,
    catalog::{CatalogItem, CatalogStore, Category},
    cli::ListFormat,
    dispatch::LinkKind,
    filter::{FilterState, ItemFilterExt},
    locale::{Locale, resolve_description, resolve_name, resolve_tags},
    nav::Page,
    output,
};
use serde::Serialize;
use std::io;

type Result<T> = std::result::Result<T, HubError>;

/// One item as written by the JSON and CSV formats, with locale-resolved fields
#[derive(Debug, Serialize)]
struct ItemRecord<'a> {
    id: &'a str,
    category: Category,
    name: &'a str,
    description: Option<&'a str>,
    author: &'a str,
    tags: &'a [String],
    detail_url: Option<&'a str>,
    download_url: Option<&'a str>,
}

impl<'a> ItemRecord<'a> {
    fn new(item: &'a CatalogItem, category: Category, locale: Locale) -> Self {
        Self {
            id: &item.id,
            category,
            name: resolve_name(item, locale),
            description: resolve_description(item, locale),
            author: item.author_or_unknown(),
            tags: resolve_tags(item, locale),
            detail_url: LinkKind::Detail.url_of(item),
            download_url: LinkKind::Download.url_of(item),
        }
    }
}

/// Execute the list command
///
/// # Errors
/// Returns `HubError::Io` if JSON or CSV output cannot be written.
pub fn execute(
    store: &CatalogStore,
    category: Category,
    filter: &FilterState,
    locale: Locale,
    format: ListFormat,
    quiet: bool,
) -> Result<()> {
    let items = store.items(category).iter().matching(filter, locale);

    match format {
        ListFormat::Json => {
            println!("{}", render_json(&items, category, locale)?);
            Ok(())
        }
        ListFormat::Csv => {
            print!("{}", render_csv(&items, category, locale)?);
            Ok(())
        }
        ListFormat::Text => {
            print_text(&items, category, locale, quiet);
            Ok(())
        }
    }
}

fn print_text(items: &[&CatalogItem], category: Category, locale: Locale, quiet: bool) {
    let labels = locale.labels();

    if items.is_empty() {
        if !quiet {
            println!("{}", labels.no_items);
        }
        return;
    }

    if quiet {
        for item in items {
            println!("{}", output::item_line(item, locale, true));
        }
        return;
    }

    let page = Page::from(category);
    println!("{} ({})", output::header(page.title(labels), page.subtitle(labels)), items.len());
    for item in items {
        println!();
        for line in output::item_card(item, locale) {
            println!("{line}");
        }
    }
}

/// Render items as a pretty-printed JSON array
///
/// # Errors
/// Returns `HubError::Io` if serialization fails.
pub fn render_json(items: &[&CatalogItem], category: Category, locale: Locale) -> Result<String> {
    let records: Vec<ItemRecord> = items
        .iter()
        .map(|item| ItemRecord::new(item, category, locale))
        .collect();
    serde_json::to_string_pretty(&records).map_err(|e| HubError::Io(io::Error::from(e)))
}

/// Render items as CSV with a header row; tags are joined with `;`
///
/// # Errors
/// Returns `HubError::Io` if a record cannot be written.
pub fn render_csv(items: &[&CatalogItem], category: Category, locale: Locale) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    let csv_err = |e: csv::Error| HubError::Io(io::Error::from(e));

    writer
        .write_record([
            "id",
            "category",
            "name",
            "description",
            "author",
            "tags",
            "detail_url",
            "download_url",
        ])
        .map_err(csv_err)?;

    for item in items {
        let record = ItemRecord::new(item, category, locale);
        let category = record.category.to_string();
        let tags = record.tags.join(";");
        writer
            .write_record([
                record.id,
                category.as_str(),
                record.name,
                record.description.unwrap_or_default(),
                record.author,
                tags.as_str(),
                record.detail_url.unwrap_or_default(),
                record.download_url.unwrap_or_default(),
            ])
            .map_err(csv_err)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| HubError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| HubError::InvalidInput(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::TagMatchMode;
    use crate::testing::item;

    fn sample() -> CatalogItem {
        let mut one = item("p1", "Reverb", "audio,effect");
        one.name_localized = Some("Reverb EN".into());
        one.author = Some("kiri".into());
        one.download_url = Some("https://example.com/reverb.zip".into());
        one.detail_url = Some("#".into());
        one
    }

    #[test]
    fn test_json_resolves_locale_and_links() {
        let one = sample();
        let json = render_json(&[&one], Category::Plugins, Locale::En).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let record = &value[0];
        assert_eq!(record["id"], "p1");
        assert_eq!(record["category"], "plugins");
        assert_eq!(record["name"], "Reverb EN");
        assert_eq!(record["author"], "kiri");
        assert_eq!(record["tags"], serde_json::json!(["audio", "effect"]));
        assert!(record["detail_url"].is_null());
        assert_eq!(record["download_url"], "https://example.com/reverb.zip");
    }

    #[test]
    fn test_csv_has_header_and_joined_tags() {
        let one = sample();
        let two = item("p2", "Blur", "");
        let csv = render_csv(&[&one, &two], Category::Plugins, Locale::Ja).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("id,category,name"));
        assert!(lines[1].contains("audio;effect"));
        assert!(lines[1].contains("Reverb,"));
        assert!(lines[2].starts_with("p2,plugins,Blur,"));
    }

    #[test]
    fn test_empty_list_renders_empty_array() {
        assert_eq!(render_json(&[], Category::Scripts, Locale::Ja).unwrap(), "[]");
    }

    #[test]
    fn test_execute_filters_before_rendering() {
        let store = CatalogStore::new(vec![sample(), item("p2", "Blur", "video")], Vec::new());
        let filter = FilterState::new(TagMatchMode::Any).with_tags(["video"]);
        assert!(execute(&store, Category::Plugins, &filter, Locale::Ja, ListFormat::Json, true).is_ok());
    }
}
