//! Tags command - the tag universe of one category

use crate::{
    HubError,
    catalog::{CatalogStore, Category},
    locale::{Locale, resolve_tags, sorted_display_tags},
    output,
};

type Result<T> = std::result::Result<T, HubError>;

/// Execute the tags command
///
/// Tags are the ones the browse view would offer for the category under
/// `locale`, in lexicographic order.
///
/// # Errors
/// Currently infallible; returns `Result` for symmetry with the other commands.
pub fn execute(
    store: &CatalogStore,
    category: Category,
    locale: Locale,
    counts: bool,
    quiet: bool,
) -> Result<()> {
    let tags = sorted_display_tags(store.items(category), locale);

    if tags.is_empty() {
        if !quiet {
            println!("No tags found in {category}.");
        }
        return Ok(());
    }

    if !quiet {
        println!("Tags in {category}:");
    }
    if counts {
        for (tag, count) in tag_counts(store, category, locale, &tags) {
            println!("{}", output::tag_with_count(tag, count, quiet));
        }
    } else {
        for tag in &tags {
            println!("{}", if quiet { tag.clone() } else { format!("  {tag}") });
        }
    }
    Ok(())
}

/// Number of items in `category` displaying each of `tags`
#[must_use]
pub fn tag_counts<'a>(
    store: &CatalogStore,
    category: Category,
    locale: Locale,
    tags: &'a [String],
) -> Vec<(&'a str, usize)> {
    let items = store.items(category);
    tags.iter()
        .map(|tag| {
            let count = items
                .iter()
                .filter(|item| resolve_tags(item, locale).contains(tag))
                .count();
            (tag.as_str(), count)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::item;

    #[test]
    fn test_counts_follow_display_locale() {
        let mut one = item("1", "A", "音声,効果");
        one.tags_localized = Some(vec!["audio".into(), "effect".into()]);
        let two = item("2", "B", "音声");
        let store = CatalogStore::new(vec![one, two], Vec::new());

        let ja = sorted_display_tags(store.items(Category::Plugins), Locale::Ja);
        let counts = tag_counts(&store, Category::Plugins, Locale::Ja, &ja);
        assert!(counts.contains(&("音声", 2)));
        assert!(counts.contains(&("効果", 1)));

        // The second item has no English tags and falls back to its default ones
        let en = sorted_display_tags(store.items(Category::Plugins), Locale::En);
        let counts = tag_counts(&store, Category::Plugins, Locale::En, &en);
        assert_eq!(counts, vec![("audio", 1), ("effect", 1), ("音声", 1)]);
    }

    #[test]
    fn test_empty_category_is_ok() {
        let store = CatalogStore::default();
        assert!(execute(&store, Category::Scripts, Locale::Ja, true, true).is_ok());
    }
}
