//! Open command - batch open item links by id

use crate::{
    HubError,
    catalog::CatalogStore,
    dispatch::{self, DispatchOutcome, LinkKind, LinkOpener},
    locale::Locale,
};
use colored::Colorize;

type Result<T> = std::result::Result<T, HubError>;

/// Execute the open command
///
/// Unknown ids and items without a usable link are skipped. When nothing at
/// all can be opened the "no information" notice is printed instead.
///
/// # Errors
/// Returns `HubError::InvalidInput` if every attempted link failed to open.
pub fn execute(
    store: &CatalogStore,
    ids: &[String],
    kind: LinkKind,
    opener: &dyn LinkOpener,
    locale: Locale,
    quiet: bool,
) -> Result<DispatchOutcome> {
    let outcome = dispatch::batch_open(kind, ids.iter().map(String::as_str), store, opener);

    for error in &outcome.errors {
        eprintln!("{} {error}", "✗".red());
    }

    if outcome.opened == 0 && !outcome.errors.is_empty() {
        return Err(HubError::InvalidInput(format!(
            "could not open any of {} {kind} link(s)",
            outcome.requested
        )));
    }

    if outcome.no_links_available() {
        let labels = locale.labels();
        println!("{}", labels.no_info_title.yellow().bold());
        println!("{}", labels.no_info_text);
        return Ok(outcome);
    }

    if !quiet {
        println!(
            "{} Opened {} of {} {kind} link(s)",
            "✓".green(),
            outcome.opened,
            outcome.requested
        );
        if !outcome.skipped.is_empty() {
            println!("  Skipped (no link): {}", outcome.skipped.join(", ").dimmed());
        }
    }
    Ok(outcome)
}
