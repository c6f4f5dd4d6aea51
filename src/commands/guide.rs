//! Guide command - show the installation guide in a pager

use crate::{HubError, config::HubConfig, guide, locale::Locale, nav::Page, output};
use minus::Pager;
use std::io::{self, IsTerminal};

type Result<T> = std::result::Result<T, HubError>;

/// Execute the guide command
///
/// The guide is paged when stdout is a terminal and printed as-is otherwise
/// or in quiet mode.
///
/// # Errors
/// Returns `HubError::Pager` if the pager fails.
pub fn execute(config: &HubConfig, locale: Locale, quiet: bool) -> Result<()> {
    let body = guide_text(config, locale);

    if quiet || !io::stdout().is_terminal() {
        println!("{body}");
        return Ok(());
    }

    let labels = locale.labels();
    let pager = Pager::new();
    pager.set_prompt(Page::Install.title(labels))?;
    pager.set_text(format!(
        "{}\n\n{body}",
        output::header(Page::Install.title(labels), Page::Install.subtitle(labels))
    ))?;
    minus::page_all(pager)?;
    Ok(())
}

/// The guide for `locale`, or the localized "unavailable" placeholder
#[must_use]
pub fn guide_text(config: &HubConfig, locale: Locale) -> String {
    let text = guide::load_guide(config.guide_dir.as_deref(), locale);
    if text.trim().is_empty() {
        locale.labels().guide_unavailable.to_string()
    } else {
        text
    }
}
