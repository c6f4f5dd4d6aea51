//! Info command - how to submit information about missing items

use crate::{HubError, config::HubConfig, dispatch::LinkOpener, locale::Locale, nav::Page, output};
use colored::Colorize;

type Result<T> = std::result::Result<T, HubError>;

/// Execute the info command
///
/// # Errors
/// Returns `HubError::InvalidInput` if `open` is requested without a
/// configured form URL, or if the form cannot be opened.
pub fn execute(
    config: &HubConfig,
    locale: Locale,
    open: bool,
    opener: &dyn LinkOpener,
    quiet: bool,
) -> Result<()> {
    let labels = locale.labels();
    let form_url = config.form_url.as_deref().map(str::trim).filter(|u| !u.is_empty());

    if !quiet {
        println!("{}", output::header(Page::Info.title(labels), Page::Info.subtitle(labels)));
        println!();
        println!("{}", labels.info_form_text);
    }

    match form_url {
        Some(url) => {
            if quiet {
                println!("{url}");
            } else {
                println!("  {}: {}", labels.info_form_button, url.cyan().underline());
            }
            if open {
                opener.open(url).map_err(HubError::InvalidInput)?;
            }
            Ok(())
        }
        None if open => Err(HubError::InvalidInput(
            "No form_url configured; run `cathub config set form_url <URL>`".to_string(),
        )),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingOpener;

    #[test]
    fn test_open_uses_form_url() {
        let config = HubConfig {
            form_url: Some(" https://forms.example.com/x ".into()),
            ..HubConfig::default()
        };
        let opener = RecordingOpener::default();
        execute(&config, Locale::Ja, true, &opener, true).unwrap();
        assert_eq!(opener.opened(), vec!["https://forms.example.com/x"]);
    }

    #[test]
    fn test_open_without_form_url_fails() {
        let opener = RecordingOpener::default();
        let result = execute(&HubConfig::default(), Locale::En, true, &opener, true);
        assert!(matches!(result, Err(HubError::InvalidInput(_))));
        assert!(execute(&HubConfig::default(), Locale::En, false, &opener, true).is_ok());
    }
}
