//! Lang command - show or save the display language

use crate::{HubError, locale::Locale, prefs::Preferences};
use std::path::Path;

type Result<T> = std::result::Result<T, HubError>;

/// Execute the lang command against the default preferences file
///
/// # Errors
/// Returns `HubError::Config` if the preference cannot be saved.
pub fn execute(locale: Option<Locale>, quiet: bool) -> Result<()> {
    let path = Preferences::path()?;
    execute_at(&path, locale, quiet)
}

/// Execute the lang command against the preferences file at `path`
///
/// Without a locale the saved one is printed; with one it is saved.
///
/// # Errors
/// Returns `HubError::Config` if the preference cannot be saved.
pub fn execute_at(path: &Path, locale: Option<Locale>, quiet: bool) -> Result<()> {
    let mut prefs = Preferences::load_from(path);

    let Some(locale) = locale else {
        println!("{}", prefs.locale);
        return Ok(());
    };

    prefs.locale = locale;
    prefs.save_to(path)?;
    if !quiet {
        println!("Language set to {locale}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_then_read_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.toml");

        execute_at(&path, Some(Locale::En), true).unwrap();
        assert_eq!(Preferences::load_from(&path).locale, Locale::En);

        execute_at(&path, None, true).unwrap();
        assert_eq!(Preferences::load_from(&path).locale, Locale::En);
    }
}
