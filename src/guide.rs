//! Installation guide loading
//!
//! The guide is a markdown file per locale. Failing to read it never blocks
//! the rest of the application: the caller gets an empty body and shows a
//! placeholder instead.

use crate::locale::Locale;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Guide file for the default locale, also the fallback for others
pub const DEFAULT_GUIDE_FILE: &str = "how_to_install.md";

/// Guide file name for `locale`
#[must_use]
pub fn guide_file_name(locale: Locale) -> String {
    if locale.is_localized() {
        format!("how_to_install.{}.md", locale.code())
    } else {
        DEFAULT_GUIDE_FILE.to_string()
    }
}

/// Default directory holding the guide files
#[must_use]
pub fn default_guide_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("cathub"))
}

/// Load the guide for `locale` from `dir`
///
/// Tries the locale's own file, then [`DEFAULT_GUIDE_FILE`]; returns an
/// empty string if neither can be read.
#[must_use]
pub fn load_guide(dir: Option<&Path>, locale: Locale) -> String {
    let Some(dir) = dir else {
        warn!("no guide directory configured");
        return String::new();
    };

    let mut candidates = vec![dir.join(guide_file_name(locale))];
    if locale.is_localized() {
        candidates.push(dir.join(DEFAULT_GUIDE_FILE));
    }

    for path in &candidates {
        match fs::read_to_string(path) {
            Ok(text) => {
                debug!(path = %path.display(), "loaded installation guide");
                return text;
            }
            Err(e) => debug!(path = %path.display(), "guide candidate unreadable: {e}"),
        }
    }

    warn!(dir = %dir.display(), %locale, "installation guide could not be loaded");
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_guide_file_names() {
        assert_eq!(guide_file_name(Locale::Ja), "how_to_install.md");
        assert_eq!(guide_file_name(Locale::En), "how_to_install.en.md");
    }

    #[test]
    fn test_loads_locale_specific_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("how_to_install.md"), "# 導入").unwrap();
        fs::write(dir.path().join("how_to_install.en.md"), "# Install").unwrap();

        assert_eq!(load_guide(Some(dir.path()), Locale::Ja), "# 導入");
        assert_eq!(load_guide(Some(dir.path()), Locale::En), "# Install");
    }

    #[test]
    fn test_localized_falls_back_to_default_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("how_to_install.md"), "# 導入").unwrap();
        assert_eq!(load_guide(Some(dir.path()), Locale::En), "# 導入");
    }

    #[test]
    fn test_missing_guide_is_empty_not_error() {
        let dir = TempDir::new().unwrap();
        assert!(load_guide(Some(dir.path()), Locale::Ja).is_empty());
        assert!(load_guide(None, Locale::En).is_empty());
    }
}
