//! Persisted user preference
//!
//! Only the display language survives restarts. The file lives next to the
//! configuration and is rewritten on every successful language switch.

use crate::locale::Locale;
use config::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Stored preferences
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub locale: Locale,
}

impl Preferences {
    /// Path of the preferences file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;
        Ok(config_dir.join("cathub").join("prefs.toml"))
    }

    /// Load preferences, falling back to defaults on any problem
    #[must_use]
    pub fn load() -> Self {
        match Self::path() {
            Ok(path) => Self::load_from(&path),
            Err(e) => {
                warn!("preferences unavailable: {e}");
                Self::default()
            }
        }
    }

    /// Load preferences from `path`, falling back to defaults
    ///
    /// A missing file is normal on first run; an unreadable or malformed
    /// one is logged and ignored.
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match fs::read_to_string(path).map_err(|e| e.to_string()).and_then(|text| {
            toml::from_str::<Self>(&text).map_err(|e| e.to_string())
        }) {
            Ok(prefs) => prefs,
            Err(e) => {
                warn!(path = %path.display(), "ignoring unreadable preferences: {e}");
                Self::default()
            }
        }
    }

    /// Save preferences to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    /// Save preferences to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the directory cannot be created, the
    /// preferences cannot be serialized, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let text = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize preferences: {e}")))?;

        fs::write(path, text)
            .map_err(|e| ConfigError::Message(format!("Failed to write preferences: {e}")))
    }
}
