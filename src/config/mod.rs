//! Configuration module for cathub
//!
//! Holds the content API coordinates and presentation defaults. The
//! configuration file lives in the user's config directory and every field
//! can be overridden with a `CATHUB_`-prefixed environment variable, e.g.
//! `CATHUB_SERVICE_DOMAIN` or `CATHUB_API_KEY`.

mod setup;

pub use setup::first_time_setup;

use crate::HubError;
use crate::fetch::{ApiEndpoint, DEFAULT_PAGE_LIMIT};
use crate::filter::TagMatchMode;
use crate::session::ViewMode;
use config::{Config, ConfigError, Environment, File, FileFormat};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Service domain shipped in a fresh configuration; treated as unset
pub const PLACEHOLDER_DOMAIN: &str = "YOUR_SERVICE_DOMAIN";

/// Prefix of the environment overrides
pub const ENV_PREFIX: &str = "CATHUB";

/// Keys accepted by `config set`
pub const SETTABLE_KEYS: [&str; 9] = [
    "service_domain",
    "api_key",
    "base_url",
    "page_limit",
    "form_url",
    "guide_dir",
    "default_tag_mode",
    "default_view",
    "quiet",
];

fn default_service_domain() -> String {
    PLACEHOLDER_DOMAIN.to_string()
}

const fn default_page_limit() -> usize {
    DEFAULT_PAGE_LIMIT
}

/// Application configuration structure
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct HubConfig {
    /// Content API service domain (`<domain>.microcms.io`)
    #[serde(default = "default_service_domain")]
    pub service_domain: String,

    /// Content API key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Full API base URL, overriding the one derived from the domain
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Records fetched per category
    #[serde(default = "default_page_limit")]
    pub page_limit: usize,

    /// Information-submission form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form_url: Option<String>,

    /// Directory holding the installation guide files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guide_dir: Option<PathBuf>,

    /// Tag match mode a new session starts with
    #[serde(default)]
    pub default_tag_mode: TagMatchMode,

    /// Item layout a new browse view starts with
    #[serde(default)]
    pub default_view: ViewMode,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            service_domain: default_service_domain(),
            api_key: None,
            base_url: None,
            page_limit: DEFAULT_PAGE_LIMIT,
            form_url: None,
            guide_dir: None,
            default_tag_mode: TagMatchMode::default(),
            default_view: ViewMode::default(),
            quiet: false,
        }
    }
}

impl fmt::Debug for HubConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HubConfig")
            .field("service_domain", &self.service_domain)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("page_limit", &self.page_limit)
            .field("form_url", &self.form_url)
            .field("guide_dir", &self.guide_dir)
            .field("default_tag_mode", &self.default_tag_mode)
            .field("default_view", &self.default_view)
            .field("quiet", &self.quiet)
            .finish()
    }
}

impl HubConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("cathub").join("config.toml"))
    }

    /// Load configuration from the default file and the process environment
    ///
    /// A missing file is not an error; defaults apply.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file or an override cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path` and the process environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file or an override cannot be parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::load_layered(path, Environment::with_prefix(ENV_PREFIX))
    }

    /// Load configuration from `path` overlaid by `env`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file or an override cannot be parsed.
    pub fn load_layered(path: &Path, env: Environment) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(env.try_parsing(false))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to the default file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Whether the service domain and API key are both set
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.missing_setting().is_none()
    }

    fn missing_setting(&self) -> Option<&'static str> {
        let domain = self.service_domain.trim();
        let has_base = self.base_url.as_deref().is_some_and(|b| !b.trim().is_empty());
        if !has_base && (domain.is_empty() || domain == PLACEHOLDER_DOMAIN) {
            return Some("service_domain");
        }
        if self.api_key.as_deref().is_none_or(|k| k.trim().is_empty()) {
            return Some("api_key");
        }
        None
    }

    /// Content API endpoint described by this configuration
    ///
    /// # Errors
    ///
    /// Returns `HubError::NotConfigured` if the domain is unset or still the
    /// placeholder, or if no API key is set.
    pub fn endpoint(&self) -> Result<ApiEndpoint, HubError> {
        if let Some(key) = self.missing_setting() {
            return Err(HubError::NotConfigured(format!(
                "'{key}' is not set; run `cathub config init` or set {ENV_PREFIX}_{}",
                key.to_uppercase()
            )));
        }

        let api_key = SecretString::from(self.api_key.clone().unwrap_or_default());
        let endpoint = match self.base_url.as_deref().map(str::trim).filter(|b| !b.is_empty()) {
            Some(base) => ApiEndpoint {
                base_url: base.to_string(),
                api_key,
                page_limit: self.page_limit,
            },
            None => ApiEndpoint::for_service_domain(self.service_domain.trim(), api_key, self.page_limit),
        };
        Ok(endpoint)
    }

    /// Update one setting by key
    ///
    /// An empty value clears an optional setting.
    ///
    /// # Errors
    ///
    /// Returns `HubError::InvalidInput` for an unknown key or a value that
    /// does not parse.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<(), HubError> {
        let value = value.trim();
        let optional = |v: &str| (!v.is_empty()).then(|| v.to_string());

        match key {
            "service_domain" => {
                self.service_domain = if value.is_empty() {
                    default_service_domain()
                } else {
                    value.to_string()
                };
            }
            "api_key" => self.api_key = optional(value),
            "base_url" => self.base_url = optional(value),
            "form_url" => self.form_url = optional(value),
            "guide_dir" => self.guide_dir = optional(value).map(PathBuf::from),
            "page_limit" => {
                self.page_limit = value
                    .parse::<usize>()
                    .ok()
                    .filter(|n| *n > 0)
                    .ok_or_else(|| HubError::InvalidInput(format!("page_limit must be a positive integer, got '{value}'")))?;
            }
            "default_tag_mode" => self.default_tag_mode = value.parse().map_err(HubError::InvalidInput)?,
            "default_view" => self.default_view = value.parse().map_err(HubError::InvalidInput)?,
            "quiet" => {
                self.quiet = value
                    .parse()
                    .map_err(|_| HubError::InvalidInput(format!("quiet must be true or false, got '{value}'")))?;
            }
            other => {
                return Err(HubError::InvalidInput(format!(
                    "Unknown setting '{other}' (expected one of: {})",
                    SETTABLE_KEYS.join(", ")
                )));
            }
        }
        Ok(())
    }
}
