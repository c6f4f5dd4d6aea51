//! cathub - a tag-based browser for plugin and script catalogs
//!
//! This library fetches two catalogs (plugins and scripts) from a headless
//! content API, resolves their bilingual fields for the active locale, and
//! filters them by free text and tags. A [`session::HubSession`] ties the
//! pieces together for the interactive view; the CLI commands use the same
//! building blocks directly.

use thiserror::Error;

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod dispatch;
pub mod fetch;
pub mod filter;
pub mod guide;
pub mod locale;
pub mod nav;
pub mod output;
pub mod prefs;
pub mod selection;
pub mod session;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum HubError {
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// The content API coordinates are missing
    #[error("Not configured: {0}")]
    NotConfigured(String),
    /// Catalog fetch error
    #[error("Fetch error: {0}")]
    Fetch(#[from] fetch::FetchError),
    /// Interactive view error
    #[error("UI error: {0}")]
    Ui(#[from] ui::UiError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Pager error
    #[error("Pager error: {0}")]
    Pager(#[from] minus::error::MinusError),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
