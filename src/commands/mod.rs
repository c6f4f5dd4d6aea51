//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI args
//! and runs the operation against the catalog, the configuration or the
//! preferences file.

pub mod browse;
pub mod completions;
pub mod config;
pub mod guide;
pub mod info;
pub mod lang;
pub mod list;
pub mod open;
pub mod tags;

// Re-export execute functions for convenience
pub use browse::execute as browse;
pub use completions::execute as completions;
pub use config::execute as config;
pub use guide::execute as guide;
pub use info::execute as info;
pub use lang::execute as lang;
pub use list::execute as list;
pub use open::execute as open;
pub use tags::execute as tags;

use crate::HubError;
use crate::catalog::CatalogStore;
use crate::config::HubConfig;
use crate::fetch::{self, HttpCatalogClient};
use tokio::runtime::Runtime;

/// HTTP client for the configured content API
///
/// # Errors
/// Returns `HubError::NotConfigured` if the domain or key is missing, or
/// `HubError::Fetch` if the client cannot be built.
pub fn catalog_client(config: &HubConfig) -> Result<HttpCatalogClient, HubError> {
    let endpoint = config.endpoint()?;
    Ok(HttpCatalogClient::new(endpoint)?)
}

/// Fetch both categories from the configured content API
///
/// # Errors
/// Returns `HubError` if the API is not configured or either fetch fails.
pub fn load_store(config: &HubConfig, runtime: &Runtime) -> Result<CatalogStore, HubError> {
    let client = catalog_client(config)?;
    Ok(runtime.block_on(fetch::load_catalog(&client))?)
}
