//! Config command - inspect and edit the configuration file

use crate::{
    HubError,
    cli::ConfigCommands,
    config::{self, ENV_PREFIX, HubConfig},
};
use ::config::Environment;
use std::collections::HashMap;
use std::path::Path;

type Result<T> = std::result::Result<T, HubError>;

/// Execute a config subcommand against the default configuration file
///
/// `effective` is the configuration in force for this run, environment
/// overrides included; it is what `show` prints.
///
/// # Errors
/// Returns `HubError` if the file cannot be read or written, the setup
/// wizard fails, or `set` gets an unknown key or a bad value.
pub fn execute(effective: &HubConfig, command: &ConfigCommands, quiet: bool) -> Result<()> {
    let path = HubConfig::config_path()?;
    execute_at(&path, effective, command, quiet)
}

/// Execute a config subcommand against the configuration file at `path`
///
/// # Errors
/// See [`execute`].
pub fn execute_at(path: &Path, effective: &HubConfig, command: &ConfigCommands, quiet: bool) -> Result<()> {
    match command {
        ConfigCommands::Init => {
            let config = config::first_time_setup(file_only(path)?)?;
            if !quiet {
                println!("Configuration saved to {}", path.display());
                if !config.is_configured() {
                    println!("The API is not fully configured yet; catalog commands will fail until it is.");
                }
            }
        }
        ConfigCommands::Show => {
            println!("{effective:#?}");
        }
        ConfigCommands::Path => {
            println!("{}", path.display());
        }
        ConfigCommands::Set { key, value } => {
            let mut config = file_only(path)?;
            config.set_value(key, value)?;
            config.save_to(path)?;
            if !quiet {
                let shown = if key == "api_key" { "[REDACTED]" } else { value.trim() };
                println!("Set {key} = {shown}");
            }
        }
    }
    Ok(())
}

/// The configuration as written in the file, without environment overrides
///
/// Edits start from this so that `CATHUB_*` variables are never persisted.
fn file_only(path: &Path) -> Result<HubConfig> {
    let no_env = Environment::with_prefix(ENV_PREFIX).source(Some(HashMap::new()));
    Ok(HubConfig::load_layered(path, no_env)?)
}
