//! Interactive setup wizard for first-time configuration
//!
//! Prompts for the content API coordinates and writes the configuration
//! file. Run through `cathub config init`.

use super::{HubConfig, PLACEHOLDER_DOMAIN};
use config::ConfigError;
use dialoguer::{Input, Password, theme::ColorfulTheme};
use std::path::PathBuf;

fn input_error(e: dialoguer::Error) -> ConfigError {
    ConfigError::Message(format!("Failed to read input: {e}"))
}

/// Interactive first-time setup
///
/// Starts from `current` so re-running the wizard keeps existing answers as
/// defaults:
/// 1. Prompts for the service domain
/// 2. Prompts for the API key (hidden input; empty keeps the current key)
/// 3. Prompts for the information form URL and guide directory
/// 4. Saves the configuration
///
/// # Errors
///
/// Returns `ConfigError` if user input cannot be read or the configuration
/// cannot be saved.
pub fn first_time_setup(current: HubConfig) -> Result<HubConfig, ConfigError> {
    println!("Welcome to cathub! Let's connect to your catalog.\n");

    let theme = ColorfulTheme::default();
    let mut config = current;

    let domain_default = if config.service_domain == PLACEHOLDER_DOMAIN {
        String::new()
    } else {
        config.service_domain.clone()
    };
    config.service_domain = Input::with_theme(&theme)
        .with_prompt("Service domain (<domain>.microcms.io)")
        .with_initial_text(domain_default)
        .interact_text()
        .map_err(input_error)?;

    let api_key: String = Password::with_theme(&theme)
        .with_prompt("API key (leave empty to keep the current one)")
        .allow_empty_password(true)
        .interact()
        .map_err(input_error)?;
    if !api_key.trim().is_empty() {
        config.api_key = Some(api_key.trim().to_string());
    }

    let form_url: String = Input::with_theme(&theme)
        .with_prompt("Information form URL (optional)")
        .with_initial_text(config.form_url.clone().unwrap_or_default())
        .allow_empty(true)
        .interact_text()
        .map_err(input_error)?;
    config.form_url = Some(form_url.trim().to_string()).filter(|u| !u.is_empty());

    let default_guide_dir = config
        .guide_dir
        .clone()
        .or_else(crate::guide::default_guide_dir)
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_default();
    let guide_dir: String = Input::with_theme(&theme)
        .with_prompt("Installation guide directory")
        .default(default_guide_dir)
        .allow_empty(true)
        .interact_text()
        .map_err(input_error)?;
    config.guide_dir = Some(guide_dir.trim()).filter(|d| !d.is_empty()).map(PathBuf::from);

    config.save()?;

    println!("\nConfiguration saved successfully!");
    Ok(config)
}
