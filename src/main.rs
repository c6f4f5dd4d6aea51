//! cathub CLI application entry point
//!
//! This is the main executable for cathub. It provides an interactive browse
//! view over the plugin and script catalogs plus scriptable commands for
//! listing, filtering and opening items.
//!
//! # Usage
//!
//! ```bash
//! # Browse interactively (default command)
//! cathub
//! cathub browse --page scripts
//!
//! # List items carrying every given tag
//! cathub list -t audio -t effect --all
//!
//! # Show the tag universe with counts, in English
//! cathub --lang en tags --counts
//!
//! # Open download pages of items by id
//! cathub open --download id1 id2
//! ```
//!
//! # Configuration
//!
//! Run `cathub config init` once to enter the content API coordinates. The
//! configuration is stored in the user's config directory
//! (`~/.config/cathub/config.toml` on Linux) and every setting can be
//! overridden with a `CATHUB_<SETTING>` environment variable.
//!
//! # Logging
//!
//! Diagnostics go to stderr and are filtered by `CATHUB_LOG` (tracing
//! `EnvFilter` syntax). The default is `warn`, or `debug` with `-v`.

use cathub::{
    HubError,
    cli::{Cli, Commands},
    commands::{self, browse::BrowseOptions},
    config::HubConfig,
    dispatch::{LinkKind, SystemOpener},
    filter::FilterState,
    prefs::Preferences,
};
use colored::Colorize;
use tokio::runtime::Runtime;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

type Result<T> = std::result::Result<T, HubError>;

/// Environment variable holding the log filter
const LOG_ENV: &str = "CATHUB_LOG";

/// Initialize stderr logging
///
/// The interactive view owns the terminal, so unless a filter is given
/// explicitly nothing is logged while it runs.
fn init_logging(verbose: bool, interactive: bool) {
    let default = match (verbose, interactive) {
        (true, _) => "cathub=debug",
        (false, true) => "off",
        (false, false) => "warn",
    };
    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

/// Main entry point for the cathub application
///
/// Loads configuration and preferences, parses command-line arguments, and
/// dispatches to the appropriate command handler.
///
/// # Errors
///
/// Returns `HubError` if configuration loading fails, the catalog cannot be
/// fetched, or any command handler returns an error.
fn run(cli: Cli) -> Result<()> {
    let command = cli.get_command();
    init_logging(cli.verbose, matches!(command, Commands::Browse { .. }));

    let config = HubConfig::load()?;
    let quiet = cli.quiet || config.quiet;
    let locale = cli.lang.unwrap_or_else(|| Preferences::load().locale);
    debug!(?config, %locale, "configuration loaded");

    let runtime = Runtime::new()?;

    match command {
        Commands::Browse { page, filter } => {
            let options = BrowseOptions {
                page,
                filter,
                locale_override: cli.lang,
            };
            commands::browse(&config, locale, &options, &runtime)
        }
        Commands::List {
            category,
            filter,
            format,
        } => {
            let store = commands::load_store(&config, &runtime)?;
            let state = FilterState::new(filter.tag_mode(config.default_tag_mode))
                .with_search(filter.search.unwrap_or_default())
                .with_tags(filter.tags);
            commands::list(&store, category, &state, locale, format, quiet)
        }
        Commands::Tags { category, counts } => {
            let store = commands::load_store(&config, &runtime)?;
            commands::tags(&store, category, locale, counts, quiet)
        }
        Commands::Open { ids, download, .. } => {
            let store = commands::load_store(&config, &runtime)?;
            let kind = if download {
                LinkKind::Download
            } else {
                LinkKind::Detail
            };
            commands::open(&store, &ids, kind, &SystemOpener, locale, quiet).map(|_| ())
        }
        Commands::Guide => commands::guide(&config, locale, quiet),
        Commands::Info { open } => commands::info(&config, locale, open, &SystemOpener, quiet),
        Commands::Lang { locale } => commands::lang(locale, quiet),
        Commands::Config { command } => commands::config(&config, &command, quiet),
        Commands::Completions { shell } => commands::completions(shell),
    }
}

fn main() {
    let cli = Cli::parse_args();

    if let Err(e) = run(cli) {
        eprintln!("{} {e}", "Error:".red().bold());
        std::process::exit(1);
    }
}
