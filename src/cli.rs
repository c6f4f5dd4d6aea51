//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for cathub using the `clap`
//! crate.
//!
//! # Commands
//!
//! - **browse**: Interactive catalog view (default)
//! - **list**: Print the filtered items of one category
//! - **tags**: Print the tag universe of one category
//! - **open**: Open the detail or download links of items by id
//! - **guide**, **info**: The two informational pages
//! - **lang**, **config**, **completions**: Settings and shell integration
//!
//! # Examples
//!
//! ```bash
//! # Browse plugins tagged "audio" or "video"
//! cathub browse -t audio -t video
//!
//! # Scripts carrying both tags, as JSON
//! cathub list --category scripts -t audio -t effect --all --format json
//!
//! # Download everything matching a search
//! cathub -q list --search reverb | xargs cathub open --download
//! ```

use crate::catalog::Category;
use crate::filter::TagMatchMode;
use crate::locale::Locale;
use crate::nav::Page;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Output format of the list command
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListFormat {
    /// Colored, human-readable cards
    #[default]
    Text,
    /// JSON array of items
    Json,
    /// CSV with a header row
    Csv,
}

/// Filter flags shared by browse and list
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Case-insensitive text matched against names and descriptions
    #[arg(short = 's', long = "search", value_name = "QUERY")]
    pub search: Option<String>,

    /// Tags to filter by (can specify multiple: -t tag1 -t tag2)
    #[arg(short = 't', long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Require ALL tags instead of ANY
    #[arg(long = "all", conflicts_with = "any")]
    pub all: bool,

    /// Require ANY of the tags (overrides a configured default of all)
    #[arg(long = "any", conflicts_with = "all")]
    pub any: bool,
}

impl FilterArgs {
    /// Tag mode requested on the command line, falling back to `default`
    #[must_use]
    pub const fn tag_mode(&self, default: TagMatchMode) -> TagMatchMode {
        if self.all {
            TagMatchMode::All
        } else if self.any {
            TagMatchMode::Any
        } else {
            default
        }
    }
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "cathub")]
#[command(about = "Browse plugin and script catalogs from a headless CMS", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Log debug output to stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Display language for this run (does not change the saved preference)
    #[arg(long = "lang", value_name = "LANG", global = true, value_parser = parse_locale)]
    pub lang: Option<Locale>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Open the interactive catalog view (default)
    #[command(visible_alias = "b")]
    Browse {
        /// Page to start on (plugins, scripts, install, info; '#' prefix accepted)
        #[arg(short = 'p', long = "page", value_name = "PAGE", value_parser = parse_page)]
        page: Option<Page>,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// List the items of a category that pass the filter
    #[command(visible_alias = "ls")]
    List {
        /// Category to list
        #[arg(short = 'c', long = "category", value_name = "CATEGORY", default_value = "plugins", value_parser = parse_category)]
        category: Category,

        #[command(flatten)]
        filter: FilterArgs,

        /// Output format
        #[arg(short = 'f', long = "format", value_enum, default_value_t = ListFormat::Text)]
        format: ListFormat,
    },

    /// List the tags of a category, sorted
    Tags {
        /// Category to read tags from
        #[arg(short = 'c', long = "category", value_name = "CATEGORY", default_value = "plugins", value_parser = parse_category)]
        category: Category,

        /// Show how many items carry each tag
        #[arg(long = "counts")]
        counts: bool,
    },

    /// Open the detail or download link of items by id
    Open {
        /// Item ids (from `cathub -q list`)
        #[arg(value_name = "ID", required = true)]
        ids: Vec<String>,

        /// Open download links instead of detail pages
        #[arg(short = 'd', long = "download", conflicts_with = "detail")]
        download: bool,

        /// Open detail pages (default)
        #[arg(long = "detail", conflicts_with = "download")]
        detail: bool,
    },

    /// Show the installation guide
    Guide,

    /// Show how to submit information about missing items
    Info {
        /// Open the submission form in the browser
        #[arg(long = "open")]
        open: bool,
    },

    /// Show or set the saved display language
    Lang {
        /// Language to save (ja or en)
        #[arg(value_name = "LANG", value_parser = parse_locale)]
        locale: Option<Locale>,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Print shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Configuration subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Run the interactive setup wizard
    Init,
    /// Print the effective configuration
    Show,
    /// Print the configuration file path
    Path,
    /// Set one configuration value
    Set {
        /// Setting name (e.g. service_domain, api_key, default_tag_mode)
        #[arg(value_name = "KEY")]
        key: String,
        /// New value; empty clears an optional setting
        #[arg(value_name = "VALUE")]
        value: String,
    },
}

fn parse_locale(s: &str) -> Result<Locale, String> {
    s.parse()
}

fn parse_category(s: &str) -> Result<Category, String> {
    s.parse()
}

fn parse_page(s: &str) -> Result<Page, String> {
    let page = Page::from_fragment(s);
    if page.token() == s.trim().trim_start_matches('#') {
        Ok(page)
    } else {
        Err(format!("Unknown page '{s}' (expected plugins, scripts, install or info)"))
    }
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Browse if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Browse {
            page: None,
            filter: FilterArgs::default(),
        })
    }
}
