//! Pages and their URL-fragment tokens

use crate::catalog::Category;
use crate::locale::Labels;
use std::fmt;

/// One of the four navigable pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Plugins,
    Scripts,
    Install,
    Info,
}

impl Page {
    /// Every page, in navigation order
    pub const ALL: [Self; 4] = [Self::Plugins, Self::Scripts, Self::Install, Self::Info];

    /// Parse a URL fragment (`#scripts` or `scripts`)
    ///
    /// Unrecognized tokens fall back to the plugins page.
    #[must_use]
    pub fn from_fragment(fragment: &str) -> Self {
        match fragment.trim().trim_start_matches('#') {
            "scripts" => Self::Scripts,
            "install" => Self::Install,
            "info" => Self::Info,
            _ => Self::Plugins,
        }
    }

    /// Token without the leading `#`
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Plugins => "plugins",
            Self::Scripts => "scripts",
            Self::Install => "install",
            Self::Info => "info",
        }
    }

    /// URL fragment for this page
    #[must_use]
    pub fn fragment(self) -> String {
        format!("#{}", self.token())
    }

    /// Catalog category shown on this page, if it is a catalog page
    #[must_use]
    pub const fn category(self) -> Option<Category> {
        match self {
            Self::Plugins => Some(Category::Plugins),
            Self::Scripts => Some(Category::Scripts),
            Self::Install | Self::Info => None,
        }
    }

    /// Next page, wrapping around
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Plugins => Self::Scripts,
            Self::Scripts => Self::Install,
            Self::Install => Self::Info,
            Self::Info => Self::Plugins,
        }
    }

    /// Previous page, wrapping around
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Plugins => Self::Info,
            Self::Scripts => Self::Plugins,
            Self::Install => Self::Scripts,
            Self::Info => Self::Install,
        }
    }

    /// Localized navigation title
    #[must_use]
    pub const fn title(self, labels: &Labels) -> &'static str {
        match self {
            Self::Plugins => labels.nav_plugins,
            Self::Scripts => labels.nav_scripts,
            Self::Install => labels.nav_install,
            Self::Info => labels.nav_info,
        }
    }

    /// Localized page subtitle
    #[must_use]
    pub const fn subtitle(self, labels: &Labels) -> &'static str {
        match self {
            Self::Plugins => labels.plugins_subtitle,
            Self::Scripts => labels.scripts_subtitle,
            Self::Install => labels.install_subtitle,
            Self::Info => labels.info_subtitle,
        }
    }
}

impl From<Category> for Page {
    fn from(category: Category) -> Self {
        match category {
            Category::Plugins => Self::Plugins,
            Category::Scripts => Self::Scripts,
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
