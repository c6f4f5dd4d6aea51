//! Browse command - interactive catalog view

use crate::{
    HubError,
    cli::FilterArgs,
    config::HubConfig,
    dispatch::SystemOpener,
    locale::Locale,
    nav::Page,
    session::HubSession,
    ui::{BrowseApp, CatalogAccess},
};
use tokio::runtime::Runtime;
use tracing::debug;

type Result<T> = std::result::Result<T, HubError>;

/// Startup options of the browse view
#[derive(Debug, Clone, Default)]
pub struct BrowseOptions {
    /// Page to open first
    pub page: Option<Page>,
    /// Initial search and tag filter
    pub filter: FilterArgs,
    /// Locale given with `--lang`; a one-shot override that is never saved
    pub locale_override: Option<Locale>,
}

/// Build the session the browse view starts with
///
/// Tags from the command line are applied after the catalog loads, so they
/// are kept here unpruned.
#[must_use]
pub fn initial_session(config: &HubConfig, locale: Locale, options: &BrowseOptions) -> HubSession {
    let mut session = HubSession::new(
        locale,
        options.filter.tag_mode(config.default_tag_mode),
        config.default_view,
    )
    .with_guide_dir(config.guide_dir.clone());

    if let Some(page) = options.page {
        session.navigate(page);
    }
    if let Some(query) = &options.filter.search {
        session.set_search(query.clone());
    }
    for tag in &options.filter.tags {
        session.toggle_tag(tag);
    }
    session
}

/// Execute the browse command
///
/// A missing API configuration does not abort: the view opens and shows the
/// reason in its error state.
///
/// # Errors
/// Returns `HubError::Ui` if the terminal cannot be driven, or
/// `HubError::Fetch` if the HTTP client cannot be built.
pub fn execute(
    config: &HubConfig,
    locale: Locale,
    options: &BrowseOptions,
    runtime: &Runtime,
) -> Result<()> {
    let session = initial_session(config, locale, options);

    let client = match super::catalog_client(config) {
        Ok(client) => Ok(client),
        Err(HubError::NotConfigured(message)) => Err(message),
        Err(e) => return Err(e),
    };
    let access = match &client {
        Ok(client) => CatalogAccess::Source(client),
        Err(message) => CatalogAccess::NotConfigured(message.clone()),
    };

    let opener = SystemOpener;
    let app = BrowseApp::new(session, access, &opener, runtime)
        .with_form_url(config.form_url.clone())
        .persist_locale(options.locale_override.is_none());

    let session = app.run()?;
    debug!(
        page = %session.page(),
        locale = %session.locale(),
        selected = session.selection().count(),
        "browse view closed"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::TagMatchMode;

    #[test]
    fn test_initial_session_applies_cli_filter() {
        let config = HubConfig::default();
        let options = BrowseOptions {
            page: Some(Page::Scripts),
            filter: FilterArgs {
                search: Some("reverb".into()),
                tags: vec!["audio".into()],
                all: true,
                any: false,
            },
            locale_override: None,
        };

        let session = initial_session(&config, Locale::En, &options);
        assert_eq!(session.page(), Page::Scripts);
        assert_eq!(session.locale(), Locale::En);
        assert_eq!(session.filter().search_query, "reverb");
        assert!(session.filter().is_tag_selected("audio"));
        assert_eq!(session.filter().tag_mode, TagMatchMode::All);
    }

    #[test]
    fn test_initial_session_uses_config_defaults() {
        let config = HubConfig {
            default_tag_mode: TagMatchMode::All,
            ..HubConfig::default()
        };
        let session = initial_session(&config, Locale::Ja, &BrowseOptions::default());
        assert_eq!(session.page(), Page::Plugins);
        assert_eq!(session.filter().tag_mode, TagMatchMode::All);
        assert_eq!(session.view_mode(), config.default_view);
    }
}
