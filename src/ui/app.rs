//! Browse view event loop and rendering

use super::error::{Result, UiError};
use super::events::{EventResult, poll_and_handle};
use super::state::{BrowseState, FocusPane, MessageLevel, Notice};
use super::theme::Theme;
use super::widgets::{HelpBar, ItemList, KeyHint, NoticePopup, SearchBar, StatusBar, TagPanel, TextPage};
use crate::dispatch::{LinkKind, LinkOpener};
use crate::fetch::{self, CatalogSource};
use crate::nav::Page;
use crate::prefs::Preferences;
use crate::session::{HubSession, LoadError, LoadState};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
};
use std::io::{self, IsTerminal, Stdout};
use std::time::Duration;
use tokio::runtime::Runtime;
use tracing::warn;

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Where the browse view gets its catalog from
pub enum CatalogAccess<'a> {
    /// A configured source, fetched on start and on every reload
    Source(&'a dyn CatalogSource),
    /// The source is not configured; every load fails with this message
    NotConfigured(String),
}

/// Interactive browse view over a [`HubSession`]
pub struct BrowseApp<'a> {
    session: HubSession,
    state: BrowseState,
    theme: Theme,
    access: CatalogAccess<'a>,
    opener: &'a dyn LinkOpener,
    runtime: &'a Runtime,
    form_url: Option<String>,
    persist_locale: bool,
}

impl<'a> BrowseApp<'a> {
    #[must_use]
    pub fn new(
        session: HubSession,
        access: CatalogAccess<'a>,
        opener: &'a dyn LinkOpener,
        runtime: &'a Runtime,
    ) -> Self {
        let query = session.filter().search_query.clone();
        Self {
            session,
            state: BrowseState::new(query),
            theme: Theme::default(),
            access,
            opener,
            runtime,
            form_url: None,
            persist_locale: true,
        }
    }

    #[must_use]
    pub fn with_form_url(mut self, form_url: Option<String>) -> Self {
        self.form_url = form_url;
        self
    }

    /// Whether a locale switch is written to the preferences file
    #[must_use]
    pub const fn persist_locale(mut self, persist: bool) -> Self {
        self.persist_locale = persist;
        self
    }

    /// Run the view until the user quits, returning the final session
    ///
    /// The terminal is restored even when the loop fails.
    ///
    /// # Errors
    ///
    /// Returns `UiError` if stdout is not a terminal or terminal I/O fails.
    pub fn run(mut self) -> Result<HubSession> {
        if !io::stdout().is_terminal() {
            return Err(UiError::NotATerminal);
        }

        let mut terminal = setup_terminal()?;
        let result = self.run_loop(&mut terminal);

        if let Err(e) = cleanup_terminal() {
            eprintln!("Warning: terminal cleanup failed: {e}");
        }

        result.map(|()| self.session)
    }

    fn run_loop(&mut self, terminal: &mut Term) -> Result<()> {
        if !self.session.load_state().is_ready() {
            self.reload(terminal)?;
        }

        loop {
            self.state.prune_messages();
            terminal.draw(|frame| self.render(frame))?;

            match poll_and_handle(&mut self.state, &mut self.session, Duration::from_millis(100))? {
                EventResult::Quit => return Ok(()),
                EventResult::Reload => self.reload(terminal)?,
                EventResult::Open(kind) => self.open(kind),
                EventResult::LocaleChanged => self.save_locale(),
                EventResult::Continue | EventResult::Ignored => {}
            }
        }
    }

    /// Fetch the catalog, drawing the loading state first
    fn reload(&mut self, terminal: &mut Term) -> Result<()> {
        let source = match &self.access {
            CatalogAccess::Source(source) => Some(*source),
            CatalogAccess::NotConfigured(message) => {
                self.session
                    .apply_load(Err(LoadError::NotConfigured(message.clone())));
                None
            }
        };

        if let Some(source) = source {
            self.session.begin_load();
            terminal.draw(|frame| self.render(frame))?;
            let result = self
                .runtime
                .block_on(fetch::load_catalog(source))
                .map_err(LoadError::from);
            self.session.apply_load(result);
        }

        self.state.reset_cursors();
        self.state.focus = FocusPane::Items;
        Ok(())
    }

    fn open(&mut self, kind: LinkKind) {
        if self.session.page() == Page::Info {
            self.open_form();
            return;
        }
        if self.session.selection().is_empty() {
            self.state.push_message(MessageLevel::Info, "Select items with TAB first");
            return;
        }

        let outcome = self.session.batch_open(kind, self.opener);
        if !outcome.errors.is_empty() {
            self.state
                .push_message(MessageLevel::Error, outcome.errors.join("; "));
        } else if outcome.no_links_available() {
            self.state.notice = Some(Notice::NoLinks);
        } else {
            self.state.push_message(
                MessageLevel::Success,
                format!("Opened {} of {} {kind} link(s)", outcome.opened, outcome.requested),
            );
        }
    }

    fn open_form(&mut self) {
        let Some(url) = self.form_url.as_deref() else {
            self.state
                .push_message(MessageLevel::Warning, "No form_url configured");
            return;
        };
        if let Err(e) = self.opener.open(url) {
            self.state.push_message(MessageLevel::Error, e);
        }
    }

    fn save_locale(&mut self) {
        let locale = self.session.locale();
        if !self.persist_locale {
            return;
        }
        match (Preferences { locale }).save() {
            Ok(()) => self
                .state
                .push_message(MessageLevel::Success, format!("Language: {locale}")),
            Err(e) => {
                warn!("failed to save locale preference: {e}");
                self.state
                    .push_message(MessageLevel::Warning, format!("Language not saved: {e}"));
            }
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let labels = self.session.locale().labels();
        let page = self.session.page();

        let main_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search bar
                Constraint::Length(2), // Page title
                Constraint::Min(5),    // Content
                Constraint::Length(3), // Status bar
                Constraint::Length(1), // Help bar
            ])
            .split(area);

        let search_bar = SearchBar::new(
            &self.state.query,
            labels.search_placeholder,
            labels.app_title,
            &self.theme,
        );
        frame.render_widget(search_bar, main_layout[0]);

        frame.render_widget(self.page_tabs(), main_layout[1]);

        self.render_content(frame, main_layout[2]);

        let indicators = self.indicators();
        let status_bar = StatusBar::new(self.state.latest_message(), &indicators, &self.theme);
        frame.render_widget(status_bar, main_layout[3]);

        let catalog_hints = HelpBar::catalog_hints();
        let text_hints = HelpBar::text_hints();
        let hints: &[KeyHint] = if page.category().is_some() {
            &catalog_hints
        } else {
            &text_hints
        };
        frame.render_widget(HelpBar::new(hints, &self.theme), main_layout[4]);

        if self.state.notice == Some(Notice::NoLinks) {
            let popup = NoticePopup::new(labels.no_info_title, labels.no_info_text, labels.close, &self.theme);
            frame.render_widget(popup, area);
        }
    }

    /// Page tabs with the active one highlighted, then its subtitle
    fn page_tabs(&self) -> ratatui::widgets::Paragraph<'static> {
        let labels = self.session.locale().labels();
        let active = self.session.page();

        let mut tabs = Vec::new();
        for (i, page) in Page::ALL.into_iter().enumerate() {
            if i > 0 {
                tabs.push(Span::styled(" │ ", self.theme.dimmed_style()));
            }
            let style = if page == active {
                self.theme.selected_style()
            } else {
                self.theme.dimmed_style()
            };
            tabs.push(Span::styled(format!(" {} ", page.title(labels)), style));
        }

        ratatui::widgets::Paragraph::new(vec![
            Line::from(tabs),
            Line::styled(active.subtitle(labels), self.theme.dimmed_style()),
        ])
    }

    fn indicators(&self) -> String {
        let session = &self.session;
        let labels = session.locale().labels();
        let mut parts = Vec::new();

        if let Some(category) = session.category() {
            parts.push(format!(
                "{}/{}",
                session.visible_items().len(),
                session.store().items(category).len()
            ));
            parts.push(format!("{} {}", session.selection().count(), labels.selected));
            parts.push(session.filter().tag_mode.label().to_string());
            parts.push(session.view_mode().to_string());
        }
        parts.push(session.locale().code().to_uppercase());
        parts.join(" · ")
    }

    fn render_content(&mut self, frame: &mut Frame, area: Rect) {
        let labels = self.session.locale().labels();

        match self.session.load_state() {
            LoadState::Failed(error) => {
                let body = format!("{}{error}", labels.error_prefix);
                let page = TextPage::new(labels.error_title, &body, &self.theme)
                    .style(self.theme.level_style(MessageLevel::Error))
                    .line("")
                    .line(Line::styled(format!("^R: {}", labels.reload), self.theme.cursor_style()))
                    .scroll(self.state.text_scroll);
                frame.render_widget(page, area);
                return;
            }
            LoadState::Loading | LoadState::NotLoaded => {
                frame.render_widget(TextPage::new("", labels.loading, &self.theme), area);
                return;
            }
            LoadState::Ready => {}
        }

        match self.session.page() {
            Page::Plugins | Page::Scripts => self.render_catalog(frame, area),
            Page::Install => {
                let guide = self.session.guide();
                let body = if guide.trim().is_empty() {
                    labels.guide_unavailable
                } else {
                    guide
                };
                let page = TextPage::new(labels.nav_install, body, &self.theme).scroll(self.state.text_scroll);
                frame.render_widget(page, area);
            }
            Page::Info => {
                let mut page = TextPage::new(labels.nav_info, labels.info_form_text, &self.theme)
                    .line("")
                    .scroll(self.state.text_scroll);
                if let Some(url) = &self.form_url {
                    page = page
                        .line(Line::from(vec![
                            Span::styled(format!("^O: {}  ", labels.info_form_button), self.theme.cursor_style()),
                            Span::styled(url.as_str(), self.theme.link_style()),
                        ]));
                }
                frame.render_widget(page, area);
            }
        }
    }

    fn render_catalog(&mut self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(area);

        let view_mode = self.session.view_mode();
        self.state.visible_rows =
            (chunks[0].height.saturating_sub(2) as usize / ItemList::rows_per_item(view_mode)).max(1);

        let session = &self.session;
        let labels = session.locale().labels();
        let items = session.visible_items();
        let title = format!(" {} ({}) ", session.page().title(labels), items.len());

        let list = ItemList::new(&items, session.selection(), session.locale(), &self.theme)
            .view_mode(view_mode)
            .cursor(self.state.item_cursor, self.state.item_scroll)
            .focused(self.state.focus == FocusPane::Items)
            .title(title);
        frame.render_widget(list, chunks[0]);

        let tags = TagPanel::new(session.display_tags(), session.filter(), labels.tag_filter, &self.theme)
            .cursor(self.state.tag_cursor)
            .focused(self.state.focus == FocusPane::Tags);
        frame.render_widget(tags, chunks[1]);
    }
}

/// Setup terminal for TUI
///
/// Raw mode is switched off again if the alternate screen or the terminal
/// cannot be set up.
fn setup_terminal() -> Result<Term> {
    enable_raw_mode()?;
    undo_on_error(enter_alternate_screen(io::stdout()), || {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        if let Err(e) = disable_raw_mode() {
            warn!("failed to disable raw mode: {e}");
        }
    })
}

/// Run `undo` if `result` is an error, then pass `result` on
fn undo_on_error<T>(result: Result<T>, undo: impl FnOnce()) -> Result<T> {
    if result.is_err() {
        undo();
    }
    result
}

fn enter_alternate_screen(mut stdout: Stdout) -> Result<Term> {
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(Into::into)
}

/// Cleanup terminal after TUI
fn cleanup_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogStore;
    use crate::testing::{RecordingOpener, item};

    fn session() -> HubSession {
        let mut linked = item("1", "A", "");
        linked.detail_url = Some("https://example.com/1".into());
        let bare = item("2", "B", "");
        HubSession::default().with_store(CatalogStore::new(vec![linked, bare], vec![]))
    }

    fn latest(app: &BrowseApp<'_>) -> Option<(MessageLevel, String)> {
        app.state
            .latest_message()
            .map(|m| (m.level, m.text.clone()))
    }

    #[test]
    fn test_opener_failure_shows_error_not_notice() {
        let runtime = Runtime::new().unwrap();
        let opener = RecordingOpener::failing();
        let mut session = session();
        session.toggle_selection("1");
        let mut app = BrowseApp::new(session, CatalogAccess::NotConfigured(String::new()), &opener, &runtime);

        app.open(LinkKind::Detail);

        assert_eq!(app.state.notice, None);
        assert_eq!(
            latest(&app),
            Some((MessageLevel::Error, "https://example.com/1: no browser available".to_string()))
        );
    }

    #[test]
    fn test_failed_setup_step_is_undone() {
        let undone = std::cell::Cell::new(false);
        let failed: Result<()> = Err(UiError::NotATerminal);
        assert!(undo_on_error(failed, || undone.set(true)).is_err());
        assert!(undone.get());

        let undone = std::cell::Cell::new(false);
        assert!(undo_on_error(Ok(1), || undone.set(true)).is_ok());
        assert!(!undone.get());
    }

    #[test]
    fn test_missing_links_show_notice() {
        let runtime = Runtime::new().unwrap();
        let opener = RecordingOpener::default();
        let mut session = session();
        session.toggle_selection("2");
        let mut app = BrowseApp::new(session, CatalogAccess::NotConfigured(String::new()), &opener, &runtime);

        app.open(LinkKind::Detail);

        assert_eq!(app.state.notice, Some(Notice::NoLinks));
        assert!(opener.opened().is_empty());
    }
}
