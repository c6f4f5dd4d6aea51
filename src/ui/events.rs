//! Event handling for the browse TUI
//!
//! Keys that only change session or view state are applied here directly.
//! Keys with side effects outside the view (network, browser, preference
//! file) are returned to the event loop as an [`EventResult`].

use super::state::{BrowseState, FocusPane};
use crate::dispatch::LinkKind;
use crate::session::HubSession;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};
use std::time::Duration;

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue running the event loop
    Continue,
    /// Leave the browse view
    Quit,
    /// Fetch the catalog again
    Reload,
    /// Open the given link of every selected item (or the form on the info page)
    Open(LinkKind),
    /// The locale changed and should be persisted
    LocaleChanged,
    /// No action taken
    Ignored,
}

/// Handle one key press
pub fn handle_key(state: &mut BrowseState, session: &mut HubSession, key: KeyEvent) -> EventResult {
    if state.notice.take().is_some() {
        return EventResult::Continue;
    }

    let result = match (key.code, key.modifiers) {
        (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => EventResult::Quit,

        (KeyCode::Char('r'), KeyModifiers::CONTROL) => EventResult::Reload,
        (KeyCode::Char('o'), KeyModifiers::CONTROL) => EventResult::Open(LinkKind::Detail),
        (KeyCode::Char('d'), KeyModifiers::CONTROL) => EventResult::Open(LinkKind::Download),

        (KeyCode::Char('l'), KeyModifiers::CONTROL) => {
            session.switch_locale(session.locale().toggled());
            state.reset_cursors();
            EventResult::LocaleChanged
        }
        (KeyCode::Char('t'), KeyModifiers::CONTROL) => {
            session.toggle_tag_mode();
            EventResult::Continue
        }
        (KeyCode::Char('v'), KeyModifiers::CONTROL) => {
            session.set_view_mode(session.view_mode().toggled());
            EventResult::Continue
        }

        // Pages
        (KeyCode::Char('n'), KeyModifiers::CONTROL) => {
            session.navigate(session.page().next());
            state.reset_cursors();
            EventResult::Continue
        }
        (KeyCode::Char('p'), KeyModifiers::CONTROL) => {
            session.navigate(session.page().previous());
            state.reset_cursors();
            EventResult::Continue
        }

        // Selection
        (KeyCode::Char('a'), KeyModifiers::CONTROL) => {
            session.select_all_visible();
            EventResult::Continue
        }
        (KeyCode::Char('x'), KeyModifiers::CONTROL) => {
            session.deselect_all_visible();
            EventResult::Continue
        }
        (KeyCode::Tab, _) => toggle_under_cursor(state, session),

        // Navigation
        (KeyCode::Up, _) => {
            if session.category().is_some() {
                state.cursor_up();
            } else {
                state.text_scroll = state.text_scroll.saturating_sub(1);
            }
            EventResult::Continue
        }
        (KeyCode::Down, _) => {
            if session.category().is_some() {
                state.cursor_down(session.visible_items().len(), session.display_tags().len());
            } else {
                state.text_scroll = state.text_scroll.saturating_add(1);
            }
            EventResult::Continue
        }
        (KeyCode::Left, _) => {
            state.focus = FocusPane::Items;
            EventResult::Continue
        }
        (KeyCode::Right, _) => {
            if !session.display_tags().is_empty() {
                state.focus = FocusPane::Tags;
            }
            EventResult::Continue
        }

        // Query editing
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) if session.category().is_some() => {
            state.query_push(c);
            search_changed(state, session)
        }
        (KeyCode::Backspace, _) => {
            if state.query_backspace() {
                search_changed(state, session)
            } else {
                EventResult::Ignored
            }
        }
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
            if state.query_clear() {
                search_changed(state, session)
            } else {
                EventResult::Ignored
            }
        }

        _ => EventResult::Ignored,
    };

    if session.display_tags().is_empty() {
        state.focus = FocusPane::Items;
    }
    state.clamp(session.visible_items().len(), session.display_tags().len());
    result
}

fn search_changed(state: &mut BrowseState, session: &mut HubSession) -> EventResult {
    session.set_search(state.query.clone());
    state.item_cursor = 0;
    state.item_scroll = 0;
    EventResult::Continue
}

fn toggle_under_cursor(state: &mut BrowseState, session: &mut HubSession) -> EventResult {
    match state.focus {
        FocusPane::Items => {
            let ids = session.visible_ids();
            let Some(id) = ids.get(state.item_cursor) else {
                return EventResult::Ignored;
            };
            session.toggle_selection(id);
            state.cursor_down(ids.len(), 0);
        }
        FocusPane::Tags => {
            let Some(tag) = session.display_tags().get(state.tag_cursor).cloned() else {
                return EventResult::Ignored;
            };
            session.toggle_tag(&tag);
            state.item_cursor = 0;
            state.item_scroll = 0;
        }
    }
    EventResult::Continue
}

fn handle_mouse(state: &mut BrowseState, session: &HubSession, mouse: MouseEvent) -> EventResult {
    match mouse.kind {
        MouseEventKind::ScrollUp => {
            state.cursor_up();
            EventResult::Continue
        }
        MouseEventKind::ScrollDown => {
            state.cursor_down(session.visible_items().len(), session.display_tags().len());
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

/// Poll for events and handle them
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle(
    state: &mut BrowseState,
    session: &mut HubSession,
    timeout: Duration,
) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }

    let result = match event::read()? {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, session, key),
        Event::Mouse(mouse) => handle_mouse(state, session, mouse),
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    };

    Ok(result)
}
