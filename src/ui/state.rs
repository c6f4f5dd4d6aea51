//! View state for the browse TUI
//!
//! Only presentation state lives here: cursors, focus, the search text being
//! typed and transient messages. Catalog, filter and selection state belong
//! to the [`HubSession`](crate::session::HubSession) driving the view.

use std::time::{Duration, Instant};

/// Pane receiving the arrow and toggle keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPane {
    #[default]
    Items,
    Tags,
}

/// Severity of a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Success,
    Info,
    Warning,
    Error,
}

/// Modal notice shown over the view until any key is pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// Selected items carry no usable link
    NoLinks,
}

/// A status message with timestamp for TTL-based expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub level: MessageLevel,
    pub text: String,
    pub created_at: Instant,
}

impl StatusMessage {
    #[must_use]
    pub fn new(level: MessageLevel, text: String) -> Self {
        Self {
            level,
            text,
            created_at: Instant::now(),
        }
    }

    /// Check if the message has expired based on TTL
    #[must_use]
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() > ttl
    }
}

/// Presentation state of the browse view
#[derive(Debug)]
pub struct BrowseState {
    /// Search text as typed
    pub query: String,
    /// Cursor in the visible item list
    pub item_cursor: usize,
    /// First visible row of the item list
    pub item_scroll: usize,
    /// Cursor in the tag panel
    pub tag_cursor: usize,
    /// Scroll offset of the text pages (guide, info, error)
    pub text_scroll: u16,
    pub focus: FocusPane,
    pub notice: Option<Notice>,
    pub messages: Vec<StatusMessage>,
    pub message_ttl: Duration,
    /// Number of item rows that fit on screen (set during render)
    pub visible_rows: usize,
}

impl Default for BrowseState {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl BrowseState {
    /// State with an initial search query
    #[must_use]
    pub fn new(query: String) -> Self {
        Self {
            query,
            item_cursor: 0,
            item_scroll: 0,
            tag_cursor: 0,
            text_scroll: 0,
            focus: FocusPane::Items,
            notice: None,
            messages: Vec::new(),
            message_ttl: Duration::from_secs(4),
            visible_rows: 10,
        }
    }

    pub fn query_push(&mut self, c: char) {
        self.query.push(c);
    }

    /// Remove the last character; returns whether the query changed
    pub fn query_backspace(&mut self) -> bool {
        self.query.pop().is_some()
    }

    /// Clear the query; returns whether it was non-empty
    pub fn query_clear(&mut self) -> bool {
        let changed = !self.query.is_empty();
        self.query.clear();
        changed
    }

    /// Move the cursor of the focused pane up
    pub fn cursor_up(&mut self) {
        match self.focus {
            FocusPane::Items => {
                self.item_cursor = self.item_cursor.saturating_sub(1);
                self.scroll_to_cursor();
            }
            FocusPane::Tags => self.tag_cursor = self.tag_cursor.saturating_sub(1),
        }
    }

    /// Move the cursor of the focused pane down, bounded by the pane length
    pub fn cursor_down(&mut self, item_count: usize, tag_count: usize) {
        match self.focus {
            FocusPane::Items => {
                if self.item_cursor + 1 < item_count {
                    self.item_cursor += 1;
                }
                self.scroll_to_cursor();
            }
            FocusPane::Tags => {
                if self.tag_cursor + 1 < tag_count {
                    self.tag_cursor += 1;
                }
            }
        }
    }

    /// Reset both cursors, e.g. after a page change
    pub fn reset_cursors(&mut self) {
        self.item_cursor = 0;
        self.item_scroll = 0;
        self.tag_cursor = 0;
        self.text_scroll = 0;
    }

    /// Keep the cursors inside lists that may have shrunk
    pub fn clamp(&mut self, item_count: usize, tag_count: usize) {
        self.item_cursor = self.item_cursor.min(item_count.saturating_sub(1));
        self.tag_cursor = self.tag_cursor.min(tag_count.saturating_sub(1));
        self.scroll_to_cursor();
    }

    fn scroll_to_cursor(&mut self) {
        let rows = self.visible_rows.max(1);
        if self.item_cursor < self.item_scroll {
            self.item_scroll = self.item_cursor;
        } else if self.item_cursor >= self.item_scroll + rows {
            self.item_scroll = self.item_cursor + 1 - rows;
        }
    }

    /// Add a status message
    pub fn push_message(&mut self, level: MessageLevel, text: impl Into<String>) {
        self.messages.push(StatusMessage::new(level, text.into()));
    }

    /// Most recent message that has not expired
    #[must_use]
    pub fn latest_message(&self) -> Option<&StatusMessage> {
        self.messages
            .iter()
            .rev()
            .find(|m| !m.is_expired(self.message_ttl))
    }

    /// Drop expired messages
    pub fn prune_messages(&mut self) {
        let ttl = self.message_ttl;
        self.messages.retain(|m| !m.is_expired(ttl));
    }
}
