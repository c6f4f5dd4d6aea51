//! Help bar widget for displaying keybind hints

use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// A keybind hint to display in the help bar
#[derive(Debug, Clone)]
pub struct KeyHint {
    /// Key combination (e.g., "TAB", "^O")
    pub key: &'static str,
    /// Action description (e.g., "select", "open")
    pub action: &'static str,
}

impl KeyHint {
    #[must_use]
    pub const fn new(key: &'static str, action: &'static str) -> Self {
        Self { key, action }
    }
}

/// Help bar widget that displays keybind hints at the bottom
pub struct HelpBar<'a> {
    hints: &'a [KeyHint],
    theme: &'a Theme,
}

impl<'a> HelpBar<'a> {
    #[must_use]
    pub const fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self { hints, theme }
    }

    /// Hints for the catalog pages
    #[must_use]
    pub const fn catalog_hints() -> [KeyHint; 10] {
        [
            KeyHint::new("↑/↓", "move"),
            KeyHint::new("←/→", "items/tags"),
            KeyHint::new("TAB", "toggle"),
            KeyHint::new("^A/^X", "all/none"),
            KeyHint::new("^O/^D", "detail/download"),
            KeyHint::new("^T", "and/or"),
            KeyHint::new("^V", "view"),
            KeyHint::new("^L", "lang"),
            KeyHint::new("^N/^P", "page"),
            KeyHint::new("ESC", "quit"),
        ]
    }

    /// Hints for the guide and info pages
    #[must_use]
    pub const fn text_hints() -> [KeyHint; 5] {
        [
            KeyHint::new("↑/↓", "scroll"),
            KeyHint::new("^O", "open form"),
            KeyHint::new("^L", "lang"),
            KeyHint::new("^N/^P", "page"),
            KeyHint::new("ESC", "quit"),
        ]
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();

        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", self.theme.dimmed_style()));
            }
            spans.push(Span::styled(hint.key, self.theme.cursor_style()));
            spans.push(Span::styled(":", self.theme.dimmed_style()));
            spans.push(Span::raw(hint.action));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
