//! Search bar widget for query input

use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search bar showing the query, or the placeholder when empty
pub struct SearchBar<'a> {
    query: &'a str,
    placeholder: &'a str,
    title: &'a str,
    theme: &'a Theme,
}

impl<'a> SearchBar<'a> {
    #[must_use]
    pub const fn new(query: &'a str, placeholder: &'a str, title: &'a str, theme: &'a Theme) -> Self {
        Self {
            query,
            placeholder,
            title,
            theme,
        }
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(true))
            .title(Span::styled(format!(" {} ", self.title), self.theme.title_style()));

        let inner = block.inner(area);
        block.render(area, buf);

        let cursor = Span::styled("│", Style::default().add_modifier(Modifier::SLOW_BLINK));
        let spans = if self.query.is_empty() {
            vec![cursor, Span::styled(self.placeholder, self.theme.dimmed_style())]
        } else {
            vec![Span::raw(self.query), cursor]
        };

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
