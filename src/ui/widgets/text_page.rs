//! Scrollable text page for the guide, info and error views

use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Text},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// A bordered, wrapped block of text
pub struct TextPage<'a> {
    title: &'a str,
    lines: Vec<Line<'a>>,
    scroll: u16,
    style: Style,
    theme: &'a Theme,
}

impl<'a> TextPage<'a> {
    #[must_use]
    pub fn new(title: &'a str, body: &'a str, theme: &'a Theme) -> Self {
        Self {
            title,
            lines: body.lines().map(Line::raw).collect(),
            scroll: 0,
            style: Style::default(),
            theme,
        }
    }

    /// Append a styled line after the body
    #[must_use]
    pub fn line(mut self, line: impl Into<Line<'a>>) -> Self {
        self.lines.push(line.into());
        self
    }

    #[must_use]
    pub const fn scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }

    #[must_use]
    pub const fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl Widget for TextPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(false))
            .title(format!(" {} ", self.title));

        Paragraph::new(Text::from(self.lines))
            .style(self.style)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(area, buf);
    }
}
