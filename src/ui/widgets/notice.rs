//! Centered notice popup

use crate::ui::state::MessageLevel;
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Text},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Modal message box dismissed by any key
pub struct NoticePopup<'a> {
    title: &'a str,
    text: &'a str,
    close_label: &'a str,
    theme: &'a Theme,
}

impl<'a> NoticePopup<'a> {
    #[must_use]
    pub const fn new(title: &'a str, text: &'a str, close_label: &'a str, theme: &'a Theme) -> Self {
        Self {
            title,
            text,
            close_label,
            theme,
        }
    }

    /// Area of the popup inside `area`
    #[must_use]
    pub fn centered(area: Rect) -> Rect {
        let width = area.width.saturating_mul(3) / 5;
        let height = 7.min(area.height);
        Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        }
    }
}

impl Widget for NoticePopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = Self::centered(area);
        Clear.render(popup, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.level_style(MessageLevel::Warning))
            .title(format!(" {} ", self.title));

        let mut lines: Vec<Line> = self.text.lines().map(Line::raw).collect();
        lines.push(Line::raw(""));
        lines.push(Line::styled(format!("[{}]", self.close_label), self.theme.dimmed_style()));

        Paragraph::new(Text::from(lines))
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(popup, buf);
    }
}
