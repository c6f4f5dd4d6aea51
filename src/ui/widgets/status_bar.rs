//! Status bar widget for messages and session indicators

use crate::ui::state::{MessageLevel, StatusMessage};
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Latest message on the left, session indicators right-aligned
pub struct StatusBar<'a> {
    message: Option<&'a StatusMessage>,
    indicators: &'a str,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    #[must_use]
    pub const fn new(message: Option<&'a StatusMessage>, indicators: &'a str, theme: &'a Theme) -> Self {
        Self {
            message,
            indicators,
            theme,
        }
    }
}

const fn icon(level: MessageLevel) -> &'static str {
    match level {
        MessageLevel::Success => "✓",
        MessageLevel::Info => "ℹ",
        MessageLevel::Warning => "⚠",
        MessageLevel::Error => "✗",
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(false));
        let inner = block.inner(area);
        block.render(area, buf);

        // Indicators get the width they need; the message takes the rest
        let width = u16::try_from(self.indicators.chars().count()).unwrap_or(u16::MAX);
        let [message_area, indicator_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(width)]).areas(inner);

        if let Some(message) = self.message {
            let style = self.theme.level_style(message.level);
            Line::from(vec![
                Span::styled(icon(message.level), style),
                Span::raw(" "),
                Span::styled(message.text.as_str(), style),
            ])
            .render(message_area, buf);
        }

        Paragraph::new(Span::styled(self.indicators, self.theme.dimmed_style()))
            .alignment(Alignment::Right)
            .render(indicator_area, buf);
    }
}
