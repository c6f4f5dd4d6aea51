//! Tag filter panel widget

use crate::filter::FilterState;
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Widget},
};

/// Tag universe of the active page with selected markers and the match mode
pub struct TagPanel<'a> {
    tags: &'a [String],
    filter: &'a FilterState,
    cursor: usize,
    focused: bool,
    title: &'a str,
    theme: &'a Theme,
}

impl<'a> TagPanel<'a> {
    #[must_use]
    pub const fn new(tags: &'a [String], filter: &'a FilterState, title: &'a str, theme: &'a Theme) -> Self {
        Self {
            tags,
            filter,
            cursor: 0,
            focused: false,
            title,
            theme,
        }
    }

    #[must_use]
    pub const fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor;
        self
    }

    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for TagPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" {} [{}] ", self.title, self.filter.tag_mode.label());
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(self.focused))
            .title(title);

        let inner = block.inner(area);
        block.render(area, buf);

        let height = inner.height as usize;
        if height == 0 {
            return;
        }

        let start = self
            .cursor
            .saturating_sub(height.saturating_sub(1))
            .min(self.tags.len());
        let end = (start + height).min(self.tags.len());

        let rows: Vec<ListItem> = self.tags[start..end]
            .iter()
            .enumerate()
            .map(|(offset, tag)| {
                let is_cursor = self.focused && start + offset == self.cursor;
                let marker = if self.filter.is_tag_selected(tag) { "✓ " } else { "  " };
                let style = if is_cursor {
                    self.theme.selected_style()
                } else {
                    self.theme.tag_style()
                };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, self.theme.multi_select_style()),
                    Span::styled(tag.as_str(), style),
                ]))
            })
            .collect();

        List::new(rows).render(inner, buf);
    }
}
