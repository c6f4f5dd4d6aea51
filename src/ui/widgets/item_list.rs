//! Item list widget for the visible catalog items

use crate::catalog::CatalogItem;
use crate::locale::{Locale, resolve_description, resolve_name, resolve_tags};
use crate::selection::SelectionTracker;
use crate::session::ViewMode;
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Widget},
};

/// Item list widget with cursor and selection indicators
///
/// In grid mode each item is a two-line card (name and tags, then the
/// description); in list mode each item is a single line.
pub struct ItemList<'a> {
    items: &'a [&'a CatalogItem],
    selection: &'a SelectionTracker,
    locale: Locale,
    view_mode: ViewMode,
    cursor: usize,
    scroll: usize,
    focused: bool,
    title: String,
    theme: &'a Theme,
}

impl<'a> ItemList<'a> {
    #[must_use]
    pub fn new(
        items: &'a [&'a CatalogItem],
        selection: &'a SelectionTracker,
        locale: Locale,
        theme: &'a Theme,
    ) -> Self {
        Self {
            items,
            selection,
            locale,
            view_mode: ViewMode::default(),
            cursor: 0,
            scroll: 0,
            focused: true,
            title: String::new(),
            theme,
        }
    }

    #[must_use]
    pub const fn view_mode(mut self, view_mode: ViewMode) -> Self {
        self.view_mode = view_mode;
        self
    }

    #[must_use]
    pub const fn cursor(mut self, cursor: usize, scroll: usize) -> Self {
        self.cursor = cursor;
        self.scroll = scroll;
        self
    }

    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Screen rows one item occupies
    #[must_use]
    pub const fn rows_per_item(view_mode: ViewMode) -> usize {
        match view_mode {
            ViewMode::Grid => 2,
            ViewMode::List => 1,
        }
    }

    fn render_item(&self, item: &'a CatalogItem, is_cursor: bool) -> ListItem<'a> {
        let labels = self.locale.labels();
        let is_selected = self.selection.is_selected(&item.id);

        let cursor_char = if is_cursor && self.focused { ">" } else { " " };
        let select_char = if is_selected { "✓" } else { " " };
        let text_style = if is_cursor && self.focused {
            self.theme.selected_style()
        } else {
            self.theme.normal_style()
        };

        let mut head = vec![
            Span::styled(cursor_char, self.theme.cursor_style()),
            Span::raw(" "),
            Span::styled(select_char, self.theme.multi_select_style()),
            Span::raw(" "),
            Span::styled(resolve_name(item, self.locale), text_style),
        ];

        let tags = resolve_tags(item, self.locale);
        if !tags.is_empty() {
            head.push(Span::raw(" "));
            head.push(Span::styled(format!("[{}]", tags.join(", ")), self.theme.tag_style()));
        }

        let mut lines = vec![Line::from(head)];

        if self.view_mode == ViewMode::Grid {
            let description = resolve_description(item, self.locale).unwrap_or(labels.no_description);
            let first_line = description.lines().next().unwrap_or_default();
            lines.push(Line::from(vec![
                Span::raw("    "),
                Span::styled(first_line, self.theme.dimmed_style()),
                Span::raw("  "),
                Span::styled(
                    format!("{}: {}", labels.author, item.author_or_unknown()),
                    self.theme.dimmed_style(),
                ),
            ]));
        }

        ListItem::new(lines)
    }
}

impl Widget for ItemList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(self.focused))
            .title(self.title.as_str());

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        if self.items.is_empty() {
            let labels = self.locale.labels();
            Line::styled(labels.no_items, self.theme.dimmed_style()).render(inner, buf);
            return;
        }

        let visible = (inner.height as usize / Self::rows_per_item(self.view_mode)).max(1);
        let start = self.scroll.min(self.items.len().saturating_sub(1));
        let end = (start + visible).min(self.items.len());

        let rows: Vec<ListItem> = self.items[start..end]
            .iter()
            .enumerate()
            .map(|(offset, item)| self.render_item(*item, start + offset == self.cursor))
            .collect();

        List::new(rows).render(inner, buf);
    }
}
