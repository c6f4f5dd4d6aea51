//! Color theme for the browse view

use super::state::MessageLevel;
use ratatui::style::{Color, Modifier, Style};

/// Palette of the browse view
///
/// Catalog content is drawn in the default terminal color; the palette only
/// covers chrome, markers and status levels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Row under the cursor: background, foreground
    pub highlight: (Color, Color),
    /// Cursor marker, focused pane border, page titles
    pub accent: Color,
    /// Secondary text: descriptions, authors, inactive tabs
    pub muted: Color,
    /// Unfocused pane borders
    pub frame: Color,
    pub tag: Color,
    pub link: Color,
    /// Selection checkmark
    pub mark: Color,
    /// Status colors, see [`Theme::level_style`]
    pub success: Color,
    pub info: Color,
    pub warning: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Palette for dark terminals (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            highlight: (Color::Blue, Color::White),
            accent: Color::Cyan,
            muted: Color::DarkGray,
            frame: Color::DarkGray,
            tag: Color::Magenta,
            link: Color::LightBlue,
            mark: Color::Green,
            success: Color::Green,
            info: Color::Cyan,
            warning: Color::Yellow,
            error: Color::Red,
        }
    }

    /// Row under the cursor
    #[must_use]
    pub fn selected_style(&self) -> Style {
        let (bg, fg) = self.highlight;
        Style::default().bg(bg).fg(fg).add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::default()
    }

    /// The `>` marker and key hints
    #[must_use]
    pub fn cursor_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// The `✓` marker of selected items and tags
    #[must_use]
    pub fn multi_select_style(&self) -> Style {
        Style::default().fg(self.mark).add_modifier(Modifier::BOLD)
    }

    /// Status message text of `level`
    #[must_use]
    pub fn level_style(&self, level: MessageLevel) -> Style {
        let color = match level {
            MessageLevel::Success => self.success,
            MessageLevel::Info => self.info,
            MessageLevel::Warning => self.warning,
            MessageLevel::Error => self.error,
        };
        Style::default().fg(color)
    }

    #[must_use]
    pub fn border_style(&self, focused: bool) -> Style {
        Style::default().fg(if focused { self.accent } else { self.frame })
    }

    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    #[must_use]
    pub fn tag_style(&self) -> Style {
        Style::default().fg(self.tag)
    }

    #[must_use]
    pub fn link_style(&self) -> Style {
        Style::default().fg(self.link).add_modifier(Modifier::UNDERLINED)
    }

    #[must_use]
    pub fn title_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_styles_are_distinct() {
        let theme = Theme::dark();
        let styles = [
            MessageLevel::Success,
            MessageLevel::Info,
            MessageLevel::Warning,
            MessageLevel::Error,
        ]
        .map(|level| theme.level_style(level));
        assert_eq!(styles[3].fg, Some(Color::Red));
        assert_ne!(styles[2], styles[3]);
    }

    #[test]
    fn test_default_palette_is_dark() {
        assert_eq!(Theme::default(), Theme::dark());
        assert_eq!(Theme::default().selected_style().bg, Some(Color::Blue));
    }

    #[test]
    fn test_focus_changes_border() {
        let theme = Theme::default();
        assert_ne!(theme.border_style(true), theme.border_style(false));
    }
}
