//! Color theme definitions for the ratatui TUI
//!
//! Defines colors and styles used throughout the browser.

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color for the highlighted course
    pub selection_bg: Color,
    /// Foreground color for the highlighted course
    pub selection_fg: Color,
    /// Color for the cursor indicator
    pub cursor: Color,
    /// Color for success messages
    pub success: Color,
    /// Color for error messages
    pub error: Color,
    /// Color for info messages
    pub info: Color,
    /// Color for borders
    pub border: Color,
    /// Color for dimmed/inactive text
    pub dimmed: Color,
    /// Color for course identifiers
    pub code: Color,
    /// Color for a filter that is narrowing the list
    pub active_filter: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            selection_bg: Color::Blue,
            selection_fg: Color::White,
            cursor: Color::Cyan,
            success: Color::Green,
            error: Color::Red,
            info: Color::Cyan,
            border: Color::DarkGray,
            dimmed: Color::DarkGray,
            code: Color::Magenta,
            active_filter: Color::Yellow,
        }
    }

    /// Style for the highlighted (selected) course
    #[must_use]
    pub fn selected_style(&self) -> Style {
        Style::default()
            .bg(self.selection_bg)
            .fg(self.selection_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for unselected items
    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::default()
    }

    /// Style for the cursor indicator (>)
    #[must_use]
    pub fn cursor_style(&self) -> Style {
        Style::default().fg(self.cursor).add_modifier(Modifier::BOLD)
    }

    /// Style for the row under the cursor when it is not the selection
    #[must_use]
    pub fn cursor_row_style(&self) -> Style {
        Style::default().add_modifier(Modifier::REVERSED)
    }

    /// Style for success messages
    #[must_use]
    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    /// Style for error messages
    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }

    /// Style for info messages
    #[must_use]
    pub fn info_style(&self) -> Style {
        Style::default().fg(self.info)
    }

    /// Style for borders
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for dimmed text
    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }

    /// Style for course identifiers
    #[must_use]
    pub fn code_style(&self) -> Style {
        Style::default().fg(self.code).add_modifier(Modifier::BOLD)
    }

    /// Style for a filter value other than "All"
    #[must_use]
    pub fn active_filter_style(&self) -> Style {
        Style::default()
            .fg(self.active_filter)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for section headings
    #[must_use]
    pub fn heading_style(&self) -> Style {
        self.cursor_style().add_modifier(Modifier::UNDERLINED)
    }
}
