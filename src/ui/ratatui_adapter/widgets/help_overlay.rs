//! Help overlay widget for displaying the full keybind reference

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Help overlay widget that displays a centered help screen
pub struct HelpOverlay<'a> {
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> HelpOverlay<'a> {
    /// Create a new help overlay
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    /// Calculate centered area for the overlay
    fn centered_rect(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
        let popup_layout = Layout::vertical([
            Constraint::Percentage((100 - height_percent) / 2),
            Constraint::Percentage(height_percent),
            Constraint::Percentage((100 - height_percent) / 2),
        ])
        .split(area);

        Layout::horizontal([
            Constraint::Percentage((100 - width_percent) / 2),
            Constraint::Percentage(width_percent),
            Constraint::Percentage((100 - width_percent) / 2),
        ])
        .split(popup_layout[1])[1]
    }

    /// Build help content lines
    fn build_content(&self) -> Vec<Line<'static>> {
        vec![
            Line::default(),
            Line::styled("  Navigation", self.theme.heading_style()),
            Line::default(),
            Self::help_line("  ↑/↓", "Move cursor"),
            Self::help_line("  PgUp/PgDn", "Page up/down"),
            Self::help_line("  Home/End", "Jump to first/last course"),
            Self::help_line("  Enter/click", "Select course and show details"),
            Line::default(),
            Line::styled("  Filters & sorting", self.theme.heading_style()),
            Line::default(),
            Self::help_line("  d / D", "Next / previous department"),
            Self::help_line("  l / L", "Next / previous level"),
            Self::help_line("  c / C", "Next / previous credits"),
            Self::help_line("  i / I", "Next / previous instructor"),
            Self::help_line("  s / S", "Next / previous sort order"),
            Line::default(),
            Line::styled("  Catalog", self.theme.heading_style()),
            Line::default(),
            Self::help_line("  o", "Open a catalog file"),
            Self::help_line("  r", "Reload the current file"),
            Self::help_line("  q / ESC", "Quit"),
            Line::default(),
            Line::styled("  Press any key to close", self.theme.dimmed_style()),
            Line::default(),
        ]
    }

    /// Create a help line with key and description
    fn help_line(key: &'static str, desc: &'static str) -> Line<'static> {
        Line::from(vec![
            Span::styled(
                format!("{key:<16}"),
                ratatui::style::Style::default().fg(ratatui::style::Color::Cyan),
            ),
            Span::raw(desc),
        ])
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = Self::centered_rect(60, 80, area);

        // Clear the background
        Clear.render(popup_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.cursor_style())
            .title(" Help ")
            .title_alignment(Alignment::Center);

        Paragraph::new(self.build_content())
            .block(block)
            .render(popup_area, buf);
    }
}
