//! Status bar widget for the error area and transient messages

use crate::ui::ratatui_adapter::state::{MessageLevel, StatusMessage};
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Status bar widget
///
/// A non-empty error takes precedence over messages; with neither, nothing is
/// drawn.
pub struct StatusBar<'a> {
    /// Error area text
    error: &'a str,
    /// Messages to display
    messages: &'a [&'a StatusMessage],
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    /// Create a new status bar widget
    #[must_use]
    pub const fn new(error: &'a str, messages: &'a [&'a StatusMessage], theme: &'a Theme) -> Self {
        Self {
            error,
            messages,
            theme,
        }
    }

    /// Whether the bar has anything to show
    #[must_use]
    pub fn is_visible(&self) -> bool {
        !self.error.is_empty() || !self.messages.is_empty()
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = if !self.error.is_empty() {
            Line::from(vec![
                Span::styled("✗ ", self.theme.error_style()),
                Span::styled(self.error, self.theme.error_style()),
            ])
        } else if let Some(msg) = self.messages.last() {
            let (prefix, style) = match msg.level {
                MessageLevel::Success => ("✓ ", self.theme.success_style()),
                MessageLevel::Info => ("ℹ ", self.theme.info_style()),
            };
            Line::from(vec![
                Span::styled(prefix, style),
                Span::styled(msg.text.as_str(), style),
            ])
        } else {
            return;
        };

        Paragraph::new(line).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_when_empty() {
        let theme = Theme::default();
        assert!(!StatusBar::new("", &[], &theme).is_visible());
        assert!(StatusBar::new("Failed to read file.", &[], &theme).is_visible());
    }

    #[test]
    fn test_error_wins_over_messages() {
        let theme = Theme::default();
        let msg = StatusMessage::new(MessageLevel::Success, "Loaded 5 courses".into());
        let messages = [&msg];
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);
        StatusBar::new("Invalid JSON file format.", &messages, &theme).render(area, &mut buf);
        let text: String = buf.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("Invalid JSON file format."));
        assert!(!text.contains("Loaded"));
    }
}
