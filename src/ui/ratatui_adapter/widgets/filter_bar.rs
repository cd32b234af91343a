//! Filter bar showing the four filter controls and the sort control

use crate::filters::FilterField;
use crate::ui::ratatui_adapter::state::{ALL_LABEL, AppState};
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Key that cycles each filter, in [`FilterField::ALL`] order
pub const FILTER_KEYS: [char; 4] = ['d', 'l', 'c', 'i'];

/// Filter bar widget
pub struct FilterBar<'a> {
    state: &'a AppState,
    theme: &'a Theme,
}

impl<'a> FilterBar<'a> {
    /// Create a new filter bar
    #[must_use]
    pub const fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    fn control(&self, key: char, label: &'a str, value: &'a str, active: bool) -> Vec<Span<'a>> {
        let value_style = if active {
            self.theme.active_filter_style()
        } else {
            self.theme.normal_style()
        };
        vec![
            Span::styled(format!("[{key}]"), self.theme.cursor_style()),
            Span::styled(format!(" {label}: "), self.theme.dimmed_style()),
            Span::styled(value, value_style),
        ]
    }
}

impl Widget for FilterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(" Filters ");

        let mut spans = Vec::new();
        for (field, key) in FilterField::ALL.into_iter().zip(FILTER_KEYS) {
            let value = self.state.filter_label(field);
            spans.extend(self.control(key, field.label(), value, value != ALL_LABEL));
            spans.push(Span::styled("  │  ", self.theme.border_style()));
        }
        let sort = self.state.sort_key;
        spans.extend(self.control('s', "Sort", sort.label(), sort != crate::sort::SortKey::None));

        Paragraph::new(Line::from(spans)).block(block).render(area, buf);
    }
}
