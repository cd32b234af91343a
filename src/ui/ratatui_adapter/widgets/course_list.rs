//! Course list widget for the current listing

use crate::course::CourseRecord;
use crate::ui::ratatui_adapter::state::AppState;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Widget},
};

/// Width of the identifier column
const CODE_WIDTH: usize = 10;

/// Course list widget with a cursor indicator and a single highlighted row
pub struct CourseList<'a> {
    /// Application state
    state: &'a AppState,
    /// Theme for styling
    theme: &'a Theme,
    /// Title for the list block
    title: String,
}

impl<'a> CourseList<'a> {
    /// Create a new course list widget
    #[must_use]
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        let shown = state.rows.len();
        let total = state.total;
        let title = match &state.source {
            Some(name) => format!(" {name} ({shown}/{total}) "),
            None => format!(" Courses ({shown}/{total}) "),
        };

        Self {
            state,
            theme,
            title,
        }
    }

    /// Render a single row
    fn render_row(&self, course: &'a CourseRecord, is_cursor: bool, is_highlighted: bool) -> ListItem<'a> {
        let cursor_char = if is_cursor { ">" } else { " " };

        let line = Line::from(vec![
            Span::styled(cursor_char, self.theme.cursor_style()),
            Span::raw(" "),
            Span::styled(
                format!("{:<width$}", course.label(), width = CODE_WIDTH),
                self.theme.code_style(),
            ),
            Span::raw(" "),
            Span::raw(course.title.as_str()),
        ]);

        if is_highlighted {
            ListItem::new(line).style(self.theme.selected_style())
        } else if is_cursor {
            ListItem::new(line).style(self.theme.cursor_row_style())
        } else {
            ListItem::new(line)
        }
    }
}

impl Widget for CourseList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(self.title.as_str());

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        if self.state.rows.is_empty() {
            let hint = if self.state.total == 0 {
                "No catalog loaded. Press o to open a file."
            } else {
                "No courses match the current filters."
            };
            Line::styled(hint, self.theme.dimmed_style()).render(inner, buf);
            return;
        }

        // Calculate visible range
        let visible_height = inner.height as usize;
        let start = self.state.scroll_offset;
        let end = (start + visible_height).min(self.state.rows.len());

        let items: Vec<ListItem> = (start..end)
            .filter_map(|idx| {
                let course = self.state.rows.get(idx)?;
                Some(self.render_row(
                    course,
                    idx == self.state.cursor,
                    self.state.highlighted == Some(idx),
                ))
            })
            .collect();

        List::new(items).render(inner, buf);
    }
}
