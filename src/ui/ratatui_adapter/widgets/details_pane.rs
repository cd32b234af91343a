//! Details pane for the selected course

use crate::ui::ratatui_adapter::theme::Theme;
use crate::view::CourseDetails;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Shows the eight detail slots of a course, or a hint when none is selected
pub struct DetailsPane<'a> {
    details: Option<&'a CourseDetails>,
    theme: &'a Theme,
}

impl<'a> DetailsPane<'a> {
    /// Create a new details pane
    #[must_use]
    pub const fn new(details: Option<&'a CourseDetails>, theme: &'a Theme) -> Self {
        Self { details, theme }
    }

    /// Build content lines
    fn build_content(&self) -> Vec<Line<'a>> {
        let Some(details) = self.details else {
            return vec![Line::styled(
                "Select a course to see its details.",
                self.theme.dimmed_style().add_modifier(Modifier::ITALIC),
            )];
        };

        let mut lines = vec![
            Line::from(Span::styled(details.code.as_str(), self.theme.code_style())),
            Line::from(Span::styled(
                details.title.as_str(),
                self.theme.normal_style().add_modifier(Modifier::BOLD),
            )),
            Line::default(),
        ];
        for slot in [
            &details.department,
            &details.level,
            &details.credits,
            &details.instructor,
            &details.semester,
        ] {
            lines.push(Self::labelled(slot, self.theme));
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::raw(details.description.as_str())));
        lines
    }

    /// Dim the `Label: ` prefix of a slot
    fn labelled(slot: &'a str, theme: &Theme) -> Line<'a> {
        match slot.split_once(": ") {
            Some((label, value)) => Line::from(vec![
                Span::styled(format!("{label}: "), theme.dimmed_style()),
                Span::raw(value),
            ]),
            None => Line::from(slot),
        }
    }
}

impl Widget for DetailsPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(" Details ");

        Paragraph::new(self.build_content())
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_courses;

    fn rendered(details: Option<&CourseDetails>) -> String {
        let area = Rect::new(0, 0, 50, 14);
        let mut buf = Buffer::empty(area);
        DetailsPane::new(details, &Theme::default()).render(area, &mut buf);
        buf.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_placeholder_without_selection() {
        assert!(rendered(None).contains("Select a course"));
    }

    #[test]
    fn test_slots_are_rendered() {
        let details = CourseDetails::from(&sample_courses()[3]);
        let text = rendered(Some(&details));
        assert!(text.contains("HIST210"));
        assert!(text.contains("Title: Modern History"));
        assert!(text.contains("Instructor: Grace Hopper"));
        assert!(text.contains("From 1800 to now."));
    }
}
