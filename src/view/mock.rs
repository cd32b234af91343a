//! Recording renderer for testing
//!
//! Captures every call a [`CatalogView`](super::CatalogView) makes so tests
//! can assert on the rendered state without a terminal.

use super::details::CourseDetails;
use super::traits::CatalogRenderer;
use crate::course::CourseRecord;
use crate::filters::{FilterField, FilterOptions};

/// A single renderer call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderEvent {
    Options,
    List(Vec<String>),
    Highlight(usize),
    Details(CourseDetails),
    Error(String),
}

/// Renderer that records calls and keeps the latest rendered state
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    /// Every call, oldest first
    pub events: Vec<RenderEvent>,
    /// Option labels per field, in [`FilterField::ALL`] order
    pub options: Vec<Vec<String>>,
    /// Row labels of the current listing
    pub rows: Vec<String>,
    /// Highlighted row, if any
    pub highlighted: Option<usize>,
    /// Details panel content, if any course was selected
    pub details: Option<CourseDetails>,
    /// Current error message (empty when hidden)
    pub error: String,
}

impl RecordingRenderer {
    /// Create an empty recorder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget recorded events, keeping the rendered state
    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    /// Whether the error area is visible
    #[must_use]
    pub fn error_visible(&self) -> bool {
        !self.error.is_empty()
    }
}

impl CatalogRenderer for RecordingRenderer {
    fn render_options(&mut self, options: &FilterOptions) {
        self.options = FilterField::ALL
            .iter()
            .map(|field| options.values(*field))
            .collect();
        self.events.push(RenderEvent::Options);
    }

    fn render_list(&mut self, courses: &[CourseRecord]) {
        self.rows = courses.iter().map(|c| c.label().to_string()).collect();
        self.highlighted = None;
        self.events.push(RenderEvent::List(self.rows.clone()));
    }

    fn highlight_row(&mut self, index: usize) {
        self.highlighted = Some(index);
        self.events.push(RenderEvent::Highlight(index));
    }

    fn render_details(&mut self, course: &CourseRecord) {
        let details = CourseDetails::from(course);
        self.details = Some(details.clone());
        self.events.push(RenderEvent::Details(details));
    }

    fn show_error(&mut self, message: &str) {
        self.error = message.to_string();
        self.events.push(RenderEvent::Error(self.error.clone()));
    }
}
