//! Outbound rendering interface
//!
//! [`CatalogView`](super::CatalogView) drives a `CatalogRenderer` whenever its
//! state changes. The terminal browser implements it on its app state; tests
//! use [`RecordingRenderer`](super::mock::RecordingRenderer).

use crate::course::CourseRecord;
use crate::filters::FilterOptions;

/// Receiver for view updates
pub trait CatalogRenderer {
    /// Replace the filter option lists; every filter goes back to "All"
    fn render_options(&mut self, options: &FilterOptions);

    /// Replace the listing with one row per course, in order
    ///
    /// No row is highlighted after this call.
    fn render_list(&mut self, courses: &[CourseRecord]);

    /// Highlight a single row, clearing any previous highlight
    fn highlight_row(&mut self, index: usize);

    /// Show the full details of a course
    fn render_details(&mut self, course: &CourseRecord);

    /// Show an error message; an empty message hides the error area
    fn show_error(&mut self, message: &str);
}
