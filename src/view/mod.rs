//! Catalog view controller
//!
//! [`CatalogView`] owns the loaded catalog and everything derived from it:
//! the filter options, the current criteria and sort key, the visible list
//! and the selected course. Front ends feed it events and receive updates
//! through a [`CatalogRenderer`].
//!
//! ```text
//!  on_file_selected ──► catalog ──► options ──► render_options
//!  on_filter_changed ─┐                  │
//!  on_sort_changed  ──┴► apply_filters ──► apply_sort ──► render_list
//!  on_row_selected  ────────────────────────────────────► highlight_row
//!                                                          render_details
//! ```
//!
//! # Examples
//!
//! ```
//! use coursecat::view::{CatalogView, mock::RecordingRenderer};
//! use coursecat::sort::SortKey;
//!
//! let mut view = CatalogView::new();
//! let mut renderer = RecordingRenderer::new();
//!
//! view.on_file_contents(r#"[{"id": "B2"}, {"id": "A1"}]"#, &mut renderer).unwrap();
//! view.on_sort_changed(SortKey::IdAsc, &mut renderer);
//! assert_eq!(renderer.rows, ["A1", "B2"]);
//!
//! view.on_row_selected(0, &mut renderer);
//! assert_eq!(renderer.details.unwrap().code, "A1");
//! ```

mod details;
pub mod mock;
mod traits;

pub use details::CourseDetails;
pub use traits::CatalogRenderer;

use crate::catalog::{self, LoadError};
use crate::course::CourseRecord;
use crate::filters::{FilterCriteria, FilterField, FilterOptions, apply_filters, compute_filter_options};
use crate::sort::{SortKey, apply_sort};
use std::path::{Path, PathBuf};

/// State of one catalog viewer
#[derive(Debug, Clone, Default)]
pub struct CatalogView {
    courses: Vec<CourseRecord>,
    visible: Vec<CourseRecord>,
    options: FilterOptions,
    criteria: FilterCriteria,
    sort_key: SortKey,
    highlighted: Option<usize>,
    details: Option<CourseRecord>,
    error: Option<String>,
    source: Option<PathBuf>,
}

impl CatalogView {
    /// Create a viewer with an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a catalog file
    ///
    /// On success the catalog is replaced and the path remembered for
    /// [`reload`](Self::reload). On failure the error message is shown and
    /// the current catalog stays as it was.
    ///
    /// # Errors
    ///
    /// Returns the [`LoadError`] after it has been shown.
    pub fn on_file_selected(
        &mut self,
        path: impl AsRef<Path>,
        renderer: &mut dyn CatalogRenderer,
    ) -> Result<usize, LoadError> {
        let path = path.as_ref();
        let result = catalog::read_catalog(path);
        let count = self.finish_load(result, renderer)?;
        self.source = Some(path.to_path_buf());
        Ok(count)
    }

    /// Load a catalog from text already in memory
    ///
    /// # Errors
    ///
    /// Returns the [`LoadError`] after it has been shown.
    pub fn on_file_contents(
        &mut self,
        contents: &str,
        renderer: &mut dyn CatalogRenderer,
    ) -> Result<usize, LoadError> {
        self.finish_load(catalog::parse_catalog(contents), renderer)
    }

    /// Load the most recently loaded file again
    ///
    /// Returns `None` if nothing has been loaded from a file yet.
    pub fn reload(
        &mut self,
        renderer: &mut dyn CatalogRenderer,
    ) -> Option<Result<usize, LoadError>> {
        let path = self.source.clone()?;
        Some(self.on_file_selected(path, renderer))
    }

    fn finish_load(
        &mut self,
        result: Result<Vec<CourseRecord>, LoadError>,
        renderer: &mut dyn CatalogRenderer,
    ) -> Result<usize, LoadError> {
        match result {
            Ok(courses) => {
                self.options = compute_filter_options(&courses);
                self.visible = courses.clone();
                self.courses = courses;
                // The sort key is kept; it applies from the next refresh.
                self.criteria = FilterCriteria::default();
                self.highlighted = None;
                self.error = None;

                renderer.render_options(&self.options);
                renderer.render_list(&self.visible);
                renderer.show_error("");
                Ok(self.courses.len())
            }
            Err(err) => {
                let message = err.user_message();
                self.error = Some(message.to_string());
                renderer.show_error(message);
                Err(err)
            }
        }
    }

    /// Replace all filter selections and refresh the list
    pub fn on_filter_changed(
        &mut self,
        criteria: FilterCriteria,
        renderer: &mut dyn CatalogRenderer,
    ) {
        tracing::debug!(?criteria, "filter changed");
        self.criteria = criteria;
        self.refresh(renderer);
    }

    /// Change a single filter selection and refresh the list
    pub fn set_filter(
        &mut self,
        field: FilterField,
        value: Option<String>,
        renderer: &mut dyn CatalogRenderer,
    ) {
        let mut criteria = self.criteria.clone();
        criteria.set(field, value);
        self.on_filter_changed(criteria, renderer);
    }

    /// Change the sort key and refresh the list
    pub fn on_sort_changed(&mut self, key: SortKey, renderer: &mut dyn CatalogRenderer) {
        tracing::debug!(sort = %key, "sort changed");
        self.sort_key = key;
        self.refresh(renderer);
    }

    /// Select a row of the visible list
    ///
    /// Highlights the row and shows the course details. Returns `None` and
    /// changes nothing if the index is out of range.
    pub fn on_row_selected(
        &mut self,
        index: usize,
        renderer: &mut dyn CatalogRenderer,
    ) -> Option<&CourseRecord> {
        let course = self.visible.get(index)?;
        self.highlighted = Some(index);
        self.details = Some(course.clone());
        renderer.highlight_row(index);
        renderer.render_details(course);
        Some(course)
    }

    /// Recompute the visible list from the catalog
    fn refresh(&mut self, renderer: &mut dyn CatalogRenderer) {
        let mut visible = apply_filters(&self.courses, &self.criteria);
        apply_sort(&mut visible, self.sort_key);
        self.visible = visible;
        self.highlighted = None;
        renderer.render_list(&self.visible);
    }

    /// Every loaded course, in file order
    #[must_use]
    pub fn courses(&self) -> &[CourseRecord] {
        &self.courses
    }

    /// Courses currently listed, filtered and sorted
    #[must_use]
    pub fn visible(&self) -> &[CourseRecord] {
        &self.visible
    }

    /// Filter options of the loaded catalog
    #[must_use]
    pub const fn options(&self) -> &FilterOptions {
        &self.options
    }

    /// Current filter selections
    #[must_use]
    pub const fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Current sort key
    #[must_use]
    pub const fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    /// Index of the highlighted row, if any
    #[must_use]
    pub const fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Course shown in the details panel
    ///
    /// Stays set across list refreshes and loads until another row is
    /// selected.
    #[must_use]
    pub const fn details(&self) -> Option<&CourseRecord> {
        self.details.as_ref()
    }

    /// Message of the last failed load, cleared by the next successful one
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Path of the last file loaded successfully
    #[must_use]
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}
