//! Application state for the ratatui TUI
//!
//! Holds everything the browser draws: the rendered rows, filter and sort
//! controls, the details panel and the error area. [`AppState`] is the
//! [`CatalogRenderer`] the [`CatalogView`](crate::view::CatalogView) drives,
//! so all catalog updates arrive through that trait.

use crate::course::CourseRecord;
use crate::filters::{FilterCriteria, FilterField, FilterOptions};
use crate::sort::SortKey;
use crate::ui::ratatui_adapter::widgets::TextInputState;
use crate::view::{CatalogRenderer, CourseDetails};
use ratatui::layout::Rect;
use std::time::{Duration, Instant};

/// Label of the empty filter selection
pub const ALL_LABEL: &str = "All";

/// Current mode of the TUI application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Normal browsing mode
    #[default]
    Normal,
    /// Help overlay is visible
    Help,
    /// Path prompt is active
    Input,
}

/// Severity of a transient status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Success,
    Info,
}

/// A status message with timestamp for TTL-based expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// Message level
    pub level: MessageLevel,
    /// Message text
    pub text: String,
    /// When the message was created
    pub created_at: Instant,
}

impl StatusMessage {
    /// Create a new status message
    #[must_use]
    pub fn new(level: MessageLevel, text: String) -> Self {
        Self {
            level,
            text,
            created_at: Instant::now(),
        }
    }

    /// Check if the message has expired based on TTL
    #[must_use]
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() > ttl
    }
}

const fn slot(field: FilterField) -> usize {
    match field {
        FilterField::Department => 0,
        FilterField::Level => 1,
        FilterField::Credits => 2,
        FilterField::Instructor => 3,
    }
}

/// Application state for the catalog browser
#[derive(Debug)]
pub struct AppState {
    /// Courses of the current listing, in display order
    pub rows: Vec<CourseRecord>,
    /// Number of courses in the loaded catalog
    pub total: usize,
    /// Option labels per filter, in [`FilterField::ALL`] order
    pub option_labels: [Vec<String>; 4],
    /// Selected option per filter; 0 is "All", `n` is `option_labels[_][n - 1]`
    pub option_index: [usize; 4],
    /// Sort key shown in the sort control
    pub sort_key: SortKey,
    /// Cursor position in the listing
    pub cursor: usize,
    /// Row highlighted as the current selection
    pub highlighted: Option<usize>,
    /// Content of the details panel
    pub details: Option<CourseDetails>,
    /// Error area text; empty hides it
    pub error: String,
    /// Current UI mode
    pub mode: Mode,
    /// Transient status messages
    pub messages: Vec<StatusMessage>,
    /// Message TTL for auto-expiry
    pub message_ttl: Duration,
    /// Whether the browser should exit
    pub should_exit: bool,
    /// Scroll offset for the course list
    pub scroll_offset: usize,
    /// Height of the visible list area (set during render)
    pub visible_height: usize,
    /// Inner area of the course list (set during render, used for clicks)
    pub list_area: Rect,
    /// State for the path prompt
    pub text_input_state: Option<TextInputState>,
    /// Name of the loaded file, for the list title
    pub source: Option<String>,
    /// Full path of the loaded file, prefilled in the path prompt
    pub source_path: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create an empty browser state
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            total: 0,
            option_labels: Default::default(),
            option_index: [0; 4],
            sort_key: SortKey::None,
            cursor: 0,
            highlighted: None,
            details: None,
            error: String::new(),
            mode: Mode::Normal,
            messages: Vec::new(),
            message_ttl: Duration::from_secs(5),
            should_exit: false,
            scroll_offset: 0,
            visible_height: 20, // Default, updated during render
            list_area: Rect::default(),
            text_input_state: None,
            source: None,
            source_path: None,
        }
    }

    /// Move cursor up
    pub const fn cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.adjust_scroll();
        }
    }

    /// Move cursor down
    pub const fn cursor_down(&mut self) {
        if self.cursor + 1 < self.rows.len() {
            self.cursor += 1;
            self.adjust_scroll();
        }
    }

    /// Move cursor up by one page
    pub const fn page_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(self.visible_height);
        self.adjust_scroll();
    }

    /// Move cursor down by one page
    pub fn page_down(&mut self) {
        let max_cursor = self.rows.len().saturating_sub(1);
        self.cursor = (self.cursor + self.visible_height).min(max_cursor);
        self.adjust_scroll();
    }

    /// Jump to first row
    pub const fn jump_to_start(&mut self) {
        self.cursor = 0;
        self.adjust_scroll();
    }

    /// Jump to last row
    pub const fn jump_to_end(&mut self) {
        self.cursor = self.rows.len().saturating_sub(1);
        self.adjust_scroll();
    }

    /// Adjust scroll offset to keep cursor visible
    const fn adjust_scroll(&mut self) {
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.visible_height > 0 && self.cursor >= self.scroll_offset + self.visible_height {
            self.scroll_offset = self.cursor.saturating_sub(self.visible_height - 1);
        }
    }

    /// Row under a screen position inside the list area
    #[must_use]
    pub fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.list_area;
        let inside = column >= area.x
            && column < area.x + area.width
            && row >= area.y
            && row < area.y + area.height;
        if !inside {
            return None;
        }
        let index = self.scroll_offset + usize::from(row - area.y);
        (index < self.rows.len()).then_some(index)
    }

    /// Label of the current selection of a filter
    #[must_use]
    pub fn filter_label(&self, field: FilterField) -> &str {
        let idx = self.option_index[slot(field)];
        idx.checked_sub(1)
            .and_then(|i| self.option_labels[slot(field)].get(i))
            .map_or(ALL_LABEL, String::as_str)
    }

    /// Step a filter to its next (or previous) option, wrapping through "All"
    ///
    /// Returns `false` when the filter has no options to step through.
    pub fn cycle_filter(&mut self, field: FilterField, forward: bool) -> bool {
        let choices = self.option_labels[slot(field)].len() + 1;
        if choices == 1 {
            return false;
        }
        let current = self.option_index[slot(field)];
        self.option_index[slot(field)] = if forward {
            (current + 1) % choices
        } else {
            (current + choices - 1) % choices
        };
        true
    }

    /// Filter criteria matching the filter controls
    #[must_use]
    pub fn criteria(&self) -> FilterCriteria {
        let mut criteria = FilterCriteria::new();
        for field in FilterField::ALL {
            let label = self.filter_label(field);
            if self.option_index[slot(field)] != 0 {
                criteria.set(field, Some(label.to_string()));
            }
        }
        criteria
    }

    /// Step the sort control
    pub fn cycle_sort(&mut self, forward: bool) {
        self.sort_key = if forward {
            self.sort_key.next()
        } else {
            self.sort_key.prev()
        };
    }

    /// Add a status message
    pub fn add_message(&mut self, level: MessageLevel, text: String) {
        self.messages.push(StatusMessage::new(level, text));
    }

    /// Messages that have not expired yet
    #[must_use]
    pub fn active_messages(&self) -> Vec<&StatusMessage> {
        self.messages
            .iter()
            .filter(|m| !m.is_expired(self.message_ttl))
            .collect()
    }

    /// Drop expired messages
    pub fn cleanup_messages(&mut self) {
        let ttl = self.message_ttl;
        self.messages.retain(|m| !m.is_expired(ttl));
    }

    /// Open the path prompt, prefilled with `initial`
    pub fn enter_text_input(&mut self, prompt: &str, initial: &str) {
        let mut input = TextInputState::new(prompt);
        input.set_buffer(initial);
        self.text_input_state = Some(input);
        self.mode = Mode::Input;
    }

    /// Close the path prompt, returning its state
    pub const fn exit_text_input(&mut self) -> Option<TextInputState> {
        self.mode = Mode::Normal;
        self.text_input_state.take()
    }

    /// Remember the file a catalog was loaded from
    pub fn set_source(&mut self, path: &std::path::Path) {
        self.source = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());
        self.source_path = Some(path.display().to_string());
    }

    /// Get mutable access to the path prompt
    pub const fn text_input_state_mut(&mut self) -> Option<&mut TextInputState> {
        self.text_input_state.as_mut()
    }
}

impl CatalogRenderer for AppState {
    fn render_options(&mut self, options: &FilterOptions) {
        for field in FilterField::ALL {
            self.option_labels[slot(field)] = options.values(field);
        }
        self.option_index = [0; 4];
    }

    fn render_list(&mut self, courses: &[CourseRecord]) {
        self.rows = courses.to_vec();
        self.highlighted = None;
        self.cursor = self.cursor.min(self.rows.len().saturating_sub(1));
        self.scroll_offset = self.scroll_offset.min(self.cursor);
        self.adjust_scroll();
    }

    fn highlight_row(&mut self, index: usize) {
        self.highlighted = Some(index);
        self.cursor = index;
        self.adjust_scroll();
    }

    fn render_details(&mut self, course: &CourseRecord) {
        self.details = Some(CourseDetails::from(course));
    }

    fn show_error(&mut self, message: &str) {
        self.error = message.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::compute_filter_options;
    use crate::testing::sample_courses;

    fn loaded_state() -> AppState {
        let courses = sample_courses();
        let mut state = AppState::new();
        state.render_options(&compute_filter_options(&courses));
        state.render_list(&courses);
        state.total = courses.len();
        state
    }

    #[test]
    fn test_cursor_navigation() {
        let mut state = loaded_state();

        assert_eq!(state.cursor, 0);

        state.cursor_down();
        assert_eq!(state.cursor, 1);

        state.jump_to_end();
        assert_eq!(state.cursor, 4);

        // Should not go past end
        state.cursor_down();
        assert_eq!(state.cursor, 4);

        state.cursor_up();
        assert_eq!(state.cursor, 3);

        state.jump_to_start();
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_paging_scrolls() {
        let mut state = loaded_state();
        state.visible_height = 2;

        state.page_down();
        assert_eq!(state.cursor, 2);
        assert_eq!(state.scroll_offset, 1);

        state.page_up();
        assert_eq!(state.cursor, 0);
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn test_filter_cycle_wraps_through_all() {
        let mut state = loaded_state();
        let field = FilterField::Department;
        assert_eq!(state.filter_label(field), ALL_LABEL);

        assert!(state.cycle_filter(field, true));
        assert_eq!(state.filter_label(field), "Computer Science");
        assert!(state.cycle_filter(field, true));
        assert!(state.cycle_filter(field, true));
        assert_eq!(state.filter_label(field), "History");
        assert!(state.cycle_filter(field, true));
        assert_eq!(state.filter_label(field), ALL_LABEL);

        assert!(state.cycle_filter(field, false));
        assert_eq!(state.filter_label(field), "History");
    }

    #[test]
    fn test_filter_cycle_without_options() {
        let mut state = AppState::new();
        assert!(!state.cycle_filter(FilterField::Level, true));
        assert!(state.criteria().is_unset());
    }

    #[test]
    fn test_criteria_from_controls() {
        let mut state = loaded_state();
        state.cycle_filter(FilterField::Credits, true);
        state.cycle_filter(FilterField::Instructor, false);

        let criteria = state.criteria();
        assert_eq!(criteria.credits.as_deref(), Some("4"));
        assert_eq!(criteria.instructor.as_deref(), Some("Alan Turing"));
        assert!(criteria.department.is_none());
    }

    #[test]
    fn test_render_options_resets_controls() {
        let mut state = loaded_state();
        state.cycle_filter(FilterField::Level, true);
        state.render_options(&compute_filter_options(&sample_courses()));
        assert_eq!(state.option_index, [0; 4]);
    }

    #[test]
    fn test_render_list_clears_highlight_and_clamps_cursor() {
        let mut state = loaded_state();
        state.highlight_row(4);
        assert_eq!(state.highlighted, Some(4));
        assert_eq!(state.cursor, 4);

        let courses = sample_courses();
        state.render_list(&courses[..2]);
        assert_eq!(state.highlighted, None);
        assert_eq!(state.cursor, 1);

        state.render_list(&[]);
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_row_at_maps_clicks() {
        let mut state = loaded_state();
        state.list_area = Rect::new(1, 4, 30, 3);
        state.scroll_offset = 1;

        assert_eq!(state.row_at(2, 4), Some(1));
        assert_eq!(state.row_at(2, 6), Some(3));
        assert_eq!(state.row_at(0, 4), None);
        assert_eq!(state.row_at(2, 7), None);
    }

    #[test]
    fn test_error_area() {
        let mut state = AppState::new();
        state.show_error("Failed to read file.");
        assert_eq!(state.error, "Failed to read file.");
        state.show_error("");
        assert!(state.error.is_empty());
    }

    #[test]
    fn test_sort_cycle() {
        let mut state = AppState::new();
        state.cycle_sort(true);
        assert_eq!(state.sort_key, SortKey::IdAsc);
        state.cycle_sort(false);
        state.cycle_sort(false);
        assert_eq!(state.sort_key, SortKey::SemesterDesc);
    }
}
