//! Ratatui widgets for the catalog browser

mod course_list;
mod details_pane;
mod filter_bar;
mod help_bar;
mod help_overlay;
mod status_bar;
mod text_input;

pub use course_list::CourseList;
pub use details_pane::DetailsPane;
pub use filter_bar::{FILTER_KEYS, FilterBar};
pub use help_bar::{HelpBar, KeyHint};
pub use help_overlay::HelpOverlay;
pub use status_bar::StatusBar;
pub use text_input::{TextInputModal, TextInputState};
