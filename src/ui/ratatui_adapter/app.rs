//! Ratatui catalog browser
//!
//! Owns the terminal for the lifetime of the browser and translates
//! [`EventResult`]s into [`CatalogView`] operations.

use super::events::{EventResult, poll_and_handle};
use super::state::{AppState, MessageLevel, Mode};
use super::theme::Theme;
use super::widgets::{
    CourseList, DetailsPane, FilterBar, HelpBar, HelpOverlay, KeyHint, StatusBar, TextInputModal,
};
use crate::ui::error::{Result, UiError};
use crate::view::CatalogView;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    widgets::{Block, Borders},
};
use std::io::{self, IsTerminal, Stdout};
use std::path::Path;
use std::time::Duration;

/// Interactive catalog browser
pub struct CatalogBrowser {
    theme: Theme,
    hints: Vec<KeyHint>,
    poll_interval: Duration,
}

impl CatalogBrowser {
    /// Create a new browser
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: Theme::default(),
            hints: HelpBar::default_hints(),
            poll_interval: Duration::from_millis(250),
        }
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(Into::into)
    }

    /// Cleanup terminal after TUI
    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
        Ok(())
    }

    /// Run the browser until the user quits
    ///
    /// `initial` is loaded before the first frame; a failed load is shown in
    /// the error area like any other.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::NotATerminal`] when stdout is not a terminal, or an
    /// I/O error if the terminal cannot be driven.
    pub fn run(&self, view: &mut CatalogView, initial: Option<&Path>) -> Result<()> {
        if !io::stdout().is_terminal() {
            return Err(UiError::NotATerminal);
        }

        let mut state = AppState::new();
        if let Some(path) = initial {
            open_file(view, &mut state, path);
        }

        let mut terminal = Self::setup_terminal()?;

        // Run the event loop, ensuring cleanup happens
        let result = self.run_loop(&mut terminal, view, &mut state);

        // Cleanup terminal (always, even on error)
        if let Err(e) = Self::cleanup_terminal() {
            // Log cleanup error but prioritize the main result
            tracing::warn!(error = %e, "terminal cleanup failed");
            eprintln!("Warning: terminal cleanup failed: {e}");
        }

        result
    }

    fn run_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        view: &mut CatalogView,
        state: &mut AppState,
    ) -> Result<()> {
        while !state.should_exit {
            terminal.draw(|frame| self.render(frame, state))?;
            let result = poll_and_handle(state, self.poll_interval)?;
            apply_event(view, state, result);
            state.cleanup_messages();
        }
        Ok(())
    }

    fn render(&self, frame: &mut Frame, state: &mut AppState) {
        let area = frame.area();
        let theme = &self.theme;

        let status_height = {
            let messages = state.active_messages();
            u16::from(StatusBar::new(&state.error, &messages, theme).is_visible())
        };

        let main_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),             // Filter bar
                Constraint::Min(5),                // List + details
                Constraint::Length(status_height), // Status bar
                Constraint::Length(1),             // Help bar
            ])
            .split(area);

        let content = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(main_layout[1]);

        let list_inner = Block::default().borders(Borders::ALL).inner(content[0]);
        state.list_area = list_inner;
        state.visible_height = list_inner.height as usize;

        let state = &*state;
        frame.render_widget(FilterBar::new(state, theme), main_layout[0]);
        frame.render_widget(CourseList::new(state, theme), content[0]);
        frame.render_widget(DetailsPane::new(state.details.as_ref(), theme), content[1]);

        let messages = state.active_messages();
        frame.render_widget(StatusBar::new(&state.error, &messages, theme), main_layout[2]);
        frame.render_widget(HelpBar::new(&self.hints, theme), main_layout[3]);

        match state.mode {
            Mode::Help => frame.render_widget(HelpOverlay::new(theme), area),
            Mode::Input => {
                if let Some(input) = &state.text_input_state {
                    frame.render_widget(TextInputModal::new(input, theme), area);
                }
            }
            Mode::Normal => {}
        }
    }
}

impl Default for CatalogBrowser {
    fn default() -> Self {
        Self::new()
    }
}

/// Load a file into the view and sync the controls the view does not render
fn open_file(view: &mut CatalogView, state: &mut AppState, path: &Path) {
    if let Ok(count) = view.on_file_selected(path, state) {
        sync_after_load(view, state, count);
        state.set_source(path);
    }
}

fn sync_after_load(view: &CatalogView, state: &mut AppState, count: usize) {
    state.total = count;
    state.sort_key = view.sort_key();
    state.cursor = 0;
    state.scroll_offset = 0;
    state.add_message(MessageLevel::Success, format!("Loaded {count} course(s)"));
}

/// Carry out one event against the view
pub(crate) fn apply_event(view: &mut CatalogView, state: &mut AppState, result: EventResult) {
    match result {
        EventResult::Select(index) => {
            view.on_row_selected(index, state);
        }
        EventResult::FilterChanged => {
            let criteria = state.criteria();
            view.on_filter_changed(criteria, state);
        }
        EventResult::SortChanged => {
            let key = state.sort_key;
            view.on_sort_changed(key, state);
        }
        EventResult::Open(path) => open_file(view, state, &path),
        EventResult::Reload => match view.reload(state) {
            Some(Ok(count)) => sync_after_load(view, state, count),
            Some(Err(_)) => {}
            None => state.add_message(MessageLevel::Info, "No file to reload".to_string()),
        },
        EventResult::Quit => state.should_exit = true,
        EventResult::Continue | EventResult::Ignored => {}
    }
}
