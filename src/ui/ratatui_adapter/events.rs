//! Event handling for the ratatui TUI
//!
//! Handles keyboard and mouse events. Cursor movement and control changes
//! are applied to the [`AppState`] directly; anything that needs the catalog
//! is returned as an [`EventResult`] for the app loop to carry out.

use super::state::{AppState, Mode};
use crate::filters::FilterField;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::path::PathBuf;
use std::time::Duration;

/// Result of handling an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Continue running the event loop
    Continue,
    /// A row was chosen
    Select(usize),
    /// A filter control changed
    FilterChanged,
    /// The sort control changed
    SortChanged,
    /// A file path was entered
    Open(PathBuf),
    /// Load the current file again
    Reload,
    /// Exit the browser
    Quit,
    /// No action taken
    Ignored,
}

/// Filter cycled by a letter key; uppercase steps backwards
fn filter_for_key(c: char) -> Option<(FilterField, bool)> {
    let field = match c.to_ascii_lowercase() {
        'd' => FilterField::Department,
        'l' => FilterField::Level,
        'c' => FilterField::Credits,
        'i' => FilterField::Instructor,
        _ => return None,
    };
    Some((field, c.is_ascii_lowercase()))
}

/// Handle events in normal mode
pub(crate) fn handle_normal_mode(state: &mut AppState, key: KeyEvent) -> EventResult {
    match (key.code, key.modifiers) {
        // Exit
        (KeyCode::Esc | KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            EventResult::Quit
        }

        // Selection
        (KeyCode::Enter | KeyCode::Char(' '), _) => {
            if state.rows.is_empty() {
                EventResult::Ignored
            } else {
                EventResult::Select(state.cursor)
            }
        }

        // Navigation
        (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::NONE) => {
            state.cursor_up();
            EventResult::Continue
        }
        (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::NONE) => {
            state.cursor_down();
            EventResult::Continue
        }
        (KeyCode::PageUp, _) => {
            state.page_up();
            EventResult::Continue
        }
        (KeyCode::PageDown, _) => {
            state.page_down();
            EventResult::Continue
        }
        (KeyCode::Home, _) => {
            state.jump_to_start();
            EventResult::Continue
        }
        (KeyCode::End, _) => {
            state.jump_to_end();
            EventResult::Continue
        }

        // Help overlay
        (KeyCode::F(1), _) | (KeyCode::Char('?'), _) => {
            state.mode = Mode::Help;
            EventResult::Continue
        }

        // Sort
        (KeyCode::Char('s'), _) => {
            state.cycle_sort(true);
            EventResult::SortChanged
        }
        (KeyCode::Char('S'), _) => {
            state.cycle_sort(false);
            EventResult::SortChanged
        }

        // Catalog
        (KeyCode::Char('o'), KeyModifiers::NONE) => {
            let initial = state.source_path.clone().unwrap_or_default();
            state.enter_text_input("Open catalog", &initial);
            EventResult::Continue
        }
        (KeyCode::Char('r'), KeyModifiers::NONE) => EventResult::Reload,

        // Filters
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => match filter_for_key(c) {
            Some((field, forward)) if state.cycle_filter(field, forward) => {
                EventResult::FilterChanged
            }
            _ => EventResult::Ignored,
        },

        _ => EventResult::Ignored,
    }
}

/// Handle events in help mode
fn handle_help_mode(state: &mut AppState, _key: KeyEvent) -> EventResult {
    // Any key closes help
    state.mode = Mode::Normal;
    EventResult::Continue
}

/// Handle events while the path prompt is open
pub(crate) fn handle_input_mode(state: &mut AppState, key: KeyEvent) -> EventResult {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => {
            state.exit_text_input();
            EventResult::Continue
        }
        (KeyCode::Enter, _) => {
            let path = state
                .exit_text_input()
                .and_then(|input| input.value().map(PathBuf::from));
            path.map_or(EventResult::Continue, EventResult::Open)
        }
        _ => {
            let Some(input) = state.text_input_state_mut() else {
                state.mode = Mode::Normal;
                return EventResult::Ignored;
            };
            match (key.code, key.modifiers) {
                (KeyCode::Char('u'), KeyModifiers::CONTROL) => input.clear_line(),
                (KeyCode::Char('w'), KeyModifiers::CONTROL) => input.delete_word_backwards(),
                (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => input.insert_char(c),
                (KeyCode::Backspace, _) => input.backspace(),
                (KeyCode::Delete, _) => input.delete(),
                (KeyCode::Left, _) => input.cursor_left(),
                (KeyCode::Right, _) => input.cursor_right(),
                (KeyCode::Home, _) => input.cursor_home(),
                (KeyCode::End, _) => input.cursor_end(),
                _ => return EventResult::Ignored,
            }
            EventResult::Continue
        }
    }
}

/// Handle mouse events
pub(crate) fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> EventResult {
    if state.mode != Mode::Normal {
        return EventResult::Ignored;
    }
    match mouse.kind {
        MouseEventKind::ScrollUp => {
            state.cursor_up();
            EventResult::Continue
        }
        MouseEventKind::ScrollDown => {
            state.cursor_down();
            EventResult::Continue
        }
        MouseEventKind::Down(MouseButton::Left) => state
            .row_at(mouse.column, mouse.row)
            .map_or(EventResult::Ignored, EventResult::Select),
        _ => EventResult::Ignored,
    }
}

/// Dispatch a single terminal event
pub(crate) fn handle_event(state: &mut AppState, event: Event) -> EventResult {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => match state.mode {
            Mode::Normal => handle_normal_mode(state, key),
            Mode::Help => handle_help_mode(state, key),
            Mode::Input => handle_input_mode(state, key),
        },
        Event::Mouse(mouse) => handle_mouse(state, mouse),
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    }
}

/// Poll for events and handle them
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle(state: &mut AppState, timeout: Duration) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }
    Ok(handle_event(state, event::read()?))
}
