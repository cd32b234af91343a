//! Modal single-line text input, used to enter a catalog path
//!
//! Enter submits, ESC cancels.

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// State for the text input modal
#[derive(Debug, Clone)]
pub struct TextInputState {
    /// The prompt/title to display
    pub prompt: String,
    /// Current input buffer
    pub buffer: String,
    /// Cursor position (character index, not byte)
    pub cursor: usize,
}

impl TextInputState {
    /// Create a new, empty text input state
    #[must_use]
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            buffer: String::new(),
            cursor: 0,
        }
    }

    /// Replace the buffer and put the cursor at its end
    pub fn set_buffer(&mut self, text: &str) {
        self.buffer = text.to_string();
        self.cursor_end();
    }

    /// Get byte index from cursor (character) position
    fn byte_index(&self) -> usize {
        self.buffer
            .char_indices()
            .nth(self.cursor)
            .map_or(self.buffer.len(), |(i, _)| i)
    }

    /// Insert a character at the cursor
    pub fn insert_char(&mut self, c: char) {
        let byte_idx = self.byte_index();
        self.buffer.insert(byte_idx, c);
        self.cursor += 1;
    }

    /// Delete character before cursor (backspace)
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let byte_idx = self.byte_index();
            let prev_byte_idx = self.buffer[..byte_idx]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
            self.buffer.remove(prev_byte_idx);
            self.cursor -= 1;
        }
    }

    /// Delete character at cursor (delete key)
    pub fn delete(&mut self) {
        let byte_idx = self.byte_index();
        if byte_idx < self.buffer.len() {
            self.buffer.remove(byte_idx);
        }
    }

    /// Move cursor left
    pub const fn cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move cursor right
    pub fn cursor_right(&mut self) {
        if self.cursor < self.buffer.chars().count() {
            self.cursor += 1;
        }
    }

    /// Move cursor to start
    pub const fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end
    pub fn cursor_end(&mut self) {
        self.cursor = self.buffer.chars().count();
    }

    /// Delete the path component before the cursor (Ctrl+W)
    pub fn delete_word_backwards(&mut self) {
        let byte_idx = self.byte_index();
        let before = self.buffer[..byte_idx].trim_end_matches(['/', '\\']);
        let new_end = before
            .rfind(|c: char| c == '/' || c == '\\' || c.is_whitespace())
            .map_or(0, |i| i + 1);

        self.buffer.drain(new_end..byte_idx);
        self.cursor = self.buffer[..new_end].chars().count();
    }

    /// Clear the entire line (Ctrl+U)
    pub fn clear_line(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// The submitted value, `None` when only whitespace was entered
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        let trimmed = self.buffer.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}

/// Centered single-line input modal
pub struct TextInputModal<'a> {
    state: &'a TextInputState,
    theme: &'a Theme,
}

impl<'a> TextInputModal<'a> {
    /// Create a new text input modal
    #[must_use]
    pub const fn new(state: &'a TextInputState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    /// Calculate centered area for the modal
    fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        Rect::new(x, y, width.min(area.width), height.min(area.height))
    }

    /// Visible slice of the buffer and the cursor offset within it
    fn visible_window(&self, display_width: usize) -> (String, usize) {
        let buffer = &self.state.buffer;
        let cursor_char = self.state.cursor;
        let total_chars = buffer.chars().count();

        if total_chars < display_width {
            return (buffer.clone(), cursor_char);
        }

        // Keep the cursor in view, preferring the end of the path
        let start_char = (cursor_char + 1).saturating_sub(display_width);
        let visible: String = buffer
            .chars()
            .skip(start_char)
            .take(display_width)
            .collect();
        (visible, cursor_char - start_char)
    }
}

impl Widget for TextInputModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = 70.min(area.width.saturating_sub(4));
        // 2 (modal borders) + 3 (input field) + 1 (help text)
        let modal_area = Self::centered_rect(width, 6, area);

        Clear.render(modal_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.cursor_style())
            .title(format!(" {} ", self.state.prompt))
            .title_alignment(Alignment::Center);

        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let chunks = Layout::vertical([Constraint::Length(3), Constraint::Length(1)]).split(inner);

        let input_block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style());
        let input_inner = input_block.inner(chunks[0]);
        input_block.render(chunks[0], buf);

        let (visible_text, cursor_offset) = self.visible_window(input_inner.width as usize);

        let before_cursor: String = visible_text.chars().take(cursor_offset).collect();
        let cursor_char: String = visible_text.chars().skip(cursor_offset).take(1).collect();
        let after_cursor: String = visible_text.chars().skip(cursor_offset + 1).collect();

        let cursor_display = if cursor_char.is_empty() { " ".to_string() } else { cursor_char };

        let line = Line::from(vec![
            Span::raw(before_cursor),
            Span::styled(
                cursor_display,
                Style::default()
                    .bg(self.theme.cursor)
                    .fg(Color::Black)
                    .add_modifier(Modifier::SLOW_BLINK),
            ),
            Span::raw(after_cursor),
        ]);
        Paragraph::new(line).render(input_inner, buf);

        Paragraph::new("Enter: open | ESC: cancel")
            .style(self.theme.dimmed_style())
            .alignment(Alignment::Center)
            .render(chunks[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_input() {
        let mut state = TextInputState::new("Open");
        for c in "a.json".chars() {
            state.insert_char(c);
        }
        assert_eq!(state.buffer, "a.json");
        assert_eq!(state.cursor, 6);
    }

    #[test]
    fn test_cursor_movement() {
        let mut state = TextInputState::new("Open");
        state.set_buffer("hello");
        assert_eq!(state.cursor, 5);

        state.cursor_left();
        assert_eq!(state.cursor, 4);

        state.cursor_home();
        assert_eq!(state.cursor, 0);

        state.cursor_end();
        state.cursor_right();
        assert_eq!(state.cursor, 5); // Should not go past end
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut state = TextInputState::new("Open");
        state.set_buffer("héllo");

        state.backspace();
        assert_eq!(state.buffer, "héll");

        state.cursor = 1;
        state.delete();
        assert_eq!(state.buffer, "hll");

        state.cursor = 0;
        state.backspace();
        assert_eq!(state.buffer, "hll"); // Nothing happens at position 0
    }

    #[test]
    fn test_delete_path_component() {
        let mut state = TextInputState::new("Open");
        state.set_buffer("/home/me/courses.json");

        state.delete_word_backwards();
        assert_eq!(state.buffer, "/home/me/");

        state.delete_word_backwards();
        assert_eq!(state.buffer, "/home/");
        assert_eq!(state.cursor, 6);
    }

    #[test]
    fn test_value_trims() {
        let mut state = TextInputState::new("Open");
        assert_eq!(state.value(), None);
        state.set_buffer("   ");
        assert_eq!(state.value(), None);
        state.set_buffer(" data/c.json ");
        assert_eq!(state.value(), Some("data/c.json"));
        state.clear_line();
        assert!(state.buffer.is_empty());
    }
}
