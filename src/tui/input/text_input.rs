//! Single-line text field editing.

use unicode_width::UnicodeWidthStr;

/// State for a text input field.
#[derive(Clone, Debug, Default)]
pub struct TextInput {
    content: String,
    /// Cursor position as a character index, `0..=char_count`.
    cursor: usize,
}

impl TextInput {
    /// Creates a new empty text input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an input holding `content` with the cursor at the end.
    pub fn with_content(content: impl Into<String>) -> Self {
        let content = content.into();
        let cursor = content.chars().count();
        Self { content, cursor }
    }

    /// Inserts a character at the cursor position.
    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Deletes the character before the cursor. Returns `true` if the
    /// content changed.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.content.remove(at);
        true
    }

    /// Deletes the character under the cursor. Returns `true` if the
    /// content changed.
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.char_count() {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.content.remove(at);
        true
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Returns the current content as a string slice.
    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Returns whether the input is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Returns the cursor position as a character index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the terminal column offset of the cursor, accounting for
    /// wide characters.
    pub fn display_cursor(&self) -> u16 {
        let before = &self.content[..self.byte_index(self.cursor)];
        u16::try_from(before.width()).unwrap_or(u16::MAX)
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map_or(self.content.len(), |(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edits_at_cursor() {
        let mut input = TextInput::with_content("AC");
        input.move_left();
        input.insert('B');
        assert_eq!(input.as_str(), "ABC");
        assert_eq!(input.cursor(), 2);

        assert!(input.backspace());
        assert_eq!(input.as_str(), "AC");
        assert!(input.delete());
        assert_eq!(input.as_str(), "A");
        assert!(!input.delete());
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let mut input = TextInput::with_content("x");
        input.move_home();
        assert!(!input.backspace());
        assert_eq!(input.as_str(), "x");
    }

    #[test]
    fn handles_multibyte_characters() {
        let mut input = TextInput::new();
        input.insert('é');
        input.insert('株');
        input.move_left();
        input.insert('x');
        assert_eq!(input.as_str(), "éx株");
        // 'é' is one column wide, 'x' one column.
        assert_eq!(input.display_cursor(), 2);
        input.move_end();
        assert_eq!(input.display_cursor(), 4);
    }
}
