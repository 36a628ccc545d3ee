//! Minimal single-line text field for form editing.
//!
//! Supports the subset of editing operations the form views need: insert,
//! backspace/delete, and cursor movement. Cursor positions are in char
//! units; rendering converts to display columns with unicode-width.

use unicode_width::UnicodeWidthStr;

/// Single-line editable text field with a char-indexed cursor.
#[derive(Debug, Clone, Default)]
pub struct TextField {
    text: String,
    cursor: usize,
}

impl TextField {
    /// Returns the field contents.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the cursor position in char units.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the display width of the text before the cursor.
    pub fn cursor_display_col(&self) -> u16 {
        let byte_idx = self.byte_index(self.cursor);
        self.text[..byte_idx].width() as u16
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Inserts a character at the cursor, advancing the cursor.
    pub fn insert(&mut self, c: char) {
        let byte_idx = self.byte_index(self.cursor);
        self.text.insert(byte_idx, c);
        self.cursor += 1;
    }

    /// Removes the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let byte_idx = self.byte_index(self.cursor);
        self.text.remove(byte_idx);
    }

    /// Removes the character under the cursor.
    pub fn delete(&mut self) {
        if self.cursor >= self.text.chars().count() {
            return;
        }
        let byte_idx = self.byte_index(self.cursor);
        self.text.remove(byte_idx);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        let len = self.text.chars().count();
        self.cursor = (self.cursor + 1).min(len);
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.chars().count();
    }

    /// Clears the field.
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Returns the text with every char replaced by a mask character.
    /// Used for password fields.
    pub fn masked(&self) -> String {
        "•".repeat(self.text.chars().count())
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map_or(self.text.len(), |(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(s: &str) -> TextField {
        let mut field = TextField::default();
        for c in s.chars() {
            field.insert(c);
        }
        field
    }

    #[test]
    fn test_insert_and_backspace() {
        let mut field = typed("19.99");
        assert_eq!(field.text(), "19.99");
        field.backspace();
        assert_eq!(field.text(), "19.9");
    }

    #[test]
    fn test_insert_mid_text() {
        let mut field = typed("mg");
        field.move_left();
        field.insert('u');
        assert_eq!(field.text(), "mug");
    }

    #[test]
    fn test_cursor_clamped() {
        let mut field = typed("ab");
        field.move_right();
        field.move_right();
        assert_eq!(field.cursor(), 2);
        field.move_home();
        field.backspace(); // no-op at start
        assert_eq!(field.text(), "ab");
    }

    #[test]
    fn test_multibyte_editing() {
        let mut field = typed("café");
        field.backspace();
        assert_eq!(field.text(), "caf");
        field.insert('é');
        assert_eq!(field.text(), "café");
    }

    #[test]
    fn test_masked() {
        let field = typed("secret");
        assert_eq!(field.masked(), "••••••");
    }
}
