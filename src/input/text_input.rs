use crate::terminal::{KeyCode, KeyModifiers};
use unicode_width::UnicodeWidthChar;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResult {
    Handled,
    NotHandled,
    Submit,
}

/// Single-line edit buffer with a character-indexed cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    cursor_pos: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor_pos = self.value.chars().count();
    }

    pub fn cursor_pos(&self) -> usize {
        self.cursor_pos
    }

    /// Display width of the text left of the cursor.
    pub fn cursor_offset(&self) -> usize {
        self.value
            .chars()
            .take(self.cursor_pos)
            .map(|c| c.width().unwrap_or(0))
            .sum()
    }

    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> KeyResult {
        let ctrl = modifiers.contains(KeyModifiers::CONTROL);
        match code {
            KeyCode::Char('w') if ctrl => {
                self.delete_word();
                KeyResult::Handled
            }
            KeyCode::Char(_) if ctrl => KeyResult::NotHandled,
            KeyCode::Char(ch) => {
                self.insert_char(ch);
                KeyResult::Handled
            }
            KeyCode::Backspace if ctrl => {
                self.delete_word();
                KeyResult::Handled
            }
            KeyCode::Backspace => {
                self.backspace();
                KeyResult::Handled
            }
            KeyCode::Delete if ctrl => {
                self.delete_word_forward();
                KeyResult::Handled
            }
            KeyCode::Delete => {
                self.delete();
                KeyResult::Handled
            }
            KeyCode::Left => {
                if ctrl {
                    self.move_word_left();
                } else {
                    self.cursor_pos = self.cursor_pos.saturating_sub(1);
                }
                KeyResult::Handled
            }
            KeyCode::Right => {
                if ctrl {
                    self.move_word_right();
                } else if self.cursor_pos < self.len() {
                    self.cursor_pos += 1;
                }
                KeyResult::Handled
            }
            KeyCode::Home => {
                self.cursor_pos = 0;
                KeyResult::Handled
            }
            KeyCode::End => {
                self.cursor_pos = self.len();
                KeyResult::Handled
            }
            KeyCode::Enter => KeyResult::Submit,
            _ => KeyResult::NotHandled,
        }
    }

    fn len(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_pos)
            .map(|(idx, _)| idx)
            .unwrap_or(self.value.len())
    }

    fn insert_char(&mut self, ch: char) {
        let byte_pos = self.byte_index(self.cursor_pos);
        self.value.insert(byte_pos, ch);
        self.cursor_pos += 1;
    }

    fn backspace(&mut self) {
        if self.cursor_pos == 0 {
            return;
        }
        let byte_pos = self.byte_index(self.cursor_pos - 1);
        self.value.remove(byte_pos);
        self.cursor_pos -= 1;
    }

    fn delete(&mut self) {
        if self.cursor_pos < self.len() {
            let byte_pos = self.byte_index(self.cursor_pos);
            self.value.remove(byte_pos);
        }
    }

    fn is_separator(ch: char) -> bool {
        ch.is_whitespace() || matches!(ch, '.' | '/' | ',' | '-' | '@')
    }

    fn word_start_before(&self, pos: usize) -> usize {
        let chars: Vec<char> = self.value.chars().collect();
        let mut pos = pos;
        while pos > 0 && Self::is_separator(chars[pos - 1]) {
            pos -= 1;
        }
        while pos > 0 && !Self::is_separator(chars[pos - 1]) {
            pos -= 1;
        }
        pos
    }

    fn word_end_after(&self, pos: usize) -> usize {
        let chars: Vec<char> = self.value.chars().collect();
        let mut pos = pos;
        while pos < chars.len() && Self::is_separator(chars[pos]) {
            pos += 1;
        }
        while pos < chars.len() && !Self::is_separator(chars[pos]) {
            pos += 1;
        }
        pos
    }

    fn move_word_left(&mut self) {
        self.cursor_pos = self.word_start_before(self.cursor_pos);
    }

    fn move_word_right(&mut self) {
        self.cursor_pos = self.word_end_after(self.cursor_pos);
    }

    fn delete_word(&mut self) {
        let start = self.word_start_before(self.cursor_pos);
        let from = self.byte_index(start);
        let to = self.byte_index(self.cursor_pos);
        self.value.replace_range(from..to, "");
        self.cursor_pos = start;
    }

    fn delete_word_forward(&mut self) {
        let end = self.word_end_after(self.cursor_pos);
        let from = self.byte_index(self.cursor_pos);
        let to = self.byte_index(end);
        self.value.replace_range(from..to, "");
    }
}
