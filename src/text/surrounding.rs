use std::fmt;

use serde::{Deserialize, Serialize};

/// Text around the input cursor as reported by a client.
///
/// `anchor` and `cursor` are codepoint offsets into `text`; the selection is
/// the range between them. An invalid instance carries no text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurroundingText {
    text: String,
    anchor: usize,
    cursor: usize,
    valid: bool,
}

/// Byte offset of the `n`-th codepoint, or the end of `s`.
fn byte_offset(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map_or(s.len(), |(i, _)| i)
}

impl SurroundingText {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Forget the text and reset both offsets.
    pub fn invalidate(&mut self) {
        self.valid = false;
        self.anchor = 0;
        self.cursor = 0;
        self.text.clear();
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn anchor(&self) -> usize {
        self.anchor
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Codepoints between anchor and cursor, clamped to the text.
    pub fn selected_text(&self) -> String {
        let start = self.anchor.min(self.cursor);
        let end = self.anchor.max(self.cursor);
        if start == end {
            return String::new();
        }
        let from = byte_offset(&self.text, start);
        let to = from + byte_offset(&self.text[from..], end - start);
        self.text[from..to].to_string()
    }

    pub fn set_text(&mut self, text: impl Into<String>, cursor: usize, anchor: usize) {
        self.valid = true;
        self.text = text.into();
        self.cursor = cursor;
        self.anchor = anchor;
    }

    pub fn set_cursor(&mut self, cursor: usize, anchor: usize) {
        self.cursor = cursor;
        self.anchor = anchor;
    }

    /// Delete `size` codepoints starting `offset` codepoints from the cursor.
    ///
    /// The cursor moves to the start of the deleted range. A range that does
    /// not fit inside the text clears it instead. The anchor always collapses
    /// onto the cursor. Does nothing while invalid.
    pub fn delete_text(&mut self, offset: isize, size: usize) {
        if !self.valid {
            return;
        }
        let len = self.text.chars().count();
        let start = isize::try_from(self.cursor)
            .ok()
            .and_then(|c| c.checked_add(offset))
            .and_then(|p| usize::try_from(p).ok())
            .filter(|&p| p.checked_add(size).is_some_and(|end| end <= len));
        match start {
            Some(pos) => {
                let from = byte_offset(&self.text, pos);
                let to = from + byte_offset(&self.text[from..], size);
                self.text.replace_range(from..to, "");
                self.cursor = pos;
            }
            None => {
                log::debug!(
                    "delete_text(offset={offset}, size={size}) out of range for {}, clearing",
                    self
                );
                self.text.clear();
                self.cursor = 0;
            }
        }
        self.anchor = self.cursor;
    }
}

impl fmt::Display for SurroundingText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SurroundingText(text={},anchor={},cursor={})",
            self.text, self.anchor, self.cursor
        )
    }
}
