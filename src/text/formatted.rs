use std::fmt;

use enumset::{EnumSet, EnumSetType};
use serde::{Deserialize, Serialize};

/// Presentation hint attached to one fragment of a [`Text`].
#[derive(Debug, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumSetType)]
pub enum TextFormatFlag {
    Underline,
    HighLight,
    /// The fragment is shown but never committed.
    DontCommit,
    Bold,
    Strike,
    Italic,
}

pub type TextFormatFlags = EnumSet<TextFormatFlag>;

/// A string made of formatted fragments.
///
/// The cursor is a byte offset into the concatenation of all fragments, or
/// `None` when no cursor is shown. It is not validated against the content.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text {
    fragments: Vec<(String, TextFormatFlags)>,
    cursor: Option<usize>,
}

impl Text {
    pub fn new() -> Self {
        Self::default()
    }

    /// A text holding a single fragment.
    pub fn with_format(text: impl Into<String>, format: TextFormatFlags) -> Self {
        let mut t = Self::new();
        t.append(text, format);
        t
    }

    #[inline]
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    #[inline]
    pub fn set_cursor(&mut self, pos: Option<usize>) {
        self.cursor = pos;
    }

    /// Drop all fragments and hide the cursor.
    pub fn clear(&mut self) {
        self.fragments.clear();
        self.cursor = None;
    }

    pub fn append(&mut self, text: impl Into<String>, format: TextFormatFlags) {
        self.fragments.push((text.into(), format));
    }

    pub fn string_at(&self, idx: usize) -> Option<&str> {
        self.fragments.get(idx).map(|(s, _)| s.as_str())
    }

    pub fn format_at(&self, idx: usize) -> Option<TextFormatFlags> {
        self.fragments.get(idx).map(|(_, f)| *f)
    }

    /// Number of fragments.
    #[inline]
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Total length in bytes across all fragments.
    pub fn text_length(&self) -> usize {
        self.fragments.iter().map(|(s, _)| s.len()).sum()
    }

    pub fn fragments(&self) -> impl Iterator<Item = (&str, TextFormatFlags)> {
        self.fragments.iter().map(|(s, f)| (s.as_str(), *f))
    }

    /// Concatenation of every fragment not flagged
    /// [`DontCommit`](TextFormatFlag::DontCommit).
    pub fn to_string_for_commit(&self) -> String {
        self.fragments
            .iter()
            .filter(|(_, f)| !f.contains(TextFormatFlag::DontCommit))
            .map(|(s, _)| s.as_str())
            .collect()
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fragments
            .iter()
            .try_for_each(|(s, _)| f.write_str(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preedit() -> Text {
        let mut t = Text::new();
        t.append("ni", TextFormatFlag::Underline.into());
        t.append("hao", TextFormatFlag::HighLight | TextFormatFlag::Bold);
        t.append("[hint]", TextFormatFlag::DontCommit.into());
        t
    }

    #[test]
    fn fragments_and_lengths() {
        let t = preedit();
        assert_eq!(t.len(), 3);
        assert_eq!(t.text_length(), 11);
        assert_eq!(t.string_at(1), Some("hao"));
        assert_eq!(
            t.format_at(1),
            Some(TextFormatFlag::HighLight | TextFormatFlag::Bold)
        );
        assert_eq!(t.string_at(3), None);
        assert_eq!(t.format_at(3), None);
    }

    #[test]
    fn display_and_commit_string() {
        let t = preedit();
        assert_eq!(t.to_string(), "nihao[hint]");
        assert_eq!(t.to_string_for_commit(), "nihao");
    }

    #[test]
    fn cursor_and_clear() {
        let mut t = Text::with_format("abc", TextFormatFlags::empty());
        assert_eq!(t.cursor(), None);
        t.set_cursor(Some(2));
        assert_eq!(t.cursor(), Some(2));
        t.clear();
        assert!(t.is_empty());
        assert_eq!(t.cursor(), None);
        assert_eq!(t.to_string(), "");
    }

    #[test]
    fn json_roundtrip() {
        let mut t = preedit();
        t.set_cursor(Some(5));
        let s = serde_json::to_string(&t).unwrap();
        let back: Text = serde_json::from_str(&s).unwrap();
        assert_eq!(back, t);
    }
}
