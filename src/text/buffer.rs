//! Source text buffer
//!
//! The textarea element holds the persistent text; `Buffer` is a value-type
//! snapshot of it with the edit operations the pane needs. Selection offsets
//! use UTF-16 code units, matching what the DOM reports for a textarea.

use serde::{Deserialize, Serialize};

/// A caret or selection range in UTF-16 code units.
///
/// Mirrors textarea `selectionStart`/`selectionEnd` semantics: a collapsed
/// range (start == end) is a plain caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionRange {
    pub start: u32,
    pub end: u32,
}

impl SelectionRange {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Create a collapsed range (caret only, no selection)
    pub fn caret(pos: u32) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// Check if this range is collapsed (start == end)
    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    /// The range ordered start-to-end
    fn ordered(&self) -> (u32, u32) {
        (self.start.min(self.end), self.start.max(self.end))
    }
}

/// Snapshot of the editor's source text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Buffer {
    text: String,
}

impl Buffer {
    /// Create a new empty buffer
    pub fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    /// Create a buffer from existing text
    pub fn from_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The buffer contents
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consume the buffer, yielding its contents
    pub fn into_text(self) -> String {
        self.text
    }

    /// Length in UTF-16 code units (the unit the DOM selection reports)
    pub fn len_utf16(&self) -> u32 {
        self.text.encode_utf16().count() as u32
    }

    /// Number of newline-delimited segments. Always >= 1: an empty buffer
    /// has one empty line.
    pub fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }

    /// Splice a single tab character over the given selection and return the
    /// new caret position (immediately after the inserted tab).
    ///
    /// An active selection is replaced by the tab, standard text-replacement
    /// semantics. Offsets are clamped to the buffer, so the operation is
    /// total over any input range.
    pub fn insert_tab(&mut self, selection: SelectionRange) -> u32 {
        let limit = self.len_utf16();
        let (start, end) = selection.ordered();
        let start = start.min(limit);
        let end = end.min(limit);

        let start_byte = utf16_to_byte_index(&self.text, start);
        let end_byte = utf16_to_byte_index(&self.text, end);
        self.text.replace_range(start_byte..end_byte, "\t");

        start + 1
    }
}

/// Map a UTF-16 offset onto the byte index of the underlying UTF-8 string.
///
/// An offset landing inside a surrogate pair resolves to the start of that
/// character; an offset past the end resolves to the end of the string.
fn utf16_to_byte_index(text: &str, pos: u32) -> usize {
    let mut units: u32 = 0;
    for (byte_idx, ch) in text.char_indices() {
        if units >= pos {
            return byte_idx;
        }
        units += ch.len_utf16() as u32;
    }
    text.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_buffer_has_one_line() {
        assert_eq!(Buffer::new().line_count(), 1);
    }

    #[test]
    fn test_line_count_matches_newline_segments() {
        assert_eq!(Buffer::from_text("let x = 1").line_count(), 1);
        assert_eq!(Buffer::from_text("a\nb\nc").line_count(), 3);
        // Trailing newline opens a final empty segment
        assert_eq!(Buffer::from_text("a\n").line_count(), 2);
        assert_eq!(Buffer::from_text("\n\n").line_count(), 3);
    }

    #[test]
    fn test_insert_tab_at_caret() {
        let mut buffer = Buffer::from_text("abc");
        let caret = buffer.insert_tab(SelectionRange::caret(1));
        assert_eq!(buffer.text(), "a\tbc");
        assert_eq!(caret, 2);
    }

    #[test]
    fn test_insert_tab_grows_buffer_by_one() {
        let mut buffer = Buffer::from_text("fn main() {}");
        let before = buffer.len_utf16();
        buffer.insert_tab(SelectionRange::caret(3));
        assert_eq!(buffer.len_utf16(), before + 1);
    }

    #[test]
    fn test_insert_tab_replaces_selection() {
        let mut buffer = Buffer::from_text("hello world");
        let caret = buffer.insert_tab(SelectionRange::new(5, 11));
        assert_eq!(buffer.text(), "hello\t");
        assert_eq!(caret, 6);
    }

    #[test]
    fn test_insert_tab_backward_selection() {
        // DOM keeps start <= end, but the splice is total either way
        let mut buffer = Buffer::from_text("hello world");
        let caret = buffer.insert_tab(SelectionRange::new(11, 5));
        assert_eq!(buffer.text(), "hello\t");
        assert_eq!(caret, 6);
    }

    #[test]
    fn test_insert_tab_clamps_out_of_range() {
        let mut buffer = Buffer::from_text("ab");
        let caret = buffer.insert_tab(SelectionRange::new(10, 20));
        assert_eq!(buffer.text(), "ab\t");
        assert_eq!(caret, 3);
    }

    #[test]
    fn test_insert_tab_multibyte_content() {
        // "é" is 2 bytes in UTF-8 but 1 UTF-16 unit; the textarea reports
        // offset 1 for a caret after it
        let mut buffer = Buffer::from_text("é1");
        let caret = buffer.insert_tab(SelectionRange::caret(1));
        assert_eq!(buffer.text(), "é\t1");
        assert_eq!(caret, 2);
    }

    #[test]
    fn test_insert_tab_astral_content() {
        // "𝄞" occupies 2 UTF-16 units; a caret after it sits at offset 2
        let mut buffer = Buffer::from_text("𝄞x");
        let caret = buffer.insert_tab(SelectionRange::caret(2));
        assert_eq!(buffer.text(), "𝄞\tx");
        assert_eq!(caret, 3);
    }

    #[test]
    fn test_insert_tab_into_empty_buffer() {
        let mut buffer = Buffer::new();
        let caret = buffer.insert_tab(SelectionRange::caret(0));
        assert_eq!(buffer.text(), "\t");
        assert_eq!(caret, 1);
        assert_eq!(buffer.line_count(), 1);
    }

    #[test]
    fn test_selection_range_collapsed() {
        assert!(SelectionRange::caret(4).is_collapsed());
        assert!(!SelectionRange::new(2, 4).is_collapsed());
    }
}
