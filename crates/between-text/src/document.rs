//! Read-only document snapshot.
//!
//! A `Document` wraps a [`ropey::Rope`] and exposes exactly what the span
//! resolver needs from a host editor: the full text, per-line text without
//! its line ending, per-line end columns, the line count, and translation
//! between flat char offsets and `(line, col)` positions.
//!
//! - **Columns and offsets are chars**, not bytes. Byte offsets never leak
//!   out of this module.
//! - **Immutable.** A selection is resolved against one snapshot; the host
//!   builds a fresh `Document` if the text changes.

use std::borrow::Cow;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ropey::{Rope, RopeSlice};

use crate::position::{Position, Range};

/// An immutable text snapshot backed by a rope.
///
/// # Coordinate system
///
/// Positions are 0-indexed `(line, col)` pairs; offsets are absolute char
/// indices into the rope. A document ending in `\n` has a trailing empty
/// line, matching how editors count lines.
#[derive(Clone)]
pub struct Document {
    rope: Rope,
    path: Option<PathBuf>,
}

impl Document {
    // -- Construction -------------------------------------------------------

    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            path: None,
        }
    }

    /// Load a document from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains invalid UTF-8.
    pub fn from_file(path: &Path) -> io::Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(Self {
            rope: Rope::from_str(&text),
            path: Some(path.to_path_buf()),
        })
    }

    /// Read a whole document from any reader (stdin for the CLI host).
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or the input is not UTF-8.
    pub fn from_reader(reader: impl io::Read) -> io::Result<Self> {
        Ok(Self {
            rope: Rope::from_reader(reader)?,
            path: None,
        })
    }

    // -- Text access --------------------------------------------------------

    #[inline]
    #[must_use]
    pub const fn rope(&self) -> &Rope {
        &self.rope
    }

    /// The file this document was loaded from, if any.
    #[inline]
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Total number of lines. An empty document has one (empty) line.
    #[inline]
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Total char count.
    #[inline]
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// The full text as one string. Allocates.
    #[must_use]
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// A line's content without its line ending, or `None` past the last
    /// line. Borrows when the rope chunk is contiguous.
    #[must_use]
    pub fn line_text(&self, line: usize) -> Option<Cow<'_, str>> {
        let len = self.line_content_len(line)?;
        let slice = self.rope.line(line).slice(..len);
        Some(slice_to_cow(slice))
    }

    /// Number of chars in a line **excluding** its line ending (`\n`, `\r\n`,
    /// `\r`). This is the line's end column. `None` past the last line.
    ///
    /// Those three are the only line breaks: ropey is built with
    /// `cr_lines` instead of `unicode_lines`, so U+2028, U+2029, NEL, VT
    /// and FF are ordinary chars.
    #[must_use]
    pub fn line_content_len(&self, line: usize) -> Option<usize> {
        if line >= self.rope.len_lines() {
            return None;
        }
        let rope_line = self.rope.line(line);
        let total = rope_line.len_chars();
        if total == 0 {
            return Some(0);
        }
        let len = match rope_line.char(total - 1) {
            '\n' if total >= 2 && rope_line.char(total - 2) == '\r' => total - 2,
            '\n' | '\r' => total - 1,
            _ => total,
        };
        Some(len)
    }

    /// The text covered by `range`, or `None` if either end is out of bounds.
    #[must_use]
    pub fn slice(&self, range: Range) -> Option<RopeSlice<'_>> {
        let start = self.position_to_offset(range.start)?;
        let end = self.position_to_offset(range.end)?;
        Some(self.rope.slice(start..end))
    }

    // -- Coordinate conversion ----------------------------------------------

    /// Convert a position to an absolute char offset.
    ///
    /// `None` when the line does not exist or the column is past the line's
    /// end column. The end column itself is valid (cursor after the last
    /// char of the line).
    #[must_use]
    pub fn position_to_offset(&self, pos: Position) -> Option<usize> {
        let max_col = self.line_content_len(pos.line)?;
        if pos.col > max_col {
            return None;
        }
        Some(self.rope.line_to_char(pos.line) + pos.col)
    }

    /// Convert an absolute char offset to a position.
    ///
    /// Offsets past the end clamp to the end of the document, so callers
    /// doing offset arithmetic never have to special-case the last char.
    #[must_use]
    pub fn offset_to_position(&self, offset: usize) -> Position {
        let offset = offset.min(self.rope.len_chars());
        let line = self.rope.char_to_line(offset);
        Position::new(line, offset - self.rope.line_to_char(line))
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::from_text("")
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("path", &self.path)
            .field("lines", &self.line_count())
            .field("chars", &self.len_chars())
            .finish()
    }
}

fn slice_to_cow(slice: RopeSlice<'_>) -> Cow<'_, str> {
    slice
        .as_str()
        .map_or_else(|| Cow::Owned(slice.to_string()), Cow::Borrowed)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn p(line: usize, col: usize) -> Position {
        Position::new(line, col)
    }

    // -- Line access --------------------------------------------------------

    #[test]
    fn empty_document_has_one_line() {
        let doc = Document::from_text("");
        assert_eq!(doc.len_chars(), 0);
        assert_eq!(doc.line_count(), 1);
        assert_eq!(doc.line_content_len(0), Some(0));
        assert_eq!(doc.line_text(0).as_deref(), Some(""));
    }

    #[test]
    fn trailing_newline_adds_empty_line() {
        let doc = Document::from_text("a\nb\n");
        assert_eq!(doc.line_count(), 3);
        assert_eq!(doc.line_text(2).as_deref(), Some(""));
    }

    #[test]
    fn line_text_strips_every_ending() {
        let doc = Document::from_text("lf\ncrlf\r\ncr\rlast");
        assert_eq!(doc.line_text(0).as_deref(), Some("lf"));
        assert_eq!(doc.line_text(1).as_deref(), Some("crlf"));
        assert_eq!(doc.line_text(2).as_deref(), Some("cr"));
        assert_eq!(doc.line_text(3).as_deref(), Some("last"));
        assert_eq!(doc.line_text(4), None);
    }

    #[test]
    fn only_lf_and_cr_break_lines() {
        let doc = Document::from_text("a\u{2028}b\u{2029}c\u{85}d\x0Be\x0Cf");
        assert_eq!(doc.line_count(), 1);
        assert_eq!(doc.line_content_len(0), Some(11));
        assert_eq!(doc.line_text(0).as_deref(), Some("a\u{2028}b\u{2029}c\u{85}d\x0Be\x0Cf"));
        assert_eq!(doc.position_to_offset(p(0, 11)), Some(11));
        assert_eq!(doc.offset_to_position(2), p(0, 2));
    }

    #[test]
    fn content_len_counts_chars_not_bytes() {
        let doc = Document::from_text("café\n");
        assert_eq!(doc.line_content_len(0), Some(4));
    }

    // -- Offset ↔ position --------------------------------------------------

    #[test]
    fn offset_to_position_across_lines() {
        let doc = Document::from_text("ab\ncd\nef");
        assert_eq!(doc.offset_to_position(0), p(0, 0));
        assert_eq!(doc.offset_to_position(2), p(0, 2));
        assert_eq!(doc.offset_to_position(3), p(1, 0));
        assert_eq!(doc.offset_to_position(7), p(2, 1));
    }

    #[test]
    fn offset_past_end_clamps() {
        let doc = Document::from_text("ab\ncd");
        assert_eq!(doc.offset_to_position(5), p(1, 2));
        assert_eq!(doc.offset_to_position(500), p(1, 2));
    }

    #[test]
    fn position_to_offset_bounds() {
        let doc = Document::from_text("ab\ncd");
        assert_eq!(doc.position_to_offset(p(1, 1)), Some(4));
        assert_eq!(doc.position_to_offset(p(0, 2)), Some(2));
        assert_eq!(doc.position_to_offset(p(0, 3)), None);
        assert_eq!(doc.position_to_offset(p(2, 0)), None);
    }

    #[test]
    fn conversions_agree_on_unicode() {
        let doc = Document::from_text("naïve\n→ x");
        let pos = p(1, 2);
        let offset = doc.position_to_offset(pos).unwrap();
        assert_eq!(offset, 8);
        assert_eq!(doc.offset_to_position(offset), pos);
    }

    // -- Slicing ------------------------------------------------------------

    #[test]
    fn slice_returns_covered_text() {
        let doc = Document::from_text("foo(bar)\nbaz");
        let range = Range::new(p(0, 4), p(0, 7));
        assert_eq!(doc.slice(range).unwrap().to_string(), "bar");
        let range = Range::new(p(0, 4), p(1, 2));
        assert_eq!(doc.slice(range).unwrap().to_string(), "bar)\nba");
    }

    // -- I/O ----------------------------------------------------------------

    #[test]
    fn from_file_remembers_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        io::Write::write_all(&mut file, b"(x)\n").unwrap();
        let doc = Document::from_file(file.path()).unwrap();
        assert_eq!(doc.path(), Some(file.path()));
        assert_eq!(doc.text(), "(x)\n");
    }

    #[test]
    fn from_reader_reads_everything() {
        let doc = Document::from_reader("one\ntwo".as_bytes()).unwrap();
        assert_eq!(doc.line_count(), 2);
        assert_eq!(doc.path(), None);
    }
}
