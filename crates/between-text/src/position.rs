//! Document positions and selection ranges.
//!
//! All coordinates are **0-indexed** and columns count Unicode scalar values
//! (chars), which is what `ropey` indexes by. The command-line host converts
//! to and from 1-indexed `line:col` at its edges; that conversion never
//! belongs here.

use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// A location in a document: (line, column), both 0-indexed.
///
/// A position sits *between* characters: column `c` is the gap just before
/// the char at index `c` of the line. That is the reading the scanners use
/// when they talk about occurrences "before" or "after" the cursor.
///
/// # Ordering
///
/// Lexicographic, line first and then column, so
/// `Position { line: 0, col: 80 }` < `Position { line: 1, col: 0 }`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    /// The start of the document.
    pub const ZERO: Self = Self { line: 0, col: 0 };

    #[inline]
    #[must_use]
    pub const fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }

    /// Shift the column by `delta`, saturating at column 0.
    ///
    /// Stays on the same line: a selection end that is "one column back"
    /// from a delimiter is always on the delimiter's own line.
    #[inline]
    #[must_use]
    pub const fn translate_col(self, delta: isize) -> Self {
        let col = self.col.saturating_add_signed(delta);
        Self {
            line: self.line,
            col,
        }
    }
}

impl Ord for Position {
    #[inline]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.line
            .cmp(&other.line)
            .then(self.col.cmp(&other.col))
    }
}

impl PartialOrd for Position {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pos({}:{})", self.line, self.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.col + 1)
    }
}

/// Error from parsing a `LINE:COL` string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePositionError(String);

impl fmt::Display for ParsePositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected LINE:COL with both parts >= 1, got `{}`", self.0)
    }
}

impl std::error::Error for ParsePositionError {}

/// Parses the 1-indexed `LINE:COL` form produced by `Display`.
impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParsePositionError(s.to_owned());
        let (line, col) = s.trim().split_once(':').ok_or_else(err)?;
        let line: usize = line.parse().map_err(|_| err())?;
        let col: usize = col.parse().map_err(|_| err())?;
        if line == 0 || col == 0 {
            return Err(err());
        }
        Ok(Self::new(line - 1, col - 1))
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// A half-open selection `[start, end)` with `start <= end`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    /// Create a range. Panics in debug if `start > end`.
    #[inline]
    #[must_use]
    pub const fn new(start: Position, end: Position) -> Self {
        debug_assert!(
            start.line < end.line || (start.line == end.line && start.col <= end.col),
            "Range::new requires start <= end"
        );
        Self { start, end }
    }

    /// A zero-width range (a bare cursor) at `pos`.
    #[inline]
    #[must_use]
    pub const fn point(pos: Position) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.start.line == self.end.line && self.start.col == self.end.col
    }
}

impl fmt::Debug for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Range({}:{} .. {}:{})",
            self.start.line, self.start.col, self.end.line, self.end.col
        )
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
