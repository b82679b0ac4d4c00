//! Literal / quote scanner.
//!
//! Used for quotes and free-text delimiters. The document is scanned line by
//! line from the cursor: forward to the last line for the closing side,
//! backward to line 0 for the opening side. Each side counts its own Nth
//! occurrence, so depth 2 with `,` in `a,b,c,|,d,e,f` selects from the
//! second comma before the cursor to the second comma after it.
//!
//! Occurrences on one line never overlap. The backward scan reverses the
//! line and the token and matches left to right over the reversed text, so
//! overlapping candidates like `aa` in `aaa` are resolved from the right.

use between_text::{Document, Position, Range};
use regex::Regex;
use tracing::{debug, trace};

use crate::classify::Depth;

/// One occurrence of the token: `[start, end)` columns on `line`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Occurrence {
    pub line: usize,
    pub start: usize,
    pub end: usize,
}

/// Find the `depth`-th occurrence of `token` after the cursor.
///
/// On the cursor's line an occurrence counts when it ends strictly after the
/// cursor column. Returns `None` when the document runs out first; the scan
/// never wraps.
#[must_use]
pub fn find_next_match(
    doc: &Document,
    cursor: Position,
    token: &str,
    depth: Depth,
) -> Option<Occurrence> {
    let re = token_regex(token)?;
    let mut remaining = depth.get();

    for line in cursor.line..doc.line_count() {
        let text = doc.line_text(line)?;
        for (start, end) in occurrences(&re, &text) {
            if line == cursor.line && end <= cursor.col {
                continue;
            }
            remaining -= 1;
            trace!(line, start, remaining, "forward occurrence");
            if remaining == 0 {
                return Some(Occurrence { line, start, end });
            }
        }
    }
    None
}

/// Find the `depth`-th occurrence of `token` before the cursor.
///
/// On the cursor's line an occurrence counts when it starts strictly before
/// the cursor column. Returns `None` when line 0 is passed first.
#[must_use]
pub fn find_prev_match(
    doc: &Document,
    cursor: Position,
    token: &str,
    depth: Depth,
) -> Option<Occurrence> {
    let reversed_token: String = token.chars().rev().collect();
    let re = token_regex(&reversed_token)?;
    let mut remaining = depth.get();

    for line in (0..=cursor.line).rev() {
        let text = doc.line_text(line)?;
        let len = text.chars().count();
        let reversed: String = text.chars().rev().collect();

        for (rev_start, rev_end) in occurrences(&re, &reversed) {
            // Mirror back into forward columns.
            let start = len - rev_end;
            let end = len - rev_start;
            if line == cursor.line && start >= cursor.col {
                continue;
            }
            remaining -= 1;
            trace!(line, start, remaining, "backward occurrence");
            if remaining == 0 {
                return Some(Occurrence { line, start, end });
            }
        }
    }
    None
}

/// Select between the `depth`-th occurrence of `token` on each side.
///
/// The selection starts right after the backward occurrence and ends right
/// before the forward one, so the delimiters themselves are excluded.
/// For one-char tokens these are the usual "line length minus match end
/// plus one" and "end column minus one" boundaries. Longer tokens are
/// excluded whole, so the boundaries sit further out than those formulas.
/// `None` if either side runs out, or if one occurrence straddles the cursor
/// so that the two boundaries cross.
#[must_use]
pub fn select_literal(
    doc: &Document,
    cursor: Position,
    token: &str,
    depth: Depth,
) -> Option<Range> {
    let prev = find_prev_match(doc, cursor, token, depth)?;
    let next = find_next_match(doc, cursor, token, depth)?;

    let start = Position::new(prev.line, prev.end);
    let end = Position::new(next.line, next.start);
    debug!(?prev, ?next, "literal boundaries");

    (start <= end).then(|| Range::new(start, end))
}

fn token_regex(token: &str) -> Option<Regex> {
    if token.is_empty() {
        return None;
    }
    Regex::new(&regex::escape(token)).ok()
}

/// Non-overlapping matches of `re` in `text`, as char columns.
fn occurrences<'a>(re: &'a Regex, text: &'a str) -> impl Iterator<Item = (usize, usize)> + 'a {
    let mut byte = 0;
    let mut col = 0;
    re.find_iter(text).map(move |m| {
        col += text[byte..m.start()].chars().count();
        byte = m.start();
        (col, col + m.as_str().chars().count())
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
