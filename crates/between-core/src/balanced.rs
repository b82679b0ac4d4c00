//! Balanced-pair primitive.
//!
//! [`balanced`] finds the first top-level `open … close` region in a rope
//! slice and splits the slice around it:
//!
//! ```text
//! "a(b(c)d)e(f)"
//!   pre  = "a"
//!   body = "b(c)d"
//!   post = "e(f)"
//! ```
//!
//! Closing chars before the first opening char are ignored. If the text runs
//! out while openings are still unclosed, the widest region that did close
//! is returned instead, so `"((a)"` yields the `(a)` region.

use ropey::RopeSlice;

/// A balanced region. `start` and `end` are char indices, relative to the
/// searched slice, of the opening and closing delimiter.
#[derive(Clone, Copy)]
pub struct Balanced<'a> {
    pub start: usize,
    pub end: usize,
    /// Everything before the opening delimiter.
    pub pre: RopeSlice<'a>,
    /// Everything strictly between the delimiters.
    pub body: RopeSlice<'a>,
    /// Everything after the closing delimiter.
    pub post: RopeSlice<'a>,
}

/// Find the first top-level balanced `open`/`close` region in `text`.
#[must_use]
pub fn balanced(open: char, close: char, text: RopeSlice<'_>) -> Option<Balanced<'_>> {
    let mut opens: Vec<usize> = Vec::new();
    let mut widest: Option<(usize, usize)> = None;

    for (i, ch) in text.chars().enumerate() {
        if ch == open {
            opens.push(i);
        } else if ch == close {
            let Some(start) = opens.pop() else {
                continue;
            };
            if opens.is_empty() {
                return Some(split(text, start, i));
            }
            if widest.is_none_or(|(left, _)| start < left) {
                widest = Some((start, i));
            }
        }
    }

    widest.map(|(start, end)| split(text, start, end))
}

fn split(text: RopeSlice<'_>, start: usize, end: usize) -> Balanced<'_> {
    Balanced {
        start,
        end,
        pre: text.slice(..start),
        body: text.slice(start + 1..end),
        post: text.slice(end + 1..),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
