//! Balanced pair matcher.
//!
//! Walks the document's top-level regions with [`balanced`], left to right,
//! until one contains the cursor. Its body is balanced by construction, so
//! the pairs nested inside it that also contain the cursor are exactly the
//! openings still unclosed when a stack scan reaches the cursor. Each one is
//! closed by a forward scan from the cursor. The levels are collected
//! outermost first and depth counts from the innermost: depth 1 is the
//! innermost pair around the cursor, depth 2 the one enclosing it, and so on.
//!
//! ```text
//! foo(bar(baz)qux)      cursor on `a` of `baz`
//!         ^^^           depth 1
//!     ^^^^^^^^^^^       depth 2
//!                       depth 3 → no match
//! ```
//!
//! Every char is visited a bounded number of times and nothing recurses, so
//! arbitrarily deep nesting costs linear time and constant stack.

use between_text::{Document, Range};
use ropey::RopeSlice;
use tracing::{debug, trace};

use crate::balanced::balanced;
use crate::classify::Depth;

/// An enclosing pair in absolute char offsets.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct Level {
    /// First char inside the opening delimiter.
    start: usize,
    /// The closing delimiter itself.
    end: usize,
}

/// Select the interior of the `depth`-th pair enclosing `cursor`.
///
/// The cursor is inside a pair when it sits anywhere from just after the
/// opening char up to and including the closing char. Returns `None` when
/// no pair encloses the cursor or fewer than `depth` pairs do.
#[must_use]
pub fn select_pair(
    doc: &Document,
    cursor: usize,
    open: char,
    close: char,
    depth: Depth,
) -> Option<Range> {
    let levels = enclosing(open, close, doc.rope().slice(..), cursor);
    let Some(index) = levels.len().checked_sub(depth.get()) else {
        debug!(levels = levels.len(), depth = depth.get(), "not enough enclosing pairs");
        return None;
    };
    let level = levels[index];
    debug!(?level, levels = levels.len(), "enclosing pair");
    Some(Range::new(
        doc.offset_to_position(level.start),
        doc.offset_to_position(level.end),
    ))
}

/// Every pair in `text` that contains `cursor`, outermost first.
fn enclosing(open: char, close: char, mut text: RopeSlice<'_>, cursor: usize) -> Vec<Level> {
    let mut base = 0;
    while let Some(region) = balanced(open, close, text) {
        let level = Level {
            start: base + region.start + 1,
            end: base + region.end,
        };
        trace!(start = level.start, end = level.end, "candidate region");

        if (level.start..=level.end).contains(&cursor) {
            let mut levels = vec![level];
            nested(open, close, region.body, level.start, cursor, &mut levels);
            return levels;
        }

        // Not this one; continue with whatever follows its closing char.
        base = level.end + 1;
        text = region.post;
    }
    Vec::new()
}

/// Append the pairs inside the balanced `body`, whose first char sits at
/// absolute offset `base`, that contain `cursor`.
fn nested(
    open: char,
    close: char,
    body: RopeSlice<'_>,
    base: usize,
    cursor: usize,
    levels: &mut Vec<Level>,
) {
    let split = cursor - base;

    // Openings before the cursor that are still unclosed at it.
    let mut opens = Vec::new();
    for (i, ch) in body.slice(..split).chars().enumerate() {
        if ch == open {
            opens.push(base + i);
        } else if ch == close {
            opens.pop();
        }
    }
    if opens.is_empty() {
        return;
    }

    // Their closing chars, innermost first.
    let mut closes = Vec::with_capacity(opens.len());
    let mut inner = 0usize;
    for (i, ch) in body.slice(split..).chars().enumerate() {
        if ch == open {
            inner += 1;
        } else if ch == close {
            if inner == 0 {
                closes.push(cursor + i);
                if closes.len() == opens.len() {
                    break;
                }
            } else {
                inner -= 1;
            }
        }
    }

    levels.extend(
        opens
            .into_iter()
            .zip(closes.into_iter().rev())
            .map(|(open_at, end)| Level {
                start: open_at + 1,
                end,
            }),
    );
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
