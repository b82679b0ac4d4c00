//! Resolver entry point.

use between_text::{Document, Position, Range};
use tracing::debug;

use crate::classify::{DelimiterSpec, Depth};
use crate::error::Error;
use crate::literal::select_literal;
use crate::pair::select_pair;

/// One fully classified selection request.
///
/// `depth` means different things per delimiter kind: for a literal it is the
/// occurrence count applied on *each* side of the cursor; for a pair it is
/// the number of enclosing levels unwound from the innermost one.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Request {
    pub spec: DelimiterSpec,
    pub depth: Depth,
}

impl Request {
    #[must_use]
    pub const fn new(spec: DelimiterSpec, depth: Depth) -> Self {
        Self { spec, depth }
    }
}

/// Resolve `request` against `doc` at `cursor`.
///
/// `Ok(None)` is the ordinary "nothing to select" answer.
///
/// # Errors
///
/// [`Error::CursorOutOfBounds`] if `cursor` is not a valid position in `doc`.
pub fn resolve(doc: &Document, cursor: Position, request: &Request) -> Result<Option<Range>, Error> {
    let offset = doc
        .position_to_offset(cursor)
        .ok_or(Error::CursorOutOfBounds {
            cursor,
            lines: doc.line_count(),
        })?;

    let range = match &request.spec {
        DelimiterSpec::Literal(token) => select_literal(doc, cursor, token, request.depth),
        DelimiterSpec::Pair { open, close } => select_pair(doc, offset, *open, *close, request.depth),
    };
    debug!(spec = %request.spec, depth = %request.depth, %cursor, ?range, "resolved");
    Ok(range)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
