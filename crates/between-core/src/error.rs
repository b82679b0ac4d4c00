//! Error types.
//!
//! Resolution itself never fails: running out of occurrences or levels is a
//! plain `None`. These errors cover the host boundary.

use between_text::Position;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cursor {cursor} is outside the document ({lines} lines)")]
    CursorOutOfBounds { cursor: Position, lines: usize },
}

/// Failure while collecting a token from the user.
///
/// The command swallows these: a broken prompt ends the cycle with no
/// selection change.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("input prompt failed: {0}")]
    Failed(String),
}
