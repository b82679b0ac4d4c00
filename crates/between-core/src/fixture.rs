//! In-memory host: an [`Editor`] over a [`Document`] and an
//! [`InputCollector`] that replays a fixed list of answers.
//!
//! Used by the tests and by the command-line host, which has no interactive
//! prompt of its own.

use std::collections::VecDeque;

use between_text::{Document, Position, Range};

use crate::command::{Editor, InputCollector};
use crate::error::PromptError;

/// An editor with one document, one cursor and one selection.
#[derive(Debug)]
pub struct MemoryEditor {
    document: Document,
    cursor: Position,
    selection: Range,
    updates: usize,
}

impl MemoryEditor {
    /// Editor over `text` with the cursor at `cursor` and an empty selection
    /// there.
    #[must_use]
    pub fn new(text: &str, cursor: Position) -> Self {
        Self::with_document(Document::from_text(text), cursor)
    }

    #[must_use]
    pub const fn with_document(document: Document, cursor: Position) -> Self {
        Self {
            document,
            cursor,
            selection: Range::point(cursor),
            updates: 0,
        }
    }

    #[must_use]
    pub const fn selection(&self) -> Range {
        self.selection
    }

    /// How many times the selection has been written.
    #[must_use]
    pub const fn selection_updates(&self) -> usize {
        self.updates
    }

    /// The currently selected text. Empty for an out-of-bounds selection.
    #[must_use]
    pub fn selected_text(&self) -> String {
        self.document
            .slice(self.selection)
            .map(|s| s.to_string())
            .unwrap_or_default()
    }
}

impl Editor for MemoryEditor {
    fn document(&self) -> &Document {
        &self.document
    }

    fn cursor(&self) -> Position {
        self.cursor
    }

    fn set_selection(&mut self, range: Range) {
        self.selection = range;
        self.updates += 1;
    }
}

/// Answers prompts from a queue. An exhausted queue answers like a cancelled
/// prompt.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    answers: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
        }
    }

    /// Answers not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl InputCollector for ScriptedInput {
    fn prompt(&mut self) -> Result<Option<String>, PromptError> {
        Ok(self.answers.pop_front())
    }
}
