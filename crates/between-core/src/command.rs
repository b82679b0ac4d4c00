//! The select-between command: host traits and the prompt flow.
//!
//! One invocation is one cycle:
//!
//! ```text
//! AwaitingTokenOrDepth ──"3"──▶ AwaitingTokenAfterDepth(3) ──"("──▶ resolve
//!          │                              │
//!          ├──"("──────────────────────────────────────────────────▶ resolve
//!          └──"" / cancel / error ──▶ done, nothing selected ◀──────┘
//! ```
//!
//! The host's selection is written at most once, and only when a range was
//! found. Every other way out leaves it untouched.

use between_text::{Document, Position, Range};
use tracing::{debug, warn};

use crate::classify::{Depth, classify_delimiter, parse_depth};
use crate::error::PromptError;
use crate::resolve::{Request, resolve};

// ---------------------------------------------------------------------------
// Host traits
// ---------------------------------------------------------------------------

/// The editor the command runs in.
pub trait Editor {
    /// Read-only snapshot of the active document.
    fn document(&self) -> &Document;
    /// The active cursor position.
    fn cursor(&self) -> Position;
    /// Replace the active selection.
    fn set_selection(&mut self, range: Range);
}

/// Single-line text capture at the cursor.
pub trait InputCollector {
    /// Ask for one token. `Ok(None)` means the user cancelled.
    ///
    /// # Errors
    ///
    /// Any failure of the underlying prompt. The command treats it as a
    /// cancel.
    fn prompt(&mut self) -> Result<Option<String>, PromptError>;
}

// ---------------------------------------------------------------------------
// Prompt state machine
// ---------------------------------------------------------------------------

/// Where the two-step prompt flow currently is.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum PromptState {
    /// First prompt: a delimiter, or a depth to be followed by one.
    #[default]
    AwaitingTokenOrDepth,
    /// A depth was typed; the next token is the delimiter.
    AwaitingTokenAfterDepth(Depth),
}

/// Result of feeding one token to a [`PromptState`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Transition {
    /// Ask again in the new state.
    Prompt(PromptState),
    /// A complete request.
    Ready(Request),
    /// Empty input or cancelled prompt.
    Cancelled,
    /// The token was refused by the classifier.
    Rejected,
}

impl PromptState {
    /// Advance on one prompt answer. `default_depth` applies when no depth
    /// was typed.
    #[must_use]
    pub fn feed(self, token: Option<&str>, default_depth: Depth) -> Transition {
        let token = match token {
            Some(t) if !t.is_empty() => t,
            _ => return Transition::Cancelled,
        };

        let depth = match self {
            Self::AwaitingTokenOrDepth => {
                if let Some(depth) = parse_depth(token) {
                    return Transition::Prompt(Self::AwaitingTokenAfterDepth(depth));
                }
                default_depth
            }
            // A number in second position is a delimiter, not another depth.
            Self::AwaitingTokenAfterDepth(depth) => depth,
        };

        classify_delimiter(token).map_or(Transition::Rejected, |spec| {
            Transition::Ready(Request::new(spec, depth))
        })
    }
}

// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

/// How a command cycle ended.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Outcome {
    /// The selection was set to this range.
    Selected(Range),
    /// The user cancelled, entered nothing, or the prompt failed.
    Cancelled,
    /// The delimiter token was refused.
    Rejected,
    /// No enclosing delimiters at the requested depth.
    NoMatch,
}

impl Outcome {
    #[must_use]
    pub const fn is_selected(self) -> bool {
        matches!(self, Self::Selected(_))
    }
}

/// The select-between command.
#[derive(Clone, Copy, Debug, Default)]
pub struct SelectBetween {
    default_depth: Depth,
}

impl SelectBetween {
    #[must_use]
    pub const fn new(default_depth: Depth) -> Self {
        Self { default_depth }
    }

    #[must_use]
    pub const fn default_depth(&self) -> Depth {
        self.default_depth
    }

    /// Run one cycle: prompt (once or twice), resolve, apply.
    pub fn run(&self, editor: &mut impl Editor, input: &mut impl InputCollector) -> Outcome {
        let request = match self.collect(input) {
            Ok(request) => request,
            Err(outcome) => return outcome,
        };

        let cursor = editor.cursor();
        let range = match resolve(editor.document(), cursor, &request) {
            Ok(Some(range)) => range,
            Ok(None) => return Outcome::NoMatch,
            Err(err) => {
                warn!(error = %err, "cannot resolve selection");
                return Outcome::NoMatch;
            }
        };

        editor.set_selection(range);
        Outcome::Selected(range)
    }

    /// Drive the prompt state machine to a request.
    fn collect(&self, input: &mut impl InputCollector) -> Result<Request, Outcome> {
        let mut state = PromptState::default();
        loop {
            let answer = input.prompt().unwrap_or_else(|err| {
                warn!(error = %err, "input prompt failed");
                None
            });
            match state.feed(answer.as_deref(), self.default_depth) {
                Transition::Prompt(next) => {
                    debug!(?next, "depth entered");
                    state = next;
                }
                Transition::Ready(request) => return Ok(request),
                Transition::Cancelled => return Err(Outcome::Cancelled),
                Transition::Rejected => {
                    debug!(token = ?answer, "delimiter rejected");
                    return Err(Outcome::Rejected);
                }
            }
        }
    }
}

/// Run [`SelectBetween`] with depth 1 as the default.
pub fn select_between(editor: &mut impl Editor, input: &mut impl InputCollector) -> Outcome {
    SelectBetween::default().run(editor, input)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{DelimiterSpec, SENTINEL};
    use crate::fixture::{MemoryEditor, ScriptedInput};
    use pretty_assertions::assert_eq;

    fn p(line: usize, col: usize) -> Position {
        Position::new(line, col)
    }

    fn r(sl: usize, sc: usize, el: usize, ec: usize) -> Range {
        Range::new(p(sl, sc), p(el, ec))
    }

    fn d(n: usize) -> Depth {
        Depth::new(n).unwrap()
    }

    struct BrokenInput;

    impl InputCollector for BrokenInput {
        fn prompt(&mut self) -> Result<Option<String>, PromptError> {
            Err(PromptError::Failed("widget closed".into()))
        }
    }

    // -- PromptState --------------------------------------------------------

    #[test]
    fn number_first_asks_again() {
        let t = PromptState::AwaitingTokenOrDepth.feed(Some("2"), Depth::ONE);
        assert_eq!(t, Transition::Prompt(PromptState::AwaitingTokenAfterDepth(d(2))));
    }

    #[test]
    fn delimiter_first_uses_default_depth() {
        let t = PromptState::AwaitingTokenOrDepth.feed(Some("["), d(3));
        let spec = DelimiterSpec::Pair {
            open: '[',
            close: ']',
        };
        assert_eq!(t, Transition::Ready(Request::new(spec, d(3))));
    }

    #[test]
    fn number_second_is_a_delimiter() {
        let t = PromptState::AwaitingTokenAfterDepth(d(2)).feed(Some("5"), Depth::ONE);
        let spec = DelimiterSpec::Literal("5".into());
        assert_eq!(t, Transition::Ready(Request::new(spec, d(2))));
    }

    #[test]
    fn empty_or_missing_cancels_in_both_states() {
        for state in [
            PromptState::AwaitingTokenOrDepth,
            PromptState::AwaitingTokenAfterDepth(d(4)),
        ] {
            assert_eq!(state.feed(None, Depth::ONE), Transition::Cancelled);
            assert_eq!(state.feed(Some(""), Depth::ONE), Transition::Cancelled);
        }
    }

    #[test]
    fn sentinel_is_rejected() {
        let t = PromptState::AwaitingTokenOrDepth.feed(Some(SENTINEL), Depth::ONE);
        assert_eq!(t, Transition::Rejected);
    }

    // -- Command cycle ------------------------------------------------------

    #[test]
    fn single_prompt_selects() {
        let mut editor = MemoryEditor::new("say \"hello\" now", p(0, 7));
        let mut input = ScriptedInput::new(["\""]);
        let outcome = select_between(&mut editor, &mut input);
        assert_eq!(outcome, Outcome::Selected(r(0, 5, 0, 10)));
        assert_eq!(editor.selection(), r(0, 5, 0, 10));
        assert_eq!(editor.selected_text(), "hello");
    }

    #[test]
    fn depth_then_delimiter() {
        let mut editor = MemoryEditor::new("foo(bar(baz)qux)", p(0, 9));
        let mut input = ScriptedInput::new(["2", "("]);
        assert!(select_between(&mut editor, &mut input).is_selected());
        assert_eq!(editor.selected_text(), "bar(baz)qux");
        assert_eq!(input.remaining(), 0);
    }

    #[test]
    fn configured_default_depth() {
        let mut editor = MemoryEditor::new("foo(bar(baz)qux)", p(0, 9));
        let mut input = ScriptedInput::new([")"]);
        let command = SelectBetween::new(d(2));
        assert!(command.run(&mut editor, &mut input).is_selected());
        assert_eq!(editor.selected_text(), "bar(baz)qux");
    }

    #[test]
    fn cancel_after_depth_leaves_selection() {
        let mut editor = MemoryEditor::new("(x)", p(0, 1));
        let before = editor.selection();
        let mut input = ScriptedInput::new(["3"]);
        assert_eq!(select_between(&mut editor, &mut input), Outcome::Cancelled);
        assert_eq!(editor.selection(), before);
    }

    #[test]
    fn no_match_leaves_selection() {
        let mut editor = MemoryEditor::new("(x)", p(0, 1));
        let before = editor.selection();
        let mut input = ScriptedInput::new(["2", "("]);
        assert_eq!(select_between(&mut editor, &mut input), Outcome::NoMatch);
        assert_eq!(editor.selection(), before);
        assert_eq!(editor.selection_updates(), 0);
    }

    #[test]
    fn rejected_token_leaves_selection() {
        let mut editor = MemoryEditor::new("(x)", p(0, 1));
        let mut input = ScriptedInput::new([SENTINEL]);
        assert_eq!(select_between(&mut editor, &mut input), Outcome::Rejected);
        assert_eq!(editor.selection_updates(), 0);
    }

    #[test]
    fn prompt_failure_is_swallowed() {
        let mut editor = MemoryEditor::new("(x)", p(0, 1));
        assert_eq!(select_between(&mut editor, &mut BrokenInput), Outcome::Cancelled);
        assert_eq!(editor.selection_updates(), 0);
    }

    #[test]
    fn bad_cursor_is_no_match() {
        let mut editor = MemoryEditor::new("(x)", p(7, 0));
        let mut input = ScriptedInput::new(["("]);
        assert_eq!(select_between(&mut editor, &mut input), Outcome::NoMatch);
    }

    #[test]
    fn selection_applied_exactly_once() {
        let mut editor = MemoryEditor::new("[a [b] c]", p(0, 4));
        let mut input = ScriptedInput::new(["]"]);
        select_between(&mut editor, &mut input);
        assert_eq!(editor.selection_updates(), 1);
        assert_eq!(editor.selected_text(), "b");
    }
}
