//! Input classification — what did the user type?
//!
//! A prompt token is one of:
//!
//! | Token            | Meaning                                              |
//! |------------------|------------------------------------------------------|
//! | `3`              | a [`Depth`]; the delimiter is asked for next         |
//! | `(` `)` `a(b`    | bracket pair, matched with nesting                   |
//! | `"` `'` `,` `--` | literal, Nth occurrence before and after the cursor  |
//! | empty            | cancelled                                            |
//!
//! Bracket detection checks the pairs in a fixed order and the last pair
//! found wins, so `({` selects braces and `(<` selects angle brackets.

use std::fmt;
use std::num::NonZeroUsize;

/// Guard string: tokens starting with the full bracket set are rejected.
pub const SENTINEL: &str = "\"'[](){}<>";

/// Bracket pairs in detection order. Later entries override earlier ones.
pub const BRACKET_PAIRS: [(char, char); 4] = [('(', ')'), ('{', '}'), ('[', ']'), ('<', '>')];

// ---------------------------------------------------------------------------
// Depth
// ---------------------------------------------------------------------------

/// How far outward to go. `1` is the innermost pair / nearest occurrence.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Depth(NonZeroUsize);

impl Depth {
    pub const ONE: Self = Self(NonZeroUsize::MIN);

    /// `None` for zero.
    #[inline]
    #[must_use]
    pub const fn new(n: usize) -> Option<Self> {
        match NonZeroUsize::new(n) {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for Depth {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Debug for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Depth({})", self.0)
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ---------------------------------------------------------------------------
// DelimiterSpec
// ---------------------------------------------------------------------------

/// The resolved matching rule.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum DelimiterSpec {
    /// Same text on both sides: quotes and free text. Scanned line by line.
    Literal(String),
    /// Distinct open/close chars, matched with nesting across the whole text.
    Pair { open: char, close: char },
}

impl fmt::Display for DelimiterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(token) => write!(f, "literal {token:?}"),
            Self::Pair { open, close } => write!(f, "pair {open}{close}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Parse a token as a depth prefix.
///
/// Only positive integers count. `0` is not a depth; it falls through to
/// [`classify_delimiter`] and becomes a literal.
#[must_use]
pub fn parse_depth(token: &str) -> Option<Depth> {
    token.trim().parse::<usize>().ok().and_then(Depth::new)
}

/// Map a delimiter token to its matching rule.
///
/// Returns `None` for an empty token and for tokens starting with
/// [`SENTINEL`].
#[must_use]
pub fn classify_delimiter(token: &str) -> Option<DelimiterSpec> {
    if token.is_empty() || token.starts_with(SENTINEL) {
        return None;
    }

    // Scanning from the back finds the pair a front-to-back overwrite would
    // have ended on.
    let pair = BRACKET_PAIRS
        .iter()
        .rev()
        .find(|(open, close)| token.contains(*open) || token.contains(*close));

    Some(pair.map_or_else(
        || DelimiterSpec::Literal(token.to_owned()),
        |&(open, close)| DelimiterSpec::Pair { open, close },
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(open: char, close: char) -> Option<DelimiterSpec> {
        Some(DelimiterSpec::Pair { open, close })
    }

    fn literal(s: &str) -> Option<DelimiterSpec> {
        Some(DelimiterSpec::Literal(s.to_owned()))
    }

    // -- parse_depth --------------------------------------------------------

    #[test]
    fn positive_integers_are_depths() {
        assert_eq!(parse_depth("1"), Depth::new(1));
        assert_eq!(parse_depth("12"), Depth::new(12));
        assert_eq!(parse_depth(" 3 "), Depth::new(3));
    }

    #[test]
    fn zero_and_non_numbers_are_not_depths() {
        assert_eq!(parse_depth("0"), None);
        assert_eq!(parse_depth("-2"), None);
        assert_eq!(parse_depth("("), None);
        assert_eq!(parse_depth(""), None);
    }

    #[test]
    fn depth_defaults_to_one() {
        assert_eq!(Depth::default().get(), 1);
        assert_eq!(Depth::new(0), None);
    }

    // -- classify_delimiter -------------------------------------------------

    #[test]
    fn either_bracket_char_selects_the_pair() {
        assert_eq!(classify_delimiter("("), pair('(', ')'));
        assert_eq!(classify_delimiter(")"), pair('(', ')'));
        assert_eq!(classify_delimiter("}"), pair('{', '}'));
        assert_eq!(classify_delimiter("["), pair('[', ']'));
        assert_eq!(classify_delimiter(">"), pair('<', '>'));
    }

    #[test]
    fn last_checked_pair_wins() {
        assert_eq!(classify_delimiter("({"), pair('{', '}'));
        assert_eq!(classify_delimiter("{("), pair('{', '}'));
        assert_eq!(classify_delimiter("([<"), pair('<', '>'));
        assert_eq!(classify_delimiter("[}"), pair('[', ']'));
    }

    #[test]
    fn quotes_and_text_are_literal() {
        assert_eq!(classify_delimiter("\""), literal("\""));
        assert_eq!(classify_delimiter("'"), literal("'"));
        assert_eq!(classify_delimiter(","), literal(","));
        assert_eq!(classify_delimiter("--"), literal("--"));
        assert_eq!(classify_delimiter("0"), literal("0"));
    }

    #[test]
    fn embedded_bracket_makes_a_pair() {
        assert_eq!(classify_delimiter("f(x"), pair('(', ')'));
    }

    #[test]
    fn empty_and_sentinel_are_rejected() {
        assert_eq!(classify_delimiter(""), None);
        assert_eq!(classify_delimiter(SENTINEL), None);
        assert_eq!(classify_delimiter("\"'[](){}<> and more"), None);
    }

    #[test]
    fn spec_display() {
        assert_eq!(DelimiterSpec::Literal("'".into()).to_string(), "literal \"'\"");
        let spec = DelimiterSpec::Pair {
            open: '[',
            close: ']',
        };
        assert_eq!(spec.to_string(), "pair []");
    }
}
