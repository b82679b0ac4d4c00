//! # between-core — Span resolver for between
//!
//! Given a cursor inside a [`Document`](between_text::Document) and a
//! delimiter typed by the user, compute the span "between" the nearest
//! enclosing delimiters, optionally skipping outward through several levels.
//!
//! - **[`classify`]** — turns a raw prompt token into a [`DelimiterSpec`] or a
//!   [`Depth`]
//! - **[`literal`]** — line-by-line forward/backward scan for quotes and plain
//!   text, counting the Nth occurrence on each side
//! - **[`balanced`]** — the balanced-pair primitive (`pre` / `body` / `post`)
//! - **[`pair`]** — bracket matcher collecting every enclosing level,
//!   depth counted from the innermost
//! - **[`resolve`]** — the pure entry point dispatching on the delimiter kind
//! - **[`command`]** — host traits and the two-step prompt state machine
//! - **[`fixture`]** — in-memory host used by tests and the CLI

pub mod balanced;
pub mod classify;
pub mod command;
pub mod error;
pub mod fixture;
pub mod literal;
pub mod pair;
pub mod resolve;

pub use classify::{DelimiterSpec, Depth};
pub use command::{Editor, InputCollector, Outcome, PromptState, SelectBetween};
pub use error::{Error, PromptError};
pub use resolve::{Request, resolve};
