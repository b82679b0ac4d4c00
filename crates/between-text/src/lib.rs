//! # between-text — Document model for between
//!
//! The read-only snapshot a selection is resolved against:
//!
//! - **[`position`]** — `Position` (line, col) and `Range` types, 0-indexed
//! - **[`document`]** — `Document` wrapping a rope, with offset ↔ position
//!   translation and per-line access

pub mod document;
pub mod position;

pub use document::Document;
pub use position::{Position, Range};
