// SPDX-License-Identifier: MIT
//
// between — select the text between the nearest enclosing delimiters.
//
// This binary is a non-interactive host for the select-between command:
//
//   file/stdin → Document        (between-text)
//   --cursor   → cursor Position
//   TOKEN...   → prompt answers  (first the depth or delimiter, then the
//                                 delimiter if a depth came first)
//   SelectBetween::run           (between-core)
//   selection  → stdout          (range, text, or json)
//
// Exit status: 0 when something was selected, 1 when the command ended
// without a selection (cancelled, rejected, no match), 2 on usage or I/O
// errors.

mod config;
mod logging;

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use between_core::fixture::{MemoryEditor, ScriptedInput};
use between_core::{Outcome, SelectBetween};
use between_text::{Document, Position, Range};
use clap::Parser;
use serde::Serialize;

use crate::config::{Config, Format};

#[derive(Debug, Parser)]
#[command(name = "between", version, about)]
struct Cli {
    /// File to select in. Reads stdin when omitted.
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Cursor position as 1-indexed LINE:COL.
    #[arg(short, long, value_name = "LINE:COL")]
    cursor: Position,

    /// Output format. Overrides `[output] format` from the config.
    #[arg(long, value_enum)]
    format: Option<Format>,

    /// Config file.
    #[arg(long, env = "BETWEEN_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Debug logging on stderr.
    #[arg(short, long)]
    verbose: bool,

    /// Prompt answers, in order: a delimiter, or a depth and then a
    /// delimiter. Use `--` before tokens that start with `-`.
    #[arg(value_name = "TOKEN", allow_hyphen_values = true)]
    tokens: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("between: {err:#}");
            ExitCode::from(2)
        }
    }
}

/// One command cycle. `Ok(false)` means nothing was selected.
fn run(cli: &Cli) -> Result<bool> {
    let config = Config::load(cli.config.as_deref())?;
    let command = SelectBetween::new(config.default_depth()?);
    let format = cli.format.unwrap_or(config.output.format);

    let document = load_document(cli.file.as_deref())?;
    if document.position_to_offset(cli.cursor).is_none() {
        bail!(
            "cursor {} is outside the document ({} lines)",
            cli.cursor,
            document.line_count()
        );
    }

    let mut editor = MemoryEditor::with_document(document, cli.cursor);
    let mut input = ScriptedInput::new(cli.tokens.iter().cloned());
    let outcome = command.run(&mut editor, &mut input);
    tracing::debug!(?outcome, "command finished");

    let message = match outcome {
        Outcome::Selected(range) => {
            print_selection(&editor, range, format)?;
            return Ok(true);
        }
        Outcome::Cancelled => "cancelled",
        Outcome::Rejected => "delimiter rejected",
        Outcome::NoMatch => "no match",
    };
    eprintln!("between: {message}");
    Ok(false)
}

fn load_document(path: Option<&Path>) -> Result<Document> {
    match path {
        Some(path) => Document::from_file(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => Document::from_reader(io::stdin().lock()).context("failed to read stdin"),
    }
}

// ─── Output ─────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct JsonPosition {
    line: usize,
    col: usize,
}

impl From<Position> for JsonPosition {
    fn from(pos: Position) -> Self {
        Self {
            line: pos.line + 1,
            col: pos.col + 1,
        }
    }
}

#[derive(Serialize)]
struct JsonSelection<'a> {
    start: JsonPosition,
    end: JsonPosition,
    text: &'a str,
}

fn print_selection(editor: &MemoryEditor, range: Range, format: Format) -> Result<()> {
    let mut out = io::stdout().lock();
    match format {
        Format::Range => writeln!(out, "{range}")?,
        Format::Text => write!(out, "{}", editor.selected_text())?,
        Format::Json => {
            let text = editor.selected_text();
            let json = JsonSelection {
                start: range.start.into(),
                end: range.end.into(),
                text: &text,
            };
            serde_json::to_writer(&mut out, &json)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
