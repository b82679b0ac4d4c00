// SPDX-License-Identifier: MIT
//
// Logging setup: tracing events from all between crates go to stderr, so
// stdout carries nothing but the selection.
//
// Filter priority:
//
//   1. BETWEEN_LOG  — `debug` expands to the between crates, anything with
//                     `=`, `:` or `,` is used as a full directive string
//   2. RUST_LOG     — used as-is
//   3. default      — `warn`, or `debug` for the between crates with --verbose

use std::env;
use std::io;

use tracing_subscriber::EnvFilter;

const CRATES: [&str; 3] = ["between", "between_core", "between_text"];

/// Install the stderr subscriber. Calling it twice is harmless.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(create_filter(verbose))
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn create_filter(verbose: bool) -> EnvFilter {
    if let Ok(level) = env::var("BETWEEN_LOG") {
        return expand_between_log(&level);
    }
    if let Ok(rust_log) = env::var("RUST_LOG") {
        return EnvFilter::new(rust_log);
    }
    if verbose {
        return expand_between_log("debug");
    }
    EnvFilter::new("warn")
}

fn expand_between_log(level: &str) -> EnvFilter {
    EnvFilter::new(directives(level))
}

fn directives(level: &str) -> String {
    if level.contains('=') || level.contains(':') || level.contains(',') {
        return level.to_owned();
    }
    let crates: Vec<String> = CRATES.iter().map(|krate| format!("{krate}={level}")).collect();
    format!("warn,{}", crates.join(","))
}
