// SPDX-License-Identifier: MIT
//
// Configuration: `between.toml`, every field optional.
//
//   [select]
//   default_depth = 1        # depth used when no number is typed first
//
//   [output]
//   format = "range"         # "range" | "text" | "json"
//
// Lookup: --config / BETWEEN_CONFIG (must exist), else
// <config_dir>/between/config.toml when present, else built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use between_core::Depth;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub select: Select,
    #[serde(default)]
    pub output: Output,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Select {
    #[serde(default = "Select::default_depth")]
    pub default_depth: usize,
}

impl Select {
    const fn default_depth() -> usize {
        1
    }
}

impl Default for Select {
    fn default() -> Self {
        Self {
            default_depth: Self::default_depth(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Output {
    #[serde(default)]
    pub format: Format,
}

/// How a selection is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// `LINE:COL-LINE:COL`, 1-indexed.
    #[default]
    Range,
    /// The selected text, verbatim.
    Text,
    /// Start, end and text as one JSON object.
    Json,
}

impl Config {
    /// Load from an explicit path, the user config dir, or defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match user_config_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml_str(&text)
            .with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.default_depth()?;
        Ok(config)
    }

    /// `select.default_depth` as a [`Depth`]; zero is an error.
    pub fn default_depth(&self) -> Result<Depth> {
        match Depth::new(self.select.default_depth) {
            Some(depth) => Ok(depth),
            None => bail!("select.default_depth must be at least 1"),
        }
    }
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("between").join("config.toml"))
}
