//! Configuration management for rxcmd.
//!
//! Handles loading the demo shell's settings from a TOML file: line
//! buffer capacity, end-of-line marker, and the interactive prompt.

use crate::buffer::{DEFAULT_CAPACITY, DEFAULT_END_OF_LINE};
use crate::error::{EngineError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure for rxcmd.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Line accumulation settings.
    #[serde(default)]
    pub buffer: BufferConfig,

    /// Interactive shell settings.
    #[serde(default)]
    pub shell: ShellConfig,
}

/// Line accumulation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BufferConfig {
    /// Maximum line length in bytes; longer lines are dropped whole.
    #[serde(default = "default_capacity")]
    pub capacity: usize,

    /// End-of-line marker: "lf" or "cr".
    #[serde(default = "default_end_of_line")]
    pub end_of_line: String,
}

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

fn default_end_of_line() -> String {
    "lf".to_string()
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            end_of_line: default_end_of_line(),
        }
    }
}

impl BufferConfig {
    /// Resolves the configured end-of-line marker to its character.
    pub fn end_of_line_char(&self) -> Result<char> {
        match self.end_of_line.as_str() {
            "lf" => Ok(DEFAULT_END_OF_LINE),
            "cr" => Ok('\r'),
            other => Err(EngineError::config(format!(
                "unknown end-of-line marker '{other}'. Expected: lf or cr"
            ))),
        }
    }
}

/// Interactive shell settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Prompt printed before each input line.
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

fn default_prompt() -> String {
    "> ".to_string()
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
        }
    }
}

impl Config {
    /// Returns the default config file path for the current platform.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("rxcmd")
            .join("config.toml")
    }

    /// Loads configuration from a TOML file. A missing file yields the
    /// defaults.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| EngineError::config(format!("Failed to read config file: {e}")))?;

        Self::parse_toml(&content, path)
    }

    /// Parses configuration from a TOML string.
    fn parse_toml(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            EngineError::config(format!(
                "Configuration error in {}:\n  {}",
                path.display(),
                e
            ))
        })
    }
}
