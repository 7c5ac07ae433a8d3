//! Logging configuration for rxcmd.
//!
//! Provides tracing initialization for the demo shell: stderr by default,
//! or a file when the interactive prompt should stay clean.

use std::fs::{self, File};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Initializes logging to a file.
///
/// Location: `~/.local/state/rxcmd/rxcmd.log` on Linux (XDG state
/// directory), or the platform-appropriate state/config directory
/// elsewhere. Falls back to no logging rather than failing startup.
pub fn init_file_logging() {
    let log_path = log_file_path();

    if let Some(parent) = log_path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            eprintln!("Warning: Could not create log directory: {e}");
            return;
        }
    }

    // Truncate on each run to avoid unbounded growth
    let log_file = match File::create(&log_path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Warning: Could not create log file: {e}");
            return;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(log_file)
        .with_ansi(false) // No ANSI colors in file output
        .init();
}

/// Initializes logging to stderr.
pub fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

/// Returns the path for the log file.
pub fn log_file_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        return state_dir.join("rxcmd").join("rxcmd.log");
    }

    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("rxcmd").join("rxcmd.log");
    }

    std::env::temp_dir().join("rxcmd.log")
}
