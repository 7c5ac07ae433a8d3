//! Error types for rxcmd.
//!
//! Defines the main error enum used throughout the crate. Note that a
//! dispatch pass never produces an error: unrecognized commands, malformed
//! options, and failing callbacks are all reported as data through
//! [`Outcome`](crate::engine::Outcome). Errors here cover the things that
//! can go wrong *around* a pass: registration and configuration.

use crate::engine::registry::RegistryError;
use thiserror::Error;

/// Main error type for rxcmd operations.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Registration errors (duplicate names, nameless options, etc.)
    #[error("Registration error: {0}")]
    Registration(String),

    /// Configuration errors (invalid config file, bad end-of-line marker, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal errors (unexpected states, bugs, etc.)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl EngineError {
    /// Creates a registration error with the given message.
    pub fn registration(msg: impl Into<String>) -> Self {
        Self::Registration(msg.into())
    }

    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates an internal error with the given message.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Registration(_) => "Registration Error",
            Self::Config(_) => "Configuration Error",
            Self::Internal(_) => "Internal Error",
        }
    }
}

impl From<RegistryError> for EngineError {
    fn from(err: RegistryError) -> Self {
        Self::Registration(err.to_string())
    }
}

/// Result type alias using EngineError.
pub type Result<T> = std::result::Result<T, EngineError>;
