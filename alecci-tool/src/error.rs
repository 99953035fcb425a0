//! Error handling module for the alecci CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use thiserror::Error;

/// Main error type for the alecci CLI application.
#[derive(Error, Debug)]
pub enum ToolError {
    /// Missing, unreadable or invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input rejected by a command, including sources with unrecognized
    /// characters found by `check`.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A diagnostic pointed at a file that was never registered.
    #[error(transparent)]
    SourceMap(#[from] alecci_util::SourceMapError),

    /// Error when a configuration file is not valid TOML.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type alias using ToolError.
pub type Result<T> = std::result::Result<T, ToolError>;
