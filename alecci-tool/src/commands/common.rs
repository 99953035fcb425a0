//! Common types and utilities for alecci commands.
//!
//! This module provides shared types, constants, and utility functions
//! used across all command implementations to ensure consistency.

use std::path::Path;

use alecci_lex::Token;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ToolError};

// ============================================================================
// Output Format
// ============================================================================

/// How `alecci tokens` prints its result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `line:col category "lexeme"` line per token
    #[default]
    Text,
    /// A JSON array with one object per file
    Json,
}

// ============================================================================
// Token Records
// ============================================================================

/// Serializable view of one token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenRecord<'a> {
    pub category: &'static str,
    pub pygments: &'static str,
    pub lexeme: &'a str,
    pub line: u32,
    pub column: u32,
    pub start: usize,
    pub end: usize,
}

impl<'a> From<&Token<'a>> for TokenRecord<'a> {
    fn from(token: &Token<'a>) -> Self {
        Self {
            category: token.category.name(),
            pygments: token.category.pygments_name(),
            lexeme: token.lexeme,
            line: token.span.line,
            column: token.span.column,
            start: token.start(),
            end: token.end(),
        }
    }
}

/// Tokens of one input file, as printed in JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct FileTokens<'a> {
    pub file: String,
    pub tokens: Vec<TokenRecord<'a>>,
}

// ============================================================================
// Input Files
// ============================================================================

/// Check that at least one input was given.
pub fn require_inputs<T>(inputs: &[T]) -> Result<()> {
    if inputs.is_empty() {
        return Err(ToolError::Validation(
            error_messages::NO_INPUT_FILES.to_string(),
        ));
    }
    Ok(())
}

/// Read a source file after checking that it exists and is a regular file.
pub fn read_source(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(ToolError::Validation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_EXIST,
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(ToolError::Validation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_FILE,
            path.display()
        )));
    }
    Ok(std::fs::read_to_string(path)?)
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message prefixes.
pub mod error_messages {
    /// Error when no input files are specified.
    pub const NO_INPUT_FILES: &str = "No input files specified";

    /// Error when input path does not exist.
    pub const INPUT_PATH_NOT_EXIST: &str = "Input path does not exist:";

    /// Error when input path is not a file.
    pub const INPUT_PATH_NOT_FILE: &str = "Input path is not a file:";

    /// Error when the init target exists but is not a directory.
    pub const TARGET_NOT_DIR: &str = "Target path is not a directory:";

    /// Error when `alecci init` would overwrite a configuration file.
    pub const CONFIG_EXISTS: &str = "Configuration file already exists (use --force):";

    /// Error when sources contain characters no rule accepts.
    pub const UNRECOGNIZED_FOUND: &str = "unrecognized character(s) found";
}
