//! Core error types for alecci-util crate
//!
//! This module defines error types used throughout the util crate.

use thiserror::Error;

/// Error type for source map operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SourceMapError {
    /// File not found in the source map
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Invalid span range
    #[error("Invalid span: start {start} > end {end}")]
    InvalidSpan { start: usize, end: usize },

    /// Span out of bounds for file
    #[error("Span out of bounds: file has {file_len} bytes, span is {span_start}..{span_end}")]
    SpanOutOfBounds {
        file_len: usize,
        span_start: usize,
        span_end: usize,
    },

    /// Range does not fall on UTF-8 character boundaries
    #[error("Span {start}..{end} is not on character boundaries")]
    NotCharBoundary { start: usize, end: usize },
}

/// Result type alias for source map operations
pub type SourceMapResult<T> = std::result::Result<T, SourceMapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_span_display() {
        let err = SourceMapError::InvalidSpan { start: 10, end: 5 };
        assert_eq!(err.to_string(), "Invalid span: start 10 > end 5");
    }

    #[test]
    fn test_out_of_bounds_display() {
        let err = SourceMapError::SpanOutOfBounds {
            file_len: 3,
            span_start: 0,
            span_end: 9,
        };
        assert_eq!(
            err.to_string(),
            "Span out of bounds: file has 3 bytes, span is 0..9"
        );
    }
}
