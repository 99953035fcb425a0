//! alecci-util - Source locations and diagnostics
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! Foundation types shared by the AlEcci tooling:
//!
//! - [`span`] - byte-offset spans with line/column, source files and the
//!   source map used to render snippets
//! - [`diagnostic`] - severity levels, diagnostic codes, the fluent
//!   [`DiagnosticBuilder`] and the collecting [`Handler`]
//! - [`error`] - error types for fallible source map lookups
//!
//! The lexer reports anomalies into a [`Handler`] instead of failing, so a
//! caller can always finish a run and inspect what went wrong afterwards.
//!
//! # Example
//!
//! ```
//! use alecci_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::warning("unrecognized character '$'")
//!     .code(DiagnosticCode::W_LEXER_UNRECOGNIZED_CHAR)
//!     .span(Span::new(4, 5, 1, 5))
//!     .emit(&handler);
//!
//! assert_eq!(handler.warning_count(), 1);
//! assert!(!handler.has_errors());
//! ```

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{
    Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet,
};
pub use error::{SourceMapError, SourceMapResult};
pub use span::{FileId, SourceFile, SourceMap, Span};
