//! Diagnostic module - Warning and error reporting infrastructure.
//!
//! The lexer never aborts. Anything worth telling the user about is turned
//! into a [`Diagnostic`] and pushed into a [`Handler`] owned by the caller,
//! which decides afterwards how to render it and whether the run failed.
//!
//! ```
//! use alecci_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use alecci_util::Span;
//!
//! let handler = Handler::new();
//! handler
//!     .build_warning(Span::new(2, 3, 1, 3), "unrecognized character '$'")
//!     .code(DiagnosticCode::W_LEXER_UNRECOGNIZED_CHAR)
//!     .emit(&handler);
//!
//! let diags = handler.diagnostics();
//! assert_eq!(diags[0].to_string(), "warning[W1001]: unrecognized character '$'");
//! ```

mod builder;
mod codes;
mod level;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::{DiagnosticCode, W_LEXER_UNRECOGNIZED_CHAR};
pub use level::Level;

use crate::Span;
use std::cell::RefCell;
use std::fmt;

/// A single reported problem
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: Level,
    pub message: String,
    pub span: Span,
    pub code: Option<DiagnosticCode>,
    pub notes: Vec<String>,
    pub helps: Vec<String>,
    pub snippets: Vec<SourceSnippet>,
}

impl Diagnostic {
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }

    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Attach a rendered source line, typically once the file is known
    pub fn with_snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippets.push(snippet);
        self
    }
}

/// Header line: `warning[W1001]: message`
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{}[{}]: {}", self.level, code, self.message),
            None => write!(f, "{}: {}", self.level, self.message),
        }
    }
}

/// Collects diagnostics for one run
///
/// Interior mutability lets builders emit through a shared reference while
/// the lexer holds the handler mutably borrowed for its whole lifetime.
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    pub fn build_warning(&self, span: Span, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::warning(message).span(span)
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.borrow().iter().any(|d| d.level.is_error())
    }

    pub fn error_count(&self) -> usize {
        self.count(Level::is_error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Level::is_warning)
    }

    fn count(&self, matches: impl Fn(&Level) -> bool) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| matches(&d.level))
            .count()
    }

    /// Snapshot of everything emitted so far
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Drain all diagnostics, leaving the handler empty
    pub fn take_diagnostics(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.diagnostics.borrow_mut())
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}
