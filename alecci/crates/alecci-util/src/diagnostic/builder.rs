//! Diagnostic builder for fluent diagnostic construction.
//!
//! This module provides the [`DiagnosticBuilder`] type for constructing
//! diagnostics with a fluent API, including source code snippets.

use super::{Diagnostic, DiagnosticCode, Handler, Level};
use crate::span::{SourceFile, Span};

/// One source line with a caret underline, attached to a diagnostic
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// Text of the line, without the terminator
    pub line: String,
    /// 1-based line number
    pub line_number: usize,
    /// 1-based column where the underline starts
    pub start_column: usize,
    /// 1-based column just past the underline
    pub end_column: usize,
    /// Optional text printed after the carets
    pub label: Option<String>,
}

impl SourceSnippet {
    /// Build the snippet for `span` from the file it points into.
    ///
    /// Returns `None` when the span's line does not exist in `file`. The
    /// underline is clipped to the end of the line.
    pub fn from_span(file: &SourceFile, span: Span) -> Option<Self> {
        let line = file.line_at(span.line as usize)?;
        let width = file
            .extract_range(span.start, span.end)
            .map(|text| text.chars().take_while(|&c| c != '\n' && c != '\r').count())
            .unwrap_or(0)
            .max(1);
        let start_column = span.column as usize;
        Some(Self {
            line: line.to_string(),
            line_number: span.line as usize,
            start_column,
            end_column: start_column + width,
            label: None,
        })
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Render the line and its caret underline
    pub fn format(&self) -> String {
        let width = self.line_number.to_string().len().max(3);
        let underline_start = self.start_column.saturating_sub(1);
        let underline_len = self.end_column.saturating_sub(self.start_column).max(1);

        let mut result = format!("{:>width$} | {}\n", self.line_number, self.line);
        result.push_str(&format!("{:>width$} | ", ""));
        result.push_str(&" ".repeat(underline_start));
        result.push_str(&"^".repeat(underline_len));
        if let Some(label) = &self.label {
            result.push(' ');
            result.push_str(label);
        }
        result
    }
}

/// Fluent builder for [`Diagnostic`]
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
    helps: Vec<String>,
    snippets: Vec<SourceSnippet>,
}

impl DiagnosticBuilder {
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: Span::DUMMY,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            code: self.code,
            notes: self.notes,
            helps: self.helps,
            snippets: self.snippets,
        }
    }

    /// Build and hand the diagnostic to `handler`
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}
