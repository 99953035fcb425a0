//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the per-mode rule order and
//! the mode transitions.

use alecci_util::{DiagnosticCode, FileId, Handler, Span};
use tracing::{debug, trace};

use super::LexerOptions;
use crate::cursor::Cursor;
use crate::mode::{Mode, ModeStack};
use crate::token::{Token, TokenCategory};

/// Mode-aware lexer over one source text
///
/// Tokens borrow from the source (`'a`) only, so they outlive the borrow of
/// the diagnostic handler (`'h`).
///
/// The lexer never fails. Characters no rule accepts become
/// [`TokenCategory::Unrecognized`] tokens and a `W1001` warning in the
/// handler, and concatenating every lexeme reproduces the input.
///
/// # Example
///
/// ```
/// use alecci_lex::{Lexer, TokenCategory};
/// use alecci_util::Handler;
///
/// let mut handler = Handler::new();
/// let categories: Vec<_> = Lexer::new("Sort(A, n)", &mut handler)
///     .map(|t| t.category)
///     .collect();
///
/// assert_eq!(categories[0], TokenCategory::FunctionName);
/// assert_eq!(categories[2], TokenCategory::VariableName);
/// ```
pub struct Lexer<'a, 'h> {
    pub(crate) cursor: Cursor<'a>,

    handler: &'h mut Handler,

    pub(crate) options: LexerOptions,

    modes: ModeStack,

    file_id: FileId,

    token_start: usize,

    token_start_line: u32,

    token_start_column: u32,

    token_count: usize,

    finished: bool,
}

impl<'a, 'h> Lexer<'a, 'h> {
    /// Create a lexer with default options
    pub fn new(source: &'a str, handler: &'h mut Handler) -> Self {
        Self::with_options(source, handler, LexerOptions::default())
    }

    pub fn with_options(source: &'a str, handler: &'h mut Handler, options: LexerOptions) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            options,
            modes: ModeStack::new(),
            file_id: FileId::DUMMY,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
            token_count: 0,
            finished: false,
        }
    }

    /// Tag every produced span with `file_id`
    pub fn with_file_id(mut self, file_id: FileId) -> Self {
        self.file_id = file_id;
        self
    }

    /// Produce the next token, or `None` at end of input
    pub fn next_token(&mut self) -> Option<Token<'a>> {
        if self.cursor.is_at_end() {
            self.finish();
            return None;
        }

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        let category = loop {
            let matched = match self.modes.current() {
                Mode::Default => Some(self.lex_default()),
                Mode::FunctionSignature => self.lex_function_signature(),
                Mode::ParameterList => self.lex_parameter_list(),
            };
            match matched {
                Some(category) => break category,
                None => self.fallback_pop(),
            }
        };

        self.token_count += 1;
        Some(Token::new(
            category,
            self.cursor.slice_from(self.token_start),
            self.current_span(),
        ))
    }

    /// Default-mode rules in priority order. Always consumes input.
    fn lex_default(&mut self) -> TokenCategory {
        self.lex_blank_run()
            .or_else(|| self.lex_line_break())
            .or_else(|| self.lex_line_continuation())
            .or_else(|| self.lex_string())
            .or_else(|| self.lex_number())
            .or_else(|| self.lex_operator())
            .or_else(|| self.lex_punctuation())
            .or_else(|| self.lex_word())
            .unwrap_or_else(|| self.lex_unrecognized())
    }

    fn lex_function_signature(&mut self) -> Option<TokenCategory> {
        self.lex_signature_name()
            .or_else(|| self.lex_signature_whitespace())
            .or_else(|| self.lex_signature_paren())
    }

    fn lex_parameter_list(&mut self) -> Option<TokenCategory> {
        self.lex_parameter_name()
            .or_else(|| self.lex_signature_whitespace())
            .or_else(|| self.lex_parameter_separator())
    }

    /// Leave a mode whose rules do not match without consuming anything
    fn fallback_pop(&mut self) {
        if let Some(mode) = self.modes.pop() {
            trace!(
                from = %mode,
                to = %self.modes.current(),
                offset = self.cursor.position(),
                "fallback pop"
            );
        }
    }

    pub(crate) fn push_mode(&mut self, mode: Mode) {
        self.modes.push(mode);
        trace!(
            mode = %mode,
            depth = self.modes.depth(),
            offset = self.cursor.position(),
            "push mode"
        );
    }

    pub(crate) fn pop_mode(&mut self) {
        if let Some(mode) = self.modes.pop() {
            trace!(
                mode = %mode,
                depth = self.modes.depth(),
                offset = self.cursor.position(),
                "pop mode"
            );
        }
    }

    fn lex_unrecognized(&mut self) -> TokenCategory {
        if let Some(c) = self.cursor.advance() {
            let span = self.current_span();
            self.handler
                .build_warning(span, format!("unrecognized character {:?}", c))
                .code(DiagnosticCode::W_LEXER_UNRECOGNIZED_CHAR)
                .note("kept as a one-character token, lexing continues")
                .help("no token can start with this character")
                .emit(self.handler);
        }
        TokenCategory::Unrecognized
    }

    fn current_span(&self) -> Span {
        Span::with_file(
            self.token_start,
            self.cursor.position(),
            self.file_id,
            self.token_start_line,
            self.token_start_column,
        )
    }

    fn finish(&mut self) {
        if !self.finished {
            self.finished = true;
            debug!(
                tokens = self.token_count,
                bytes = self.cursor.source().len(),
                open_modes = self.modes.depth() - 1,
                closed = self.modes.is_default(),
                "lexing finished"
            );
        }
    }

    /// Mode on top of the stack
    pub fn mode(&self) -> Mode {
        self.modes.current()
    }

    /// Depth of the mode stack, `Default` included
    pub fn depth(&self) -> usize {
        self.modes.depth()
    }

    pub fn options(&self) -> LexerOptions {
        self.options
    }

    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

impl<'a> Iterator for Lexer<'a, '_> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

impl std::iter::FusedIterator for Lexer<'_, '_> {}
