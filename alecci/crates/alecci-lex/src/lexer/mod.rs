//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct, mode dispatch and the fallback transition
//! - `whitespace` - Whitespace runs, line breaks and line continuations
//! - `string` - String literal lexing in both string styles
//! - `number` - Integer and float literal lexing
//! - `operator` - Operator and punctuation lexing
//! - `identifier` - Word classification and signature/parameter names

mod core;
mod identifier;
mod number;
mod operator;
mod string;
mod whitespace;

pub use core::Lexer;

/// How the lexer treats `"`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StringStyle {
    /// A `"` on its own is a string token and whatever follows it is
    /// lexed as ordinary code
    #[default]
    QuoteOnly,
    /// A string runs from `"` to the closing `"` on the same line. A
    /// backslash escapes the next character. An unterminated string stops
    /// before the line break.
    Delimited,
}

/// Options that change how the lexer classifies input
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LexerOptions {
    pub strings: StringStyle,
    /// Look words up in the built-in function table before applying the
    /// naming convention
    pub builtins_first: bool,
}

impl LexerOptions {
    pub fn with_strings(mut self, strings: StringStyle) -> Self {
        self.strings = strings;
        self
    }

    pub fn with_builtins_first(mut self, builtins_first: bool) -> Self {
        self.builtins_first = builtins_first;
        self
    }
}
