//! Character classes used by the AlEcci lexer.
//!
//! Identifiers follow the usual "word character" rules: a letter or
//! underscore, then letters, digits or underscores. Letters may be any
//! Unicode alphabetic character. The naming convention that decides
//! between constant, function and variable names only looks at ASCII case.

/// Check if a character can start an identifier
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

/// Check if a character can continue an identifier
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

/// Horizontal whitespace: the only characters in a Default-mode
/// whitespace run
#[inline]
pub fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Start of a line break sequence
#[inline]
pub fn is_line_break(c: char) -> bool {
    c == '\n' || c == '\r'
}

/// Whitespace accepted inside function signatures and parameter lists,
/// line breaks included
#[inline]
pub fn is_signature_whitespace(c: char) -> bool {
    c.is_whitespace()
}

/// Single-character operators that may follow an optional `:` prefix
#[inline]
pub fn is_operator_symbol(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '&' | '@' | '|' | '~')
}

/// Relational and assignment operators that never take a prefix
#[inline]
pub fn is_relational_symbol(c: char) -> bool {
    matches!(c, '=' | '<' | '>' | '^')
}

/// Single-character punctuation
#[inline]
pub fn is_punctuation(c: char) -> bool {
    matches!(
        c,
        '(' | ')' | '{' | '}' | '!' | '#' | ',' | '.' | ':' | '[' | ']'
    )
}
