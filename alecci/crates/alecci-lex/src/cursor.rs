//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while iterating through source code characters. It handles UTF-8 encoding
//! correctly and tracks line/column information for spans.
//!
//! Line breaks are `\n`, `\r\n` and a lone `\r`. A `\r\n` pair counts as a
//! single break; the `\r` advances the column and the `\n` starts the new
//! line.

/// Cursor over a source string
pub struct Cursor<'a> {
    source: &'a str,

    /// Current byte offset
    position: usize,

    /// Current line (1-based)
    line: u32,

    /// Current column in characters (1-based)
    column: u32,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Character at the cursor, or `None` at end of input
    #[inline]
    pub fn current_char(&self) -> Option<char> {
        let b = *self.source.as_bytes().get(self.position)?;
        // Fast path for ASCII (most common case)
        if b < 128 {
            return Some(b as char);
        }
        self.remaining().chars().next()
    }

    /// Character `n` characters ahead of the cursor (`peek_char(0)` is the
    /// current one)
    #[inline]
    pub fn peek_char(&self, n: usize) -> Option<char> {
        if n == 0 {
            return self.current_char();
        }
        self.remaining().chars().nth(n)
    }

    /// Check whether the remaining input starts with `prefix`
    #[inline]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.remaining().starts_with(prefix)
    }

    /// Consume one character and return it
    #[inline]
    pub fn advance(&mut self) -> Option<char> {
        let c = self.current_char()?;
        self.position += c.len_utf8();
        match c {
            '\n' => self.new_line(),
            '\r' if self.source.as_bytes().get(self.position) != Some(&b'\n') => self.new_line(),
            _ => self.column += 1,
        }
        Some(c)
    }

    #[inline]
    fn new_line(&mut self) {
        self.line += 1;
        self.column = 1;
    }

    /// Consume `count` characters, stopping early at end of input
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.advance().is_none() {
                break;
            }
        }
    }

    /// Consume characters while `predicate` holds; returns how many were
    /// consumed
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) -> usize {
        let mut eaten = 0;
        while let Some(c) = self.current_char() {
            if !predicate(c) {
                break;
            }
            self.advance();
            eaten += 1;
        }
        eaten
    }

    /// Consume `expected` if it is the current character
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.current_char() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume a single line break (`\n`, `\r\n` or `\r`) if one is next
    pub fn eat_line_break(&mut self) -> bool {
        match self.current_char() {
            Some('\n') => {
                self.advance();
                true
            },
            Some('\r') => {
                self.advance();
                self.match_char('\n');
                true
            },
            _ => false,
        }
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Text between byte offset `start` and the cursor
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            position: self.position,
            line: self.line,
            column: self.column,
        }
    }

    pub fn restore(&mut self, snapshot: CursorSnapshot) {
        self.position = snapshot.position;
        self.line = snapshot.line;
        self.column = snapshot.column;
    }
}

/// Saved cursor state for backtracking
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorSnapshot {
    pub position: usize,
    pub line: u32,
    pub column: u32,
}
