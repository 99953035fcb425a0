//! String literal lexing.
//!
//! With [`StringStyle::QuoteOnly`] the quote character is the whole token.
//! With [`StringStyle::Delimited`] the token runs to the closing quote, and
//! an unterminated string ends before the line break.

use super::StringStyle;
use crate::token::TokenCategory;
use crate::unicode::is_line_break;
use crate::Lexer;

impl Lexer<'_, '_> {
    pub(crate) fn lex_string(&mut self) -> Option<TokenCategory> {
        if !self.cursor.match_char('"') {
            return None;
        }
        if self.options.strings == StringStyle::Delimited {
            self.lex_string_body();
        }
        Some(TokenCategory::StringLiteral)
    }

    fn lex_string_body(&mut self) {
        while let Some(c) = self.cursor.current_char() {
            match c {
                '"' => {
                    self.cursor.advance();
                    return;
                },
                // An escape never swallows the line break
                '\\' => {
                    self.cursor.advance();
                    if self.cursor.current_char().is_some_and(|c| !is_line_break(c)) {
                        self.cursor.advance();
                    }
                },
                c if is_line_break(c) => return,
                _ => {
                    self.cursor.advance();
                },
            }
        }
    }
}
