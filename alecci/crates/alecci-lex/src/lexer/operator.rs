//! Operator and punctuation lexing.
//!
//! Operators, tried in this order:
//!
//! - an optional `:` and optional blanks, then `%s`, `:%s` or one of
//!   `+ - * / & @ | ~` (so `: +` is a single token)
//! - `=`, `<`, `>`, `^`
//! - the words `or`, `and`, `not` in any case
//! - `:=`
//!
//! Anything else in `( ) { } ! # , . : [ ]` is punctuation.

use crate::token::{is_word_operator, TokenCategory};
use crate::unicode::{is_blank, is_operator_symbol, is_punctuation, is_relational_symbol};
use crate::Lexer;

impl Lexer<'_, '_> {
    pub(crate) fn lex_operator(&mut self) -> Option<TokenCategory> {
        let c = self.cursor.current_char()?;

        if c == ':' {
            let snapshot = self.cursor.snapshot();
            self.cursor.advance();
            self.cursor.eat_while(is_blank);
            if self.eat_prefixable_operator() {
                return Some(TokenCategory::Operator);
            }
            self.cursor.restore(snapshot);
            if self.cursor.starts_with(":=") {
                self.cursor.advance_n(2);
                return Some(TokenCategory::Operator);
            }
            return None;
        }

        if self.eat_prefixable_operator() {
            return Some(TokenCategory::Operator);
        }
        if is_relational_symbol(c) {
            self.cursor.advance();
            return Some(TokenCategory::Operator);
        }

        let word = self.peek_word();
        if is_word_operator(word) {
            self.cursor.advance_n(word.len());
            return Some(TokenCategory::Operator);
        }
        None
    }

    fn eat_prefixable_operator(&mut self) -> bool {
        if self.cursor.starts_with("%s") {
            self.cursor.advance_n(2);
        } else if self.cursor.starts_with(":%s") {
            self.cursor.advance_n(3);
        } else if self.cursor.current_char().is_some_and(is_operator_symbol) {
            self.cursor.advance();
        } else {
            return false;
        }
        true
    }

    pub(crate) fn lex_punctuation(&mut self) -> Option<TokenCategory> {
        if self.cursor.current_char().is_some_and(is_punctuation) {
            self.cursor.advance();
            Some(TokenCategory::Punctuation)
        } else {
            None
        }
    }
}
