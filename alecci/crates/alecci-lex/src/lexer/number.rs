//! Number literal lexing.
//!
//! Decimal digits with at most one point. A point makes the literal a
//! float, so `3.` is a float while `3` is an integer. A literal may also
//! start at the point (`.5`). No signs or exponents.
//!
//! A fraction never ends right before another `.`. Fraction digits are
//! given back one at a time until that holds, so `1.25.` lexes as `1.2`,
//! `5.` and `1..5` as `1`, `.`, `.5`.

use crate::token::TokenCategory;
use crate::Lexer;

impl Lexer<'_, '_> {
    pub(crate) fn lex_number(&mut self) -> Option<TokenCategory> {
        match self.cursor.current_char()? {
            c if c.is_ascii_digit() => {
                self.cursor.eat_while(|c| c.is_ascii_digit());
                if self.lex_fraction(0) {
                    Some(TokenCategory::FloatLiteral)
                } else {
                    Some(TokenCategory::IntegerLiteral)
                }
            },
            '.' if self.cursor.peek_char(1).is_some_and(|c| c.is_ascii_digit()) => self
                .lex_fraction(1)
                .then_some(TokenCategory::FloatLiteral),
            _ => None,
        }
    }

    /// Consume `.` and the longest run of at least `min_digits` digits
    /// that is not followed by another `.`
    fn lex_fraction(&mut self, min_digits: usize) -> bool {
        let Some(rest) = self.cursor.remaining().strip_prefix('.') else {
            return false;
        };
        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        // Short of the full run the next char is a digit, so one step back is enough
        let taken = if rest[digits..].starts_with('.') {
            digits.checked_sub(1)
        } else {
            Some(digits)
        };
        match taken {
            Some(taken) if taken >= min_digits => {
                self.cursor.advance_n(1 + taken);
                true
            },
            _ => false,
        }
    }
}
