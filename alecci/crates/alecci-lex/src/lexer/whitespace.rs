//! Whitespace, line break and line continuation lexing.

use crate::token::TokenCategory;
use crate::unicode::{is_blank, is_line_break, is_signature_whitespace};
use crate::Lexer;

impl Lexer<'_, '_> {
    /// A maximal run of spaces and tabs
    pub(crate) fn lex_blank_run(&mut self) -> Option<TokenCategory> {
        (self.cursor.eat_while(is_blank) > 0).then_some(TokenCategory::Whitespace)
    }

    /// One line break; `\r\n` counts as one
    pub(crate) fn lex_line_break(&mut self) -> Option<TokenCategory> {
        self.cursor
            .eat_line_break()
            .then_some(TokenCategory::Whitespace)
    }

    /// `..` directly followed by a line break, which belongs to the token
    pub(crate) fn lex_line_continuation(&mut self) -> Option<TokenCategory> {
        if !self.cursor.starts_with("..") || !self.cursor.peek_char(2).is_some_and(is_line_break) {
            return None;
        }
        self.cursor.advance_n(2);
        self.cursor.eat_line_break();
        Some(TokenCategory::LineContinuation)
    }

    /// Any whitespace run, line breaks included
    pub(crate) fn lex_signature_whitespace(&mut self) -> Option<TokenCategory> {
        (self.cursor.eat_while(is_signature_whitespace) > 0).then_some(TokenCategory::Whitespace)
    }
}

#[cfg(test)]
mod tests {
    use crate::token::TokenCategory;
    use crate::Lexer;
    use alecci_util::Handler;

    fn run(
        source: &str,
        rule: impl FnOnce(&mut Lexer<'_, '_>) -> Option<TokenCategory>,
    ) -> (Option<TokenCategory>, String) {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new(source, &mut handler);
        let category = rule(&mut lexer);
        (category, lexer.cursor.slice_from(0).to_string())
    }

    #[test]
    fn test_blank_run_stops_at_newline() {
        let (category, text) = run(" \t \nx", |l| l.lex_blank_run());
        assert_eq!(category, Some(TokenCategory::Whitespace));
        assert_eq!(text, " \t ");
    }

    #[test]
    fn test_blank_run_needs_a_blank() {
        let (category, text) = run("x", |l| l.lex_blank_run());
        assert_eq!(category, None);
        assert_eq!(text, "");
    }

    #[test]
    fn test_line_breaks() {
        assert_eq!(run("\n\n", |l| l.lex_line_break()).1, "\n");
        assert_eq!(run("\r\n\n", |l| l.lex_line_break()).1, "\r\n");
        assert_eq!(run("\rx", |l| l.lex_line_break()).1, "\r");
        assert_eq!(run(" ", |l| l.lex_line_break()).0, None);
    }

    #[test]
    fn test_line_continuation() {
        let (category, text) = run("..\nnext", |l| l.lex_line_continuation());
        assert_eq!(category, Some(TokenCategory::LineContinuation));
        assert_eq!(text, "..\n");

        assert_eq!(run("..\r\nx", |l| l.lex_line_continuation()).1, "..\r\n");
    }

    #[test]
    fn test_dots_without_line_break_are_not_continuation() {
        assert_eq!(run("..x", |l| l.lex_line_continuation()).0, None);
        assert_eq!(run("..", |l| l.lex_line_continuation()).0, None);
        assert_eq!(run(".. \n", |l| l.lex_line_continuation()).0, None);
    }

    #[test]
    fn test_signature_whitespace_spans_lines() {
        let (category, text) = run(" \n\t\r\n x", |l| l.lex_signature_whitespace());
        assert_eq!(category, Some(TokenCategory::Whitespace));
        assert_eq!(text, " \n\t\r\n ");
    }
}
