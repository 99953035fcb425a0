//! Word lexing and classification.
//!
//! In Default mode a word is, in order of preference, a boolean/null
//! literal, a reserved keyword, a built-in function (only when enabled) or
//! a name classified by the naming convention. A function name followed by
//! `(` opens a function signature.
//!
//! Inside signatures only function names are accepted, and inside parameter
//! lists only constant and variable names; keywords lose their meaning
//! there.

use crate::mode::Mode;
use crate::token::{is_builtin, is_keyword, is_literal_word, NameKind, TokenCategory};
use crate::unicode::{is_ident_continue, is_ident_start, is_signature_whitespace};
use crate::Lexer;

impl<'a> Lexer<'a, '_> {
    /// The maximal identifier starting at the cursor, without consuming it
    pub(crate) fn peek_word(&self) -> &'a str {
        let rest = self.cursor.remaining();
        let mut chars = rest.char_indices();
        match chars.next() {
            Some((_, c)) if is_ident_start(c) => {},
            _ => return "",
        }
        let end = chars
            .find(|&(_, c)| !is_ident_continue(c))
            .map_or(rest.len(), |(i, _)| i);
        &rest[..end]
    }

    fn eat_word(&mut self, word: &str) {
        self.cursor.advance_n(word.chars().count());
    }

    pub(crate) fn lex_word(&mut self) -> Option<TokenCategory> {
        let word = self.peek_word();
        if word.is_empty() {
            return None;
        }
        self.eat_word(word);

        let category = if is_literal_word(word) {
            TokenCategory::BooleanOrNullLiteral
        } else if is_keyword(word) {
            TokenCategory::ReservedKeyword
        } else if self.options.builtins_first && is_builtin(word) {
            TokenCategory::BuiltinFunctionName
        } else {
            NameKind::of(word).category()
        };

        if category == TokenCategory::FunctionName && self.call_follows() {
            self.push_mode(Mode::FunctionSignature);
        }
        Some(category)
    }

    /// Whether optional whitespace, line breaks included, and then `(` come next
    fn call_follows(&self) -> bool {
        self.cursor
            .remaining()
            .trim_start_matches(is_signature_whitespace)
            .starts_with('(')
    }

    pub(crate) fn lex_signature_name(&mut self) -> Option<TokenCategory> {
        let word = self.peek_word();
        if word.is_empty() || NameKind::of(word) != NameKind::Function {
            return None;
        }
        self.eat_word(word);
        Some(TokenCategory::FunctionName)
    }

    pub(crate) fn lex_signature_paren(&mut self) -> Option<TokenCategory> {
        if self.cursor.match_char('(') {
            self.push_mode(Mode::ParameterList);
        } else if self.cursor.match_char(')') {
            self.pop_mode();
        } else {
            return None;
        }
        Some(TokenCategory::Punctuation)
    }

    pub(crate) fn lex_parameter_name(&mut self) -> Option<TokenCategory> {
        let word = self.peek_word();
        if word.is_empty() {
            return None;
        }
        match NameKind::of(word) {
            NameKind::Function => None,
            kind => {
                self.eat_word(word);
                Some(kind.category())
            },
        }
    }

    pub(crate) fn lex_parameter_separator(&mut self) -> Option<TokenCategory> {
        if !self.cursor.match_char(',') {
            return None;
        }
        self.push_mode(Mode::ParameterList);
        Some(TokenCategory::Punctuation)
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::LexerOptions;
    use crate::mode::Mode;
    use crate::token::TokenCategory;
    use crate::Lexer;
    use alecci_util::Handler;

    fn lex_word_with(source: &str, options: LexerOptions) -> (Option<TokenCategory>, String, Mode) {
        let mut handler = Handler::new();
        let mut lexer = Lexer::with_options(source, &mut handler, options);
        let category = lexer.lex_word();
        (category, lexer.cursor.slice_from(0).to_string(), lexer.mode())
    }

    fn lex_word(source: &str) -> Option<TokenCategory> {
        lex_word_with(source, LexerOptions::default()).0
    }

    #[test]
    fn test_peek_word() {
        let mut handler = Handler::new();
        let lexer = Lexer::new("max_size2+1", &mut handler);
        assert_eq!(lexer.peek_word(), "max_size2");
        assert_eq!(lexer.position(), 0);

        let mut handler = Handler::new();
        let lexer = Lexer::new("9lives", &mut handler);
        assert_eq!(lexer.peek_word(), "");
    }

    #[test]
    fn test_literal_words_beat_keywords() {
        assert_eq!(lex_word("true"), Some(TokenCategory::BooleanOrNullLiteral));
        assert_eq!(lex_word("FALSE"), Some(TokenCategory::BooleanOrNullLiteral));
        assert_eq!(lex_word("Null"), Some(TokenCategory::BooleanOrNullLiteral));
    }

    #[test]
    fn test_keywords_any_case() {
        assert_eq!(lex_word("while"), Some(TokenCategory::ReservedKeyword));
        assert_eq!(lex_word("WHILE"), Some(TokenCategory::ReservedKeyword));
        assert_eq!(lex_word("While"), Some(TokenCategory::ReservedKeyword));
        assert_eq!(lex_word("whilex"), Some(TokenCategory::VariableName));
    }

    #[test]
    fn test_naming_convention() {
        assert_eq!(lex_word("MAX_SIZE"), Some(TokenCategory::ConstantName));
        assert_eq!(lex_word("Sort"), Some(TokenCategory::FunctionName));
        assert_eq!(lex_word("count"), Some(TokenCategory::VariableName));
        assert_eq!(lex_word("A"), Some(TokenCategory::VariableName));
    }

    #[test]
    fn test_builtins_shadowed_by_default() {
        assert_eq!(lex_word("sqrt"), Some(TokenCategory::VariableName));
    }

    #[test]
    fn test_builtins_first() {
        let options = LexerOptions::default().with_builtins_first(true);
        assert_eq!(
            lex_word_with("sqrt(x)", options).0,
            Some(TokenCategory::BuiltinFunctionName)
        );
        assert_eq!(
            lex_word_with("Sqrt", options).0,
            Some(TokenCategory::FunctionName)
        );
        // Keywords still win
        assert_eq!(
            lex_word_with("while", options).0,
            Some(TokenCategory::ReservedKeyword)
        );
    }

    #[test]
    fn test_call_opens_signature() {
        let (_, text, mode) = lex_word_with("Sort (A)", LexerOptions::default());
        assert_eq!(text, "Sort");
        assert_eq!(mode, Mode::FunctionSignature);

        let (_, _, mode) = lex_word_with("Sort\n\t(A)", LexerOptions::default());
        assert_eq!(mode, Mode::FunctionSignature);

        let (_, _, mode) = lex_word_with("Sort\n+ (A)", LexerOptions::default());
        assert_eq!(mode, Mode::Default);

        let (_, _, mode) = lex_word_with("count(A)", LexerOptions::default());
        assert_eq!(mode, Mode::Default);
    }

    #[test]
    fn test_signature_and_parameter_names() {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new("Helper", &mut handler);
        assert_eq!(lexer.lex_parameter_name(), None);
        assert_eq!(lexer.lex_signature_name(), Some(TokenCategory::FunctionName));

        let mut handler = Handler::new();
        let mut lexer = Lexer::new("if", &mut handler);
        assert_eq!(lexer.lex_signature_name(), None);
        assert_eq!(lexer.lex_parameter_name(), Some(TokenCategory::VariableName));

        let mut handler = Handler::new();
        let mut lexer = Lexer::new("LIMIT", &mut handler);
        assert_eq!(lexer.lex_parameter_name(), Some(TokenCategory::ConstantName));
    }

    #[test]
    fn test_parens_and_separator_move_modes() {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new("(,)", &mut handler);
        assert_eq!(lexer.lex_signature_paren(), Some(TokenCategory::Punctuation));
        assert_eq!(lexer.mode(), Mode::ParameterList);
        assert_eq!(lexer.lex_parameter_separator(), Some(TokenCategory::Punctuation));
        assert_eq!(lexer.depth(), 3);
        assert_eq!(lexer.lex_signature_paren(), Some(TokenCategory::Punctuation));
        assert_eq!(lexer.depth(), 2);
    }
}
