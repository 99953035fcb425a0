//! alecci-lex - Lexical Analyzer for the AlEcci pseudocode language
//!
//! This crate turns AlEcci source text into a stream of classified tokens,
//! the way a syntax highlighter sees it. Lexing is total: every character
//! of the input ends up in exactly one token, whitespace included, so the
//! lexemes of a token stream concatenate back to the source.
//!
//! # Example Usage
//!
//! ```
//! use alecci_lex::{tokenize, TokenCategory};
//!
//! let tokens = tokenize("x := 3.14");
//! let kinds: Vec<_> = tokens
//!     .iter()
//!     .filter(|t| !t.is_trivia())
//!     .map(|t| (t.category, t.lexeme))
//!     .collect();
//!
//! assert_eq!(
//!     kinds,
//!     vec![
//!         (TokenCategory::VariableName, "x"),
//!         (TokenCategory::Operator, ":="),
//!         (TokenCategory::FloatLiteral, "3.14"),
//!     ]
//! );
//! ```
//!
//! To keep the diagnostics, drive a [`Lexer`] with your own
//! [`Handler`](alecci_util::Handler).
//!
//! # Module Structure
//!
//! - [`token`] - Token categories, tokens, keyword and built-in tables
//! - [`mode`] - Scanning modes and the mode stack
//! - [`lexer`] - The lexer and its options
//! - [`cursor`] - Character cursor for source traversal
//! - [`unicode`] - Character classes
//!
//! # Modes
//!
//! A function name directly followed by `(` opens a function signature.
//! Inside its parentheses only constant and variable names are recognized,
//! so `Sort(A, n)` yields a function name, then variables `A` and `n`. When
//! nothing in a signature or parameter list matches, the lexer drops back
//! to the enclosing mode without consuming input.
//!
//! # Token Categories
//!
//! | Category | Examples |
//! |----------|----------|
//! | whitespace | spaces and tabs, one line break |
//! | line_continuation | `..` + line break |
//! | string_literal | `"` |
//! | float_literal / integer_literal | `3.14`, `.5`, `3.` / `42` |
//! | operator | `:=`, `+`, `: +`, `%s`, `and`, `<` |
//! | punctuation | `( ) { } ! # , . : [ ]` |
//! | boolean_or_null_literal | `true`, `NULL` |
//! | reserved_keyword | `while`, `WHILE`, `u32` |
//! | constant_name | `MAX_SIZE` |
//! | function_name | `Sort` |
//! | variable_name | `n`, `_tmp`, `A` |
//! | builtin_function_name | `sqrt` (opt-in) |
//! | unrecognized | `$`, `;` |

pub mod cursor;
pub mod lexer;
pub mod mode;
pub mod token;
pub mod unicode;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use lexer::{Lexer, LexerOptions, StringStyle};
pub use mode::{Mode, ModeStack};
pub use token::{NameKind, ParseCategoryError, Token, TokenCategory, BUILTINS, KEYWORDS};

use alecci_util::Handler;

/// Tokenize `source` with default options, discarding diagnostics
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    tokenize_with(source, LexerOptions::default())
}

/// Tokenize `source` with the given options, discarding diagnostics
pub fn tokenize_with(source: &str, options: LexerOptions) -> Vec<Token<'_>> {
    let mut handler = Handler::new();
    Lexer::with_options(source, &mut handler, options).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use TokenCategory::*;

    /// Tokens without whitespace, as (category, lexeme) pairs
    fn significant(source: &str) -> Vec<(TokenCategory, &str)> {
        tokenize(source)
            .into_iter()
            .filter(|t| !t.is_trivia())
            .map(|t| (t.category, t.lexeme))
            .collect()
    }

    #[test]
    fn test_assignment_statement() {
        let tokens = tokenize("x := 3.14");
        let all: Vec<_> = tokens.iter().map(|t| (t.category, t.lexeme)).collect();
        assert_eq!(
            all,
            vec![
                (VariableName, "x"),
                (Whitespace, " "),
                (Operator, ":="),
                (Whitespace, " "),
                (FloatLiteral, "3.14"),
            ]
        );
    }

    #[test]
    fn test_while_header() {
        assert_eq!(
            significant("WHILE x > 0 do"),
            vec![
                (ReservedKeyword, "WHILE"),
                (VariableName, "x"),
                (Operator, ">"),
                (IntegerLiteral, "0"),
                (ReservedKeyword, "do"),
            ]
        );
    }

    #[test]
    fn test_call_with_array_parameter() {
        assert_eq!(
            significant("Sort(A, n)"),
            vec![
                (FunctionName, "Sort"),
                (Punctuation, "("),
                (VariableName, "A"),
                (Punctuation, ","),
                (VariableName, "n"),
                (Punctuation, ")"),
            ]
        );
    }

    #[test]
    fn test_single_tokens() {
        assert_eq!(significant("MAX_SIZE"), vec![(ConstantName, "MAX_SIZE")]);
        assert_eq!(significant("@"), vec![(Operator, "@")]);
        assert_eq!(significant("#"), vec![(Punctuation, "#")]);
    }

    #[test]
    fn test_procedure_program() {
        let source = "\
function BubbleSort(A, N)
    for i := 1 to N do
        if A[i] > A[i + 1] then
            Swap(A, i)
        end
    end
    return true
end
";
        let tokens = significant(source);
        assert_eq!(tokens[0], (ReservedKeyword, "function"));
        assert_eq!(tokens[1], (FunctionName, "BubbleSort"));
        assert_eq!(tokens[3], (VariableName, "A"));
        assert_eq!(tokens[5], (VariableName, "N"));
        assert!(tokens.contains(&(FunctionName, "Swap")));
        assert!(tokens.contains(&(Punctuation, "[")));
        assert!(tokens.contains(&(BooleanOrNullLiteral, "true")));
        assert!(tokens.contains(&(ReservedKeyword, "then")));
        assert!(!tokens.iter().any(|(c, _)| *c == Unrecognized));
    }

    #[test]
    fn test_concurrency_program() {
        let source = "\
shared mutable counter := 0
mutex m
thread t := Worker(counter)
wait(m)
counter := counter + 1
signal(m)
join t
";
        let tokens = significant(source);
        assert_eq!(tokens[0], (ReservedKeyword, "shared"));
        assert_eq!(tokens[1], (ReservedKeyword, "mutable"));
        assert!(tokens.contains(&(ReservedKeyword, "mutex")));
        assert!(tokens.contains(&(FunctionName, "Worker")));
        assert!(tokens.contains(&(ReservedKeyword, "wait")));
        assert!(tokens.contains(&(ReservedKeyword, "signal")));
        assert!(tokens.contains(&(ReservedKeyword, "join")));
    }

    #[test]
    fn test_print_with_template() {
        assert_eq!(
            significant("print \"%s\" , x"),
            vec![
                (ReservedKeyword, "print"),
                (StringLiteral, "\""),
                (Operator, "%s"),
                (StringLiteral, "\""),
                (Punctuation, ","),
                (VariableName, "x"),
            ]
        );
    }

    #[test]
    fn test_delimited_strings() {
        let options = LexerOptions::default().with_strings(StringStyle::Delimited);
        let tokens: Vec<_> = tokenize_with("print \"a, b\" x", options)
            .into_iter()
            .filter(|t| !t.is_trivia())
            .map(|t| (t.category, t.lexeme))
            .collect();
        assert_eq!(
            tokens,
            vec![
                (ReservedKeyword, "print"),
                (StringLiteral, "\"a, b\""),
                (VariableName, "x"),
            ]
        );
    }

    #[test]
    fn test_builtins_first_option() {
        assert_eq!(significant("sqrt(x)")[0], (VariableName, "sqrt"));

        let options = LexerOptions::default().with_builtins_first(true);
        let tokens = tokenize_with("sqrt(x)", options);
        assert_eq!(tokens[0].category, BuiltinFunctionName);
    }

    #[test]
    fn test_lexemes_reproduce_source() {
        let source = "if x = NULL then\n  y := .5 + 2.\r\nend $";
        let rebuilt: String = tokenize(source).iter().map(|t| t.lexeme).collect();
        assert_eq!(rebuilt, source);
    }
}
