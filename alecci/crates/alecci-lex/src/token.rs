//! Token definitions and the static word tables.
//!
//! Every token the lexer produces is a [`Token`]: a [`TokenCategory`], the
//! exact slice of source it covers, and its [`Span`]. Tokens borrow from the
//! source, so a token stream is cheap to produce and to throw away.
//!
//! The reserved keyword and built-in function tables are fixed arrays. Hash
//! sets over them are built once on first use.

use std::fmt;
use std::str::FromStr;

use alecci_util::Span;
use lazy_static::lazy_static;
use rustc_hash::FxHashSet;
use thiserror::Error;

/// Lexical category of a token
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenCategory {
    /// A run of spaces/tabs, a line break, or (inside signatures) any
    /// whitespace run
    Whitespace,
    /// `..` followed by a line break
    LineContinuation,
    /// A `"` or, with delimited strings, a whole quoted string
    StringLiteral,
    FloatLiteral,
    IntegerLiteral,
    Operator,
    Punctuation,
    /// `null`, `true`, `false` in any case
    BooleanOrNullLiteral,
    ReservedKeyword,
    /// `MAX_SIZE`
    ConstantName,
    /// `Sort`
    FunctionName,
    /// `n`, `_tmp`, `A`
    VariableName,
    /// `sqrt`; only produced when built-ins are looked up before the naming
    /// convention
    BuiltinFunctionName,
    /// A single character no rule accepts
    Unrecognized,
}

impl TokenCategory {
    /// Every category, in declaration order
    pub const ALL: [TokenCategory; 14] = [
        TokenCategory::Whitespace,
        TokenCategory::LineContinuation,
        TokenCategory::StringLiteral,
        TokenCategory::FloatLiteral,
        TokenCategory::IntegerLiteral,
        TokenCategory::Operator,
        TokenCategory::Punctuation,
        TokenCategory::BooleanOrNullLiteral,
        TokenCategory::ReservedKeyword,
        TokenCategory::ConstantName,
        TokenCategory::FunctionName,
        TokenCategory::VariableName,
        TokenCategory::BuiltinFunctionName,
        TokenCategory::Unrecognized,
    ];

    /// Stable snake_case name, used in tool output and config
    pub const fn name(self) -> &'static str {
        match self {
            TokenCategory::Whitespace => "whitespace",
            TokenCategory::LineContinuation => "line_continuation",
            TokenCategory::StringLiteral => "string_literal",
            TokenCategory::FloatLiteral => "float_literal",
            TokenCategory::IntegerLiteral => "integer_literal",
            TokenCategory::Operator => "operator",
            TokenCategory::Punctuation => "punctuation",
            TokenCategory::BooleanOrNullLiteral => "boolean_or_null_literal",
            TokenCategory::ReservedKeyword => "reserved_keyword",
            TokenCategory::ConstantName => "constant_name",
            TokenCategory::FunctionName => "function_name",
            TokenCategory::VariableName => "variable_name",
            TokenCategory::BuiltinFunctionName => "builtin_function_name",
            TokenCategory::Unrecognized => "unrecognized",
        }
    }

    /// Pygments token type this category is highlighted as
    ///
    /// Boolean/null literals and built-in functions share `Name.Builtin`.
    pub const fn pygments_name(self) -> &'static str {
        match self {
            TokenCategory::Whitespace | TokenCategory::LineContinuation => "Text",
            TokenCategory::StringLiteral => "String.Double",
            TokenCategory::FloatLiteral => "Number.Float",
            TokenCategory::IntegerLiteral => "Number.Integer",
            TokenCategory::Operator => "Operator",
            TokenCategory::Punctuation => "Punctuation",
            TokenCategory::BooleanOrNullLiteral | TokenCategory::BuiltinFunctionName => {
                "Name.Builtin"
            },
            TokenCategory::ReservedKeyword => "Keyword.Reserved",
            TokenCategory::ConstantName => "Name.Constant",
            TokenCategory::FunctionName => "Name.Function",
            TokenCategory::VariableName => "Name.Variable",
            TokenCategory::Unrecognized => "Error",
        }
    }

    /// Whitespace and line continuations carry no meaning for a parser
    #[inline]
    pub const fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenCategory::Whitespace | TokenCategory::LineContinuation
        )
    }

    /// Names produced by the naming convention or the built-in table
    #[inline]
    pub const fn is_name(self) -> bool {
        matches!(
            self,
            TokenCategory::ConstantName
                | TokenCategory::FunctionName
                | TokenCategory::VariableName
                | TokenCategory::BuiltinFunctionName
        )
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown category name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown token category: {0}")]
pub struct ParseCategoryError(pub String);

impl FromStr for TokenCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TokenCategory::ALL
            .into_iter()
            .find(|category| category.name() == s)
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

/// A classified slice of source text
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token<'a> {
    pub category: TokenCategory,
    /// Exact source text covered by the token
    pub lexeme: &'a str,
    pub span: Span,
}

impl<'a> Token<'a> {
    pub fn new(category: TokenCategory, lexeme: &'a str, span: Span) -> Self {
        Self {
            category,
            lexeme,
            span,
        }
    }

    /// Byte offset of the first character
    #[inline]
    pub fn start(&self) -> usize {
        self.span.start
    }

    /// Byte offset just past the last character
    #[inline]
    pub fn end(&self) -> usize {
        self.span.end
    }

    #[inline]
    pub fn is_trivia(&self) -> bool {
        self.category.is_trivia()
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} {} {:?}",
            self.span.line, self.span.column, self.category, self.lexeme
        )
    }
}

// ============================================================================
// WORD TABLES
// ============================================================================

/// Reserved words, matched case-insensitively
pub const KEYWORDS: [&str; 59] = [
    "break", "case", "catch", "close", "const", "continue", "do", "else", "end", "enum", "f128",
    "f32", "f64", "false", "float", "for", "foreach", "from", "function", "if", "in", "input",
    "join", "mutable", "mutex", "new", "of", "open", "output", "print", "procedure", "read",
    "record", "return", "s16", "s32", "s64", "s8", "scan", "seek", "semaphore", "shared",
    "signal", "signed", "then", "thread", "throw", "to", "true", "try", "u16", "u32", "u64",
    "u8", "unsigned", "wait", "when", "while", "write",
];

/// Built-in function names, matched case-sensitively
pub const BUILTINS: [&str; 22] = [
    "abs", "arccos", "arcsin", "arctan", "arctan2", "cos", "div", "len", "ln", "log", "log2",
    "max", "min", "mod", "pow", "rand", "round", "sin", "sgn", "sort", "sqrt", "tan",
];

/// Literal words, matched case-insensitively
pub const LITERAL_WORDS: [&str; 3] = ["null", "true", "false"];

/// Operators spelled as words, matched case-insensitively
pub const WORD_OPERATORS: [&str; 3] = ["or", "and", "not"];

const LONGEST_KEYWORD: usize = 9;

lazy_static! {
    static ref KEYWORD_SET: FxHashSet<&'static str> = KEYWORDS.iter().copied().collect();
    static ref BUILTIN_SET: FxHashSet<&'static str> = BUILTINS.iter().copied().collect();
}

/// Check if `word` is a reserved keyword in any letter case
pub fn is_keyword(word: &str) -> bool {
    if word.len() > LONGEST_KEYWORD || !word.is_ascii() {
        return false;
    }
    KEYWORD_SET.contains(word.to_ascii_lowercase().as_str())
}

/// Check if `word` is exactly a built-in function name
pub fn is_builtin(word: &str) -> bool {
    BUILTIN_SET.contains(word)
}

/// Check if `word` is `null`, `true` or `false` in any letter case
pub fn is_literal_word(word: &str) -> bool {
    LITERAL_WORDS.iter().any(|w| w.eq_ignore_ascii_case(word))
}

/// Check if `word` is `or`, `and` or `not` in any letter case
pub fn is_word_operator(word: &str) -> bool {
    WORD_OPERATORS.iter().any(|w| w.eq_ignore_ascii_case(word))
}

// ============================================================================
// NAMING CONVENTION
// ============================================================================

/// Result of applying the case-based naming convention to an identifier
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NameKind {
    /// All ASCII uppercase letters, digits and underscores, with at least
    /// two characters and one uppercase letter
    Constant,
    /// Starts with an uppercase letter and is not a constant
    Function,
    /// Anything else, including single uppercase letters
    Variable,
}

impl NameKind {
    /// Classify an identifier
    ///
    /// A lone uppercase letter such as `A` or `N` is a variable, following
    /// the pseudocode habit of naming arrays and sizes with one capital.
    pub fn of(word: &str) -> NameKind {
        let mut chars = word.chars();
        let Some(first) = chars.next() else {
            return NameKind::Variable;
        };
        if chars.next().is_none() {
            return NameKind::Variable;
        }

        let constant_shaped = (first.is_ascii_uppercase() || first == '_')
            && word
                .bytes()
                .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit() || b == b'_')
            && word.bytes().any(|b| b.is_ascii_uppercase());
        if constant_shaped {
            NameKind::Constant
        } else if first.is_uppercase() {
            NameKind::Function
        } else {
            NameKind::Variable
        }
    }

    pub const fn category(self) -> TokenCategory {
        match self {
            NameKind::Constant => TokenCategory::ConstantName,
            NameKind::Function => TokenCategory::FunctionName,
            NameKind::Variable => TokenCategory::VariableName,
        }
    }
}
