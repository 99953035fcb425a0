//! Diagnostic codes for categorizing lexer warnings and errors.
//!
//! Codes are a one-letter prefix plus a four digit number. The `1xxx`
//! range belongs to the lexer.
//!
//! ```
//! use alecci_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::W_LEXER_UNRECOGNIZED_CHAR;
//! assert_eq!(code.prefix(), "W");
//! assert_eq!(code.number(), 1001);
//! assert_eq!(code.as_str(), "W1001");
//! ```

/// Stable identifier of a diagnostic message
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// `E` for errors, `W` for warnings
    pub prefix: &'static str,
    /// Numeric part
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Render as `W1001`
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // LEXER WARNINGS (W1000-W1999)
    // =========================================================================

    /// A character no lexer rule accepts
    pub const W_LEXER_UNRECOGNIZED_CHAR: Self = Self::new("W", 1001);
}

impl std::fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{:04}", self.prefix, self.number)
    }
}

/// Shorthand for [`DiagnosticCode::W_LEXER_UNRECOGNIZED_CHAR`]
pub const W_LEXER_UNRECOGNIZED_CHAR: DiagnosticCode = DiagnosticCode::W_LEXER_UNRECOGNIZED_CHAR;
