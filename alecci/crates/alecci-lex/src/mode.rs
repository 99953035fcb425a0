//! Scanning modes and the mode stack.
//!
//! The lexer is a pushdown machine. Which rules apply depends on the mode on
//! top of the stack:
//!
//! ```text
//! Default ──Name(──▶ FunctionSignature ──(──▶ ParameterList ──,──▶ ParameterList
//!    ▲                      │                       │
//!    └────────── ) ─────────┘◀──── no rule matches ─┘
//! ```
//!
//! The stack always keeps `Default` at the bottom.

use std::fmt;

/// A lexer scanning mode
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Ordinary code
    Default,
    /// After a function name that is followed by `(`
    FunctionSignature,
    /// Inside the parentheses of a function signature
    ParameterList,
}

impl Mode {
    pub const fn name(self) -> &'static str {
        match self {
            Mode::Default => "default",
            Mode::FunctionSignature => "function_signature",
            Mode::ParameterList => "parameter_list",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Stack of modes that never drops below [`Mode::Default`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModeStack {
    // Modes above the implicit Default bottom
    above_default: Vec<Mode>,
}

impl ModeStack {
    pub fn new() -> Self {
        Self {
            above_default: Vec::new(),
        }
    }

    /// Mode on top of the stack
    #[inline]
    pub fn current(&self) -> Mode {
        self.above_default.last().copied().unwrap_or(Mode::Default)
    }

    /// Number of modes on the stack, `Default` included
    #[inline]
    pub fn depth(&self) -> usize {
        self.above_default.len() + 1
    }

    #[inline]
    pub fn is_default(&self) -> bool {
        self.above_default.is_empty()
    }

    pub fn push(&mut self, mode: Mode) {
        self.above_default.push(mode);
    }

    /// Pop the top mode and return it
    ///
    /// Returns `None`, leaving the stack unchanged, when only `Default` is
    /// left.
    pub fn pop(&mut self) -> Option<Mode> {
        self.above_default.pop()
    }
}

impl Default for ModeStack {
    fn default() -> Self {
        Self::new()
    }
}
