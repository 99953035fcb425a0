//! Diagnostic severity levels.

use std::fmt;

/// Severity of a [`Diagnostic`](super::Diagnostic)
///
/// Ordered from most to least severe, so `Level::Error < Level::Warning`.
///
/// ```
/// use alecci_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Warning), "warning");
/// assert!(Level::Error.is_error());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// A problem that makes the input unusable
    Error,
    /// Suspicious input that was still processed
    Warning,
    /// Extra context attached to another diagnostic
    Note,
    /// A suggestion for fixing the input
    Help,
}

impl Level {
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Level::Error)
    }

    #[inline]
    pub const fn is_warning(&self) -> bool {
        matches!(self, Level::Warning)
    }

    /// Lowercase name used in rendered output
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Note => "note",
            Level::Help => "help",
        }
    }

    /// ANSI SGR color used when the terminal supports it
    #[inline]
    pub const fn color_code(&self) -> &'static str {
        match self {
            Level::Error => "31",
            Level::Warning => "33",
            Level::Note => "36",
            Level::Help => "32",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
