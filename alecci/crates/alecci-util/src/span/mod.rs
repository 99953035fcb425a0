//! Span module - Source location tracking.
//!
//! A [`Span`] records where a token or diagnostic sits in an AlEcci source
//! file: a half-open byte range plus the 1-based line and column of its
//! first character. Spans carry a [`FileId`] so that the `check` command can
//! render snippets across several files through one [`SourceMap`].
//!
//! # Examples
//!
//! ```
//! use alecci_util::span::{FileId, Span};
//!
//! let span = Span::with_file(10, 16, FileId(1), 2, 3);
//! assert_eq!(span.len(), 6);
//! assert_eq!(span.file_id, FileId(1));
//! ```

mod source_map;

pub use source_map::{SourceFile, SourceMap};

/// A unique identifier for a source file
///
/// FileIds are assigned sequentially as files are added to the [`SourceMap`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(pub usize);

impl FileId {
    /// A placeholder id for spans that are not tied to a registered file.
    /// No [`SourceMap`] ever hands it out.
    pub const DUMMY: FileId = FileId(usize::MAX);

    /// Create a new FileId
    #[inline]
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    /// Get the raw index value
    #[inline]
    pub const fn index(&self) -> usize {
        self.0
    }
}

impl Default for FileId {
    #[inline]
    fn default() -> Self {
        Self::DUMMY
    }
}

/// Source location span
///
/// Offsets are byte offsets into the original text, `start` inclusive and
/// `end` exclusive. `line` and `column` describe `start` and count
/// characters, not bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
    /// File identifier
    pub file_id: FileId,
}

impl Span {
    /// Dummy span for testing
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
        file_id: FileId::DUMMY,
    };

    /// Create a new span
    ///
    /// # Examples
    ///
    /// ```
    /// use alecci_util::span::Span;
    ///
    /// let span = Span::new(10, 20, 1, 5);
    /// assert_eq!(span.start, 10);
    /// assert_eq!(span.end, 20);
    /// ```
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
            file_id: FileId::DUMMY,
        }
    }

    /// Create a new span associated with a specific file
    #[inline]
    pub fn with_file(start: usize, end: usize, file_id: FileId, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
            file_id,
        }
    }

    /// Check if the span covers no bytes
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Length of the span in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }
}
