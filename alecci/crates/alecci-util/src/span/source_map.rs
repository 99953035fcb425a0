//! Source map for managing source files and computing source locations.
//!
//! The `check` command registers every input file here so that a diagnostic
//! span can be turned back into a file name, a source line and a caret
//! underline.

use std::sync::Arc;

use super::FileId;
use crate::error::{SourceMapError, SourceMapResult};

/// A single source file with precomputed line starts
#[derive(Clone)]
pub struct SourceFile {
    id: FileId,
    name: String,
    content: Arc<str>,
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file
    pub fn new(id: usize, name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            id: FileId::new(id),
            name: name.into(),
            content,
            line_starts,
        }
    }

    fn line_starts(content: &str) -> Arc<[usize]> {
        // `\n`, `\r\n` and a lone `\r` each end a line
        let bytes = content.as_bytes();
        std::iter::once(0)
            .chain(bytes.iter().enumerate().filter_map(|(i, &b)| match b {
                b'\n' => Some(i + 1),
                b'\r' if bytes.get(i + 1) != Some(&b'\n') => Some(i + 1),
                _ => None,
            }))
            .collect()
    }

    /// The id assigned by the owning [`SourceMap`]
    #[inline]
    pub fn id(&self) -> FileId {
        self.id
    }

    /// Display name, usually the path the file was read from
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Full text of the file
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Number of lines (a trailing newline opens one more, empty, line)
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Byte offset where the 0-based `line` starts
    #[inline]
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Text of the 1-based `line`, without its line terminator
    pub fn line_at(&self, line: usize) -> Option<&str> {
        if line == 0 {
            return None;
        }
        let start = self.line_start(line - 1)?;
        let end = self.line_start(line).unwrap_or(self.content.len());
        let text = self.content.get(start..end)?;
        Some(text.trim_end_matches(['\n', '\r']))
    }

    /// Extract a byte range, validating bounds and character boundaries
    pub fn extract_range(&self, start: usize, end: usize) -> SourceMapResult<&str> {
        if start > end {
            return Err(SourceMapError::InvalidSpan { start, end });
        }
        if end > self.content.len() {
            return Err(SourceMapError::SpanOutOfBounds {
                file_len: self.content.len(),
                span_start: start,
                span_end: end,
            });
        }
        self.content
            .get(start..end)
            .ok_or(SourceMapError::NotCharBoundary { start, end })
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("line_count", &self.line_count())
            .finish()
    }
}

/// Registry of all source files seen in one tool invocation
#[derive(Default)]
pub struct SourceMap {
    files: Vec<Arc<SourceFile>>,
}

impl SourceMap {
    /// Create an empty source map
    #[inline]
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    /// Register a file and return its id
    pub fn add_file(&mut self, name: impl Into<String>, content: impl Into<Arc<str>>) -> FileId {
        let id = self.files.len();
        self.files.push(Arc::new(SourceFile::new(id, name, content)));
        FileId::new(id)
    }

    /// Look up a file by id
    #[inline]
    pub fn get(&self, id: FileId) -> Option<Arc<SourceFile>> {
        self.files.get(id.index()).cloned()
    }

    /// Look up a file by id, failing with [`SourceMapError::FileNotFound`]
    pub fn get_file(&self, id: FileId) -> SourceMapResult<Arc<SourceFile>> {
        self.get(id)
            .ok_or_else(|| SourceMapError::FileNotFound(format!("FileId({})", id.index())))
    }

    /// Number of registered files
    #[inline]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}
