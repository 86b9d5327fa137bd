//! All source files of a compilation session.

use crate::error::{offset_len, SourceError};
use crate::file_id::FileId;
use crate::resolved_span::ResolvedSpan;
use crate::source_file::SourceFile;
use crate::span::Span;
use std::path::PathBuf;

/// Owns the source text of every file and resolves spans for display.
#[derive(Default)]
pub struct SourceDb {
    files: Vec<SourceFile>,
}

impl SourceDb {
    /// Creates an empty database.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers in-memory source text under `name`.
    ///
    /// Offsets are `u32`, so text of 4 GiB or more is rejected.
    pub fn add_source(
        &mut self,
        name: impl Into<PathBuf>,
        content: String,
    ) -> Result<FileId, SourceError> {
        let path = name.into();
        let len = offset_len(&path, content.len())?;
        let id = u32::try_from(self.files.len())
            .ok()
            .map(FileId::from_raw)
            .filter(|id| *id != FileId::DUMMY)
            .ok_or(SourceError::TooManyFiles)?;
        self.files.push(SourceFile::new(id, path, content, len));
        Ok(id)
    }

    /// Returns the file for `id`, or `None` for dummy and unknown ids.
    pub fn file(&self, id: FileId) -> Option<&SourceFile> {
        self.files.get(id.as_raw() as usize)
    }

    /// Resolves a span to line/column coordinates.
    ///
    /// Returns `None` for dummy spans and spans of unknown files.
    pub fn resolve_span(&self, span: Span) -> Option<ResolvedSpan> {
        let file = self.file(span.file)?;
        let (start_line, start_col) = file.line_col(span.start);
        let (end_line, end_col) = file.line_col(span.end);
        Some(ResolvedSpan {
            file_path: file.path.clone(),
            start_line,
            start_col,
            end_line,
            end_col,
        })
    }

    /// Returns the text covered by `span`.
    pub fn snippet(&self, span: Span) -> Option<&str> {
        self.file(span.file)?.snippet(span.start, span.end)
    }

    /// Number of registered files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns `true` if no file is registered.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
