//! A single source file with a line index for position lookups.

use crate::file_id::FileId;
use crate::span::Span;
use std::path::PathBuf;

/// Source text plus the byte offset of every line start.
pub struct SourceFile {
    /// Identifier within the owning [`SourceDb`](crate::SourceDb).
    pub id: FileId,
    /// Path shown in diagnostics.
    pub path: PathBuf,
    /// Full file text.
    pub content: String,
    len: u32,
    line_starts: Vec<u32>,
}

impl SourceFile {
    /// Creates a source file and indexes its lines. `len` is `content.len()`,
    /// already checked to fit `u32`.
    pub(crate) fn new(id: FileId, path: PathBuf, content: String, len: u32) -> Self {
        let line_starts = std::iter::once(0)
            .chain(
                content
                    .bytes()
                    .enumerate()
                    .filter(|&(_, b)| b == b'\n')
                    .map(|(i, _)| (i + 1) as u32),
            )
            .collect();
        Self {
            id,
            path,
            content,
            len,
            line_starts,
        }
    }

    /// Returns the 0-based line index containing `offset`.
    fn line_index(&self, offset: u32) -> usize {
        match self.line_starts.binary_search(&offset) {
            Ok(idx) => idx,
            Err(idx) => idx - 1,
        }
    }

    /// Converts a byte offset into 1-indexed `(line, column)`. Columns count
    /// characters, not bytes.
    pub fn line_col(&self, offset: u32) -> (u32, u32) {
        let offset = offset.min(self.len) as usize;
        let idx = self.line_index(offset as u32);
        let start = self.line_starts[idx] as usize;
        let col = self.content[start..]
            .char_indices()
            .take_while(|&(i, c)| start + i + c.len_utf8() <= offset)
            .count();
        (idx as u32 + 1, col as u32 + 1)
    }

    /// Returns the text of the line containing `offset`, without its newline.
    pub fn line_text(&self, offset: u32) -> &str {
        let offset = offset.min(self.len);
        let idx = self.line_index(offset);
        let start = self.line_starts[idx] as usize;
        let end = self
            .line_starts
            .get(idx + 1)
            .map_or(self.content.len(), |&next| next as usize);
        self.content[start..end].trim_end_matches(['\n', '\r'])
    }

    /// Returns the text between two offsets, or `None` if out of range or not
    /// on a character boundary.
    pub fn snippet(&self, start: u32, end: u32) -> Option<&str> {
        self.content.get(start as usize..end as usize)
    }

    /// The span of the whole text.
    pub fn span(&self) -> Span {
        Span::new(self.id, 0, self.len)
    }
}
