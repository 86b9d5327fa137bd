//! Spans resolved to 1-indexed line/column positions.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// A span resolved for display. Lines and columns are 1-indexed; the end
/// position is exclusive, like the byte span it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedSpan {
    /// Path of the file.
    pub file_path: PathBuf,
    /// First line.
    pub start_line: u32,
    /// First column.
    pub start_col: u32,
    /// Last line.
    pub end_line: u32,
    /// Column just past the end.
    pub end_col: u32,
}

impl fmt::Display for ResolvedSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.file_path.display(),
            self.start_line,
            self.start_col
        )
    }
}
