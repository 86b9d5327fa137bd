//! Byte ranges within a source file.

use crate::file_id::FileId;
use serde::{Deserialize, Serialize};

/// A half-open byte range `[start, end)` in one source file.
///
/// Every declaration carries a span for the whole declaration and optional
/// spans for its name token, modifiers and signature; positioning strategies
/// pick among them.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Span {
    /// The file this span points into.
    pub file: FileId,
    /// Start offset (inclusive).
    pub start: u32,
    /// End offset (exclusive).
    pub end: u32,
}

impl Span {
    /// Span of synthetic declarations.
    pub const DUMMY: Span = Span {
        file: FileId::DUMMY,
        start: 0,
        end: 0,
    };

    /// Creates a span. `start` and `end` are swapped if given in reverse.
    pub fn new(file: FileId, start: u32, end: u32) -> Self {
        if start <= end {
            Self { file, start, end }
        } else {
            Self {
                file,
                start: end,
                end: start,
            }
        }
    }

    /// Returns the smallest span covering both `self` and `other`.
    ///
    /// Spans from different files cannot be covered; `self` is returned unchanged.
    pub fn cover(self, other: Span) -> Span {
        if self.file != other.file {
            return self;
        }
        Span {
            file: self.file,
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}
