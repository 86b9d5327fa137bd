//! Source text storage and byte-range tracking for diagnostics.
//!
//! Declarations carry [`Span`]s; the [`SourceDb`] owns the text they point
//! into and turns spans into [`ResolvedSpan`] line/column positions when a
//! diagnostic is displayed.

#![warn(missing_docs)]

pub mod error;
pub mod file_id;
pub mod resolved_span;
pub mod source_db;
pub mod source_file;
pub mod span;

pub use error::SourceError;
pub use file_id::FileId;
pub use resolved_span::ResolvedSpan;
pub use source_db::SourceDb;
pub use source_file::SourceFile;
pub use span::Span;
