//! Errors for malformed declaration input.

/// Errors raised while reading a JSON declaration description.
///
/// These describe a broken input file handed to the tooling, not a problem in
/// the program being compiled, so they are not diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum DeclError {
    /// The JSON could not be parsed into the expected shape.
    #[error("invalid declaration file: {0}")]
    Json(#[from] serde_json::Error),

    /// The source text cannot be registered.
    #[error(transparent)]
    Source(#[from] kite_source::SourceError),

    /// A span points past the end of the file's source text.
    #[error("span {start}..{end} of `{name}` exceeds source length {len}")]
    SpanOutOfRange {
        /// Name of the offending declaration.
        name: String,
        /// Span start.
        start: u32,
        /// Span end.
        end: u32,
        /// Source length in bytes.
        len: usize,
    },

    /// A getter, setter or backing field appears outside a property.
    #[error("{kind} `{name}` must be declared inside a property")]
    AccessorOutsideProperty {
        /// Name of the offending declaration.
        name: String,
        /// Its kind label.
        kind: &'static str,
    },

    /// A `file` declaration appears nested inside another file.
    #[error("`{0}` declares a nested file; files are only allowed at the top level")]
    NestedFile(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_span_out_of_range() {
        let err = DeclError::SpanOutOfRange {
            name: "main".to_string(),
            start: 4,
            end: 90,
            len: 20,
        };
        assert_eq!(err.to_string(), "span 4..90 of `main` exceeds source length 20");
    }

    #[test]
    fn source_errors_convert() {
        let err = DeclError::from(kite_source::SourceError::TooManyFiles);
        assert!(matches!(err, DeclError::Source(_)));
        assert_eq!(err.to_string(), "too many source files");
    }

    #[test]
    fn display_accessor_outside_property() {
        let err = DeclError::AccessorOutsideProperty {
            name: "<get-x>".to_string(),
            kind: "getter",
        };
        assert_eq!(
            err.to_string(),
            "getter `<get-x>` must be declared inside a property"
        );
    }
}
