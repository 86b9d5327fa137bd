//! Result type for operations that can only fail because of a compiler bug.

/// The result type for fallible internal operations.
///
/// `Err` means Kite itself is broken (a duplicate diagnostic name, a template
/// that disagrees with its factory, a diagnostic emitted from an unregistered
/// factory). Problems in the program being compiled are never `Err`; they are
/// reported as diagnostics and analysis carries on.
pub type KiteResult<T> = Result<T, InternalError>;

/// An internal compiler error: a defect in Kite, not in user input.
#[derive(Debug, thiserror::Error)]
#[error("internal compiler error: {message}")]
pub struct InternalError {
    /// Description of the defect.
    pub message: String,
}

impl InternalError {
    /// Creates a new internal error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Wraps any displayable error, prefixing it with `context`.
    pub fn with_context(context: &str, err: impl std::fmt::Display) -> Self {
        Self::new(format!("{context}: {err}"))
    }
}

impl From<String> for InternalError {
    fn from(message: String) -> Self {
        Self { message }
    }
}
