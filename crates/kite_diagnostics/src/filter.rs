//! Per-run severity policy applied as diagnostics are emitted.

use crate::diagnostic::Diagnostic;
use crate::severity::Severity;
use std::collections::HashSet;

/// Drops, promotes and thresholds diagnostics by name.
///
/// Allowed names are dropped, denied names are promoted to
/// [`Severity::Error`], and anything below the minimum severity after that is
/// dropped. A name both allowed and denied is allowed.
#[derive(Clone, Debug)]
pub struct DiagnosticFilter {
    min_severity: Severity,
    allowed: HashSet<String>,
    denied: HashSet<String>,
}

impl DiagnosticFilter {
    /// A filter that keeps diagnostics of at least `min_severity`.
    pub fn new(min_severity: Severity) -> Self {
        Self {
            min_severity,
            allowed: HashSet::new(),
            denied: HashSet::new(),
        }
    }

    /// Drops every diagnostic named `name`.
    #[must_use]
    pub fn allow(mut self, name: impl Into<String>) -> Self {
        self.allowed.insert(name.into());
        self
    }

    /// Reports every diagnostic named `name` as an error.
    #[must_use]
    pub fn deny(mut self, name: impl Into<String>) -> Self {
        self.denied.insert(name.into());
        self
    }

    /// The minimum severity kept.
    pub fn min_severity(&self) -> Severity {
        self.min_severity
    }

    /// Applies the policy, returning the diagnostic to keep, if any.
    pub fn apply(&self, diag: Diagnostic) -> Option<Diagnostic> {
        if self.allowed.contains(diag.name()) {
            return None;
        }
        let diag = if self.denied.contains(diag.name()) {
            diag.with_severity(Severity::Error)
        } else {
            diag
        };
        diag.severity().at_least(self.min_severity).then_some(diag)
    }
}

impl Default for DiagnosticFilter {
    /// Keeps everything.
    fn default() -> Self {
        Self::new(Severity::Info)
    }
}
