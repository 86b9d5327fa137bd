//! Thread-safe diagnostic accumulator for parallel checkers.

use crate::diagnostic::Diagnostic;
use crate::filter::DiagnosticFilter;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A thread-safe accumulator for diagnostics emitted during analysis.
///
/// Checkers running on different threads emit concurrently via
/// [`emit`](Self::emit). Every diagnostic passes through the sink's
/// [`DiagnosticFilter`] first. The error count is tracked atomically so
/// `has_errors` does not lock.
pub struct DiagnosticSink {
    diagnostics: Mutex<Vec<Diagnostic>>,
    error_count: AtomicUsize,
    filter: DiagnosticFilter,
}

impl DiagnosticSink {
    /// Creates an empty sink that keeps everything.
    pub fn new() -> Self {
        Self::with_filter(DiagnosticFilter::default())
    }

    /// Creates an empty sink applying `filter` to every emitted diagnostic.
    pub fn with_filter(filter: DiagnosticFilter) -> Self {
        Self {
            diagnostics: Mutex::new(Vec::new()),
            error_count: AtomicUsize::new(0),
            filter,
        }
    }

    /// The filter this sink applies.
    pub fn filter(&self) -> &DiagnosticFilter {
        &self.filter
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Diagnostic>> {
        self.diagnostics.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Emits a diagnostic into the sink.
    ///
    /// Returns `false` if the filter dropped it.
    pub fn emit(&self, diag: Diagnostic) -> bool {
        let Some(diag) = self.filter.apply(diag) else {
            return false;
        };
        if diag.severity().is_error() {
            self.error_count.fetch_add(1, Ordering::Relaxed);
        }
        self.lock().push(diag);
        true
    }

    /// Returns `true` if any error-severity diagnostics have been kept.
    pub fn has_errors(&self) -> bool {
        self.error_count.load(Ordering::Relaxed) > 0
    }

    /// Returns the number of error-severity diagnostics kept so far.
    pub fn error_count(&self) -> usize {
        self.error_count.load(Ordering::Relaxed)
    }

    /// Number of diagnostics currently held.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns `true` if the sink holds no diagnostics.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Takes all accumulated diagnostics in emission order, leaving the sink
    /// empty.
    pub fn take_all(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.lock())
    }

    /// Takes all accumulated diagnostics ordered by declaration, then name,
    /// then arguments, so output does not depend on thread scheduling.
    pub fn take_sorted(&self) -> Vec<Diagnostic> {
        let mut all = self.take_all();
        all.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        all
    }

    /// Returns a snapshot of all accumulated diagnostics without draining.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.lock().clone()
    }
}

impl Default for DiagnosticSink {
    fn default() -> Self {
        Self::new()
    }
}
