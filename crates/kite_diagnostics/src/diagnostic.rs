//! Diagnostic values and their rendered form.

use crate::factory::FactoryDescriptor;
use crate::params::DiagnosticArg;
use crate::severity::Severity;
use kite_decl::{DeclId, DeclTree};
use kite_source::Span;
use serde::Serialize;

/// One reported problem: which factory made it, on which declaration, with
/// which arguments.
///
/// Diagnostics are plain values. Their message and span are computed only
/// when rendered against the registry and the declaration tree.
#[derive(Clone, Debug)]
pub struct Diagnostic {
    factory: &'static FactoryDescriptor,
    declaration: DeclId,
    args: Vec<DiagnosticArg>,
    severity: Severity,
}

impl Diagnostic {
    pub(crate) fn new(
        factory: &'static FactoryDescriptor,
        declaration: DeclId,
        args: Vec<DiagnosticArg>,
    ) -> Self {
        Self {
            factory,
            declaration,
            args,
            severity: factory.severity(),
        }
    }

    /// The factory that made this diagnostic.
    pub fn factory(&self) -> &'static FactoryDescriptor {
        self.factory
    }

    /// The diagnostic name, e.g. `NAME_CLASH`.
    pub fn name(&self) -> &'static str {
        self.factory.name()
    }

    /// The declaration the diagnostic is reported on.
    pub fn declaration(&self) -> DeclId {
        self.declaration
    }

    /// Arguments in positional order.
    pub fn args(&self) -> &[DiagnosticArg] {
        &self.args
    }

    /// Effective severity: the factory default unless overridden.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns this diagnostic with a different effective severity.
    #[must_use]
    pub fn with_severity(self, severity: Severity) -> Self {
        Self { severity, ..self }
    }

    /// The span to highlight, or `None` if the declaration is not in `tree`.
    pub fn span(&self, tree: &DeclTree) -> Option<Span> {
        tree.get(self.declaration).map(|d| self.factory.locate(d))
    }

    /// Ordering key used to report diagnostics deterministically.
    pub(crate) fn sort_key(&self) -> (DeclId, &'static str, &[DiagnosticArg], Severity) {
        (self.declaration, self.name(), &self.args, self.severity)
    }
}

impl PartialEq for Diagnostic {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.factory, other.factory)
            && self.declaration == other.declaration
            && self.args == other.args
            && self.severity == other.severity
    }
}

impl Eq for Diagnostic {}

/// A diagnostic rendered for output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RenderedDiagnostic {
    /// Diagnostic name.
    pub name: &'static str,
    /// Effective severity.
    pub severity: Severity,
    /// The filled-in message.
    pub message: String,
    /// Qualified name of the declaration it is reported on.
    pub declaration: String,
    /// The highlighted span.
    pub span: Span,
}
