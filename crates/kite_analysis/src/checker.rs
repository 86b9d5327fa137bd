//! The checker interface.

use crate::names::TargetNames;
use kite_common::Ident;
use kite_decl::{DeclId, DeclTree, Declaration, TargetName};
use kite_diagnostics::{Diagnostic, DiagnosticSink};

/// A single semantic check run on every declaration of a tree.
///
/// Checkers are stateless and run concurrently on different declarations;
/// everything they learn about the tree comes from the [`CheckContext`].
pub trait DeclarationChecker: Send + Sync {
    /// Short kebab-case name of this checker (e.g. "name-clash").
    fn name(&self) -> &str;

    /// Human-readable description of what this checker looks for.
    fn description(&self) -> &str;

    /// Checks one declaration and reports through `cx`.
    fn check(&self, decl: &Declaration, cx: &CheckContext<'_>);
}

/// What a checker can see and where it reports.
pub struct CheckContext<'a> {
    tree: &'a DeclTree,
    names: &'a TargetNames,
    sink: &'a DiagnosticSink,
}

impl<'a> CheckContext<'a> {
    /// Creates a context over `tree` reporting into `sink`.
    pub fn new(tree: &'a DeclTree, names: &'a TargetNames, sink: &'a DiagnosticSink) -> Self {
        Self { tree, names, sink }
    }

    /// The tree under analysis.
    pub fn tree(&self) -> &'a DeclTree {
        self.tree
    }

    /// The target name of `id`, if it has one.
    pub fn target_name(&self, id: DeclId) -> Option<TargetName> {
        self.names.get(id)
    }

    /// Resolves an interned name of the tree.
    pub fn resolve(&self, ident: Ident) -> &'a str {
        self.tree.interner().resolve(ident)
    }

    /// Reports `diag` unless its name is suppressed on its declaration or an
    /// enclosing one. Returns `true` if the sink kept it.
    pub fn report(&self, diag: Diagnostic) -> bool {
        if self.tree.is_suppressed(diag.declaration(), diag.name()) {
            tracing::trace!(
                diagnostic = diag.name(),
                declaration = %self.tree.qualified_name(diag.declaration()),
                "suppressed"
            );
            return false;
        }
        self.sink.emit(diag)
    }
}
