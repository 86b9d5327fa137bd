//! Built-in checkers.

mod mangling;
mod name_clash;
mod target_name;

pub use mangling::ImplicitRename;
pub use name_clash::NameClash;
pub use target_name::{is_reserved_word, is_valid_identifier, TargetNameRules};

use crate::Analyzer;

/// Registers every built-in checker with the analyzer.
pub fn register_builtin_checkers(analyzer: &mut Analyzer) {
    analyzer.register(Box::new(NameClash));
    analyzer.register(Box::new(TargetNameRules));
    analyzer.register(Box::new(ImplicitRename));
}

#[cfg(test)]
pub(crate) fn run_checker(
    checker: &dyn crate::DeclarationChecker,
    tree: &kite_decl::DeclTree,
) -> Vec<kite_diagnostics::Diagnostic> {
    let names = crate::TargetNames::compute(tree);
    let sink = kite_diagnostics::DiagnosticSink::new();
    let cx = crate::CheckContext::new(tree, &names, &sink);
    for (_, decl) in tree.iter() {
        checker.check(decl, &cx);
    }
    sink.take_sorted()
}
