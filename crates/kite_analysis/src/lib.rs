//! Semantic checks on the declaration tree that report through the
//! diagnostic registry.
//!
//! The checkers decide *when* a diagnostic applies: target-name clashes
//! between declarations of one scope, invalid or reserved target names, and
//! implicit renames. [`diagnostic_registry`] is the single place where every
//! catalog of the compiler is listed.

#![warn(missing_docs)]

mod analyzer;
mod checker;
mod checkers;
pub mod errors;
mod names;

pub use analyzer::Analyzer;
pub use checker::{CheckContext, DeclarationChecker};
pub use checkers::{
    is_reserved_word, is_valid_identifier, register_builtin_checkers, ImplicitRename, NameClash,
    TargetNameRules,
};
pub use names::TargetNames;

use kite_common::{InternalError, KiteResult};
use kite_diagnostics::{DiagnosticRegistry, GlobalRegistry, RegistryBuilder};

static REGISTRY: GlobalRegistry = GlobalRegistry::new(register_catalogs);

/// Lists every diagnostic catalog of the compiler.
///
/// New analysis passes add their catalog here.
pub fn register_catalogs() -> RegistryBuilder {
    RegistryBuilder::new().catalog(&errors::ANALYSIS)
}

/// The process-wide diagnostic registry, built on first use.
///
/// An `Err` means the catalogs themselves are inconsistent, which is a bug in
/// the compiler rather than in the program being compiled.
pub fn diagnostic_registry() -> KiteResult<&'static DiagnosticRegistry> {
    REGISTRY
        .get()
        .map_err(|e| InternalError::with_context("failed to build diagnostic registry", e))
}
