//! Diagnostics reported by semantic analysis.

use kite_common::Ident;
use kite_decl::{DeclId, Declaration};
use kite_diagnostics::{diagnostic_factories, positioning, DiagnosticCatalog, PositioningStrategy};
use kite_source::Span;

/// The target-name annotation, falling back to the name token, then the
/// whole declaration.
pub static TARGET_NAME_ANNOTATION: PositioningStrategy =
    PositioningStrategy::new("TARGET_NAME_ANNOTATION", target_name_annotation);

fn target_name_annotation(decl: &Declaration) -> Span {
    decl.target_name
        .map(|annotation| annotation.span)
        .or(decl.name_span)
        .unwrap_or(decl.span)
}

diagnostic_factories! {
    /// Two declarations of one scope translate to the same target name.
    pub static NAME_CLASH: (String) = Error at positioning::DECLARATION_NAME;
    /// A target name is a reserved word of the target language.
    pub static TARGET_NAME_IS_RESERVED: (String) = Error at TARGET_NAME_ANNOTATION;
    /// A target name is not a valid target-language identifier.
    pub static INVALID_TARGET_NAME: (String) = Error at TARGET_NAME_ANNOTATION;
    /// A target-name annotation repeats the name the declaration has anyway.
    pub static REDUNDANT_TARGET_NAME: (DeclId) = Warning at TARGET_NAME_ANNOTATION;
    /// A private declaration gets a `_`-prefixed target name.
    pub static IMPLICITLY_RENAMED: (Ident, String) = Info at positioning::DECLARATION_NAME;
}

/// Every diagnostic of semantic analysis with its default message.
pub static ANALYSIS: DiagnosticCatalog = DiagnosticCatalog {
    name: "analysis",
    factories: &[
        &NAME_CLASH,
        &TARGET_NAME_IS_RESERVED,
        &INVALID_TARGET_NAME,
        &REDUNDANT_TARGET_NAME,
        &IMPLICITLY_RENAMED,
    ],
    messages: &[
        ("NAME_CLASH", "{0} clashes with an existing declaration"),
        (
            "TARGET_NAME_IS_RESERVED",
            "'{0}' is a reserved word in the target language",
        ),
        (
            "INVALID_TARGET_NAME",
            "'{0}' is not a valid target-language identifier",
        ),
        (
            "REDUNDANT_TARGET_NAME",
            "target name of {0} is the same as its source name",
        ),
        (
            "IMPLICITLY_RENAMED",
            "private declaration {0} is named '{1}' in the target language",
        ),
    ],
};
