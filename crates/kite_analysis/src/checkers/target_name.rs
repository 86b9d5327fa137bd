//! Validity of target names: INVALID_TARGET_NAME, TARGET_NAME_IS_RESERVED and
//! REDUNDANT_TARGET_NAME.

use crate::errors::{INVALID_TARGET_NAME, REDUNDANT_TARGET_NAME, TARGET_NAME_IS_RESERVED};
use crate::{CheckContext, DeclarationChecker};
use kite_decl::{Declaration, NameOrigin, Visibility};

/// Reserved words of the target language, sorted.
const RESERVED_WORDS: &[&str] = &[
    "assert", "break", "case", "catch", "class", "const", "continue", "default", "do", "else",
    "enum", "extends", "false", "final", "finally", "for", "if", "in", "is", "new", "null",
    "rethrow", "return", "super", "switch", "this", "throw", "true", "try", "var", "void",
    "while", "with",
];

/// Returns `true` if `name` is a reserved word of the target language.
pub fn is_reserved_word(name: &str) -> bool {
    RESERVED_WORDS.binary_search(&name).is_ok()
}

/// Returns `true` if `name` is a valid target-language identifier:
/// a letter, `_` or `$`, followed by letters, digits, `_` or `$`.
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    let word = |c: char| c.is_ascii_alphanumeric() || c == '_' || c == '$';
    (first.is_ascii_alphabetic() || first == '_' || first == '$') && chars.all(word)
}

/// Checks that every declaration's own target name is usable in the target
/// language, and that annotations change something.
///
/// Names inherited from a property or class and generated backing-field
/// names are checked on their owner.
pub struct TargetNameRules;

impl DeclarationChecker for TargetNameRules {
    fn name(&self) -> &str {
        "target-name"
    }

    fn description(&self) -> &str {
        "target names must be valid, non-reserved identifiers"
    }

    fn check(&self, decl: &Declaration, cx: &CheckContext<'_>) {
        let Some(target) = cx.target_name(decl.id) else {
            return;
        };
        if matches!(target.origin, NameOrigin::Inherited | NameOrigin::BackingField) {
            return;
        }

        let name = cx.resolve(target.name);
        if !is_valid_identifier(name) {
            cx.report(INVALID_TARGET_NAME.on(decl, name));
        } else if is_reserved_word(name) {
            cx.report(TARGET_NAME_IS_RESERVED.on(decl, name));
        }

        if let Some(annotation) = decl.target_name {
            if annotation.value == decl.name && decl.visibility != Visibility::Private {
                cx.report(REDUNDANT_TARGET_NAME.on(decl, decl.id));
            }
        }
    }
}
