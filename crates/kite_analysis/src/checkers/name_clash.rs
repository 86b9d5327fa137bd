//! NAME_CLASH: two declarations of one scope share a target name.

use crate::errors::NAME_CLASH;
use crate::{CheckContext, DeclarationChecker};
use kite_decl::{DeclKind, Declaration};

/// Reports a declaration once for every member of its scope that translates
/// to the same target name.
///
/// The scope is the nearest enclosing file, class, interface, object or enum;
/// its members are that container's direct children. Value parameters never
/// clash, constructors do not clash with functions, properties or fields,
/// and accessors do not clash with their own property.
pub struct NameClash;

impl DeclarationChecker for NameClash {
    fn name(&self) -> &str {
        "name-clash"
    }

    fn description(&self) -> &str {
        "declarations of one scope must have distinct target names"
    }

    fn check(&self, decl: &Declaration, cx: &CheckContext<'_>) {
        if decl.kind == DeclKind::ValueParameter {
            return;
        }
        let Some(target) = cx.target_name(decl.id) else {
            return;
        };
        let Some(scope) = cx.tree().scope_of(decl.id) else {
            return;
        };

        for &member in &scope.children {
            if member == decl.id || cx.target_name(member).map(|t| t.name) != Some(target.name) {
                continue;
            }
            let clash = &cx.tree()[member];
            if clash.kind == DeclKind::ValueParameter || is_exempt(decl, clash) {
                continue;
            }
            cx.report(NAME_CLASH.on(decl, cx.resolve(target.name)));
        }
    }
}

fn is_exempt(decl: &Declaration, clash: &Declaration) -> bool {
    match decl.kind {
        DeclKind::Constructor => {
            clash.kind.is_function() || matches!(clash.kind, DeclKind::Property | DeclKind::Field)
        }
        DeclKind::Getter | DeclKind::Setter => {
            clash.kind == DeclKind::Property && decl.property == Some(clash.id)
        }
        _ => false,
    }
}
