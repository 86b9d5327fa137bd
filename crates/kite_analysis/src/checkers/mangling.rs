//! IMPLICITLY_RENAMED: private declarations renamed with a `_` prefix.

use crate::errors::IMPLICITLY_RENAMED;
use crate::{CheckContext, DeclarationChecker};
use kite_decl::{Declaration, NameOrigin};

/// Notes every declaration whose target name gained a `_` prefix because it
/// is private.
pub struct ImplicitRename;

impl DeclarationChecker for ImplicitRename {
    fn name(&self) -> &str {
        "implicit-rename"
    }

    fn description(&self) -> &str {
        "private declarations are renamed with a leading underscore"
    }

    fn check(&self, decl: &Declaration, cx: &CheckContext<'_>) {
        let Some(target) = cx.target_name(decl.id) else {
            return;
        };
        if target.origin == NameOrigin::PrivatePrefixed {
            cx.report(IMPLICITLY_RENAMED.on(decl, decl.name, cx.resolve(target.name)));
        }
    }
}
