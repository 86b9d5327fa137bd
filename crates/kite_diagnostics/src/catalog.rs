//! Catalogs: a subsystem's factories together with their messages.

use crate::factory::DiagnosticKind;
use std::fmt;

/// The factories a subsystem declares and the message template of each.
///
/// Catalogs are `static` items listed explicitly when the registry is built,
/// so the set of diagnostics a build knows about is visible in one place.
///
/// ```ignore
/// pub static ANALYSIS: DiagnosticCatalog = DiagnosticCatalog {
///     name: "analysis",
///     factories: &[&NAME_CLASH],
///     messages: &[("NAME_CLASH", "{0} clashes with an existing declaration")],
/// };
/// ```
pub struct DiagnosticCatalog {
    /// Catalog name, used in registry errors and listings.
    pub name: &'static str,
    /// Factories in registration order.
    pub factories: &'static [&'static dyn DiagnosticKind],
    /// `(diagnostic name, template)` pairs.
    pub messages: &'static [(&'static str, &'static str)],
}

impl DiagnosticCatalog {
    /// Looks up the template for `name` in this catalog.
    pub fn message(&self, name: &str) -> Option<&'static str> {
        self.messages
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, template)| *template)
    }
}

impl fmt::Debug for DiagnosticCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticCatalog")
            .field("name", &self.name)
            .field(
                "factories",
                &self
                    .factories
                    .iter()
                    .map(|k| k.descriptor().name())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}
