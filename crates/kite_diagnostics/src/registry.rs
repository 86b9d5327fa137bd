//! The diagnostic registry: every known factory, its template and its
//! catalog, checked once at startup.

use crate::catalog::DiagnosticCatalog;
use crate::diagnostic::{Diagnostic, RenderedDiagnostic};
use crate::factory::FactoryDescriptor;
use crate::params::{DiagnosticArg, ParamKind};
use crate::positioning::PositioningStrategy;
use crate::severity::Severity;
use crate::template::{MessageTemplate, TemplateError};
use kite_decl::{DeclId, DeclTree};
use once_cell::sync::OnceCell;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// A registry that could not be built, or a diagnostic it cannot render.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// Two factories share a name.
    #[error("diagnostic `{name}` is declared in both `{first}` and `{second}`")]
    DuplicateDiagnosticName {
        /// The shared name.
        name: &'static str,
        /// Catalog of the first declaration.
        first: &'static str,
        /// Catalog of the second declaration.
        second: &'static str,
    },
    /// A template's placeholders are not exactly `{0}..{arity-1}`.
    #[error(
        "template for `{name}` uses placeholders [{}] but the diagnostic takes {expected} parameter(s)",
        join_indices(.placeholders)
    )]
    TemplateArityMismatch {
        /// Diagnostic name.
        name: &'static str,
        /// Number of declared parameters.
        expected: usize,
        /// Distinct placeholder indices the template uses.
        placeholders: Vec<usize>,
    },
    /// A factory has no template in its catalog.
    #[error("diagnostic `{name}` has no message in catalog `{catalog}`")]
    MissingTemplate {
        /// Diagnostic name.
        name: &'static str,
        /// The catalog searched.
        catalog: &'static str,
    },
    /// A catalog has a template for a name it does not declare.
    #[error("catalog `{catalog}` has a message for undeclared diagnostic `{name}`")]
    OrphanTemplate {
        /// The template's key.
        name: &'static str,
        /// The catalog.
        catalog: &'static str,
    },
    /// A catalog lists two templates for one name.
    #[error("catalog `{catalog}` has more than one message for `{name}`")]
    DuplicateTemplate {
        /// The repeated key.
        name: &'static str,
        /// The catalog.
        catalog: &'static str,
    },
    /// A template does not parse.
    #[error("malformed message for `{name}`: {source}")]
    MalformedTemplate {
        /// Diagnostic name.
        name: &'static str,
        /// The parse error.
        source: TemplateError,
    },
    /// A diagnostic was made by a factory this registry does not hold.
    #[error("diagnostic `{0}` is not registered")]
    UnknownDiagnostic(String),
    /// A diagnostic points at a declaration outside the tree it is rendered
    /// against.
    #[error("diagnostic `{name}` refers to {declaration:?}, which is not in the tree")]
    ForeignDeclaration {
        /// Diagnostic name.
        name: &'static str,
        /// The missing declaration.
        declaration: DeclId,
    },
}

fn join_indices(indices: &[usize]) -> String {
    indices
        .iter()
        .map(|i| format!("{{{i}}}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// One factory as registered.
#[derive(Debug)]
pub struct RegisteredFactory {
    descriptor: &'static FactoryDescriptor,
    template: MessageTemplate,
    catalog: &'static str,
}

impl RegisteredFactory {
    /// The factory's descriptor.
    pub fn descriptor(&self) -> &'static FactoryDescriptor {
        self.descriptor
    }

    /// Diagnostic name.
    pub fn name(&self) -> &'static str {
        self.descriptor.name()
    }

    /// Default severity.
    pub fn severity(&self) -> Severity {
        self.descriptor.severity()
    }

    /// Positioning strategy.
    pub fn positioning(&self) -> &'static PositioningStrategy {
        self.descriptor.positioning()
    }

    /// The parsed message template.
    pub fn template(&self) -> &MessageTemplate {
        &self.template
    }

    /// Name of the catalog that declared this factory.
    pub fn catalog(&self) -> &'static str {
        self.catalog
    }

    /// A serializable summary for listings.
    pub fn entry(&self) -> CatalogEntry {
        CatalogEntry {
            name: self.name(),
            severity: self.severity(),
            positioning: self.positioning().name(),
            parameters: self.descriptor.params().to_vec(),
            template: self.template.as_str().to_string(),
            catalog: self.catalog,
        }
    }
}

/// A registered diagnostic as shown by `kite catalog`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    /// Diagnostic name.
    pub name: &'static str,
    /// Default severity.
    pub severity: Severity,
    /// Positioning strategy name.
    pub positioning: &'static str,
    /// Parameter kinds in positional order.
    pub parameters: Vec<ParamKind>,
    /// The message template as written.
    pub template: String,
    /// Declaring catalog.
    pub catalog: &'static str,
}

/// Collects catalogs and validates them into a [`DiagnosticRegistry`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    catalogs: Vec<&'static DiagnosticCatalog>,
}

impl RegistryBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a catalog. Factories register in catalog order, then in the
    /// order each catalog lists them.
    pub fn catalog(mut self, catalog: &'static DiagnosticCatalog) -> Self {
        self.catalogs.push(catalog);
        self
    }

    /// Validates every catalog and builds the registry.
    ///
    /// Fails on the first problem found: a duplicate name, a missing,
    /// duplicate, orphan or malformed template, or a template whose
    /// placeholders disagree with its factory's parameters.
    pub fn build(self) -> Result<DiagnosticRegistry, RegistryError> {
        let mut registry = DiagnosticRegistry {
            entries: Vec::new(),
            index: HashMap::new(),
        };

        for catalog in self.catalogs {
            let mut seen = HashSet::new();
            for &(name, _) in catalog.messages {
                if !seen.insert(name) {
                    return Err(RegistryError::DuplicateTemplate {
                        name,
                        catalog: catalog.name,
                    });
                }
            }

            let mut used = HashSet::new();
            for &kind in catalog.factories {
                let descriptor: &'static FactoryDescriptor = kind.descriptor();
                let name = descriptor.name();
                if let Some(&existing) = registry.index.get(name) {
                    let first: &RegisteredFactory = &registry.entries[existing];
                    return Err(RegistryError::DuplicateDiagnosticName {
                        name,
                        first: first.catalog,
                        second: catalog.name,
                    });
                }

                let text = catalog.message(name).ok_or(RegistryError::MissingTemplate {
                    name,
                    catalog: catalog.name,
                })?;
                let template = MessageTemplate::parse(text)
                    .map_err(|source| RegistryError::MalformedTemplate { name, source })?;
                if !template.accepts_arity(descriptor.arity()) {
                    return Err(RegistryError::TemplateArityMismatch {
                        name,
                        expected: descriptor.arity(),
                        placeholders: template.placeholders().into_iter().collect(),
                    });
                }

                used.insert(name);
                registry.index.insert(name, registry.entries.len());
                registry.entries.push(RegisteredFactory {
                    descriptor,
                    template,
                    catalog: catalog.name,
                });
            }

            if let Some(&(orphan, _)) = catalog.messages.iter().find(|(n, _)| !used.contains(n)) {
                return Err(RegistryError::OrphanTemplate {
                    name: orphan,
                    catalog: catalog.name,
                });
            }

            tracing::debug!(
                catalog = catalog.name,
                factories = catalog.factories.len(),
                "registered diagnostic catalog"
            );
        }

        tracing::info!(diagnostics = registry.len(), "diagnostic registry built");
        Ok(registry)
    }
}

/// Every registered factory, looked up by name.
///
/// Built once by [`RegistryBuilder::build`] and read-only afterwards.
#[derive(Debug)]
pub struct DiagnosticRegistry {
    entries: Vec<RegisteredFactory>,
    index: HashMap<&'static str, usize>,
}

impl DiagnosticRegistry {
    /// Starts building a registry.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Looks up a factory by name.
    pub fn get(&self, name: &str) -> Option<&RegisteredFactory> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    /// Returns `true` if a factory named `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All factories in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &RegisteredFactory> {
        self.entries.iter()
    }

    /// Serializable summaries of all factories in registration order.
    pub fn entries(&self) -> Vec<CatalogEntry> {
        self.entries.iter().map(RegisteredFactory::entry).collect()
    }

    /// Number of registered factories.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders the message of `diag` without locating it.
    pub fn message(&self, diag: &Diagnostic, tree: &DeclTree) -> Result<String, RegistryError> {
        let entry = self.lookup(diag)?;
        let args: Vec<String> = diag.args().iter().map(|a| a.render(tree)).collect();
        Ok(entry.template.render(&args))
    }

    /// Renders `diag`: fills in its message and locates its span in `tree`.
    pub fn render(
        &self,
        diag: &Diagnostic,
        tree: &DeclTree,
    ) -> Result<RenderedDiagnostic, RegistryError> {
        let message = self.message(diag, tree)?;
        let span = diag.span(tree).ok_or(RegistryError::ForeignDeclaration {
            name: diag.name(),
            declaration: diag.declaration(),
        })?;
        Ok(RenderedDiagnostic {
            name: diag.name(),
            severity: diag.severity(),
            message,
            declaration: tree.qualified_name(diag.declaration()),
            span,
        })
    }

    fn lookup(&self, diag: &Diagnostic) -> Result<&RegisteredFactory, RegistryError> {
        self.get(diag.name())
            .filter(|entry| std::ptr::eq(entry.descriptor, diag.factory()))
            .ok_or_else(|| RegistryError::UnknownDiagnostic(diag.name().to_string()))
    }

    /// Creates a diagnostic by name from untyped arguments, for tools that
    /// only know diagnostics by name.
    pub fn instantiate(
        &self,
        name: &str,
        decl: &kite_decl::Declaration,
        args: Vec<DiagnosticArg>,
    ) -> Result<Diagnostic, InstantiateError> {
        let entry = self
            .get(name)
            .ok_or_else(|| RegistryError::UnknownDiagnostic(name.to_string()))?;
        Ok(entry.descriptor.instantiate(decl, args)?)
    }
}

/// Failure of [`DiagnosticRegistry::instantiate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InstantiateError {
    /// No factory has the requested name.
    #[error(transparent)]
    Registry(#[from] RegistryError),
    /// The arguments do not fit the factory.
    #[error(transparent)]
    Parameters(#[from] crate::factory::ParameterMismatch),
}

/// A process-wide registry built on first use.
///
/// ```ignore
/// fn catalogs() -> RegistryBuilder {
///     RegistryBuilder::new().catalog(&ANALYSIS)
/// }
///
/// static REGISTRY: GlobalRegistry = GlobalRegistry::new(catalogs);
/// ```
///
/// A failed build is reported to the caller and retried on the next call;
/// catalogs are static, so it fails the same way every time.
pub struct GlobalRegistry {
    cell: OnceCell<DiagnosticRegistry>,
    init: fn() -> RegistryBuilder,
}

impl GlobalRegistry {
    /// Creates an unbuilt registry that will be populated by `init`.
    pub const fn new(init: fn() -> RegistryBuilder) -> Self {
        Self {
            cell: OnceCell::new(),
            init,
        }
    }

    /// Returns the registry, building it on the first call.
    pub fn get(&self) -> Result<&DiagnosticRegistry, RegistryError> {
        self.cell.get_or_try_init(|| (self.init)().build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic_factories;
    use crate::positioning;
    use kite_decl::DeclKind;
    use kite_source::{FileId, Span};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Barrier;
    use std::thread;

    diagnostic_factories! {
        static NAME_CLASH: (String) = Error at positioning::DECLARATION_NAME;
        static SHADOWED: (DeclId) = Warning at positioning::DEFAULT;
        static RENAMED: (String, String) = Info at positioning::DECLARATION_NAME;
        static UNREGISTERED: (String) = Error at positioning::DEFAULT;
    }

    static GOOD: DiagnosticCatalog = DiagnosticCatalog {
        name: "good",
        factories: &[&NAME_CLASH, &SHADOWED, &RENAMED],
        messages: &[
            ("NAME_CLASH", "{0} clashes with an existing declaration"),
            ("SHADOWED", "shadows {0}"),
            ("RENAMED", "renamed {0} to {1}"),
        ],
    };

    static AGAIN: DiagnosticCatalog = DiagnosticCatalog {
        name: "again",
        factories: &[&NAME_CLASH],
        messages: &[("NAME_CLASH", "{0}")],
    };

    static MISSING: DiagnosticCatalog = DiagnosticCatalog {
        name: "missing",
        factories: &[&NAME_CLASH],
        messages: &[],
    };

    static ORPHAN: DiagnosticCatalog = DiagnosticCatalog {
        name: "orphan",
        factories: &[&SHADOWED],
        messages: &[("SHADOWED", "shadows {0}"), ("GHOST", "boo")],
    };

    static ARITY: DiagnosticCatalog = DiagnosticCatalog {
        name: "arity",
        factories: &[&RENAMED],
        messages: &[("RENAMED", "renamed {0}")],
    };

    static MALFORMED: DiagnosticCatalog = DiagnosticCatalog {
        name: "malformed",
        factories: &[&SHADOWED],
        messages: &[("SHADOWED", "shadows {0")],
    };

    static TWICE: DiagnosticCatalog = DiagnosticCatalog {
        name: "twice",
        factories: &[&SHADOWED],
        messages: &[("SHADOWED", "a {0}"), ("SHADOWED", "b {0}")],
    };

    fn good_catalogs() -> RegistryBuilder {
        RegistryBuilder::new().catalog(&GOOD)
    }

    static GLOBAL: GlobalRegistry = GlobalRegistry::new(good_catalogs);

    fn tree() -> (DeclTree, DeclId, DeclId) {
        let mut tree = DeclTree::new();
        let file = tree.add_file("app", Span::new(FileId::from_raw(0), 0, 40));
        let foo = tree
            .add(file, DeclKind::Function, "foo", Span::new(FileId::from_raw(0), 0, 12))
            .name_span(Span::new(FileId::from_raw(0), 4, 7))
            .id();
        let bar = tree
            .add(file, DeclKind::Function, "bar", Span::new(FileId::from_raw(0), 13, 25))
            .id();
        (tree, foo, bar)
    }

    #[test]
    fn build_registers_in_order() {
        let registry = RegistryBuilder::new().catalog(&GOOD).build().unwrap();
        let names: Vec<_> = registry.iter().map(RegisteredFactory::name).collect();
        assert_eq!(names, vec!["NAME_CLASH", "SHADOWED", "RENAMED"]);
        assert_eq!(registry.len(), 3);
        assert!(registry.contains("SHADOWED"));
        assert!(!registry.contains("UNREGISTERED"));
    }

    #[test]
    fn lookup_by_name() {
        let registry = DiagnosticRegistry::builder().catalog(&GOOD).build().unwrap();
        let entry = registry.get("NAME_CLASH").unwrap();
        assert_eq!(entry.severity(), Severity::Error);
        assert_eq!(entry.positioning().name(), "DECLARATION_NAME");
        assert_eq!(entry.catalog(), "good");
        assert_eq!(entry.template().as_str(), "{0} clashes with an existing declaration");
        assert!(std::ptr::eq(entry.descriptor(), NAME_CLASH.descriptor()));
        assert!(registry.get("NOPE").is_none());
    }

    #[test]
    fn render_name_clash() {
        let registry = RegistryBuilder::new().catalog(&GOOD).build().unwrap();
        let (tree, foo, _) = tree();
        let rendered = registry.render(&NAME_CLASH.on(&tree[foo], "foo"), &tree).unwrap();
        assert_eq!(rendered.name, "NAME_CLASH");
        assert_eq!(rendered.severity, Severity::Error);
        assert_eq!(rendered.message, "foo clashes with an existing declaration");
        assert_eq!(rendered.declaration, "app.foo");
        assert_eq!(rendered.span, Span::new(FileId::from_raw(0), 4, 7));
    }

    #[test]
    fn render_declaration_argument() {
        let registry = RegistryBuilder::new().catalog(&GOOD).build().unwrap();
        let (tree, foo, bar) = tree();
        let rendered = registry.render(&SHADOWED.on(&tree[foo], bar), &tree).unwrap();
        assert_eq!(rendered.message, "shadows app.bar");
        assert_eq!(rendered.span, tree[foo].span);
    }

    #[test]
    fn render_keeps_overridden_severity() {
        let registry = RegistryBuilder::new().catalog(&GOOD).build().unwrap();
        let (tree, foo, _) = tree();
        let diag = RENAMED.on(&tree[foo], "foo", "_foo").with_severity(Severity::Warning);
        let rendered = registry.render(&diag, &tree).unwrap();
        assert_eq!(rendered.severity, Severity::Warning);
        assert_eq!(rendered.message, "renamed foo to _foo");
    }

    #[test]
    fn render_unregistered_factory() {
        let registry = RegistryBuilder::new().catalog(&GOOD).build().unwrap();
        let (tree, foo, _) = tree();
        let err = registry.render(&UNREGISTERED.on(&tree[foo], "x"), &tree).unwrap_err();
        assert_eq!(err, RegistryError::UnknownDiagnostic("UNREGISTERED".into()));
    }

    #[test]
    fn render_against_foreign_tree() {
        let registry = RegistryBuilder::new().catalog(&GOOD).build().unwrap();
        let (tree, foo, _) = tree();
        let diag = NAME_CLASH.on(&tree[foo], "foo");
        let err = registry.render(&diag, &DeclTree::new()).unwrap_err();
        assert!(matches!(err, RegistryError::ForeignDeclaration { name: "NAME_CLASH", .. }));
    }

    #[test]
    fn duplicate_name_across_catalogs() {
        let err = RegistryBuilder::new()
            .catalog(&GOOD)
            .catalog(&AGAIN)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateDiagnosticName {
                name: "NAME_CLASH",
                first: "good",
                second: "again",
            }
        );
    }

    #[test]
    fn missing_template() {
        let err = RegistryBuilder::new().catalog(&MISSING).build().unwrap_err();
        assert_eq!(
            err,
            RegistryError::MissingTemplate {
                name: "NAME_CLASH",
                catalog: "missing",
            }
        );
    }

    #[test]
    fn orphan_template() {
        let err = RegistryBuilder::new().catalog(&ORPHAN).build().unwrap_err();
        assert_eq!(
            err,
            RegistryError::OrphanTemplate {
                name: "GHOST",
                catalog: "orphan",
            }
        );
    }

    #[test]
    fn arity_mismatch() {
        let err = RegistryBuilder::new().catalog(&ARITY).build().unwrap_err();
        assert_eq!(
            err,
            RegistryError::TemplateArityMismatch {
                name: "RENAMED",
                expected: 2,
                placeholders: vec![0],
            }
        );
        assert_eq!(
            err.to_string(),
            "template for `RENAMED` uses placeholders [{0}] but the diagnostic takes 2 parameter(s)"
        );
    }

    #[test]
    fn malformed_template() {
        let err = RegistryBuilder::new().catalog(&MALFORMED).build().unwrap_err();
        assert_eq!(
            err,
            RegistryError::MalformedTemplate {
                name: "SHADOWED",
                source: TemplateError::Unclosed(8),
            }
        );
    }

    #[test]
    fn duplicate_template() {
        let err = RegistryBuilder::new().catalog(&TWICE).build().unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateTemplate { name: "SHADOWED", .. }));
    }

    #[test]
    fn entries_serialize() {
        let registry = RegistryBuilder::new().catalog(&GOOD).build().unwrap();
        let entries = registry.entries();
        assert_eq!(entries.len(), 3);
        let json = serde_json::to_value(&entries[0]).unwrap();
        assert_eq!(json["name"], "NAME_CLASH");
        assert_eq!(json["severity"], "error");
        assert_eq!(json["positioning"], "DECLARATION_NAME");
        assert_eq!(json["parameters"], serde_json::json!(["text"]));
        assert_eq!(json["catalog"], "good");
    }

    #[test]
    fn instantiate_by_name() {
        let registry = RegistryBuilder::new().catalog(&GOOD).build().unwrap();
        let (tree, foo, _) = tree();
        let diag = registry
            .instantiate("NAME_CLASH", &tree[foo], vec![DiagnosticArg::Text("foo".into())])
            .unwrap();
        assert_eq!(diag, NAME_CLASH.on(&tree[foo], "foo"));

        let err = registry.instantiate("NOPE", &tree[foo], Vec::new()).unwrap_err();
        assert!(matches!(err, InstantiateError::Registry(RegistryError::UnknownDiagnostic(_))));
        let err = registry.instantiate("NAME_CLASH", &tree[foo], Vec::new()).unwrap_err();
        assert!(matches!(err, InstantiateError::Parameters(_)));
    }

    #[test]
    fn global_registry_is_built_once() {
        let first = GLOBAL.get().unwrap();
        let second = GLOBAL.get().unwrap();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.len(), 3);
    }

    static BUILDS: AtomicUsize = AtomicUsize::new(0);

    fn counted_catalogs() -> RegistryBuilder {
        BUILDS.fetch_add(1, Ordering::SeqCst);
        good_catalogs()
    }

    #[test]
    fn concurrent_first_use_builds_once() {
        let registry = GlobalRegistry::new(counted_catalogs);
        let barrier = Barrier::new(8);
        let built: Vec<&DiagnosticRegistry> = thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    s.spawn(|| {
                        barrier.wait();
                        registry.get().unwrap()
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert_eq!(BUILDS.load(Ordering::SeqCst), 1);
        assert!(built.iter().all(|r| std::ptr::eq(*r, built[0])));
    }
}
