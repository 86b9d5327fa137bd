//! Diagnostic factories: one static item per kind of diagnostic.

use crate::diagnostic::Diagnostic;
use crate::params::{join_kinds, DiagnosticArg, DiagnosticParam, DiagnosticParams, ParamKind};
use crate::positioning::PositioningStrategy;
use crate::severity::Severity;
use kite_decl::Declaration;
use kite_source::Span;
use std::fmt;
use std::marker::PhantomData;

/// The type-erased identity of a factory: name, default severity,
/// positioning strategy and parameter kinds.
///
/// Every [`Diagnostic`] points at the descriptor of the factory that made it.
pub struct FactoryDescriptor {
    name: &'static str,
    severity: Severity,
    positioning: &'static PositioningStrategy,
    params: &'static [ParamKind],
}

impl FactoryDescriptor {
    /// Creates a descriptor directly. Most code declares a typed
    /// [`DiagnosticFactory`] instead.
    pub const fn new(
        name: &'static str,
        severity: Severity,
        positioning: &'static PositioningStrategy,
        params: &'static [ParamKind],
    ) -> Self {
        Self {
            name,
            severity,
            positioning,
            params,
        }
    }

    /// The diagnostic name, e.g. `NAME_CLASH`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Default severity of diagnostics made by this factory.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// The positioning strategy.
    pub fn positioning(&self) -> &'static PositioningStrategy {
        self.positioning
    }

    /// Parameter kinds in positional order.
    pub fn params(&self) -> &'static [ParamKind] {
        self.params
    }

    /// Number of parameters.
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// The span this factory's strategy highlights on `decl`.
    pub fn locate(&self, decl: &Declaration) -> Span {
        self.positioning.locate(decl)
    }

    /// Creates a diagnostic from untyped arguments, checking them against the
    /// declared parameter kinds.
    pub fn instantiate(
        &'static self,
        decl: &Declaration,
        args: Vec<DiagnosticArg>,
    ) -> Result<Diagnostic, ParameterMismatch> {
        let matches = args.len() == self.params.len()
            && args.iter().zip(self.params).all(|(a, k)| a.kind() == *k);
        if !matches {
            return Err(ParameterMismatch {
                name: self.name,
                expected: self.params.to_vec(),
                found: args.iter().map(DiagnosticArg::kind).collect(),
            });
        }
        Ok(Diagnostic::new(self, decl.id, args))
    }
}

impl fmt::Debug for FactoryDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FactoryDescriptor")
            .field("name", &self.name)
            .field("severity", &self.severity)
            .field("positioning", &self.positioning.name())
            .field("params", &self.params)
            .finish()
    }
}

/// Arguments given to [`FactoryDescriptor::instantiate`] do not match the
/// factory's parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "diagnostic `{name}` takes ({}) but was given ({})",
    join_kinds(.expected),
    join_kinds(.found)
)]
pub struct ParameterMismatch {
    /// The factory's name.
    pub name: &'static str,
    /// Declared parameter kinds.
    pub expected: Vec<ParamKind>,
    /// Kinds of the arguments given.
    pub found: Vec<ParamKind>,
}

/// Anything that can stand in a catalog: a factory of any arity.
pub trait DiagnosticKind: Sync {
    /// The factory's type-erased descriptor.
    fn descriptor(&self) -> &FactoryDescriptor;
}

impl DiagnosticKind for FactoryDescriptor {
    fn descriptor(&self) -> &FactoryDescriptor {
        self
    }
}

/// A typed factory for one kind of diagnostic.
///
/// `P` is the tuple of parameter types, e.g. `(String,)` or `(Ident, String)`.
/// Declare factories with [`diagnostic_factories!`](crate::diagnostic_factories)
/// and create diagnostics with the arity-specific `on` methods.
pub struct DiagnosticFactory<P: DiagnosticParams> {
    descriptor: FactoryDescriptor,
    _params: PhantomData<fn(P)>,
}

impl<P: DiagnosticParams> DiagnosticFactory<P> {
    /// Creates a factory. Intended for `static` items.
    pub const fn new(
        name: &'static str,
        severity: Severity,
        positioning: &'static PositioningStrategy,
    ) -> Self {
        Self {
            descriptor: FactoryDescriptor::new(name, severity, positioning, P::KINDS),
            _params: PhantomData,
        }
    }

    /// The type-erased descriptor.
    pub fn descriptor(&'static self) -> &'static FactoryDescriptor {
        &self.descriptor
    }

    /// The diagnostic name.
    pub fn name(&self) -> &'static str {
        self.descriptor.name
    }

    /// Creates a diagnostic on `decl` from the full parameter tuple.
    pub fn instantiate(&'static self, decl: &Declaration, params: P) -> Diagnostic {
        Diagnostic::new(&self.descriptor, decl.id, params.into_args())
    }
}

impl<P: DiagnosticParams> DiagnosticKind for DiagnosticFactory<P> {
    fn descriptor(&self) -> &FactoryDescriptor {
        &self.descriptor
    }
}

impl<P: DiagnosticParams> fmt::Debug for DiagnosticFactory<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.descriptor.fmt(f)
    }
}

impl DiagnosticFactory<()> {
    /// Creates a parameterless diagnostic on `decl`.
    pub fn on(&'static self, decl: &Declaration) -> Diagnostic {
        self.instantiate(decl, ())
    }
}

macro_rules! impl_on {
    ($($name:ident: $arg:ident),+) => {
        impl<$($name: DiagnosticParam),+> DiagnosticFactory<($($name,)+)> {
            /// Creates a diagnostic on `decl` with the given arguments.
            pub fn on(&'static self, decl: &Declaration, $($arg: impl Into<$name>),+) -> Diagnostic {
                self.instantiate(decl, ($($arg.into(),)+))
            }
        }
    };
}

impl_on!(A: a);
impl_on!(A: a, B: b);
impl_on!(A: a, B: b, C: c);
impl_on!(A: a, B: b, C: c, D: d);

/// Declares typed diagnostic factories as `static` items named after the
/// diagnostic they produce.
///
/// ```ignore
/// diagnostic_factories! {
///     /// Two declarations share a target name.
///     pub static NAME_CLASH: (String) = Error at positioning::DECLARATION_NAME;
///     pub static UNUSED: () = Warning at positioning::DEFAULT;
/// }
/// ```
#[macro_export]
macro_rules! diagnostic_factories {
    ($(
        $(#[$meta:meta])*
        $vis:vis static $name:ident: ($($param:ty),* $(,)?) = $severity:ident at $positioning:path;
    )*) => {
        $(
            $(#[$meta])*
            $vis static $name: $crate::DiagnosticFactory<($($param,)*)> =
                $crate::DiagnosticFactory::new(
                    stringify!($name),
                    $crate::Severity::$severity,
                    &$positioning,
                );
        )*
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::positioning;
    use kite_common::Ident;
    use kite_decl::{DeclId, DeclKind, DeclTree};
    use kite_source::FileId;

    diagnostic_factories! {
        static NOTHING: () = Warning at positioning::DEFAULT;
        /// One text argument.
        static ONE_TEXT: (String) = Error at positioning::DECLARATION_NAME;
        static NAME_AND_DECL: (Ident, DeclId) = Info at positioning::FIRST_MODIFIER;
    }

    fn tree() -> (DeclTree, DeclId) {
        let mut tree = DeclTree::new();
        let sp = kite_source::Span::new(FileId::from_raw(0), 0, 10);
        let file = tree.add_file("app", sp);
        let fun = tree.add(file, DeclKind::Function, "foo", sp).id();
        (tree, fun)
    }

    #[test]
    fn macro_names_factories_after_items() {
        assert_eq!(NOTHING.name(), "NOTHING");
        assert_eq!(ONE_TEXT.name(), "ONE_TEXT");
        assert_eq!(NAME_AND_DECL.descriptor().severity(), Severity::Info);
        assert_eq!(NAME_AND_DECL.descriptor().positioning().name(), "FIRST_MODIFIER");
        assert_eq!(
            NAME_AND_DECL.descriptor().params(),
            &[ParamKind::Name, ParamKind::Declaration]
        );
        assert_eq!(NOTHING.descriptor().arity(), 0);
    }

    #[test]
    fn typed_on_builds_args() {
        let (tree, fun) = tree();
        let diag = ONE_TEXT.on(&tree[fun], "foo");
        assert_eq!(diag.name(), "ONE_TEXT");
        assert_eq!(diag.declaration(), fun);
        assert_eq!(diag.severity(), Severity::Error);
        assert_eq!(diag.args(), &[DiagnosticArg::Text("foo".into())]);

        let name = tree.intern("foo");
        let diag = NAME_AND_DECL.on(&tree[fun], name, fun);
        assert_eq!(
            diag.args(),
            &[DiagnosticArg::Name(name), DiagnosticArg::Declaration(fun)]
        );
        assert!(NOTHING.on(&tree[fun]).args().is_empty());
    }

    #[test]
    fn untyped_instantiate_checks_kinds() {
        let (tree, fun) = tree();
        let desc = ONE_TEXT.descriptor();
        let ok = desc.instantiate(&tree[fun], vec![DiagnosticArg::Text("x".into())]);
        assert!(ok.is_ok());

        let err = desc
            .instantiate(&tree[fun], vec![DiagnosticArg::Integer(1)])
            .unwrap_err();
        assert_eq!(err.expected, vec![ParamKind::Text]);
        assert_eq!(err.found, vec![ParamKind::Integer]);
        assert_eq!(
            err.to_string(),
            "diagnostic `ONE_TEXT` takes (text) but was given (integer)"
        );

        let err = desc.instantiate(&tree[fun], Vec::new()).unwrap_err();
        assert!(err.found.is_empty());
    }

    #[test]
    fn factories_coerce_to_kind() {
        let kinds: [&dyn DiagnosticKind; 2] = [&NOTHING, &ONE_TEXT];
        let names: Vec<_> = kinds.iter().map(|k| k.descriptor().name()).collect();
        assert_eq!(names, vec!["NOTHING", "ONE_TEXT"]);
    }
}
