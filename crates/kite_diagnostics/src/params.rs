//! Diagnostic parameter kinds and values.
//!
//! A factory's parameter list is a tuple type such as `(String, DeclId)`.
//! [`DiagnosticParams`] maps that tuple to its runtime shape, a slice of
//! [`ParamKind`]s, and converts an instance into [`DiagnosticArg`]s.

use kite_common::Ident;
use kite_decl::{DeclId, DeclTree};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of one diagnostic parameter.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamKind {
    /// Free text.
    Text,
    /// Another declaration, rendered by its qualified name.
    Declaration,
    /// An integer.
    Integer,
    /// An interned name.
    Name,
}

impl ParamKind {
    /// The stable lowercase label.
    pub fn label(self) -> &'static str {
        match self {
            ParamKind::Text => "text",
            ParamKind::Declaration => "declaration",
            ParamKind::Integer => "integer",
            ParamKind::Name => "name",
        }
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One argument carried by a diagnostic.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum DiagnosticArg {
    /// Free text.
    Text(String),
    /// A declaration of the same tree.
    Declaration(DeclId),
    /// An integer.
    Integer(i64),
    /// A name interned in the tree's interner.
    Name(Ident),
}

impl DiagnosticArg {
    /// The kind of this argument.
    pub fn kind(&self) -> ParamKind {
        match self {
            DiagnosticArg::Text(_) => ParamKind::Text,
            DiagnosticArg::Declaration(_) => ParamKind::Declaration,
            DiagnosticArg::Integer(_) => ParamKind::Integer,
            DiagnosticArg::Name(_) => ParamKind::Name,
        }
    }

    /// Converts the argument to the text substituted into a message.
    ///
    /// Declarations render as their qualified name. IDs and names foreign to
    /// `tree` render as a placeholder rather than failing.
    pub fn render(&self, tree: &DeclTree) -> String {
        match self {
            DiagnosticArg::Text(text) => text.clone(),
            DiagnosticArg::Integer(n) => n.to_string(),
            DiagnosticArg::Declaration(id) => match tree.get(*id) {
                Some(_) => tree.qualified_name(*id),
                None => format!("<unknown declaration {}>", id.as_raw()),
            },
            DiagnosticArg::Name(ident) => tree
                .interner()
                .try_resolve(*ident)
                .map_or_else(|| "<unknown name>".to_string(), str::to_string),
        }
    }
}

/// A type usable as one diagnostic parameter.
pub trait DiagnosticParam: 'static {
    /// Kind recorded in the factory descriptor.
    const KIND: ParamKind;

    /// Wraps the value.
    fn into_arg(self) -> DiagnosticArg;
}

impl DiagnosticParam for String {
    const KIND: ParamKind = ParamKind::Text;

    fn into_arg(self) -> DiagnosticArg {
        DiagnosticArg::Text(self)
    }
}

impl DiagnosticParam for DeclId {
    const KIND: ParamKind = ParamKind::Declaration;

    fn into_arg(self) -> DiagnosticArg {
        DiagnosticArg::Declaration(self)
    }
}

impl DiagnosticParam for i64 {
    const KIND: ParamKind = ParamKind::Integer;

    fn into_arg(self) -> DiagnosticArg {
        DiagnosticArg::Integer(self)
    }
}

impl DiagnosticParam for Ident {
    const KIND: ParamKind = ParamKind::Name;

    fn into_arg(self) -> DiagnosticArg {
        DiagnosticArg::Name(self)
    }
}

/// A tuple of [`DiagnosticParam`]s: the full parameter list of a factory.
pub trait DiagnosticParams: 'static {
    /// Parameter kinds in positional order.
    const KINDS: &'static [ParamKind];

    /// Converts the tuple into arguments in positional order.
    fn into_args(self) -> Vec<DiagnosticArg>;
}

impl DiagnosticParams for () {
    const KINDS: &'static [ParamKind] = &[];

    fn into_args(self) -> Vec<DiagnosticArg> {
        Vec::new()
    }
}

macro_rules! impl_params {
    ($($name:ident),+) => {
        impl<$($name: DiagnosticParam),+> DiagnosticParams for ($($name,)+) {
            const KINDS: &'static [ParamKind] = &[$($name::KIND),+];

            #[allow(non_snake_case)]
            fn into_args(self) -> Vec<DiagnosticArg> {
                let ($($name,)+) = self;
                vec![$($name.into_arg()),+]
            }
        }
    };
}

impl_params!(A);
impl_params!(A, B);
impl_params!(A, B, C);
impl_params!(A, B, C, D);

/// Formats kinds as `text, declaration`.
pub(crate) fn join_kinds(kinds: &[ParamKind]) -> String {
    kinds
        .iter()
        .map(|k| k.label())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use kite_decl::DeclKind;
    use kite_source::{FileId, Span};

    #[test]
    fn tuple_kinds_are_positional() {
        assert_eq!(<() as DiagnosticParams>::KINDS, &[]);
        assert_eq!(<(String,) as DiagnosticParams>::KINDS, &[ParamKind::Text]);
        assert_eq!(
            <(Ident, String, i64) as DiagnosticParams>::KINDS,
            &[ParamKind::Name, ParamKind::Text, ParamKind::Integer]
        );
    }

    #[test]
    fn into_args_preserves_order() {
        let args = ("a".to_string(), 7i64).into_args();
        assert_eq!(
            args,
            vec![DiagnosticArg::Text("a".into()), DiagnosticArg::Integer(7)]
        );
        assert_eq!(args[1].kind(), ParamKind::Integer);
    }

    #[test]
    fn render_arguments() {
        let mut tree = DeclTree::new();
        let sp = Span::new(FileId::from_raw(0), 0, 10);
        let file = tree.add_file("app", sp);
        let class = tree.add(file, DeclKind::Class, "Test", sp).id();
        let name = tree.intern("property");

        assert_eq!(DiagnosticArg::Text("x".into()).render(&tree), "x");
        assert_eq!(DiagnosticArg::Integer(-3).render(&tree), "-3");
        assert_eq!(DiagnosticArg::Declaration(class).render(&tree), "app.Test");
        assert_eq!(DiagnosticArg::Name(name).render(&tree), "property");
    }

    #[test]
    fn foreign_declaration_renders_placeholder() {
        let tree = DeclTree::new();
        let arg = DiagnosticArg::Declaration(DeclId::from_raw(4));
        assert_eq!(arg.render(&tree), "<unknown declaration 4>");
    }

    #[test]
    fn join_kind_labels() {
        assert_eq!(join_kinds(&[ParamKind::Text, ParamKind::Declaration]), "text, declaration");
        assert_eq!(join_kinds(&[]), "");
    }
}
