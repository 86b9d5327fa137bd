//! Declaration nodes and their parts.

use crate::arena::ArenaId;
use kite_common::Ident;
use kite_source::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a declaration within its [`DeclTree`](crate::DeclTree).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct DeclId(u32);

impl DeclId {
    /// Creates an ID from a raw index.
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw index.
    pub fn as_raw(self) -> u32 {
        self.0
    }
}

impl ArenaId for DeclId {
    fn from_raw(index: u32) -> Self {
        Self(index)
    }

    fn as_raw(self) -> u32 {
        self.0
    }
}

/// What sort of declaration a node is.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclKind {
    /// A source file; its name is the file's package.
    File,
    /// A class.
    Class,
    /// An interface.
    Interface,
    /// A singleton object.
    Object,
    /// An enum class.
    EnumClass,
    /// An entry of an enum class.
    EnumEntry,
    /// A named function or method.
    Function,
    /// A constructor.
    Constructor,
    /// A property.
    Property,
    /// The backing field of a property.
    Field,
    /// A property getter.
    Getter,
    /// A property setter.
    Setter,
    /// A function or constructor parameter.
    ValueParameter,
    /// A type alias.
    TypeAlias,
}

impl DeclKind {
    /// Returns `true` for kinds whose direct children form a naming scope.
    pub fn is_container(self) -> bool {
        matches!(
            self,
            DeclKind::File
                | DeclKind::Class
                | DeclKind::Interface
                | DeclKind::Object
                | DeclKind::EnumClass
        )
    }

    /// Returns `true` for getters and setters.
    pub fn is_accessor(self) -> bool {
        matches!(self, DeclKind::Getter | DeclKind::Setter)
    }

    /// Returns `true` for kinds that compile to a target-language function.
    pub fn is_function(self) -> bool {
        matches!(
            self,
            DeclKind::Function | DeclKind::Constructor | DeclKind::Getter | DeclKind::Setter
        )
    }

    /// Lowercase label used in messages.
    pub fn label(self) -> &'static str {
        match self {
            DeclKind::File => "file",
            DeclKind::Class => "class",
            DeclKind::Interface => "interface",
            DeclKind::Object => "object",
            DeclKind::EnumClass => "enum class",
            DeclKind::EnumEntry => "enum entry",
            DeclKind::Function => "function",
            DeclKind::Constructor => "constructor",
            DeclKind::Property => "property",
            DeclKind::Field => "field",
            DeclKind::Getter => "getter",
            DeclKind::Setter => "setter",
            DeclKind::ValueParameter => "value parameter",
            DeclKind::TypeAlias => "type alias",
        }
    }
}

impl fmt::Display for DeclKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Source-language visibility.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Visible everywhere.
    #[default]
    Public,
    /// Visible within the module.
    Internal,
    /// Visible to subclasses.
    Protected,
    /// Visible within the enclosing declaration or file.
    Private,
}

/// A modifier keyword (`private`, `override`, `external`, …) as written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Modifier {
    /// The keyword text.
    pub keyword: Ident,
    /// Where the keyword appears.
    pub span: Span,
}

/// An explicit target-name annotation, e.g. `@TargetName("main")`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TargetNameAnnotation {
    /// The requested target-language name.
    pub value: Ident,
    /// The span of the whole annotation.
    pub span: Span,
}

/// One node of the declaration tree.
#[derive(Clone, Debug)]
pub struct Declaration {
    /// This declaration's ID.
    pub id: DeclId,
    /// Its kind.
    pub kind: DeclKind,
    /// Source-language name. For [`DeclKind::File`] this is the package.
    pub name: Ident,
    /// The enclosing declaration; `None` only for files.
    pub parent: Option<DeclId>,
    /// Direct children in source order.
    pub children: Vec<DeclId>,
    /// Declared visibility.
    pub visibility: Visibility,
    /// Modifier keywords in source order.
    pub modifiers: Vec<Modifier>,
    /// Explicit target-language name, if annotated.
    pub target_name: Option<TargetNameAnnotation>,
    /// For accessors and backing fields, the property they belong to.
    pub property: Option<DeclId>,
    /// The whole declaration.
    pub span: Span,
    /// The name token, if the declaration has one in source.
    pub name_span: Option<Span>,
    /// The declaration header (modifiers through parameter list or type).
    pub signature_span: Option<Span>,
    /// Diagnostic names suppressed on this declaration and everything inside it.
    pub suppressed: Vec<String>,
}

impl Declaration {
    /// Returns `true` if diagnostics named `name` are suppressed on this node
    /// itself (ancestors are not consulted).
    pub fn suppresses(&self, name: &str) -> bool {
        self.suppressed.iter().any(|s| s == name)
    }
}
