//! The declaration tree and its builder.

use crate::arena::Arena;
use crate::decl::{DeclId, DeclKind, Declaration, Modifier, TargetNameAnnotation, Visibility};
use kite_common::{Ident, Interner};
use kite_source::Span;
use std::ops::Index;

/// All declarations of a compilation, rooted at one [`DeclKind::File`] node
/// per source file.
///
/// The tree is immutable once analysis starts; checkers share it by reference
/// across threads.
#[derive(Debug, Default)]
pub struct DeclTree {
    decls: Arena<DeclId, Declaration>,
    roots: Vec<DeclId>,
    interner: Interner,
}

impl DeclTree {
    /// Creates an empty tree with its own interner.
    pub fn new() -> Self {
        Self::default()
    }

    /// The interner holding every name in this tree.
    pub fn interner(&self) -> &Interner {
        &self.interner
    }

    /// Interns `s` in this tree's interner.
    pub fn intern(&self, s: &str) -> Ident {
        self.interner.intern(s)
    }

    /// Adds a file root. `package` may be empty for the default package.
    pub fn add_file(&mut self, package: &str, span: Span) -> DeclId {
        let id = self.alloc(DeclKind::File, package, None, span);
        self.roots.push(id);
        id
    }

    /// Adds a declaration under `parent` and returns a builder for its
    /// optional parts.
    ///
    /// Getters, setters and fields added directly under a property are linked
    /// to it as that property's accessors or backing field.
    ///
    /// # Panics
    ///
    /// Panics if `parent` is not a declaration of this tree.
    pub fn add(
        &mut self,
        parent: DeclId,
        kind: DeclKind,
        name: &str,
        span: Span,
    ) -> DeclBuilder<'_> {
        let parent_kind = self[parent].kind;
        let id = self.alloc(kind, name, Some(parent), span);
        if parent_kind == DeclKind::Property && (kind.is_accessor() || kind == DeclKind::Field) {
            self.decl_mut(id).property = Some(parent);
        }
        self.decl_mut(parent).children.push(id);
        DeclBuilder { tree: self, id }
    }

    fn alloc(&mut self, kind: DeclKind, name: &str, parent: Option<DeclId>, span: Span) -> DeclId {
        let id = self.decls.next_id();
        let name = self.interner.intern(name);
        self.decls.alloc(Declaration {
            id,
            kind,
            name,
            parent,
            children: Vec::new(),
            visibility: Visibility::Public,
            modifiers: Vec::new(),
            target_name: None,
            property: None,
            span,
            name_span: None,
            signature_span: None,
            suppressed: Vec::new(),
        })
    }

    fn decl_mut(&mut self, id: DeclId) -> &mut Declaration {
        match self.decls.get_mut(id) {
            Some(decl) => decl,
            None => panic!("declaration {id:?} does not belong to this tree"),
        }
    }

    /// Returns the declaration for `id`, if it belongs to this tree.
    pub fn get(&self, id: DeclId) -> Option<&Declaration> {
        self.decls.get(id)
    }

    /// Number of declarations, files included.
    pub fn len(&self) -> usize {
        self.decls.len()
    }

    /// Returns `true` if the tree has no declarations.
    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    /// File roots in insertion order.
    pub fn roots(&self) -> &[DeclId] {
        &self.roots
    }

    /// All declarations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (DeclId, &Declaration)> {
        self.decls.iter()
    }

    /// All declarations as a slice indexed by raw ID.
    pub fn as_slice(&self) -> &[Declaration] {
        self.decls.as_slice()
    }

    /// The source name of `id`.
    pub fn name(&self, id: DeclId) -> &str {
        self.interner.resolve(self[id].name)
    }

    /// Iterates the strict ancestors of `id`, innermost first.
    pub fn ancestors(&self, id: DeclId) -> impl Iterator<Item = &Declaration> {
        std::iter::successors(self.get(id).and_then(|d| d.parent), move |&p| self[p].parent)
            .map(move |p| &self[p])
    }

    /// The nearest ancestor whose children form a naming scope for `id`.
    pub fn scope_of(&self, id: DeclId) -> Option<&Declaration> {
        self.ancestors(id).find(|d| d.kind.is_container())
    }

    /// Dotted path from the package down to `id`, e.g. `app.Outer.member`.
    pub fn qualified_name(&self, id: DeclId) -> String {
        let mut segments: Vec<&str> = self
            .ancestors(id)
            .map(|d| self.interner.resolve(d.name))
            .collect();
        segments.reverse();
        segments.push(self.name(id));
        segments.retain(|s| !s.is_empty());
        segments.join(".")
    }

    /// Suppresses diagnostics named `name` on `id` and everything inside it.
    pub fn suppress(&mut self, id: DeclId, name: &str) {
        self.decl_mut(id).suppressed.push(name.to_string());
    }

    /// Returns `true` if `name` is suppressed on `id` or any of its ancestors.
    pub fn is_suppressed(&self, id: DeclId, name: &str) -> bool {
        self.get(id).is_some_and(|d| d.suppresses(name))
            || self.ancestors(id).any(|d| d.suppresses(name))
    }
}

impl Index<DeclId> for DeclTree {
    type Output = Declaration;

    fn index(&self, id: DeclId) -> &Declaration {
        &self.decls[id]
    }
}

/// Fills in the optional parts of a freshly added declaration.
pub struct DeclBuilder<'a> {
    tree: &'a mut DeclTree,
    id: DeclId,
}

impl DeclBuilder<'_> {
    /// The ID of the declaration being built.
    pub fn id(&self) -> DeclId {
        self.id
    }

    /// Sets the name-token span.
    pub fn name_span(self, span: Span) -> Self {
        self.tree.decl_mut(self.id).name_span = Some(span);
        self
    }

    /// Sets the signature span.
    pub fn signature(self, span: Span) -> Self {
        self.tree.decl_mut(self.id).signature_span = Some(span);
        self
    }

    /// Sets the visibility.
    pub fn visibility(self, visibility: Visibility) -> Self {
        self.tree.decl_mut(self.id).visibility = visibility;
        self
    }

    /// Appends a modifier keyword. Visibility keywords also set the visibility.
    pub fn modifier(self, keyword: &str, span: Span) -> Self {
        let visibility = match keyword {
            "private" => Some(Visibility::Private),
            "protected" => Some(Visibility::Protected),
            "internal" => Some(Visibility::Internal),
            "public" => Some(Visibility::Public),
            _ => None,
        };
        let keyword = self.tree.interner.intern(keyword);
        let decl = self.tree.decl_mut(self.id);
        decl.modifiers.push(Modifier { keyword, span });
        if let Some(visibility) = visibility {
            decl.visibility = visibility;
        }
        self
    }

    /// Annotates an explicit target-language name.
    pub fn target_name(self, value: &str, span: Span) -> Self {
        let value = self.tree.interner.intern(value);
        self.tree.decl_mut(self.id).target_name = Some(TargetNameAnnotation { value, span });
        self
    }

    /// Links an accessor or backing field declared elsewhere to its property.
    pub fn property(self, property: DeclId) -> Self {
        self.tree.decl_mut(self.id).property = Some(property);
        self
    }

    /// Suppresses diagnostics named `name` on this declaration and its contents.
    pub fn suppress(self, name: &str) -> Self {
        self.tree.suppress(self.id, name);
        self
    }
}
