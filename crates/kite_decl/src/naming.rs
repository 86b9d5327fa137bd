//! Target-language names of declarations.
//!
//! The target language has a flat, library-private naming model: a leading
//! underscore makes a name private, accessors share their property's name and
//! a property's storage lives in a separately named backing field. These rules
//! decide what each source declaration is called after translation.

use crate::decl::{DeclId, DeclKind, Visibility};
use crate::tree::DeclTree;
use kite_common::Ident;

/// Why a declaration has the target name it has.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NameOrigin {
    /// Taken from an explicit target-name annotation.
    Annotated,
    /// The source name, unchanged.
    Source,
    /// The source name with a `_` prefix because the declaration is private.
    PrivatePrefixed,
    /// Derived from the owning property's source name.
    BackingField,
    /// Shared with the owning property (accessors) or class (constructors).
    Inherited,
}

/// A computed target-language name.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TargetName {
    /// The name, interned in the tree's interner.
    pub name: Ident,
    /// How it was derived.
    pub origin: NameOrigin,
}

/// Computes the target-language name of `id`.
///
/// Returns `None` for declarations that are not named in the target (files)
/// and for IDs foreign to `tree`.
pub fn target_name(tree: &DeclTree, id: DeclId) -> Option<TargetName> {
    let decl = tree.get(id)?;
    if decl.kind == DeclKind::File {
        return None;
    }
    if let Some(annotation) = decl.target_name {
        return Some(TargetName {
            name: annotation.value,
            origin: NameOrigin::Annotated,
        });
    }

    match (decl.kind, decl.property) {
        (DeclKind::Getter | DeclKind::Setter, Some(property)) => {
            target_name(tree, property).map(|t| TargetName {
                name: t.name,
                origin: NameOrigin::Inherited,
            })
        }
        (DeclKind::Field, Some(property)) => Some(TargetName {
            name: tree.intern(&format!("_${}BackingField", tree.name(property))),
            origin: NameOrigin::BackingField,
        }),
        (DeclKind::Constructor, _) => decl
            .parent
            .and_then(|class| target_name(tree, class))
            .map(|t| TargetName {
                name: t.name,
                origin: NameOrigin::Inherited,
            }),
        (DeclKind::ValueParameter, _) => Some(TargetName {
            name: decl.name,
            origin: NameOrigin::Source,
        }),
        _ => {
            let source = tree.name(id);
            if decl.visibility == Visibility::Private && !source.starts_with('_') {
                Some(TargetName {
                    name: tree.intern(&format!("_{source}")),
                    origin: NameOrigin::PrivatePrefixed,
                })
            } else {
                Some(TargetName {
                    name: decl.name,
                    origin: NameOrigin::Source,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kite_source::{FileId, Span};

    fn sp(start: u32, end: u32) -> Span {
        Span::new(FileId::from_raw(0), start, end)
    }

    fn resolve(tree: &DeclTree, id: DeclId) -> Option<(String, NameOrigin)> {
        target_name(tree, id).map(|t| (tree.interner().resolve(t.name).to_string(), t.origin))
    }

    #[test]
    fn files_have_no_target_name() {
        let mut tree = DeclTree::new();
        let file = tree.add_file("app", sp(0, 1));
        assert!(target_name(&tree, file).is_none());
    }

    #[test]
    fn annotation_wins() {
        let mut tree = DeclTree::new();
        let file = tree.add_file("app", sp(0, 40));
        let fun = tree
            .add(file, DeclKind::Function, "main2", sp(0, 40))
            .target_name("main", sp(0, 18))
            .modifier("private", sp(19, 26))
            .id();
        assert_eq!(resolve(&tree, fun), Some(("main".into(), NameOrigin::Annotated)));
    }

    #[test]
    fn private_names_get_underscore() {
        let mut tree = DeclTree::new();
        let file = tree.add_file("app", sp(0, 40));
        let helper = tree
            .add(file, DeclKind::Function, "helper", sp(0, 20))
            .visibility(Visibility::Private)
            .id();
        let already = tree
            .add(file, DeclKind::Property, "_cache", sp(21, 40))
            .visibility(Visibility::Private)
            .id();
        assert_eq!(
            resolve(&tree, helper),
            Some(("_helper".into(), NameOrigin::PrivatePrefixed))
        );
        assert_eq!(resolve(&tree, already), Some(("_cache".into(), NameOrigin::Source)));
    }

    #[test]
    fn accessors_share_property_name() {
        let mut tree = DeclTree::new();
        let file = tree.add_file("app", sp(0, 60));
        let prop = tree
            .add(file, DeclKind::Property, "size", sp(0, 60))
            .target_name("length", sp(0, 20))
            .id();
        let getter = tree.add(prop, DeclKind::Getter, "<get-size>", sp(30, 40)).id();
        assert_eq!(resolve(&tree, getter), Some(("length".into(), NameOrigin::Inherited)));
    }

    #[test]
    fn backing_field_name() {
        let mut tree = DeclTree::new();
        let file = tree.add_file("app", sp(0, 60));
        let prop = tree.add(file, DeclKind::Property, "property", sp(0, 60)).id();
        let field = tree.add(prop, DeclKind::Field, "property", sp(0, 60)).id();
        assert_eq!(
            resolve(&tree, field),
            Some(("_$propertyBackingField".into(), NameOrigin::BackingField))
        );
    }

    #[test]
    fn constructor_takes_class_name() {
        let mut tree = DeclTree::new();
        let file = tree.add_file("app", sp(0, 60));
        let class = tree.add(file, DeclKind::Class, "Point", sp(0, 60)).id();
        let ctor = tree.add(class, DeclKind::Constructor, "<init>", sp(10, 30)).id();
        assert_eq!(resolve(&tree, ctor), Some(("Point".into(), NameOrigin::Inherited)));
    }

    #[test]
    fn parameters_keep_their_name() {
        let mut tree = DeclTree::new();
        let file = tree.add_file("app", sp(0, 60));
        let fun = tree.add(file, DeclKind::Function, "f", sp(0, 60)).id();
        let param = tree
            .add(fun, DeclKind::ValueParameter, "x", sp(6, 7))
            .visibility(Visibility::Private)
            .id();
        assert_eq!(resolve(&tree, param), Some(("x".into(), NameOrigin::Source)));
    }
}
