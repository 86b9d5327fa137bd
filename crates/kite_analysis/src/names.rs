//! Target names of a whole tree, computed once per analysis run.

use kite_decl::{target_name, DeclId, DeclTree, TargetName};

/// The target name of every declaration in a tree, indexed by ID.
#[derive(Debug)]
pub struct TargetNames {
    names: Vec<Option<TargetName>>,
}

impl TargetNames {
    /// Computes the target name of every declaration in `tree`.
    pub fn compute(tree: &DeclTree) -> Self {
        Self {
            names: tree.iter().map(|(id, _)| target_name(tree, id)).collect(),
        }
    }

    /// The target name of `id`, if it has one.
    pub fn get(&self, id: DeclId) -> Option<TargetName> {
        self.names.get(id.as_raw() as usize).copied().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kite_decl::{DeclKind, NameOrigin};
    use kite_source::{FileId, Span};

    #[test]
    fn table_matches_direct_computation() {
        let mut tree = DeclTree::new();
        let sp = Span::new(FileId::from_raw(0), 0, 10);
        let file = tree.add_file("app", sp);
        let fun = tree
            .add(file, DeclKind::Function, "f", sp)
            .modifier("private", sp)
            .id();
        let names = TargetNames::compute(&tree);
        assert!(names.get(file).is_none());
        assert_eq!(names.get(fun), target_name(&tree, fun));
        assert_eq!(names.get(fun).map(|t| t.origin), Some(NameOrigin::PrivatePrefixed));
        assert!(names.get(DeclId::from_raw(99)).is_none());
    }
}
