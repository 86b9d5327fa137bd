//! Declaration tree of the program being translated.
//!
//! The parser and semantic analyzer are external to this workspace; this crate
//! models what they hand to diagnostics: an arena of [`Declaration`] nodes with
//! parent/child links, source spans for every part a diagnostic may
//! underline, and the rules that derive each declaration's target-language
//! name.
//!
//! Trees are built either programmatically through [`DeclTree::add`] or from
//! the JSON description read by [`load_json`].

#![warn(missing_docs)]

pub mod arena;
pub mod decl;
pub mod error;
pub mod input;
pub mod naming;
pub mod tree;

pub use arena::{Arena, ArenaId};
pub use decl::{DeclId, DeclKind, Declaration, Modifier, TargetNameAnnotation, Visibility};
pub use error::DeclError;
pub use input::{load_json, DeclFileInput, DeclInput};
pub use naming::{target_name, NameOrigin, TargetName};
pub use tree::{DeclBuilder, DeclTree};
