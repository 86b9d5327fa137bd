//! JSON description of declarations, as a parser front end would emit it.
//!
//! ```json
//! { "path": "main.kt", "source": "fun main() {}", "package": "app",
//!   "declarations": [
//!     { "kind": "function", "name": "main", "span": [0, 13], "name_span": [4, 8] }
//!   ] }
//! ```
//!
//! Spans are byte offsets into `source`. A document is either one file object
//! or an array of them.

use crate::decl::{DeclId, DeclKind, Visibility};
use crate::error::DeclError;
use crate::tree::DeclTree;
use kite_source::{FileId, SourceDb, SourceFile, Span};
use serde::Deserialize;

/// One source file and its top-level declarations.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeclFileInput {
    /// Path shown in diagnostics.
    pub path: String,
    /// Source text the spans point into.
    #[serde(default)]
    pub source: String,
    /// Package of the file; empty for the default package.
    #[serde(default)]
    pub package: String,
    /// File-wide suppressions.
    #[serde(default)]
    pub suppress: Vec<String>,
    /// Top-level declarations.
    #[serde(default)]
    pub declarations: Vec<DeclInput>,
}

/// One declaration and its nested declarations.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeclInput {
    /// Declaration kind.
    pub kind: DeclKind,
    /// Source name.
    pub name: String,
    /// Whole-declaration span.
    pub span: [u32; 2],
    /// Name-token span.
    #[serde(default)]
    pub name_span: Option<[u32; 2]>,
    /// Header span.
    #[serde(default)]
    pub signature_span: Option<[u32; 2]>,
    /// Explicit target-name annotation.
    #[serde(default)]
    pub target_name: Option<TargetNameInput>,
    /// Explicit visibility; otherwise derived from modifiers.
    #[serde(default)]
    pub visibility: Option<Visibility>,
    /// Modifier keywords.
    #[serde(default)]
    pub modifiers: Vec<ModifierInput>,
    /// Suppressed diagnostic names.
    #[serde(default)]
    pub suppress: Vec<String>,
    /// Nested declarations.
    #[serde(default)]
    pub children: Vec<DeclInput>,
}

/// A target-name annotation.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TargetNameInput {
    /// The requested name.
    pub value: String,
    /// Span of the annotation.
    pub span: [u32; 2],
}

/// A modifier keyword.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModifierInput {
    /// Keyword text.
    pub keyword: String,
    /// Keyword span.
    pub span: [u32; 2],
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Document {
    Many(Vec<DeclFileInput>),
    One(DeclFileInput),
}

/// Parses `json` and adds its files to `tree` and their text to `db`.
///
/// Returns the root declaration of each file, in document order. On error the
/// tree may hold a partially added file.
pub fn load_json(
    tree: &mut DeclTree,
    db: &mut SourceDb,
    json: &str,
) -> Result<Vec<DeclId>, DeclError> {
    let files = match serde_json::from_str::<Document>(json)? {
        Document::Many(files) => files,
        Document::One(file) => vec![file],
    };
    files
        .into_iter()
        .map(|file| add_file(tree, db, file))
        .collect()
}

fn add_file(
    tree: &mut DeclTree,
    db: &mut SourceDb,
    input: DeclFileInput,
) -> Result<DeclId, DeclError> {
    let len = input.source.len();
    let file_id = db.add_source(input.path, input.source)?;
    let file_span = db.file(file_id).map_or(Span::DUMMY, SourceFile::span);
    let mut loader = Loader { tree, file_id, len };
    let root = loader.tree.add_file(&input.package, file_span);
    for name in &input.suppress {
        loader.tree.suppress(root, name);
    }
    for decl in &input.declarations {
        loader.add(root, DeclKind::File, decl)?;
    }
    Ok(root)
}

struct Loader<'a> {
    tree: &'a mut DeclTree,
    file_id: FileId,
    len: usize,
}

impl Loader<'_> {
    fn span(&self, name: &str, [start, end]: [u32; 2]) -> Result<Span, DeclError> {
        if start.max(end) as usize > self.len {
            return Err(DeclError::SpanOutOfRange {
                name: name.to_string(),
                start,
                end,
                len: self.len,
            });
        }
        Ok(Span::new(self.file_id, start, end))
    }

    fn add(
        &mut self,
        parent: DeclId,
        parent_kind: DeclKind,
        input: &DeclInput,
    ) -> Result<DeclId, DeclError> {
        if input.kind == DeclKind::File {
            return Err(DeclError::NestedFile(input.name.clone()));
        }
        if input.kind.is_accessor() && parent_kind != DeclKind::Property {
            return Err(DeclError::AccessorOutsideProperty {
                name: input.name.clone(),
                kind: input.kind.label(),
            });
        }

        let span = self.span(&input.name, input.span)?;
        let name_span = input.name_span.map(|s| self.span(&input.name, s)).transpose()?;
        let signature = input
            .signature_span
            .map(|s| self.span(&input.name, s))
            .transpose()?;
        let target = match &input.target_name {
            Some(t) => Some((t.value.as_str(), self.span(&input.name, t.span)?)),
            None => None,
        };
        let modifiers = input
            .modifiers
            .iter()
            .map(|m| Ok((m.keyword.as_str(), self.span(&input.name, m.span)?)))
            .collect::<Result<Vec<_>, DeclError>>()?;

        let mut builder = self.tree.add(parent, input.kind, &input.name, span);
        if let Some(s) = name_span {
            builder = builder.name_span(s);
        }
        if let Some(s) = signature {
            builder = builder.signature(s);
        }
        if let Some((value, s)) = target {
            builder = builder.target_name(value, s);
        }
        for (keyword, s) in modifiers {
            builder = builder.modifier(keyword, s);
        }
        if let Some(visibility) = input.visibility {
            builder = builder.visibility(visibility);
        }
        for name in &input.suppress {
            builder = builder.suppress(name);
        }
        let id = builder.id();

        for child in &input.children {
            self.add(id, input.kind, child)?;
        }
        Ok(id)
    }
}
