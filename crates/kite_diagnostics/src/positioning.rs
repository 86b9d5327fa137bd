//! Strategies choosing which part of a declaration a diagnostic underlines.
//!
//! A strategy is a named, pure function from a declaration to a span. It may
//! only look at the declaration it is given; anything needing other
//! declarations belongs in the checker that emits the diagnostic.

use kite_decl::Declaration;
use kite_source::Span;
use std::fmt;

/// A named, pure mapping from a declaration to the span to highlight.
pub struct PositioningStrategy {
    name: &'static str,
    locate: fn(&Declaration) -> Span,
}

impl PositioningStrategy {
    /// Creates a strategy. Intended for `static` items.
    pub const fn new(name: &'static str, locate: fn(&Declaration) -> Span) -> Self {
        Self { name, locate }
    }

    /// The strategy's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Computes the span to highlight on `decl`.
    pub fn locate(&self, decl: &Declaration) -> Span {
        (self.locate)(decl)
    }
}

impl PartialEq for PositioningStrategy {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for PositioningStrategy {}

impl fmt::Debug for PositioningStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PositioningStrategy").field(&self.name).finish()
    }
}

/// The whole declaration.
pub static DEFAULT: PositioningStrategy = PositioningStrategy::new("DEFAULT", whole);

/// The name token, or the whole declaration if it has none.
pub static DECLARATION_NAME: PositioningStrategy =
    PositioningStrategy::new("DECLARATION_NAME", name_token);

/// The first modifier keyword, falling back to the name token.
pub static FIRST_MODIFIER: PositioningStrategy =
    PositioningStrategy::new("FIRST_MODIFIER", first_modifier);

/// The header from the first modifier through the signature, falling back to
/// the name token.
pub static DECLARATION_SIGNATURE: PositioningStrategy =
    PositioningStrategy::new("DECLARATION_SIGNATURE", signature);

/// The header if the declaration has a signature, else the whole declaration.
pub static DECLARATION_SIGNATURE_OR_DEFAULT: PositioningStrategy =
    PositioningStrategy::new("DECLARATION_SIGNATURE_OR_DEFAULT", signature_or_default);

/// Every standard strategy, for tooling.
pub fn standard() -> [&'static PositioningStrategy; 5] {
    [
        &DEFAULT,
        &DECLARATION_NAME,
        &FIRST_MODIFIER,
        &DECLARATION_SIGNATURE,
        &DECLARATION_SIGNATURE_OR_DEFAULT,
    ]
}

fn whole(decl: &Declaration) -> Span {
    decl.span
}

fn name_token(decl: &Declaration) -> Span {
    decl.name_span.unwrap_or(decl.span)
}

fn first_modifier(decl: &Declaration) -> Span {
    decl.modifiers
        .first()
        .map_or_else(|| name_token(decl), |m| m.span)
}

fn header(decl: &Declaration) -> Option<Span> {
    let sig = decl.signature_span?;
    Some(match decl.modifiers.first() {
        Some(m) => m.span.cover(sig),
        None => sig,
    })
}

fn signature(decl: &Declaration) -> Span {
    header(decl).unwrap_or_else(|| name_token(decl))
}

fn signature_or_default(decl: &Declaration) -> Span {
    header(decl).unwrap_or(decl.span)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kite_decl::{DeclKind, DeclTree};
    use kite_source::FileId;

    fn sp(start: u32, end: u32) -> Span {
        Span::new(FileId::from_raw(0), start, end)
    }

    /// `private fun helper(x: Int) {}` laid out at offset 0.
    fn tree() -> (DeclTree, kite_decl::DeclId, kite_decl::DeclId) {
        let mut tree = DeclTree::new();
        let file = tree.add_file("app", sp(0, 60));
        let full = tree
            .add(file, DeclKind::Function, "helper", sp(0, 30))
            .modifier("private", sp(0, 7))
            .name_span(sp(12, 18))
            .signature(sp(8, 27))
            .id();
        let bare = tree.add(file, DeclKind::Function, "bare", sp(31, 45)).id();
        (tree, full, bare)
    }

    #[test]
    fn default_is_whole_declaration() {
        let (tree, full, _) = tree();
        assert_eq!(DEFAULT.locate(&tree[full]), sp(0, 30));
    }

    #[test]
    fn name_token_and_fallback() {
        let (tree, full, bare) = tree();
        assert_eq!(DECLARATION_NAME.locate(&tree[full]), sp(12, 18));
        assert_eq!(DECLARATION_NAME.locate(&tree[bare]), sp(31, 45));
    }

    #[test]
    fn first_modifier_and_fallback() {
        let (tree, full, bare) = tree();
        assert_eq!(FIRST_MODIFIER.locate(&tree[full]), sp(0, 7));
        assert_eq!(FIRST_MODIFIER.locate(&tree[bare]), sp(31, 45));
    }

    #[test]
    fn signature_covers_modifiers() {
        let (tree, full, bare) = tree();
        assert_eq!(DECLARATION_SIGNATURE.locate(&tree[full]), sp(0, 27));
        assert_eq!(DECLARATION_SIGNATURE_OR_DEFAULT.locate(&tree[full]), sp(0, 27));
        assert_eq!(DECLARATION_SIGNATURE_OR_DEFAULT.locate(&tree[bare]), sp(31, 45));
    }

    #[test]
    fn strategies_are_deterministic() {
        let (tree, full, bare) = tree();
        for strategy in standard() {
            for id in [full, bare] {
                assert_eq!(strategy.locate(&tree[id]), strategy.locate(&tree[id]));
            }
        }
    }

    #[test]
    fn equality_by_name() {
        assert_eq!(DEFAULT, DEFAULT);
        assert_ne!(DEFAULT, DECLARATION_NAME);
        assert_eq!(format!("{:?}", FIRST_MODIFIER), "PositioningStrategy(\"FIRST_MODIFIER\")");
    }
}
