//! Message templates with positional placeholders.
//!
//! `{0}`, `{1}`, … are replaced by the rendered arguments; `{{` and `}}` are
//! literal braces.

use std::collections::BTreeSet;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(usize),
}

/// A parsed message template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageTemplate {
    text: String,
    segments: Vec<Segment>,
}

/// A template that cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    /// `{` without a matching `}`.
    #[error("unclosed placeholder starting at byte {0}")]
    Unclosed(usize),
    /// `}` that neither closes a placeholder nor is doubled.
    #[error("unmatched '}}' at byte {0}")]
    UnmatchedClose(usize),
    /// A placeholder whose content is not a non-negative integer.
    #[error("invalid placeholder '{{{0}}}'")]
    InvalidPlaceholder(String),
}

impl MessageTemplate {
    /// Parses `text`.
    pub fn parse(text: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = text.char_indices().peekable();

        while let Some((pos, c)) = chars.next() {
            match c {
                '{' if chars.peek().is_some_and(|&(_, n)| n == '{') => {
                    chars.next();
                    literal.push('{');
                }
                '{' => {
                    let mut inner = String::new();
                    loop {
                        match chars.next() {
                            Some((_, '}')) => break,
                            Some((_, ch)) => inner.push(ch),
                            None => return Err(TemplateError::Unclosed(pos)),
                        }
                    }
                    let index = match inner.parse::<usize>() {
                        Ok(index) if inner.bytes().all(|b| b.is_ascii_digit()) => index,
                        _ => return Err(TemplateError::InvalidPlaceholder(inner)),
                    };
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Placeholder(index));
                }
                '}' if chars.peek().is_some_and(|&(_, n)| n == '}') => {
                    chars.next();
                    literal.push('}');
                }
                '}' => return Err(TemplateError::UnmatchedClose(pos)),
                _ => literal.push(c),
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            text: text.to_string(),
            segments,
        })
    }

    /// The template as written.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The distinct placeholder indices used, ascending.
    pub fn placeholders(&self) -> BTreeSet<usize> {
        self.segments
            .iter()
            .filter_map(|s| match s {
                Segment::Placeholder(i) => Some(*i),
                Segment::Literal(_) => None,
            })
            .collect()
    }

    /// Returns `true` if the placeholders are exactly `{0}` through
    /// `{arity - 1}`, each used at least once.
    pub fn accepts_arity(&self, arity: usize) -> bool {
        self.placeholders().into_iter().eq(0..arity)
    }

    /// Substitutes `args` into the template.
    ///
    /// Placeholders without a matching argument are left as written; the
    /// registry rules that out for registered templates.
    pub fn render<S: AsRef<str>>(&self, args: &[S]) -> String {
        let mut out = String::with_capacity(self.text.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(i) => match args.get(*i) {
                    Some(arg) => out.push_str(arg.as_ref()),
                    None => {
                        out.push('{');
                        out.push_str(&i.to_string());
                        out.push('}');
                    }
                },
            }
        }
        out
    }
}
