//! Output backends for rendered diagnostics.

use crate::diagnostic::RenderedDiagnostic;
use crate::severity::Severity;
use kite_source::{ResolvedSpan, SourceDb};
use serde::Serialize;

/// Formats rendered diagnostics for an output target.
pub trait DiagnosticRenderer {
    /// Formats a single diagnostic.
    fn render(&self, diag: &RenderedDiagnostic, source_db: &SourceDb) -> String;

    /// Formats a batch. The default concatenates [`render`](Self::render).
    fn render_all(&self, diags: &[RenderedDiagnostic], source_db: &SourceDb) -> String {
        diags.iter().map(|d| self.render(d, source_db)).collect()
    }
}

/// Renders diagnostics in a rustc-style terminal format.
///
/// ```text
/// error[NAME_CLASH]: main clashes with an existing declaration
///   --> main.kt:2:25
///   |
/// 2 | @TargetName("main") fun main2() {}
///   |                         ^^^^^
/// ```
pub struct TerminalRenderer {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
}

impl TerminalRenderer {
    /// Creates a terminal renderer.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, text: &str, code: &str) -> String {
        if self.color {
            format!("\x1b[{code}m{text}\x1b[0m")
        } else {
            text.to_string()
        }
    }

    fn severity_color(severity: Severity) -> &'static str {
        match severity {
            Severity::Error => "1;31",
            Severity::Warning => "1;33",
            Severity::Info => "1;36",
        }
    }
}

impl DiagnosticRenderer for TerminalRenderer {
    fn render(&self, diag: &RenderedDiagnostic, source_db: &SourceDb) -> String {
        let mut out = String::new();
        let color = Self::severity_color(diag.severity);

        let header = format!("{}[{}]", diag.severity, diag.name);
        out.push_str(&format!("{}: {}\n", self.paint(&header, color), diag.message));

        let (Some(resolved), Some(file)) = (
            source_db.resolve_span(diag.span),
            source_db.file(diag.span.file),
        ) else {
            return out;
        };
        out.push_str(&format!("  --> {resolved}\n"));

        let line_num = resolved.start_line.to_string();
        let padding = " ".repeat(line_num.len());
        let line_content = file.line_text(diag.span.start);
        out.push_str(&format!("{padding} |\n"));
        out.push_str(&format!("{line_num} | {line_content}\n"));

        let col_padding = " ".repeat((resolved.start_col as usize).saturating_sub(1));
        let carets = "^".repeat(caret_width(&resolved, line_content));
        out.push_str(&format!(
            "{padding} | {col_padding}{}\n",
            self.paint(&carets, color)
        ));
        out
    }
}

/// Width of the underline in characters: the span on its first line, at
/// least one column.
fn caret_width(resolved: &ResolvedSpan, line: &str) -> usize {
    let start = resolved.start_col as usize;
    let end = if resolved.end_line == resolved.start_line {
        resolved.end_col as usize
    } else {
        line.chars().count() + 1
    };
    end.saturating_sub(start).max(1)
}

/// Renders diagnostics as JSON objects, one per line, with their resolved
/// location.
pub struct JsonRenderer;

#[derive(Serialize)]
struct JsonDiagnostic<'a> {
    #[serde(flatten)]
    diagnostic: &'a RenderedDiagnostic,
    location: Option<ResolvedSpan>,
}

impl JsonRenderer {
    fn value<'a>(diag: &'a RenderedDiagnostic, source_db: &SourceDb) -> JsonDiagnostic<'a> {
        JsonDiagnostic {
            diagnostic: diag,
            location: source_db.resolve_span(diag.span),
        }
    }
}

impl DiagnosticRenderer for JsonRenderer {
    fn render(&self, diag: &RenderedDiagnostic, source_db: &SourceDb) -> String {
        let mut line = serde_json::to_string(&Self::value(diag, source_db))
            .unwrap_or_else(|e| format!("{{\"error\":\"{e}\"}}"));
        line.push('\n');
        line
    }
}
