//! `kite check`: run the checkers over JSON declaration files.
//!
//! 1. Load `kite.toml` (from `--config`, or the current directory)
//! 2. Merge `--allow`/`--deny`/`--min-severity` into its `[diagnostics]`
//! 3. Validate diagnostic names against the registry
//! 4. Load every declaration file into one tree
//! 5. Run the analyzer and render what it reports

use std::path::Path;

use kite_analysis::{diagnostic_registry, Analyzer};
use kite_config::{DiagnosticsConfig, KiteConfig};
use kite_decl::{load_json, DeclTree};
use kite_diagnostics::{
    Diagnostic, DiagnosticRenderer, DiagnosticSink, JsonRenderer, RenderedDiagnostic, Severity,
    TerminalRenderer,
};
use kite_source::SourceDb;

use crate::{CheckArgs, GlobalArgs, ReportFormat};

/// Runs the `kite check` command.
///
/// Returns exit code 0 if no errors were reported, 1 otherwise.
pub fn run(args: &CheckArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let mut config = match &global.config {
        Some(path) => kite_config::load_config_file(Path::new(path))?,
        None => kite_config::load_config(&std::env::current_dir()?)?,
    };
    merge_diagnostics_config(&mut config.diagnostics, args);

    let registry = diagnostic_registry()?;
    config.validate_names(|name| registry.contains(name))?;

    let mut tree = DeclTree::new();
    let mut source_db = SourceDb::new();
    for file in &args.files {
        let json = std::fs::read_to_string(file).map_err(|e| format!("{file}: {e}"))?;
        load_json(&mut tree, &mut source_db, &json).map_err(|e| format!("{file}: {e}"))?;
    }
    tracing::debug!(
        files = args.files.len(),
        declarations = tree.len(),
        "loaded declaration files"
    );

    let diagnostics = analyze(&config, &tree);
    let rendered = diagnostics
        .iter()
        .map(|diag| registry.render(diag, &tree))
        .collect::<Result<Vec<_>, _>>()?;

    match args.format {
        ReportFormat::Text => {
            eprint!(
                "{}",
                TerminalRenderer::new(global.color).render_all(&rendered, &source_db)
            );
            if !global.quiet {
                eprintln!("{}", summary(&rendered));
            }
        }
        ReportFormat::Json => print!("{}", JsonRenderer.render_all(&rendered, &source_db)),
    }

    let has_errors = rendered.iter().any(|d| d.severity.is_error());
    Ok(i32::from(has_errors))
}

/// Runs every checker on `tree` with the filter `config` describes.
fn analyze(config: &KiteConfig, tree: &DeclTree) -> Vec<Diagnostic> {
    let sink = DiagnosticSink::with_filter(config.diagnostics.filter());
    Analyzer::new(&config.analysis).run(tree, &sink);
    sink.take_sorted()
}

/// Merges CLI flags into the configuration file's `[diagnostics]` section.
///
/// CLI flags take precedence: a name given to `--allow` is removed from the
/// configured `deny` list and vice versa.
fn merge_diagnostics_config(config: &mut DiagnosticsConfig, args: &CheckArgs) {
    for name in &args.deny {
        config.allow.retain(|n| n != name);
        if !config.deny.contains(name) {
            config.deny.push(name.clone());
        }
    }
    for name in &args.allow {
        config.deny.retain(|n| n != name);
        if !config.allow.contains(name) {
            config.allow.push(name.clone());
        }
    }
    if let Some(min_severity) = args.min_severity {
        config.min_severity = min_severity;
    }
}

fn summary(rendered: &[RenderedDiagnostic]) -> String {
    let count = |severity: Severity| rendered.iter().filter(|d| d.severity == severity).count();
    format!(
        "   Result: {} error(s), {} warning(s), {} note(s)",
        count(Severity::Error),
        count(Severity::Warning),
        count(Severity::Info)
    )
}
