//! Configuration types deserialized from `kite.toml`.

use kite_diagnostics::{DiagnosticFilter, Severity};
use serde::Deserialize;

/// The top-level configuration parsed from `kite.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KiteConfig {
    /// Which diagnostics are reported.
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
    /// How the analyzer runs.
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

/// The `[diagnostics]` section.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DiagnosticsConfig {
    /// Diagnostics below this severity are not reported.
    #[serde(default = "default_min_severity")]
    pub min_severity: Severity,
    /// Diagnostic names never reported.
    #[serde(default)]
    pub allow: Vec<String>,
    /// Diagnostic names always reported as errors.
    #[serde(default)]
    pub deny: Vec<String>,
}

fn default_min_severity() -> Severity {
    Severity::Warning
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            min_severity: default_min_severity(),
            allow: Vec::new(),
            deny: Vec::new(),
        }
    }
}

impl DiagnosticsConfig {
    /// Builds the collector-side filter for these settings.
    pub fn filter(&self) -> DiagnosticFilter {
        let filter = DiagnosticFilter::new(self.min_severity);
        let filter = self.allow.iter().fold(filter, |f, name| f.allow(name.as_str()));
        self.deny.iter().fold(filter, |f, name| f.deny(name.as_str()))
    }

    /// Every name listed in `allow` or `deny`.
    pub fn named(&self) -> impl Iterator<Item = &str> {
        self.allow.iter().chain(&self.deny).map(String::as_str)
    }
}

/// The `[analysis]` section.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Run checkers on multiple threads.
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

fn default_parallel() -> bool {
    true
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            parallel: default_parallel(),
        }
    }
}
