//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::KiteConfig;
use std::collections::HashSet;
use std::path::Path;

/// Name of the configuration file looked up in a project directory.
pub const CONFIG_FILE_NAME: &str = "kite.toml";

/// Loads `<project_dir>/kite.toml`, or the defaults if there is no such file.
pub fn load_config(project_dir: &Path) -> Result<KiteConfig, ConfigError> {
    let config_path = project_dir.join(CONFIG_FILE_NAME);
    if !config_path.is_file() {
        return Ok(KiteConfig::default());
    }
    load_config_file(&config_path)
}

/// Loads and validates a configuration from an explicit path, which must exist.
pub fn load_config_file(path: &Path) -> Result<KiteConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Parses and validates a `kite.toml` configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<KiteConfig, ConfigError> {
    let config: KiteConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Checks the name lists are well formed and disjoint.
fn validate_config(config: &KiteConfig) -> Result<(), ConfigError> {
    let diagnostics = &config.diagnostics;
    if diagnostics.named().any(|name| name.trim().is_empty()) {
        return Err(ConfigError::ValidationError(
            "diagnostic names in allow/deny must not be empty".to_string(),
        ));
    }
    let allowed: HashSet<&str> = diagnostics.allow.iter().map(String::as_str).collect();
    if let Some(both) = diagnostics.deny.iter().find(|n| allowed.contains(n.as_str())) {
        return Err(ConfigError::ValidationError(format!(
            "diagnostic '{both}' is both allowed and denied"
        )));
    }
    Ok(())
}

impl KiteConfig {
    /// Checks every name in `allow` and `deny` against `known`.
    ///
    /// Kept separate from loading so the configuration does not depend on
    /// which diagnostics a build registers.
    pub fn validate_names(&self, known: impl Fn(&str) -> bool) -> Result<(), ConfigError> {
        match self.diagnostics.named().find(|&name| !known(name)) {
            Some(unknown) => Err(ConfigError::UnknownDiagnostic(unknown.to_string())),
            None => Ok(()),
        }
    }
}
