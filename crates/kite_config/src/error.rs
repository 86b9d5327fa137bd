//! Error types for configuration loading and validation.

/// Errors that can occur when loading or validating a `kite.toml` configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An I/O error occurred while reading the configuration file.
    #[error("failed to read configuration: {0}")]
    IoError(#[from] std::io::Error),

    /// The TOML content could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ParseError(String),

    /// A configuration value failed validation.
    #[error("validation error: {0}")]
    ValidationError(String),

    /// An `allow` or `deny` entry names no registered diagnostic.
    #[error("unknown diagnostic '{0}'")]
    UnknownDiagnostic(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_unknown_diagnostic() {
        let err = ConfigError::UnknownDiagnostic("NAME_CLAHS".to_string());
        assert_eq!(format!("{err}"), "unknown diagnostic 'NAME_CLAHS'");
    }

    #[test]
    fn display_parse_error() {
        let err = ConfigError::ParseError("expected '=' at line 3".to_string());
        assert_eq!(
            format!("{err}"),
            "failed to parse configuration: expected '=' at line 3"
        );
    }

    #[test]
    fn display_validation_error() {
        let err = ConfigError::ValidationError("empty name".to_string());
        assert_eq!(format!("{err}"), "validation error: empty name");
    }

    #[test]
    fn display_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = ConfigError::IoError(io_err);
        assert!(format!("{err}").starts_with("failed to read configuration:"));
    }
}
