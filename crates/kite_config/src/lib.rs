//! Parsing and validation of `kite.toml` configuration files.
//!
//! The configuration controls which diagnostics are reported and how the
//! analyzer runs. Every section is optional; a missing file means defaults.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_file, load_config_from_str, CONFIG_FILE_NAME};
pub use types::*;
