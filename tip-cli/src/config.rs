//! TOML configuration for the `tipster` binary.
//!
//! ```toml
//! [session]
//! initial_tax_rate = "0.08"
//! initial_group_size = 2
//! max_group_size = 12
//!
//! [logging]
//! level = "debug"
//! file = "tipster.log"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tip_core::SessionConfig;

/// Errors raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("cannot read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Logging options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set.
    pub level: String,

    /// Append log records to this file as well as stderr.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}

impl CliConfig {
    /// Reads and parses the file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigFileError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigFileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Parses TOML text. Missing tables and fields take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigFileError> {
        Ok(toml::from_str(text)?)
    }
}
