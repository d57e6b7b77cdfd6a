//! Project configuration.
//!
//! Reads optional defaults from `.add-env-var.toml` in the working directory:
//!
//! ```toml
//! [defaults]
//! file = ".env.local"
//! length = 48
//! encoding = "base64url"
//! ```
//!
//! Command-line flags and environment variables take precedence over these.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::core::constants;
use crate::core::secret::Encoding;
use crate::core::validation;
use crate::error::{ConfigError, Result};

/// Contents of `.add-env-var.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
}

/// The `[defaults]` table.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Defaults {
    /// Env file path, relative to the working directory.
    pub file: Option<PathBuf>,
    /// Secret length in bytes.
    pub length: Option<usize>,
    /// Secret encoding.
    pub encoding: Option<Encoding>,
}

impl Config {
    /// Path to the config file in the current directory
    pub fn config_path() -> PathBuf {
        PathBuf::from(constants::CONFIG_FILE)
    }

    /// Load the config file from the current directory, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file exists but is unreadable or
    /// invalid.
    pub fn load() -> Result<Self> {
        Self::load_from(Self::config_path())
    }

    /// Load a config file from `path`; a missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file exists but is unreadable or
    /// invalid.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::ReadFile {
                    path: path.to_path_buf(),
                    source,
                }
                .into())
            }
        };

        let config: Self = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;

        debug!(path = %path.display(), ?config, "config loaded");
        Ok(config)
    }

    /// Check values that deserialize but are out of range.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an unusable length or file.
    pub fn validate(&self) -> Result<()> {
        if let Some(length) = self.defaults.length {
            if validation::validate_length(length).is_err() {
                return Err(ConfigError::InvalidValue {
                    field: "length",
                    reason: format!(
                        "{} is outside 1..={}",
                        length,
                        constants::MAX_LENGTH
                    ),
                }
                .into());
            }
        }

        if let Some(file) = &self.defaults.file {
            if file.as_os_str().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "file",
                    reason: "path cannot be empty".to_string(),
                }
                .into());
            }
        }

        Ok(())
    }
}
