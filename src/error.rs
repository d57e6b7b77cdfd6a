//! Error types.
//!
//! A single top-level [`Error`] wraps the narrower error groups so callers can
//! match on the category they care about and `main` can attach hints.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    /// The env file could not be read or written.
    #[error("cannot access {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Encoding name outside `hex`, `base64`, `base64url`.
    #[error("unsupported encoding '{0}' (expected hex, base64 or base64url)")]
    UnsupportedEncoding(String),

    /// Secret length of zero or above the allowed maximum.
    #[error("invalid length {0}: must be between 1 and {max} bytes", max = crate::core::constants::MAX_LENGTH)]
    InvalidLength(usize),

    /// A requested variable name that cannot be written to an env file.
    #[error("invalid variable name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// An explicit value that would break the one-line-per-entry format.
    #[error("invalid value for '{name}': {reason}")]
    InvalidValue { name: String, reason: String },

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The overwrite confirmation could not be shown or answered.
    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// Errors from the optional project config file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value for '{field}' in config: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl Error {
    /// Wrap an I/O error with the path it happened on.
    pub fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
