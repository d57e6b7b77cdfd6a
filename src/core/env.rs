//! Env file type.
//!
//! An ordered `KEY=VALUE` mapping with a plain line format: no quoting,
//! no comments, no escaping.

#[cfg(unix)]
use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// A parsed env file.
///
/// Keys are unique and keep the position of their first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvFile {
    entries: Vec<(String, String)>,
}

impl EnvFile {
    /// Create an empty env file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse env file text.
    ///
    /// Each non-empty line is split at its first `=`, with key and value
    /// trimmed. A line without `=` becomes a key with an empty value. Lines
    /// whose key is empty are ignored. A repeated key keeps its first
    /// position and its last value.
    pub fn parse(text: &str) -> Self {
        let mut env = Self::new();

        for line in text.split('\n') {
            if line.trim().is_empty() {
                continue;
            }

            let (key, value) = line.split_once('=').unwrap_or((line, ""));
            let key = key.trim();
            if key.is_empty() {
                continue;
            }

            env.set(key, value.trim());
        }

        debug!(entries = env.len(), "parsed env file");
        env
    }

    /// Read an env file from disk.
    ///
    /// A missing file yields an empty mapping.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileAccess`] if the file exists but cannot be read.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        match std::fs::read_to_string(path) {
            Ok(contents) => Ok(Self::parse(&contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "env file not found, starting empty");
                Ok(Self::new())
            }
            Err(e) => Err(Error::file_access(path, e)),
        }
    }

    /// Write the env file to disk, replacing its previous contents.
    ///
    /// On Unix the file is created with mode `0600`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileAccess`] if the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = self.serialize();

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;

            let mut file = std::fs::OpenOptions::new()
                .create(true)
                .truncate(true)
                .write(true)
                .mode(0o600)
                .open(path)
                .map_err(|e| Error::file_access(path, e))?;
            file.write_all(content.as_bytes())
                .and_then(|()| file.flush())
                .map_err(|e| Error::file_access(path, e))?;
        }

        #[cfg(not(unix))]
        {
            std::fs::write(path, content).map_err(|e| Error::file_access(path, e))?;
        }

        Ok(())
    }

    /// Serialize to env file text.
    ///
    /// Lines are joined with `\n` in iteration order, without a trailing
    /// newline.
    pub fn serialize(&self) -> String {
        self.entries
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Get a value by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether the key is present
    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Set a value, replacing in place or appending a new key at the end.
    ///
    /// Returns the previous value if the key existed.
    pub fn set(&mut self, key: &str, value: &str) -> Option<String> {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) => Some(std::mem::replace(existing, value.to_string())),
            None => {
                self.entries.push((key.to_string(), value.to_string()));
                None
            }
        }
    }

    /// All entries as key-value pairs
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Display for EnvFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.serialize())
    }
}
