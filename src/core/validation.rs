//! Input validation.
//!
//! Validates variable names and secret lengths.

use tracing::warn;

use crate::core::constants::MAX_LENGTH;
use crate::error::{Error, Result};

/// Validate a requested variable name.
///
/// A name must be non-empty and contain no `=`, whitespace or control
/// characters, since any of those would corrupt the line format. Names that
/// are not conventional environment variable names (A-Z, a-z, 0-9 and
/// underscore, not starting with a digit) are accepted with a warning.
///
/// # Errors
///
/// Returns [`Error::InvalidName`] if the name cannot be written.
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(invalid(name, "cannot be empty".to_string()));
    }

    for (i, ch) in name.chars().enumerate() {
        if ch == '=' || ch.is_whitespace() || ch.is_control() {
            return Err(invalid(
                name,
                format!("invalid character {:?} at position {}", ch, i + 1),
            ));
        }
    }

    if !is_conventional(name) {
        warn!(variable = name, "not a conventional environment variable name");
    }

    Ok(())
}

/// Whether a name only uses `[A-Za-z0-9_]` and does not start with a digit.
pub fn is_conventional(name: &str) -> bool {
    let starts_ok = name
        .chars()
        .next()
        .is_some_and(|c| !c.is_ascii_digit());

    starts_ok && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Validate an explicit value for `name`.
///
/// Values may be empty or contain `=`, but a CR or LF would start a new
/// `KEY=VALUE` line when the file is read back.
///
/// # Errors
///
/// Returns [`Error::InvalidValue`] if the value contains a line break.
pub fn validate_value(name: &str, value: &str) -> Result<()> {
    if let Some(ch) = value.chars().find(|&c| c == '\n' || c == '\r') {
        return Err(Error::InvalidValue {
            name: name.to_string(),
            reason: format!("contains line break {:?}", ch),
        });
    }

    Ok(())
}

/// Validate the number of bytes in a generated secret.
///
/// # Errors
///
/// Returns [`Error::InvalidLength`] unless `1 <= length <= MAX_LENGTH`.
pub fn validate_length(length: usize) -> Result<()> {
    if length == 0 || length > MAX_LENGTH {
        return Err(Error::InvalidLength(length));
    }

    Ok(())
}

fn invalid(name: &str, reason: String) -> Error {
    Error::InvalidName {
        name: name.to_string(),
        reason,
    }
}
