//! Variable requests.
//!
//! A request is one command-line argument: `NAME` asks for a generated
//! secret, `NAME=value` sets an explicit value.

use std::str::FromStr;

use crate::core::validation;
use crate::error::{Error, Result};

/// A variable to add to the env file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableRequest {
    name: String,
    value: Option<String>,
}

impl VariableRequest {
    /// Request a generated value for `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`] if the name cannot be written.
    pub fn generate(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validation::validate_name(&name)?;
        Ok(Self { name, value: None })
    }

    /// Request an explicit value for `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`] if the name cannot be written, or
    /// [`Error::InvalidValue`] if the value contains a line break.
    pub fn explicit(name: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let value = value.into();
        validation::validate_name(&name)?;
        validation::validate_value(&name, &value)?;
        Ok(Self {
            name,
            value: Some(value),
        })
    }

    /// Variable name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Explicit value, if one was given.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl FromStr for VariableRequest {
    type Err = Error;

    /// Parse `NAME` or `NAME=value`.
    ///
    /// Splits at the first `=`. An empty value (`NAME=`) means "generate".
    fn from_str(arg: &str) -> Result<Self> {
        match arg.split_once('=') {
            Some((name, value)) if !value.is_empty() => Self::explicit(name.trim(), value),
            Some((name, _)) => Self::generate(name.trim()),
            None => Self::generate(arg.trim()),
        }
    }
}

/// Parse a list of command-line arguments into requests.
///
/// # Errors
///
/// Returns the first invalid name encountered.
pub fn parse_all<S: AsRef<str>>(args: &[S]) -> Result<Vec<VariableRequest>> {
    args.iter().map(|arg| arg.as_ref().parse()).collect()
}
