//! Secret generation.
//!
//! Produces random bytes from the operating system CSPRNG and encodes them
//! as text suitable for an env file value.

use std::fmt;
use std::str::FromStr;

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;
use serde::Deserialize;
use zeroize::Zeroizing;

use crate::core::constants::DEFAULT_LENGTH;
use crate::core::validation;
use crate::error::{Error, Result};

/// Text encoding applied to generated bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(try_from = "String")]
pub enum Encoding {
    /// Lowercase hexadecimal, two characters per byte.
    #[default]
    Hex,
    /// Standard base64 alphabet with `=` padding.
    Base64,
    /// URL-safe base64 alphabet without padding.
    #[value(name = "base64url")]
    Base64Url,
}

impl Encoding {
    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Encoding::Hex => "hex",
            Encoding::Base64 => "base64",
            Encoding::Base64Url => "base64url",
        }
    }

    /// Encode raw bytes.
    pub fn encode(&self, bytes: &[u8]) -> String {
        match self {
            Encoding::Hex => hex::encode(bytes),
            Encoding::Base64 => STANDARD.encode(bytes),
            Encoding::Base64Url => URL_SAFE_NO_PAD.encode(bytes),
        }
    }

    /// Decode text produced by [`Encoding::encode`].
    ///
    /// Returns `None` if the text is not valid for this encoding.
    pub fn decode(&self, text: &str) -> Option<Vec<u8>> {
        match self {
            Encoding::Hex => hex::decode(text).ok(),
            Encoding::Base64 => STANDARD.decode(text).ok(),
            Encoding::Base64Url => URL_SAFE_NO_PAD.decode(text).ok(),
        }
    }
}

impl FromStr for Encoding {
    type Err = Error;

    /// Case-insensitive; anything other than the three names is rejected.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hex" => Ok(Encoding::Hex),
            "base64" => Ok(Encoding::Base64),
            "base64url" => Ok(Encoding::Base64Url),
            _ => Err(Error::UnsupportedEncoding(s.to_string())),
        }
    }
}

impl TryFrom<String> for Encoding {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How to generate a secret: byte count and text encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationSpec {
    length: usize,
    encoding: Encoding,
}

impl GenerationSpec {
    /// Build a spec after checking the length.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLength`] for zero or oversized lengths.
    pub fn new(length: usize, encoding: Encoding) -> Result<Self> {
        validation::validate_length(length)?;
        Ok(Self { length, encoding })
    }

    /// Number of random bytes.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Encoding applied to the bytes.
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }
}

impl Default for GenerationSpec {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            encoding: Encoding::default(),
        }
    }
}

/// Generate an encoded random secret.
///
/// The raw bytes are wiped from memory once encoded.
pub fn generate_secret(spec: &GenerationSpec) -> String {
    let mut bytes = Zeroizing::new(vec![0u8; spec.length]);
    OsRng.fill_bytes(&mut bytes);
    spec.encoding.encode(&bytes)
}
