//! Core library components.
//!
//! Parsing and serializing env files, generating secrets and merging
//! requested variables. Nothing here prompts or prints.

pub mod config;
pub mod constants;
pub mod editor;
pub mod env;
pub mod request;
pub mod secret;
pub mod validation;

pub use editor::{apply_requests, Always, Change, OnConflict};
pub use env::EnvFile;
pub use request::VariableRequest;
pub use secret::{generate_secret, Encoding, GenerationSpec};
