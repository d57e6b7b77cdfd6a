//! add-env-var - add variables and generated secrets to .env files.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── mod           # Argument definitions and execution
//! │   ├── prompt        # Overwrite confirmation
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── config        # .add-env-var.toml defaults
//!     ├── editor        # Merging requests into an env file
//!     ├── env           # Env file parsing and serialization
//!     ├── request       # NAME / NAME=value arguments
//!     ├── secret        # Random secret generation
//!     └── validation    # Name and length checks
//! ```
//!
//! # Example
//!
//! ```
//! use add_env_var::core::{apply_requests, Always, Encoding, EnvFile, GenerationSpec, VariableRequest};
//!
//! let mut env = EnvFile::parse("A=1\nB=2");
//! let requests = vec![
//!     "B=9".parse::<VariableRequest>()?,
//!     "TOKEN".parse::<VariableRequest>()?,
//! ];
//! let spec = GenerationSpec::new(16, Encoding::Base64Url)?;
//!
//! apply_requests(&mut env, &requests, &spec, &mut Always(true))?;
//!
//! assert_eq!(env.get("B"), Some("9"));
//! assert_eq!(env.get("TOKEN").map(str::len), Some(22));
//! # Ok::<(), add_env_var::error::Error>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;
