//! Constants used throughout add-env-var.
//!
//! Centralizes default values, file names and environment variable names.

/// Env file written when no `--file` is given.
pub const ENV_FILE: &str = ".env";

/// Optional project config file, looked up in the working directory.
pub const CONFIG_FILE: &str = ".add-env-var.toml";

/// Default number of random bytes in a generated secret.
pub const DEFAULT_LENGTH: usize = 32;

/// Upper bound on the number of random bytes in a generated secret.
pub const MAX_LENGTH: usize = 4096;

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "ADD_ENV_VAR_LOG";

/// Environment variable overriding the target env file.
pub const FILE_ENV: &str = "ADD_ENV_VAR_FILE";

/// Environment variable overriding the secret length.
pub const LENGTH_ENV: &str = "ADD_ENV_VAR_LENGTH";

/// Environment variable overriding the secret encoding.
pub const ENCODING_ENV: &str = "ADD_ENV_VAR_ENCODING";
