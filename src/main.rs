//! add-env-var - add environment variables to .env files.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use add_env_var::cli::{execute, output, Cli};
use add_env_var::core::constants::{CONFIG_FILE, LOG_ENV};
use add_env_var::error::Error;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("add_env_var=debug")
        } else {
            EnvFilter::new("add_env_var=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute(cli) {
        let hint = match &e {
            Error::Config(_) => Some(format!("check {}", CONFIG_FILE)),
            Error::Prompt(_) => Some("use --force to overwrite without prompting".to_string()),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = hint {
            output::hint(&hint);
        }
        std::process::exit(1);
    }
}
