//! Command-line interface.

pub mod output;
pub mod prompt;

use std::path::PathBuf;

use clap::Parser;
use tracing::{debug, info};

use crate::core::config::Config;
use crate::core::constants::{self, ENCODING_ENV, FILE_ENV, LENGTH_ENV};
use crate::core::{apply_requests, request, validation, Always, Encoding, EnvFile, GenerationSpec};
use crate::error::{Error, Result};

/// add-env-var - add environment variables to .env files.
#[derive(Parser, Debug)]
#[command(
    name = "add-env-var",
    about = "Add environment variables to .env files",
    version,
    after_help = "Variables given as NAME get a random secret; NAME=value sets the value as-is."
)]
pub struct Cli {
    /// Variables to add (NAME or NAME=value)
    #[arg(required = true, value_name = "VARIABLES")]
    pub variables: Vec<String>,

    /// Length of the generated secret in bytes [default: 32]
    #[arg(short, long, env = LENGTH_ENV, value_parser = parse_length)]
    pub length: Option<usize>,

    /// Env file to update [default: .env]
    #[arg(short, long, env = FILE_ENV, value_name = "FILEPATH")]
    pub file: Option<PathBuf>,

    /// Encoding of generated secrets [default: hex]
    #[arg(short, long, env = ENCODING_ENV, value_enum, ignore_case = true)]
    pub encoding: Option<Encoding>,

    /// Overwrite existing variables without asking
    #[arg(short = 'y', long, visible_alias = "yes")]
    pub force: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Effective settings after merging flags, environment and config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Env file to read and write.
    pub file: PathBuf,
    /// Generation parameters for variables without a value.
    pub spec: GenerationSpec,
}

impl Settings {
    /// Resolve settings: command line and environment first, then the
    /// config file, then built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLength`] if the resolved length is unusable.
    pub fn resolve(cli: &Cli, config: &Config) -> Result<Self> {
        let defaults = &config.defaults;

        let file = cli
            .file
            .clone()
            .or_else(|| defaults.file.clone())
            .unwrap_or_else(|| PathBuf::from(constants::ENV_FILE));
        let length = cli
            .length
            .or(defaults.length)
            .unwrap_or(constants::DEFAULT_LENGTH);
        let encoding = cli.encoding.or(defaults.encoding).unwrap_or_default();

        let settings = Self {
            file,
            spec: GenerationSpec::new(length, encoding)?,
        };
        debug!(?settings, "resolved settings");
        Ok(settings)
    }
}

fn parse_length(s: &str) -> std::result::Result<usize, String> {
    let length: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a positive integer", s))?;
    validation::validate_length(length).map_err(|e| e.to_string())?;
    Ok(length)
}

/// Run the command.
///
/// Reads the env file, applies every requested variable and writes the
/// file back, even when every request was skipped.
pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let settings = Settings::resolve(&cli, &config)?;
    let requests = request::parse_all(&cli.variables)?;

    let cwd = std::env::current_dir().map_err(|e| Error::file_access(".", e))?;
    let path = cwd.join(&settings.file);
    let display_name = settings.file.display().to_string();

    let mut env = EnvFile::load(&path)?;
    debug!(path = %path.display(), existing = env.len(), "env file loaded");

    let changes = if cli.force {
        apply_requests(&mut env, &requests, &settings.spec, &mut Always(true))?
    } else {
        let mut prompt = prompt::Prompt::new(&display_name);
        apply_requests(&mut env, &requests, &settings.spec, &mut prompt)?
    };

    for change in changes.iter().filter(|c| !c.is_write()) {
        output::warn(&format!("kept existing {}", output::key(change.name())));
    }

    env.save(&path)?;
    info!(
        path = %path.display(),
        written = changes.iter().filter(|c| c.is_write()).count(),
        "env file written"
    );

    println!(
        "Updated {} successfully.",
        output::path(&path.display().to_string())
    );
    Ok(())
}
