//! Overwrite confirmation.
//!
//! Asks on the terminal before replacing a variable that already exists.

use std::io::{self, IsTerminal};

use dialoguer::Confirm;
use tracing::debug;

use crate::cli::output;
use crate::core::OnConflict;
use crate::error::Result;

/// Terminal yes/no prompt, defaulting to "no".
///
/// Without a terminal on stdin and stderr the default is taken without
/// asking.
pub struct Prompt {
    file: String,
    interactive: bool,
}

impl Prompt {
    /// Prompt about variables in `file`, detecting whether a terminal is
    /// attached.
    pub fn new(file: &str) -> Self {
        Self {
            file: file.to_string(),
            interactive: io::stdin().is_terminal() && io::stderr().is_terminal(),
        }
    }

    fn message(&self, name: &str) -> String {
        format!(
            "Variable {} already exists in {}. Overwrite?",
            output::key(name),
            self.file
        )
    }
}

impl OnConflict for Prompt {
    fn overwrite(&mut self, name: &str) -> Result<bool> {
        if !self.interactive {
            debug!(variable = name, "no terminal, keeping existing value");
            output::hint(&format!(
                "{} exists and no terminal is attached; use --force to overwrite",
                name
            ));
            return Ok(false);
        }

        let answer = Confirm::new()
            .with_prompt(self.message(name))
            .default(false)
            .interact()?;
        Ok(answer)
    }
}
