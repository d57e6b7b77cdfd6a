//! Merging requests into an env file.
//!
//! The overwrite decision for existing variables is injected through
//! [`OnConflict`], so the same merge runs behind a terminal prompt, a
//! `--force` flag or a test closure.

use tracing::debug;

use crate::core::env::EnvFile;
use crate::core::request::VariableRequest;
use crate::core::secret::{generate_secret, GenerationSpec};
use crate::error::Result;

/// Decides whether an existing variable may be overwritten.
pub trait OnConflict {
    /// Called once per requested name that already exists.
    ///
    /// # Errors
    ///
    /// Implementations that ask a user may fail to get an answer.
    fn overwrite(&mut self, name: &str) -> Result<bool>;
}

impl<F> OnConflict for F
where
    F: FnMut(&str) -> bool,
{
    fn overwrite(&mut self, name: &str) -> Result<bool> {
        Ok(self(name))
    }
}

/// Fixed answer for every conflict.
#[derive(Debug, Clone, Copy)]
pub struct Always(pub bool);

impl OnConflict for Always {
    fn overwrite(&mut self, _name: &str) -> Result<bool> {
        Ok(self.0)
    }
}

/// What happened to one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    /// New variable appended.
    Added { name: String, generated: bool },
    /// Existing variable replaced after confirmation.
    Overwritten { name: String, generated: bool },
    /// Existing variable left untouched.
    Skipped { name: String },
}

impl Change {
    /// Variable name the change applies to.
    pub fn name(&self) -> &str {
        match self {
            Change::Added { name, .. }
            | Change::Overwritten { name, .. }
            | Change::Skipped { name } => name,
        }
    }

    /// Whether the env file was modified.
    pub fn is_write(&self) -> bool {
        !matches!(self, Change::Skipped { .. })
    }
}

/// Apply requests to an env file in order.
///
/// Existing names consult `on_conflict`; declined names are skipped.
/// Requests without an explicit value get a secret generated from `spec`.
/// New names are appended after the existing entries.
///
/// # Errors
///
/// Propagates failures from `on_conflict`. Requests already applied stay
/// applied in `env`.
pub fn apply_requests<C>(
    env: &mut EnvFile,
    requests: &[VariableRequest],
    spec: &GenerationSpec,
    on_conflict: &mut C,
) -> Result<Vec<Change>>
where
    C: OnConflict + ?Sized,
{
    let mut changes = Vec::with_capacity(requests.len());

    for request in requests {
        let name = request.name();
        let exists = env.contains(name);

        if exists && !on_conflict.overwrite(name)? {
            debug!(variable = name, "keeping existing value");
            changes.push(Change::Skipped {
                name: name.to_string(),
            });
            continue;
        }

        let generated = request.value().is_none();
        let value = match request.value() {
            Some(value) => value.to_string(),
            None => generate_secret(spec),
        };
        env.set(name, &value);

        debug!(variable = name, generated, overwritten = exists, "variable set");
        changes.push(if exists {
            Change::Overwritten {
                name: name.to_string(),
                generated,
            }
        } else {
            Change::Added {
                name: name.to_string(),
                generated,
            }
        });
    }

    Ok(changes)
}
