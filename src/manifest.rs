//! Manifest loading and command lookup.
//!
//! The manifest is the read-only input contract: one binary name plus its
//! command declarations. Loading is the only I/O in the crate.
use crate::command::CommandSpec;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level manifest consumed by the CLI.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Manifest {
    pub bin: String,
    #[serde(default)]
    pub commands: Vec<CommandSpec>,
}

impl Manifest {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("read manifest {}", path.display()))?;
        let manifest = serde_json::from_str(&content)
            .with_context(|| format!("parse manifest {}", path.display()))?;
        Ok(manifest)
    }

    /// Find a command by id, falling back to alias lookup.
    pub fn find(&self, name: &str) -> Option<&CommandSpec> {
        self.commands
            .iter()
            .find(|command| command.id == name)
            .or_else(|| {
                self.commands
                    .iter()
                    .find(|command| command.aliases.iter().any(|alias| alias == name))
            })
    }
}
