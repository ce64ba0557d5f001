//! Config struct definition and environment loading.

use crate::gate::{self, GIT_PUSH_VAR};
use std::path::PathBuf;

/// Environment variable naming the vault directory used by the hook commands.
pub const VAULT_DIR_VAR: &str = "CLAUDE_VAULT_DIR";

/// Configuration for a single hook invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Raw value of the sync toggle (`CLAUDE_VAULT_GIT_PUSH`).
    pub git_push: Option<String>,

    /// Vault directory override (`CLAUDE_VAULT_DIR`).
    pub vault_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            git_push: non_blank(GIT_PUSH_VAR),
            vault_dir: non_blank(VAULT_DIR_VAR).map(|v| PathBuf::from(v.trim())),
        }
    }

    /// Whether the sync workflow is switched on.
    pub fn sync_enabled(&self) -> bool {
        self.git_push.as_deref().is_some_and(gate::is_truthy)
    }
}
