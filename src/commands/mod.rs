//! Command implementations for vault-hooks.
//!
//! This module routes CLI commands to their handlers.

mod hooks;
mod lock;

#[cfg(test)]
mod tests;

use crate::cli::{Command, LockAction, LockCommand, SyncArgs};
use crate::config::Config;
use crate::error::{Result, VaultError};
use crate::sync;
use std::path::{Path, PathBuf};

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    let config = Config::from_env();

    match command {
        Command::Sync(args) => cmd_sync(&config, args),
        Command::Prompt => hooks::cmd_prompt(&config),
        Command::Stop => hooks::cmd_stop(&config),
        Command::Lock(lock_cmd) => dispatch_lock(&config, lock_cmd),
    }
}

/// Dispatch lock subcommands.
fn dispatch_lock(config: &Config, lock_cmd: LockCommand) -> Result<()> {
    match lock_cmd.action {
        LockAction::Show(args) => lock::cmd_lock_show(config, args),
        LockAction::Clear(args) => lock::cmd_lock_clear(config, args),
    }
}

fn cmd_sync(config: &Config, args: SyncArgs) -> Result<()> {
    let dir = resolve_vault_dir(config, args.dir.as_deref())?;
    sync::sync_if_enabled(&dir);
    Ok(())
}

/// Pick the vault directory: explicit argument, then config, then cwd.
pub(crate) fn resolve_vault_dir(config: &Config, explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }

    if let Some(dir) = &config.vault_dir {
        return Ok(dir.clone());
    }

    std::env::current_dir().map_err(|e| {
        VaultError::UserError(format!("failed to get current working directory: {}", e))
    })
}
