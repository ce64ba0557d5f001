//! CLI argument parsing for vault-hooks.
//!
//! Uses clap derive macros for declarative argument definitions.
//! Implementations live in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// vault-hooks: persist a session notes vault to git from editor hooks.
///
/// Syncing is opt-in: set CLAUDE_VAULT_GIT_PUSH=1 (or true) to let the hooks
/// stage, commit, and push the vault. Every sync skip or failure is silent
/// to the calling tool.
#[derive(Parser, Debug)]
#[command(name = "vault-hooks")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Available commands for vault-hooks.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Commit and push a vault if syncing is enabled.
    ///
    /// Never fails: disabled, non-repository, contended, and push-failure
    /// cases all exit 0.
    Sync(SyncArgs),

    /// Prompt-submit hook: record the prompt in the session file.
    ///
    /// Reads the hook JSON from stdin.
    Prompt,

    /// Stop hook: sync the vault holding this session's file.
    ///
    /// Reads the hook JSON from stdin.
    Stop,

    /// Inspect or clear the sync lock for a vault.
    Lock(LockCommand),
}

/// Arguments for the `sync` command.
#[derive(Parser, Debug)]
pub struct SyncArgs {
    /// Vault directory. Defaults to CLAUDE_VAULT_DIR, then the current directory.
    pub dir: Option<PathBuf>,
}

/// Lock subcommands.
#[derive(Parser, Debug)]
pub struct LockCommand {
    #[command(subcommand)]
    pub action: LockAction,
}

/// Available lock actions.
#[derive(Subcommand, Debug)]
pub enum LockAction {
    /// Show the sync lock for a vault, if held.
    Show(LockShowArgs),

    /// Clear the sync lock for a vault.
    ///
    /// Only stale locks are cleared unless --force is given.
    Clear(LockClearArgs),
}

/// Arguments for the `lock show` command.
#[derive(Parser, Debug)]
pub struct LockShowArgs {
    /// Vault directory. Defaults to CLAUDE_VAULT_DIR, then the current directory.
    pub dir: Option<PathBuf>,
}

/// Arguments for the `lock clear` command.
#[derive(Parser, Debug)]
pub struct LockClearArgs {
    /// Vault directory. Defaults to CLAUDE_VAULT_DIR, then the current directory.
    pub dir: Option<PathBuf>,

    /// Clear the lock even if it is not stale.
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_sync_with_dir() {
        let cli = Cli::try_parse_from(["vault-hooks", "sync", "/vault"]).unwrap();
        match cli.command {
            Command::Sync(args) => assert_eq!(args.dir, Some(PathBuf::from("/vault"))),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_lock_clear_force() {
        let cli = Cli::try_parse_from(["vault-hooks", "lock", "clear", "--force"]).unwrap();
        match cli.command {
            Command::Lock(LockCommand {
                action: LockAction::Clear(args),
            }) => {
                assert!(args.force);
                assert!(args.dir.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
