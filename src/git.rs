//! Git command runner for vault-hooks.
//!
//! Git is driven as an external process with captured stdout/stderr. All git
//! operations go through this module; nothing here links against libgit2.

use crate::error::{Result, VaultError};
use std::path::Path;
use std::process::{Command, Output};

/// Name of the version-control metadata entry inside a working tree.
pub const GIT_DIR_NAME: &str = ".git";

/// Output markers git prints when a commit has nothing staged.
const NOTHING_TO_COMMIT_MARKERS: &[&str] = &[
    "nothing to commit",
    "nothing added to commit",
    "no changes added to commit",
];

/// Captured output of a git command.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output from the command (trimmed).
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl GitOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }

    /// Returns true if stdout is empty.
    pub fn is_empty(&self) -> bool {
        self.stdout.is_empty()
    }

    /// Stderr if git wrote anything there, stdout otherwise.
    pub fn diagnostic(&self) -> &str {
        if self.stderr.is_empty() {
            &self.stdout
        } else {
            &self.stderr
        }
    }

    fn mentions(&self, needle: &str) -> bool {
        self.stdout.contains(needle) || self.stderr.contains(needle)
    }
}

/// Result of a commit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// A new commit was created.
    Committed,
    /// Nothing was staged; git declined to create a commit.
    NothingToCommit,
}

/// Run git, returning the exit status alongside the captured output.
///
/// Only a failure to spawn git is an error here; a non-zero exit is reported
/// through the returned `bool`.
fn run_git_status<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<(bool, i32, GitOutput)> {
    // Commit detection matches git's English messages.
    let output = Command::new("git")
        .current_dir(cwd.as_ref())
        .env("LC_ALL", "C")
        .args(args)
        .output()
        .map_err(|e| {
            VaultError::GitError(format!(
                "failed to execute git {}: {}",
                args.first().unwrap_or(&""),
                e
            ))
        })?;

    let code = output.status.code().unwrap_or(-1);
    Ok((output.status.success(), code, GitOutput::from_output(&output)))
}

/// Run a git command with the specified working directory.
///
/// # Returns
///
/// * `Ok(GitOutput)` - On successful execution (exit code 0)
/// * `Err(VaultError::GitError)` - On spawn failure or non-zero exit code
pub fn run_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    let (success, code, output) = run_git_status(cwd, args)?;

    if success {
        Ok(output)
    } else {
        Err(VaultError::GitError(format!(
            "git {} failed (exit code {}): {}",
            args.first().unwrap_or(&""),
            code,
            output.diagnostic()
        )))
    }
}

/// Check whether `dir` is the root of a git working tree.
///
/// Only looks for `.git` directly under `dir` (a directory, or the file form
/// used by linked worktrees). Missing directories and I/O errors count as
/// "not a repository".
pub fn is_git_repo<P: AsRef<Path>>(dir: P) -> bool {
    dir.as_ref().join(GIT_DIR_NAME).try_exists().unwrap_or(false)
}

/// Stage every change in the working tree (`git add -A`).
pub fn stage_all<P: AsRef<Path>>(cwd: P) -> Result<()> {
    run_git(cwd, &["add", "-A"]).map(|_| ())
}

/// Commit staged changes with the given message.
///
/// A commit with nothing staged is not an error: it yields
/// [`CommitOutcome::NothingToCommit`].
pub fn commit<P: AsRef<Path>>(cwd: P, message: &str) -> Result<CommitOutcome> {
    let (success, code, output) = run_git_status(cwd, &["commit", "-m", message])?;

    if success {
        return Ok(CommitOutcome::Committed);
    }

    if NOTHING_TO_COMMIT_MARKERS.iter().any(|m| output.mentions(m)) {
        return Ok(CommitOutcome::NothingToCommit);
    }

    Err(VaultError::GitError(format!(
        "git commit failed (exit code {}): {}",
        code,
        output.diagnostic()
    )))
}

/// Push the current branch to its configured upstream (`git push`).
pub fn push<P: AsRef<Path>>(cwd: P) -> Result<()> {
    run_git(cwd, &["push"]).map(|_| ())
}
