//! The sync pass itself.

use super::outcome::{SkipReason, SyncOutcome};
use crate::config::Config;
use crate::git::{self, CommitOutcome};
use crate::locks::{LockGuard, lock_path_for};
use chrono::{DateTime, Local};
use std::path::Path;
use tracing::{debug, info, warn};

/// Fixed prefix of every automated sync commit.
pub const COMMIT_MESSAGE_PREFIX: &str = "claude: sync session";

/// Commit message for a sync at `at`.
pub fn commit_message(at: DateTime<Local>) -> String {
    format!(
        "{} {}",
        COMMIT_MESSAGE_PREFIX,
        at.format("%Y-%m-%d %H:%M:%S")
    )
}

/// Sync `dir` if the environment enables it.
///
/// Safe to call unconditionally from any hook: never returns an error and
/// never blocks beyond one pass of git commands.
pub fn sync_if_enabled<P: AsRef<Path>>(dir: P) {
    let dir = dir.as_ref();
    let outcome = run(&Config::from_env(), dir);
    debug!(dir = %dir.display(), %outcome, "vault sync finished");
}

/// Run one sync pass over `dir` with the given configuration.
pub fn run(config: &Config, dir: &Path) -> SyncOutcome {
    if !config.sync_enabled() {
        return SyncOutcome::Skipped(SkipReason::Disabled);
    }

    if !git::is_git_repo(dir) {
        debug!(dir = %dir.display(), "not a git repository; skipping sync");
        return SyncOutcome::Skipped(SkipReason::NotARepository);
    }

    let Some(_guard) = LockGuard::acquire_for(lock_path_for(dir), dir) else {
        debug!(dir = %dir.display(), "sync already in progress; skipping");
        return SyncOutcome::Skipped(SkipReason::LockUnavailable);
    };

    stage_commit_push(dir)
}

/// Steps 4-6. The caller holds the lock for the whole call.
fn stage_commit_push(dir: &Path) -> SyncOutcome {
    if let Err(e) = git::stage_all(dir) {
        warn!(dir = %dir.display(), error = %e, "failed to stage vault changes");
        return SyncOutcome::Failed(e.to_string());
    }

    match git::commit(dir, &commit_message(Local::now())) {
        Ok(CommitOutcome::Committed) => {}
        Ok(CommitOutcome::NothingToCommit) => return SyncOutcome::NothingToCommit,
        Err(e) => {
            warn!(dir = %dir.display(), error = %e, "failed to commit vault changes");
            return SyncOutcome::Failed(e.to_string());
        }
    }

    match git::push(dir) {
        Ok(()) => {
            info!(dir = %dir.display(), "vault changes committed and pushed");
            SyncOutcome::Completed { pushed: true }
        }
        Err(e) => {
            warn!(dir = %dir.display(), error = %e, "push failed; commit kept locally");
            SyncOutcome::Completed { pushed: false }
        }
    }
}
