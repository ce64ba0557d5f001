//! Result of a single sync pass.

/// Why a sync pass did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The feature gate is closed.
    Disabled,
    /// The target directory has no `.git` entry.
    NotARepository,
    /// Another invocation holds the lock for this directory.
    LockUnavailable,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::Disabled => "disabled",
            SkipReason::NotARepository => "not a repository",
            SkipReason::LockUnavailable => "lock unavailable",
        }
    }
}

/// Outcome of a sync pass. Exists only for the duration of one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// A gate stopped the pass before any git command ran.
    Skipped(SkipReason),
    /// The working tree was clean; no commit was made.
    NothingToCommit,
    /// A commit was made. `pushed` is false when the push failed.
    Completed { pushed: bool },
    /// Staging or committing failed for a reason other than a clean tree.
    Failed(String),
}

impl SyncOutcome {
    /// Whether this pass created a commit.
    pub fn committed(&self) -> bool {
        matches!(self, SyncOutcome::Completed { .. })
    }
}

impl std::fmt::Display for SyncOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SyncOutcome::Skipped(reason) => write!(f, "skipped ({})", reason.as_str()),
            SyncOutcome::NothingToCommit => write!(f, "nothing to commit"),
            SyncOutcome::Completed { pushed: true } => write!(f, "committed and pushed"),
            SyncOutcome::Completed { pushed: false } => write!(f, "committed, push failed"),
            SyncOutcome::Failed(reason) => write!(f, "failed: {}", reason),
        }
    }
}
