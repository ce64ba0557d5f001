//! Best-effort vault sync: stage, commit, and push a working tree.
//!
//! # Steps
//!
//! 1. Feature gate closed: skip without touching the filesystem
//! 2. Target is not a git working tree: skip
//! 3. Per-directory lock held by someone else: skip
//! 4. `git add -A`
//! 5. `git commit` (nothing staged is a silent no-op)
//! 6. `git push` (failure is logged, the local commit stays)
//! 7. Release the lock (guard drop, on every path past step 3)
//!
//! Nothing here returns an error to the caller. Sync is housekeeping; the
//! hook that triggers it must never fail because of it.

mod outcome;
mod workflow;


pub use outcome::{SkipReason, SyncOutcome};
pub use workflow::{COMMIT_MESSAGE_PREFIX, commit_message, run, sync_if_enabled};
