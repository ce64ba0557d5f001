//! Advisory locking for vault syncs.
//!
//! A lock is a marker file created with **create_new** semantics (exclusive
//! create), so only one process can hold a given lock at a time. Locks are
//! scoped per target directory and live in the OS temp directory.
//!
//! # Staleness
//!
//! A marker whose modification time is older than [`LOCK_TIMEOUT`] is
//! considered abandoned by a crashed holder. Any caller may delete it and
//! retry the exclusive create once. There is no heartbeat or renewal.
//!
//! # Lock Metadata
//!
//! The marker holds JSON [`LockMetadata`] (owner, pid, creation time, target)
//! for `vault-hooks lock show`. Acquisition never reads it.
//!
//! # RAII Guards
//!
//! [`LockGuard`] releases the lock when dropped, so every exit path out of a
//! guarded section cleans up.

mod guard;
mod metadata;
mod operations;
mod types;


pub use guard::LockGuard;
pub use metadata::LockMetadata;
pub use operations::{LOCK_TIMEOUT, acquire, clear, inspect, lock_path_for, release};
pub use types::LockInfo;
