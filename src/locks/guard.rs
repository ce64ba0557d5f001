//! RAII lock guard implementation.

use super::metadata::LockMetadata;
use super::operations::{acquire_with, release};
use std::path::{Path, PathBuf};

/// RAII guard for a held lock.
///
/// When dropped, the marker file is deleted on a best-effort basis.
#[derive(Debug)]
pub struct LockGuard {
    /// Path to the lock file.
    path: PathBuf,
}

impl LockGuard {
    /// Acquire the lock at `path`, returning a guard if it was free or stale.
    pub fn acquire<P: AsRef<Path>>(path: P) -> Option<Self> {
        Self::try_new(path.as_ref(), &LockMetadata::new())
    }

    /// Acquire the lock at `path` on behalf of a sync of `target`.
    pub fn acquire_for<P: AsRef<Path>, T: AsRef<Path>>(path: P, target: T) -> Option<Self> {
        Self::try_new(path.as_ref(), &LockMetadata::new().with_target(target))
    }

    fn try_new(path: &Path, metadata: &LockMetadata) -> Option<Self> {
        acquire_with(path, metadata).then(|| Self {
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the lock file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for LockGuard {
    fn drop(&mut self) {
        release(&self.path);
    }
}
