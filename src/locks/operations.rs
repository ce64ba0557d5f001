//! Lock acquisition, release, inspection, and clearing.

use super::metadata::LockMetadata;
use super::types::LockInfo;
use crate::error::{Result, VaultError};
use sha2::{Digest, Sha256};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tracing::{debug, warn};

/// Age after which a lock marker is considered abandoned.
///
/// A sync pass is three git invocations; it should finish well inside this.
pub const LOCK_TIMEOUT: Duration = Duration::from_secs(5 * 60);

const LOCK_FILE_PREFIX: &str = "vault-sync-";

/// Lock path for syncs of `dir`.
///
/// The path lives in the OS temp directory and is keyed by a hash of the
/// canonicalized directory, so every invocation on the same target contends
/// on the same file while unrelated directories never contend.
pub fn lock_path_for<P: AsRef<Path>>(dir: P) -> PathBuf {
    let dir = dir.as_ref();
    let canonical = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());

    let digest = Sha256::digest(canonical.as_os_str().as_encoded_bytes());
    let key = hex::encode(digest);

    std::env::temp_dir().join(format!("{}{}.lock", LOCK_FILE_PREFIX, &key[..16]))
}

/// Try to take the lock at `path` without blocking.
///
/// Returns `true` when the marker was created by this call. An existing
/// marker older than [`LOCK_TIMEOUT`] is removed and the exclusive create is
/// retried once. Filesystem errors count as failure to acquire.
pub fn acquire<P: AsRef<Path>>(path: P) -> bool {
    acquire_with(path.as_ref(), &LockMetadata::new())
}

pub(super) fn acquire_with(path: &Path, metadata: &LockMetadata) -> bool {
    match create_marker(path, metadata) {
        Ok(()) => return true,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {}
        Err(e) => {
            warn!(lock = %path.display(), error = %e, "failed to create lock file");
            return false;
        }
    }

    match marker_age(path) {
        Ok(age) if age > LOCK_TIMEOUT => {
            warn!(
                lock = %path.display(),
                age_secs = age.as_secs(),
                "removing stale lock"
            );
            if let Err(e) = fs::remove_file(path)
                && e.kind() != io::ErrorKind::NotFound
            {
                warn!(lock = %path.display(), error = %e, "failed to remove stale lock");
                return false;
            }
        }
        Ok(_) => {
            debug!(lock = %path.display(), "lock is held by another process");
            return false;
        }
        // Released between our create and the stat.
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => {
            warn!(lock = %path.display(), error = %e, "failed to inspect lock file");
            return false;
        }
    }

    match create_marker(path, metadata) {
        Ok(()) => true,
        Err(e) => {
            debug!(lock = %path.display(), error = %e, "lock retry failed");
            false
        }
    }
}

/// Release the lock at `path`.
///
/// A missing marker is fine. Other failures are logged and swallowed; a later
/// acquire either finds the file gone or reclaims it once stale.
pub fn release<P: AsRef<Path>>(path: P) {
    let path = path.as_ref();
    match fs::remove_file(path) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => debug!(lock = %path.display(), error = %e, "failed to release lock"),
    }
}

/// Inspect the lock at `path`.
///
/// # Returns
///
/// * `Ok(None)` - No lock file exists
/// * `Ok(Some(LockInfo))` - The lock exists; metadata is included if readable
/// * `Err(VaultError::LockError)` - The lock file could not be inspected
pub fn inspect<P: AsRef<Path>>(path: P) -> Result<Option<LockInfo>> {
    let path = path.as_ref();

    let age = match marker_age(path) {
        Ok(age) => age,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(VaultError::LockError(format!(
                "failed to inspect lock '{}': {}",
                path.display(),
                e
            )));
        }
    };

    Ok(Some(LockInfo {
        path: path.to_path_buf(),
        metadata: LockMetadata::from_file(path),
        age,
        is_stale: age > LOCK_TIMEOUT,
    }))
}

/// Clear the lock at `path`.
///
/// Without `force`, only a stale lock is removed.
///
/// # Returns
///
/// * `Ok(LockInfo)` - Information about the cleared lock
/// * `Err(VaultError::UserError)` - No lock exists at `path`
/// * `Err(VaultError::LockError)` - The lock is live and `force` is unset, or removal failed
pub fn clear<P: AsRef<Path>>(path: P, force: bool) -> Result<LockInfo> {
    let path = path.as_ref();

    let info = inspect(path)?.ok_or_else(|| {
        VaultError::UserError(format!("no lock exists at: {}", path.display()))
    })?;

    if !info.is_stale && !force {
        return Err(VaultError::LockError(format!(
            "lock is held and not stale (age {}, timeout {}m).\n\
             Use --force to clear it anyway: {}",
            info.age_string(),
            LOCK_TIMEOUT.as_secs() / 60,
            path.display()
        )));
    }

    fs::remove_file(path).map_err(|e| {
        VaultError::LockError(format!("failed to clear lock '{}': {}", path.display(), e))
    })?;

    Ok(info)
}

/// Exclusively create the marker and write its metadata.
///
/// Only the create is significant; a failed metadata write still leaves the
/// caller holding the lock.
fn create_marker(path: &Path, metadata: &LockMetadata) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new().write(true).create_new(true).open(path)?;

    let written = metadata
        .to_json()
        .map_err(io::Error::other)
        .and_then(|json| file.write_all(json.as_bytes()));
    if let Err(e) = written {
        debug!(lock = %path.display(), error = %e, "failed to write lock metadata");
    }

    Ok(())
}

/// Time since the marker was last modified. Future mtimes count as zero.
fn marker_age(path: &Path) -> io::Result<Duration> {
    let modified = fs::metadata(path)?.modified()?;
    Ok(SystemTime::now()
        .duration_since(modified)
        .unwrap_or(Duration::ZERO))
}
