//! Session map store.
//!
//! Maps a session ID to the markdown file recording that session and the
//! number of prompts recorded so far. Each mapping is a small text file in
//! the OS temp directory:
//!
//! ```text
//! /path/to/vault/2026-10-15_abcd1234.md
//! 3
//! ```

use crate::error::{Result, VaultError};
use globset::Glob;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tracing::debug;

const MAP_FILE_PREFIX: &str = "claude_session_";
const MAP_FILE_GLOB: &str = "claude_session_*.txt";

/// Map files untouched for this long are removed by [`SessionStore::cleanup_stale`].
pub const STALE_AFTER: Duration = Duration::from_secs(24 * 60 * 60);

/// A session's recording file and prompt counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionData {
    pub file_path: PathBuf,
    pub prompt_num: u32,
}

/// Directory holding session map files.
#[derive(Debug, Clone)]
pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Store rooted in the OS temp directory.
    pub fn in_temp_dir() -> Self {
        Self::new(std::env::temp_dir())
    }

    /// Path of the map file for `session_id`.
    ///
    /// Rejects IDs that could escape the store directory.
    pub fn map_path(&self, session_id: &str) -> Result<PathBuf> {
        let invalid = session_id.is_empty()
            || session_id.contains(['/', '\\', '\0'])
            || session_id.contains("..");
        if invalid {
            return Err(VaultError::UserError(format!(
                "invalid session id: {:?}",
                session_id
            )));
        }

        Ok(self
            .dir
            .join(format!("{}{}.txt", MAP_FILE_PREFIX, session_id)))
    }

    /// Read the mapping for `session_id`.
    ///
    /// # Returns
    ///
    /// * `Ok(None)` - No mapping recorded for this session
    /// * `Ok(Some(SessionData))` - The recorded mapping
    /// * `Err(VaultError::UserError)` - The map file is unreadable or malformed
    pub fn read(&self, session_id: &str) -> Result<Option<SessionData>> {
        let path = self.map_path(session_id)?;

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(VaultError::UserError(format!(
                    "failed to read session map '{}': {}",
                    path.display(),
                    e
                )));
            }
        };

        let mut lines = content.trim().splitn(2, '\n');
        let (Some(file_path), Some(count)) = (lines.next(), lines.next()) else {
            return Err(VaultError::UserError(format!(
                "invalid session map format: {}",
                path.display()
            )));
        };

        let prompt_num = count.trim().parse::<u32>().map_err(|e| {
            VaultError::UserError(format!(
                "invalid prompt number in session map '{}': {}",
                path.display(),
                e
            ))
        })?;

        Ok(Some(SessionData {
            file_path: PathBuf::from(file_path.trim()),
            prompt_num,
        }))
    }

    /// Record the mapping for `session_id`.
    pub fn write<P: AsRef<Path>>(&self, session_id: &str, file_path: P, prompt_num: u32) -> Result<()> {
        let path = self.map_path(session_id)?;
        let content = format!("{}\n{}", file_path.as_ref().display(), prompt_num);

        fs::write(&path, content).map_err(|e| {
            VaultError::UserError(format!(
                "failed to write session map '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Remove map files older than [`STALE_AFTER`]. Returns how many were removed.
    pub fn cleanup_stale(&self) -> usize {
        self.cleanup_older_than(STALE_AFTER)
    }

    /// Remove map files not modified within `max_age`. Best-effort.
    pub fn cleanup_older_than(&self, max_age: Duration) -> usize {
        let matcher = match Glob::new(MAP_FILE_GLOB) {
            Ok(glob) => glob.compile_matcher(),
            Err(e) => {
                debug!(error = %e, "invalid session map glob");
                return 0;
            }
        };

        let Ok(entries) = fs::read_dir(&self.dir) else {
            return 0;
        };

        let Some(cutoff) = SystemTime::now().checked_sub(max_age) else {
            return 0;
        };

        let mut removed = 0;
        for entry in entries.flatten() {
            if !matcher.is_match(entry.file_name()) {
                continue;
            }

            let Ok(modified) = entry.metadata().and_then(|m| m.modified()) else {
                continue;
            };

            if modified < cutoff {
                match fs::remove_file(entry.path()) {
                    Ok(()) => removed += 1,
                    Err(e) => {
                        debug!(path = %entry.path().display(), error = %e, "failed to remove stale session map")
                    }
                }
            }
        }

        removed
    }
}
