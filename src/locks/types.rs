//! Lock information structures.

use super::metadata::LockMetadata;
use std::path::PathBuf;
use std::time::Duration;

/// Snapshot of a lock marker on disk.
#[derive(Debug, Clone)]
pub struct LockInfo {
    /// The lock file path.
    pub path: PathBuf,

    /// Metadata written by the holder, if the marker content is readable.
    pub metadata: Option<LockMetadata>,

    /// Time since the marker was last modified.
    pub age: Duration,

    /// Whether the marker is older than the lock timeout.
    pub is_stale: bool,
}

impl LockInfo {
    /// Format the age as a human-readable string.
    pub fn age_string(&self) -> String {
        let secs = self.age.as_secs();
        let minutes = secs / 60;
        let hours = minutes / 60;
        let days = hours / 24;

        if days > 0 {
            format!("{}d {}h", days, hours % 24)
        } else if hours > 0 {
            format!("{}h {}m", hours, minutes % 60)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, secs % 60)
        } else {
            format!("{}s", secs)
        }
    }
}

impl std::fmt::Display for LockInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let owner = self
            .metadata
            .as_ref()
            .map(|m| m.owner.as_str())
            .unwrap_or("unknown");

        write!(
            f,
            "{} (owner: {}, age: {}{})",
            self.path.display(),
            owner,
            self.age_string(),
            if self.is_stale { ", STALE" } else { "" }
        )
    }
}
