//! Session hook handlers.
//!
//! `prompt` appends each submitted prompt to a per-session markdown file in
//! the vault. `stop` syncs the vault that holds that file.

use crate::config::Config;
use crate::error::{Result, VaultError};
use crate::hook::{self, PromptInput, StopInput};
use crate::session::{SessionData, SessionStore};
use crate::sync;
use chrono::{DateTime, Local};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Characters of the session ID used in session file names.
const SESSION_ID_PREFIX_LEN: usize = 8;

pub(super) fn cmd_prompt(config: &Config) -> Result<()> {
    let input: PromptInput = hook::read_stdin()?;
    let store = SessionStore::in_temp_dir();

    let removed = store.cleanup_stale();
    if removed > 0 {
        debug!(removed, "removed stale session maps");
    }

    let vault = prompt_vault_dir(config, &input)?;
    record_prompt(&store, &vault, &input, Local::now())?;
    Ok(())
}

pub(super) fn cmd_stop(config: &Config) -> Result<()> {
    let input: StopInput = hook::read_stdin()?;
    let store = SessionStore::in_temp_dir();

    let Some(target) = stop_target(&store, config, &input)? else {
        debug!(session = %input.session_id, "no session recorded; nothing to sync");
        return Ok(());
    };

    let outcome = sync::run(config, &target);
    debug!(dir = %target.display(), %outcome, "stop hook sync finished");
    Ok(())
}

/// Vault for a prompt: the configured directory, else the hook's cwd.
pub(super) fn prompt_vault_dir(config: &Config, input: &PromptInput) -> Result<PathBuf> {
    if let Some(dir) = &config.vault_dir {
        return Ok(dir.clone());
    }

    if input.cwd.trim().is_empty() {
        return Err(VaultError::UserError(
            "no vault directory: set CLAUDE_VAULT_DIR or provide cwd in the hook input"
                .to_string(),
        ));
    }

    Ok(PathBuf::from(input.cwd.trim()))
}

/// Session file name: `<date>_<session id prefix>.md`.
pub(super) fn session_file_name(session_id: &str, started: DateTime<Local>) -> String {
    let prefix: String = session_id.chars().take(SESSION_ID_PREFIX_LEN).collect();
    format!("{}_{}.md", started.format("%Y-%m-%d"), prefix)
}

/// Append a prompt to the session file and bump the session's prompt counter.
///
/// The first prompt of a session creates the file with a header.
pub(super) fn record_prompt(
    store: &SessionStore,
    vault: &Path,
    input: &PromptInput,
    now: DateTime<Local>,
) -> Result<SessionData> {
    let session = match store.read(&input.session_id)? {
        Some(existing) => SessionData {
            file_path: existing.file_path,
            prompt_num: existing.prompt_num + 1,
        },
        None => {
            let file_path = vault.join(session_file_name(&input.session_id, now));
            start_session_file(&file_path, &input.session_id)?;
            SessionData {
                file_path,
                prompt_num: 1,
            }
        }
    };

    let entry = format!("## Prompt {}\n\n{}\n\n", session.prompt_num, input.prompt.trim_end());
    append(&session.file_path, &entry)?;

    store.write(&input.session_id, &session.file_path, session.prompt_num)?;
    Ok(session)
}

/// Directory to sync when a session stops, if the session was recorded.
pub(super) fn stop_target(
    store: &SessionStore,
    config: &Config,
    input: &StopInput,
) -> Result<Option<PathBuf>> {
    let Some(session) = store.read(&input.session_id)? else {
        return Ok(None);
    };

    if let Some(dir) = &config.vault_dir {
        return Ok(Some(dir.clone()));
    }

    Ok(session.file_path.parent().map(Path::to_path_buf))
}

fn start_session_file(path: &Path, session_id: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            VaultError::UserError(format!(
                "failed to create vault directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    if path.exists() {
        return Ok(());
    }

    append(path, &format!("# Session {}\n\n", session_id))
}

fn append(path: &Path, text: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            VaultError::UserError(format!(
                "failed to open session file '{}': {}",
                path.display(),
                e
            ))
        })?;

    file.write_all(text.as_bytes()).map_err(|e| {
        VaultError::UserError(format!(
            "failed to write session file '{}': {}",
            path.display(),
            e
        ))
    })
}
