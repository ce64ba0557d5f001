//! Tests for command handlers.

use super::hooks::{prompt_vault_dir, record_prompt, session_file_name, stop_target};
use super::resolve_vault_dir;
use crate::config::Config;
use crate::hook::{PromptInput, StopInput};
use crate::session::SessionStore;
use crate::sync::{self, COMMIT_MESSAGE_PREFIX, SyncOutcome};
use crate::test_support::{commit_count, create_test_repo_with_remote, head_subject};
use chrono::{Local, TimeZone};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn prompt(session_id: &str, cwd: &Path, text: &str) -> PromptInput {
    PromptInput {
        session_id: session_id.to_string(),
        cwd: cwd.to_string_lossy().to_string(),
        prompt: text.to_string(),
    }
}

fn stop(session_id: &str) -> StopInput {
    StopInput {
        session_id: session_id.to_string(),
        transcript_path: String::new(),
    }
}

#[test]
fn test_resolve_vault_dir_precedence() {
    let config = Config {
        git_push: None,
        vault_dir: Some(PathBuf::from("/configured")),
    };

    let explicit = resolve_vault_dir(&config, Some(Path::new("/explicit"))).unwrap();
    assert_eq!(explicit, PathBuf::from("/explicit"));

    let configured = resolve_vault_dir(&config, None).unwrap();
    assert_eq!(configured, PathBuf::from("/configured"));

    let fallback = resolve_vault_dir(&Config::default(), None).unwrap();
    assert_eq!(fallback, std::env::current_dir().unwrap());
}

#[test]
fn test_session_file_name() {
    let at = Local.with_ymd_and_hms(2026, 10, 15, 9, 30, 0).unwrap();
    assert_eq!(
        session_file_name("3f2a9c1e-77aa-4c4b", at),
        "2026-10-15_3f2a9c1e.md"
    );
    assert_eq!(session_file_name("abc", at), "2026-10-15_abc.md");
}

#[test]
fn test_prompt_vault_dir_prefers_config() {
    let input = prompt("s1", Path::new("/from/cwd"), "hi");

    let configured = Config {
        git_push: None,
        vault_dir: Some(PathBuf::from("/vault")),
    };
    assert_eq!(
        prompt_vault_dir(&configured, &input).unwrap(),
        PathBuf::from("/vault")
    );
    assert_eq!(
        prompt_vault_dir(&Config::default(), &input).unwrap(),
        PathBuf::from("/from/cwd")
    );

    let no_cwd = prompt("s1", Path::new(""), "hi");
    assert!(prompt_vault_dir(&Config::default(), &no_cwd).is_err());
}

#[test]
fn test_record_prompt_creates_then_appends() {
    let store_dir = TempDir::new().unwrap();
    let vault = TempDir::new().unwrap();
    let store = SessionStore::new(store_dir.path());
    let now = Local.with_ymd_and_hms(2026, 10, 15, 9, 30, 0).unwrap();

    let first = record_prompt(
        &store,
        vault.path(),
        &prompt("session-1234", vault.path(), "first question"),
        now,
    )
    .unwrap();
    assert_eq!(first.prompt_num, 1);
    assert_eq!(first.file_path, vault.path().join("2026-10-15_session-.md"));

    let second = record_prompt(
        &store,
        vault.path(),
        &prompt("session-1234", vault.path(), "second question\n"),
        now,
    )
    .unwrap();
    assert_eq!(second.prompt_num, 2);
    assert_eq!(second.file_path, first.file_path);

    let content = std::fs::read_to_string(&first.file_path).unwrap();
    assert_eq!(
        content,
        "# Session session-1234\n\n\
         ## Prompt 1\n\nfirst question\n\n\
         ## Prompt 2\n\nsecond question\n\n"
    );

    let mapped = store.read("session-1234").unwrap().unwrap();
    assert_eq!(mapped, second);
}

#[test]
fn test_record_prompt_creates_missing_vault_dir() {
    let store_dir = TempDir::new().unwrap();
    let root = TempDir::new().unwrap();
    let vault = root.path().join("vault").join("sessions");
    let store = SessionStore::new(store_dir.path());

    let data = record_prompt(&store, &vault, &prompt("abc", &vault, "hello"), Local::now()).unwrap();

    assert!(data.file_path.starts_with(&vault));
    assert!(data.file_path.exists());
}

#[test]
fn test_record_prompt_rejects_unsafe_session_id() {
    let store_dir = TempDir::new().unwrap();
    let vault = TempDir::new().unwrap();
    let store = SessionStore::new(store_dir.path());

    let result = record_prompt(
        &store,
        vault.path(),
        &prompt("../escape", vault.path(), "hello"),
        Local::now(),
    );

    assert!(result.is_err());
    assert_eq!(std::fs::read_dir(vault.path()).unwrap().count(), 0);
}

#[test]
fn test_stop_target_without_session_is_none() {
    let store_dir = TempDir::new().unwrap();
    let store = SessionStore::new(store_dir.path());

    let target = stop_target(&store, &Config::default(), &stop("unknown")).unwrap();
    assert!(target.is_none());
}

#[test]
fn test_stop_target_uses_session_file_dir_or_config() {
    let store_dir = TempDir::new().unwrap();
    let store = SessionStore::new(store_dir.path());
    store.write("s1", "/vault/2026-10-15_s1.md", 4).unwrap();

    let target = stop_target(&store, &Config::default(), &stop("s1")).unwrap();
    assert_eq!(target, Some(PathBuf::from("/vault")));

    let configured = Config {
        git_push: None,
        vault_dir: Some(PathBuf::from("/elsewhere")),
    };
    let target = stop_target(&store, &configured, &stop("s1")).unwrap();
    assert_eq!(target, Some(PathBuf::from("/elsewhere")));
}

#[test]
fn test_prompt_then_stop_syncs_vault() {
    let store_dir = TempDir::new().unwrap();
    let store = SessionStore::new(store_dir.path());
    let (_temps, bare, clone) = create_test_repo_with_remote();
    let config = Config {
        git_push: Some("true".to_string()),
        vault_dir: None,
    };

    record_prompt(&store, &clone, &prompt("e2e", &clone, "hello vault"), Local::now()).unwrap();

    let target = stop_target(&store, &config, &stop("e2e")).unwrap().unwrap();
    assert_eq!(target, clone);

    assert_eq!(
        sync::run(&config, &target),
        SyncOutcome::Completed { pushed: true }
    );
    assert_eq!(commit_count(&bare), 2);
    assert!(head_subject(&bare).starts_with(COMMIT_MESSAGE_PREFIX));
}
