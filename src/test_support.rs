use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// A standalone repository with one commit on `main` and no remote.
pub(crate) fn create_test_repo() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path();

    git(path, &["init"]);
    // Deterministic default branch name across environments.
    git(path, &["symbolic-ref", "HEAD", "refs/heads/main"]);
    configure_identity(path);

    std::fs::write(path.join("README.md"), "# Vault\n").unwrap();
    git(path, &["add", "."]);
    git(path, &["commit", "-m", "Initial commit"]);

    temp_dir
}

/// A bare remote plus a clone tracking it, with one pushed commit.
///
/// Returns the temp dirs (keep them alive), the bare repo path, and the
/// clone path.
pub(crate) fn create_test_repo_with_remote() -> (Vec<TempDir>, PathBuf, PathBuf) {
    let remote_dir = TempDir::new().unwrap();
    let work_dir = TempDir::new().unwrap();
    let bare = remote_dir.path().join("vault.git");
    let clone = work_dir.path().join("vault");

    git(remote_dir.path(), &["init", "--bare", &bare.to_string_lossy()]);
    git(&bare, &["symbolic-ref", "HEAD", "refs/heads/main"]);
    git(
        work_dir.path(),
        &["clone", &bare.to_string_lossy(), &clone.to_string_lossy()],
    );
    git(&clone, &["symbolic-ref", "HEAD", "refs/heads/main"]);
    configure_identity(&clone);

    std::fs::write(clone.join("init.txt"), "init\n").unwrap();
    git(&clone, &["add", "-A"]);
    git(&clone, &["commit", "-m", "initial"]);
    git(&clone, &["push", "-u", "origin", "main"]);

    (vec![remote_dir, work_dir], bare, clone)
}

/// Number of commits reachable from HEAD.
pub(crate) fn commit_count(repo_dir: &Path) -> usize {
    git(repo_dir, &["rev-list", "--count", "HEAD"])
        .parse()
        .unwrap()
}

/// Subject line of the HEAD commit.
pub(crate) fn head_subject(repo_dir: &Path) -> String {
    git(repo_dir, &["log", "-1", "--format=%s"])
}

fn configure_identity(repo_dir: &Path) {
    git(repo_dir, &["config", "user.email", "test@example.com"]);
    git(repo_dir, &["config", "user.name", "Test User"]);
    git(repo_dir, &["config", "commit.gpgsign", "false"]);
}

pub(crate) fn git(repo_dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to execute git {}: {}", args.join(" "), e));

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "git {} failed (exit code {:?})\nstdout:\n{}\nstderr:\n{}",
            args.join(" "),
            output.status.code(),
            stdout,
            stderr
        );
    }

    String::from_utf8_lossy(&output.stdout).trim().to_string()
}
