//! Throwaway git repositories backed by the real `git` binary

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// A work tree on `main` inside a temp dir, optionally with a bare `origin`
pub struct TempGitRepo {
    dir: TempDir,
    work: PathBuf,
}

/// Run git in `cwd`, panicking with stderr on failure
pub fn git(cwd: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(cwd)
        .env("GIT_CONFIG_NOSYSTEM", "1")
        .output()
        .expect("failed to spawn git");
    assert!(
        output.status.success(),
        "git {} failed: {}",
        args.join(" "),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

impl TempGitRepo {
    /// Fresh repository on `main` with one commit and no remote
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let work = dir.path().join("work");
        fs::create_dir(&work).unwrap();

        git(&work, &["init", "-q"]);
        git(&work, &["symbolic-ref", "HEAD", "refs/heads/main"]);
        git(&work, &["config", "user.name", "Test User"]);
        git(&work, &["config", "user.email", "test@example.com"]);
        git(&work, &["config", "commit.gpgsign", "false"]);

        let repo = Self { dir, work };
        repo.write("README.md", "# demo\n");
        repo.commit_all("initial commit");
        repo
    }

    /// Same as [`new`](Self::new), plus a bare `origin` holding `main`
    pub fn with_origin() -> Self {
        let repo = Self::new();
        let origin = repo.dir.path().join("origin.git");
        git(repo.dir.path(), &["init", "-q", "--bare", "origin.git"]);
        git(&repo.work, &["remote", "add", "origin", &origin.to_string_lossy()]);
        git(&repo.work, &["push", "-q", "-u", "origin", "main"]);
        repo
    }

    pub fn path(&self) -> &Path {
        &self.work
    }

    pub fn origin_path(&self) -> PathBuf {
        self.dir.path().join("origin.git")
    }

    pub fn write(&self, rel: &str, contents: &str) {
        let path = self.work.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
    }

    pub fn stage(&self, rel: &str) {
        git(&self.work, &["add", rel]);
    }

    pub fn commit_all(&self, message: &str) {
        git(&self.work, &["add", "-A"]);
        git(&self.work, &["commit", "-q", "-m", message]);
    }

    pub fn push(&self) {
        git(&self.work, &["push", "-q", "origin", "main"]);
    }

    pub fn git(&self, args: &[&str]) -> String {
        git(&self.work, args)
    }

    /// Branches that exist in the bare origin
    pub fn remote_branches(&self) -> Vec<String> {
        let out = git(
            &self.origin_path(),
            &["for-each-ref", "--format=%(refname:short)", "refs/heads"],
        );
        out.lines().map(ToString::to_string).collect()
    }
}
