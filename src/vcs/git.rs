//! git command-line implementation

use crate::error::{Error, Result};
use crate::types::{ChangeSet, CommitLog};
use crate::vcs::VersionControl;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, warn};

/// Runs `git` as a subprocess inside a working directory
#[derive(Debug, Clone)]
pub struct GitCli {
    cwd: PathBuf,
}

impl GitCli {
    /// Create a client rooted at `cwd`
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self { cwd: cwd.into() }
    }

    /// Working directory commands run in
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Run `git <args>` and return trimmed stdout on success
    pub async fn run(&self, args: &[&str]) -> Result<String> {
        let command = format!("git {}", args.join(" "));
        debug!(command = %command, cwd = %self.cwd.display(), "running git");

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            debug!(command = %command, stderr = %stderr, "git failed");
            return Err(Error::GitCommand { command, stderr });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// Try each argument list in order and return the first success.
    ///
    /// Returns the last error when every attempt fails.
    pub async fn first_success(&self, attempts: &[&[&str]]) -> Result<String> {
        let mut last_err = Error::Internal("empty fallback chain".to_string());
        for args in attempts {
            match self.run(args).await {
                Ok(output) => return Ok(output),
                Err(e) => last_err = e,
            }
        }
        Err(last_err)
    }
}

#[async_trait]
impl VersionControl for GitCli {
    async fn current_branch(&self) -> Result<String> {
        let branch = self.run(&["branch", "--show-current"]).await?;
        // `--show-current` prints nothing on a detached HEAD
        if branch.is_empty() {
            return Err(Error::GitCommand {
                command: "git branch --show-current".to_string(),
                stderr: "not on a branch (detached HEAD)".to_string(),
            });
        }
        Ok(branch)
    }

    async fn changed_files(&self, base_branch: &str) -> ChangeSet {
        let upstream = format!("origin/{base_branch}");
        let attempts: [&[&str]; 2] = [
            &["diff", "--name-only", upstream.as_str()],
            &["diff", "--staged", "--name-only"],
        ];

        match self.first_success(&attempts).await {
            Ok(output) => ChangeSet::from_output(&output),
            Err(e) => {
                warn!(error = %e, "could not list changed files");
                ChangeSet::default()
            }
        }
    }

    async fn commit_messages(&self, base_branch: &str) -> CommitLog {
        let range = format!("origin/{base_branch}..HEAD");
        match self.run(&["log", &range, "--pretty=format:%s"]).await {
            Ok(output) => CommitLog::from_output(&output),
            Err(e) => {
                debug!(error = %e, "no commit log available");
                CommitLog::default()
            }
        }
    }

    async fn create_branch(&self, name: &str) -> Result<()> {
        if self.run(&["checkout", "-b", name]).await.is_ok() {
            return Ok(());
        }
        warn!(branch = name, "branch might already exist, switching to it");
        self.run(&["checkout", name]).await.map(|_| ())
    }

    async fn push_branch(&self, name: &str) -> Result<()> {
        self.run(&["push", "-u", "origin", name]).await.map(|_| ())
    }

    async fn remote_url(&self, remote: &str) -> Result<String> {
        self.run(&["remote", "get-url", remote]).await
    }
}
