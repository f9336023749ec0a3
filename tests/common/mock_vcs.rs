//! Scripted version control for orchestrator tests

use async_trait::async_trait;
use auto_pr::error::{Error, Result};
use auto_pr::types::{ChangeSet, CommitLog};
use auto_pr::vcs::VersionControl;
use std::sync::Mutex;

pub struct MockVcs {
    branch: Option<String>,
    changes: ChangeSet,
    commits: CommitLog,
    create_fails: bool,
    push_fails: bool,
    calls: Mutex<Vec<String>>,
}

fn git_error(command: &str) -> Error {
    Error::GitCommand {
        command: command.to_string(),
        stderr: "fatal: simulated failure".to_string(),
    }
}

impl MockVcs {
    pub fn on_branch(branch: &str) -> Self {
        Self {
            branch: Some(branch.to_string()),
            changes: ChangeSet::default(),
            commits: CommitLog::default(),
            create_fails: false,
            push_fails: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// `current_branch` fails, as `GitCli` does on a detached HEAD
    pub fn detached() -> Self {
        Self {
            branch: None,
            ..Self::on_branch("")
        }
    }

    pub fn with_changes(mut self, changes: ChangeSet) -> Self {
        self.changes = changes;
        self
    }

    pub fn with_commits(mut self, commits: CommitLog) -> Self {
        self.commits = commits;
        self
    }

    pub fn failing_create(mut self) -> Self {
        self.create_fails = true;
        self
    }

    pub fn failing_push(mut self) -> Self {
        self.push_fails = true;
        self
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn calls_with(&self, prefix: &str) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| c.strip_prefix(prefix).map(ToString::to_string))
            .collect()
    }

    pub fn created(&self) -> Vec<String> {
        self.calls_with("create_branch ")
    }

    pub fn pushed(&self) -> Vec<String> {
        self.calls_with("push_branch ")
    }
}

#[async_trait]
impl VersionControl for MockVcs {
    async fn current_branch(&self) -> Result<String> {
        self.record("current_branch".to_string());
        self.branch
            .clone()
            .ok_or_else(|| git_error("git branch --show-current"))
    }

    async fn changed_files(&self, base_branch: &str) -> ChangeSet {
        self.record(format!("changed_files {base_branch}"));
        self.changes.clone()
    }

    async fn commit_messages(&self, base_branch: &str) -> CommitLog {
        self.record(format!("commit_messages {base_branch}"));
        self.commits.clone()
    }

    async fn create_branch(&self, name: &str) -> Result<()> {
        self.record(format!("create_branch {name}"));
        if self.create_fails {
            return Err(git_error(&format!("git checkout {name}")));
        }
        Ok(())
    }

    async fn push_branch(&self, name: &str) -> Result<()> {
        self.record(format!("push_branch {name}"));
        if self.push_fails {
            return Err(git_error(&format!("git push -u origin {name}")));
        }
        Ok(())
    }

    async fn remote_url(&self, _remote: &str) -> Result<String> {
        Ok("git@github.com:octo/demo.git".to_string())
    }
}
