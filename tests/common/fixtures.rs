//! Shared fixtures and a recording progress callback

use async_trait::async_trait;
use auto_pr::error::Error;
use auto_pr::submit::{AbortReason, BranchStatus, ProgressCallback, PushStatus, Stage};
use auto_pr::types::{ChangeSet, CommitLog, PullRequest, RepositoryIdentity};
use std::sync::Mutex;

pub fn identity() -> RepositoryIdentity {
    RepositoryIdentity {
        owner: "octo".to_string(),
        repo: "demo".to_string(),
        token: "test-token".to_string(),
    }
}

pub fn changes(paths: &[&str]) -> ChangeSet {
    ChangeSet::new(paths.iter().map(ToString::to_string).collect())
}

pub fn commits(messages: &[&str]) -> CommitLog {
    CommitLog::new(messages.iter().map(ToString::to_string).collect())
}

pub fn pull_request(number: u64, html_url: &str) -> PullRequest {
    PullRequest {
        number,
        html_url: html_url.to_string(),
    }
}

/// Progress callback that records every event as a string
#[derive(Default)]
pub struct RecordingProgress {
    events: Mutex<Vec<String>>,
}

impl RecordingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }

    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    pub fn stages(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| e.strip_prefix("stage:").map(ToString::to_string))
            .collect()
    }

    pub fn has(&self, prefix: &str) -> bool {
        self.events().iter().any(|e| e.starts_with(prefix))
    }
}

#[async_trait]
impl ProgressCallback for RecordingProgress {
    async fn on_stage(&self, stage: Stage) {
        self.record(format!("stage:{stage:?}"));
    }

    async fn on_branch(&self, branch: &str, status: BranchStatus) {
        self.record(format!("branch:{status:?}:{branch}"));
    }

    async fn on_changes(&self, changes: &ChangeSet) {
        self.record(format!("changes:{}", changes.len()));
    }

    async fn on_title(&self, title: &str) {
        self.record(format!("title:{title}"));
    }

    async fn on_push(&self, branch: &str, status: PushStatus) {
        self.record(format!("push:{branch}:{status}"));
    }

    async fn on_pr_created(&self, pr: &PullRequest) {
        self.record(format!("created:#{}:{}", pr.number, pr.html_url));
    }

    async fn on_error(&self, error: &Error) {
        self.record(format!("error:{error}"));
    }

    async fn on_abort(&self, reason: &AbortReason) {
        self.record(format!("abort:{reason}"));
    }

    async fn on_message(&self, message: &str) {
        self.record(format!("message:{message}"));
    }
}
