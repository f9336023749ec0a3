//! Progress callback trait for interface-agnostic updates
//!
//! The orchestrator never prints; it reports through this trait so the CLI
//! can render console output and tests can record events.

use crate::error::Error;
use crate::submit::AbortReason;
use crate::types::{ChangeSet, PullRequest};
use async_trait::async_trait;

/// Orchestration stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Reading the current branch
    Start,
    /// Making sure changes live on a feature branch
    EnsureBranch,
    /// Listing changed files
    CollectChanges,
    /// Building title and description
    GenerateContent,
    /// Pushing the head branch
    Push,
    /// Calling the hosting API
    Submit,
    /// Pull request created
    Done,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Start => write!(f, "Starting"),
            Self::EnsureBranch => write!(f, "Checking branch"),
            Self::CollectChanges => write!(f, "Collecting changes"),
            Self::GenerateContent => write!(f, "Generating content"),
            Self::Push => write!(f, "Pushing"),
            Self::Submit => write!(f, "Creating pull request"),
            Self::Done => write!(f, "Done"),
        }
    }
}

/// What happened to a branch during `EnsureBranch`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchStatus {
    /// Branch that was checked out at start
    Current,
    /// Feature branch being created
    Creating,
    /// Feature branch a dry run would create
    WouldCreate,
}

/// Push operation status
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushStatus {
    /// Push started
    Started,
    /// Push succeeded
    Success,
    /// Push failed with error message
    Failed(String),
}

impl std::fmt::Display for PushStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Started => write!(f, "started"),
            Self::Success => write!(f, "success"),
            Self::Failed(msg) => write!(f, "failed: {msg}"),
        }
    }
}

/// Progress callback trait
///
/// Implement this trait to receive progress updates during a run.
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// Called when entering a new stage
    async fn on_stage(&self, stage: Stage);

    /// Called for the starting branch and for any branch being created
    async fn on_branch(&self, branch: &str, status: BranchStatus);

    /// Called once the change set is known to be non-empty
    async fn on_changes(&self, changes: &ChangeSet);

    /// Called with the final title
    async fn on_title(&self, title: &str);

    /// Called when the head branch is being pushed
    async fn on_push(&self, branch: &str, status: PushStatus);

    /// Called when the pull request is created
    async fn on_pr_created(&self, pr: &PullRequest);

    /// Called when an error is handled without ending the process
    async fn on_error(&self, error: &Error);

    /// Called when the run stops early
    async fn on_abort(&self, reason: &AbortReason);

    /// Called with a general status message
    async fn on_message(&self, message: &str);
}

/// No-op progress callback for testing or when progress isn't needed
pub struct NoopProgress;

#[async_trait]
impl ProgressCallback for NoopProgress {
    async fn on_stage(&self, _stage: Stage) {}
    async fn on_branch(&self, _branch: &str, _status: BranchStatus) {}
    async fn on_changes(&self, _changes: &ChangeSet) {}
    async fn on_title(&self, _title: &str) {}
    async fn on_push(&self, _branch: &str, _status: PushStatus) {}
    async fn on_pr_created(&self, _pr: &PullRequest) {}
    async fn on_error(&self, _error: &Error) {}
    async fn on_abort(&self, _reason: &AbortReason) {}
    async fn on_message(&self, _message: &str) {}
}
