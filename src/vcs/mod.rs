//! Version control access
//!
//! The orchestrator only talks to git through [`VersionControl`], so tests
//! can substitute a scripted implementation.

mod git;

pub use git::GitCli;

use crate::error::Result;
use crate::types::{ChangeSet, CommitLog};
use async_trait::async_trait;

/// Version control operations needed to raise a pull request
#[async_trait]
pub trait VersionControl: Send + Sync {
    /// Name of the checked-out branch. Fails on a detached HEAD; failure is
    /// fatal for a run.
    async fn current_branch(&self) -> Result<String>;

    /// Files that differ from `origin/<base_branch>`, falling back to the
    /// staged index. Empty when neither comparison works.
    async fn changed_files(&self, base_branch: &str) -> ChangeSet;

    /// Commit subjects between `origin/<base_branch>` and `HEAD`, newest
    /// first. Empty when the log cannot be read.
    async fn commit_messages(&self, base_branch: &str) -> CommitLog;

    /// Create and switch to `name`, or switch to it if it already exists
    async fn create_branch(&self, name: &str) -> Result<()>;

    /// Push `name` to `origin` with upstream tracking
    async fn push_branch(&self, name: &str) -> Result<()>;

    /// Fetch URL of a remote
    async fn remote_url(&self, remote: &str) -> Result<String>;
}
