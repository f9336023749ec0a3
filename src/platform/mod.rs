//! Hosting platform services
//!
//! Provides the pull request creation seam and the GitHub implementation.

mod detection;
mod github;

pub use detection::{RemoteRepo, parse_repo_info};
pub use github::{DEFAULT_API_URL, GitHubService};

use crate::error::Result;
use crate::types::{PullRequest, PullRequestDraft, RepositoryIdentity};
use async_trait::async_trait;

/// Platform service trait for pull request operations
///
/// The orchestrator submits through this trait so tests can use a mock host.
#[async_trait]
pub trait PlatformService: Send + Sync {
    /// Create a pull request from `draft`.
    ///
    /// Fails with [`crate::error::Error::PullRequestRejected`] when the host
    /// answers with anything other than `201 Created`.
    async fn create_pr(&self, draft: &PullRequestDraft) -> Result<PullRequest>;

    /// The repository this service targets
    fn identity(&self) -> &RepositoryIdentity;
}
