//! GitHub platform service implementation

use crate::error::{Error, Result};
use crate::platform::PlatformService;
use crate::types::{PullRequest, PullRequestDraft, RepositoryIdentity};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// Public GitHub REST endpoint
pub const DEFAULT_API_URL: &str = "https://api.github.com";

const USER_AGENT: &str = concat!("auto-pr/", env!("CARGO_PKG_VERSION"));

#[derive(Serialize)]
struct CreatePrPayload<'a> {
    title: &'a str,
    body: &'a str,
    head: &'a str,
    base: &'a str,
}

/// GitHub service using reqwest
pub struct GitHubService {
    client: Client,
    api_url: String,
    identity: RepositoryIdentity,
}

impl GitHubService {
    /// Create a new GitHub service
    ///
    /// # Arguments
    /// * `identity` - Owner, repository, and token
    /// * `api_url` - REST API root, e.g. `https://api.github.com`
    /// * `timeout` - Per-request timeout
    pub fn new(identity: RepositoryIdentity, api_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Config(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            identity,
        })
    }

    fn pulls_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/pulls",
            self.api_url, self.identity.owner, self.identity.repo
        )
    }
}

#[async_trait]
impl PlatformService for GitHubService {
    async fn create_pr(&self, draft: &PullRequestDraft) -> Result<PullRequest> {
        debug!(head = %draft.head, base = %draft.base, "creating PR");

        let payload = CreatePrPayload {
            title: &draft.title,
            body: &draft.description,
            head: &draft.head,
            base: &draft.base,
        };

        let response = self
            .client
            .post(self.pulls_url())
            .header(AUTHORIZATION, format!("Bearer {}", self.identity.token))
            .header(ACCEPT, "application/vnd.github.v3+json")
            .header(CONTENT_TYPE, "application/json")
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::CREATED {
            debug!(status = status.as_u16(), "PR creation rejected");
            return Err(Error::PullRequestRejected {
                status: status.as_u16(),
                body,
            });
        }

        let pr: PullRequest = serde_json::from_str(&body)?;
        debug!(pr_number = pr.number, "created PR");
        Ok(pr)
    }

    fn identity(&self) -> &RepositoryIdentity {
        &self.identity
    }
}
