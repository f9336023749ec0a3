//! Mock hosting platform that records submitted drafts

use async_trait::async_trait;
use auto_pr::error::{Error, Result};
use auto_pr::platform::PlatformService;
use auto_pr::types::{PullRequest, PullRequestDraft, RepositoryIdentity};
use std::sync::Mutex;

enum Reply {
    Created(PullRequest),
    Rejected { status: u16, body: String },
}

pub struct MockPlatformService {
    identity: RepositoryIdentity,
    reply: Reply,
    submitted: Mutex<Vec<PullRequestDraft>>,
}

impl MockPlatformService {
    /// Answers every request with `pr`
    pub fn creating(pr: PullRequest) -> Self {
        Self {
            identity: super::identity(),
            reply: Reply::Created(pr),
            submitted: Mutex::new(Vec::new()),
        }
    }

    /// Answers every request with an error status
    pub fn rejecting(status: u16, body: &str) -> Self {
        Self {
            identity: super::identity(),
            reply: Reply::Rejected {
                status,
                body: body.to_string(),
            },
            submitted: Mutex::new(Vec::new()),
        }
    }

    pub fn submitted(&self) -> Vec<PullRequestDraft> {
        self.submitted.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlatformService for MockPlatformService {
    async fn create_pr(&self, draft: &PullRequestDraft) -> Result<PullRequest> {
        self.submitted.lock().unwrap().push(draft.clone());
        match &self.reply {
            Reply::Created(pr) => Ok(pr.clone()),
            Reply::Rejected { status, body } => Err(Error::PullRequestRejected {
                status: *status,
                body: body.clone(),
            }),
        }
    }

    fn identity(&self) -> &RepositoryIdentity {
        &self.identity
    }
}
