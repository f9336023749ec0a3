//! Pull request orchestration
//!
//! `Start → EnsureBranch → CollectChanges → GenerateContent → Push → Submit →
//! Done`, leaving early with an [`AbortReason`] when a step cannot continue.
//! Only a failure to read the current branch is returned as an error.

use crate::content::{generate_pr_description, generate_pr_title};
use crate::error::Result;
use crate::platform::PlatformService;
use crate::submit::progress::{BranchStatus, ProgressCallback, PushStatus, Stage};
use crate::types::{ChangeSet, CommitLog, PullRequest, PullRequestDraft};
use crate::vcs::VersionControl;
use chrono::{DateTime, Local};
use tracing::{debug, info};

/// Prefix for generated branch names
pub const FEATURE_PREFIX: &str = "feature/";

/// Why a run stopped before creating a pull request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbortReason {
    /// The feature branch could neither be created nor checked out
    BranchNotCreated {
        /// Branch that was attempted
        branch: String,
    },
    /// Nothing differs from the base branch
    NoChanges,
    /// `git push` failed
    PushFailed {
        /// Branch that was pushed
        branch: String,
    },
    /// The hosting API did not create the pull request
    SubmitFailed,
}

impl std::fmt::Display for AbortReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BranchNotCreated { branch } => write!(f, "Failed to create branch {branch}"),
            Self::NoChanges => write!(f, "No changes detected to create PR"),
            Self::PushFailed { branch } => write!(f, "Failed to push branch {branch}"),
            Self::SubmitFailed => write!(f, "Failed to create Pull Request"),
        }
    }
}

/// Caller choices for a run
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions<'a> {
    /// Feature name used when a branch has to be created
    pub feature: Option<&'a str>,
    /// Title override
    pub title: Option<&'a str>,
    /// Description override
    pub description: Option<&'a str>,
    /// Stop after generating content; create, push, and submit nothing
    pub dry_run: bool,
}

/// A draft ready for push and submission
#[derive(Debug, Clone)]
pub struct PreparedPr {
    /// Pull request to submit
    pub draft: PullRequestDraft,
    /// Whether the head branch must be pushed first
    pub needs_push: bool,
    /// Changed files the draft was built from
    pub changes: ChangeSet,
    /// Commit subjects the draft was built from
    pub commits: CommitLog,
}

/// Result of the preparation phase
#[derive(Debug, Clone)]
pub enum Preparation {
    /// Content generated, ready to submit
    Ready(PreparedPr),
    /// Stopped early
    Aborted(AbortReason),
}

/// Final result of a run
#[derive(Debug, Clone)]
pub enum Outcome {
    /// Pull request created
    Created(PullRequest),
    /// Dry run: the draft that would have been submitted
    Previewed(PullRequestDraft),
    /// The user declined the confirmation prompt
    Declined,
    /// Stopped early
    Aborted(AbortReason),
}

impl Outcome {
    /// True when the run stopped because something failed
    pub const fn is_aborted(&self) -> bool {
        matches!(self, Self::Aborted(_))
    }
}

/// Branch name for a run started on the base branch
pub fn feature_branch_name(feature: Option<&str>, now: DateTime<Local>) -> String {
    match feature.map(str::trim).filter(|f| !f.is_empty()) {
        Some(name) => format!("{FEATURE_PREFIX}{name}"),
        None => format!("{FEATURE_PREFIX}auto-pr-{}", now.format("%Y%m%d_%H%M%S")),
    }
}

/// Drives one pull request from local state to the hosting API
pub struct PrAutomator<'a> {
    vcs: &'a dyn VersionControl,
    platform: &'a dyn PlatformService,
    progress: &'a dyn ProgressCallback,
    base_branch: String,
}

impl<'a> PrAutomator<'a> {
    /// Create an automator targeting `base_branch`
    pub fn new(
        vcs: &'a dyn VersionControl,
        platform: &'a dyn PlatformService,
        progress: &'a dyn ProgressCallback,
        base_branch: impl Into<String>,
    ) -> Self {
        Self {
            vcs,
            platform,
            progress,
            base_branch: base_branch.into(),
        }
    }

    /// Branch pull requests target
    pub fn base_branch(&self) -> &str {
        &self.base_branch
    }

    /// Run every stage
    pub async fn run(&self, options: &RunOptions<'_>) -> Result<Outcome> {
        match self.prepare(options).await? {
            Preparation::Aborted(reason) => Ok(Outcome::Aborted(reason)),
            Preparation::Ready(prepared) if options.dry_run => {
                self.progress
                    .on_message("Dry run: nothing pushed or submitted")
                    .await;
                Ok(Outcome::Previewed(prepared.draft))
            }
            Preparation::Ready(prepared) => Ok(self.submit(prepared).await),
        }
    }

    /// `Start` through `GenerateContent`
    pub async fn prepare(&self, options: &RunOptions<'_>) -> Result<Preparation> {
        self.progress.on_stage(Stage::Start).await;
        let mut head = self.vcs.current_branch().await?;
        self.progress.on_branch(&head, BranchStatus::Current).await;

        self.progress.on_stage(Stage::EnsureBranch).await;
        if head == self.base_branch {
            let branch = feature_branch_name(options.feature, Local::now());
            if options.dry_run {
                self.progress
                    .on_branch(&branch, BranchStatus::WouldCreate)
                    .await;
            } else {
                self.progress.on_branch(&branch, BranchStatus::Creating).await;
                if let Err(e) = self.vcs.create_branch(&branch).await {
                    self.progress.on_error(&e).await;
                    return Ok(Preparation::Aborted(
                        self.abort(AbortReason::BranchNotCreated { branch }).await,
                    ));
                }
            }
            head = branch;
        }

        self.progress.on_stage(Stage::CollectChanges).await;
        let changes = self.vcs.changed_files(&self.base_branch).await;
        if changes.is_effectively_empty() {
            return Ok(Preparation::Aborted(
                self.abort(AbortReason::NoChanges).await,
            ));
        }
        self.progress.on_changes(&changes).await;

        self.progress.on_stage(Stage::GenerateContent).await;
        let commits = self.vcs.commit_messages(&self.base_branch).await;
        let title = options
            .title
            .filter(|t| !t.is_empty())
            .map_or_else(|| generate_pr_title(&changes, &commits), ToString::to_string);
        let description = options
            .description
            .filter(|d| !d.is_empty())
            .map_or_else(
                || generate_pr_description(&changes, &commits, &Local::now()),
                ToString::to_string,
            );
        self.progress.on_title(&title).await;

        let needs_push = head != self.base_branch;
        debug!(head = %head, needs_push, files = changes.len(), "prepared PR");

        Ok(Preparation::Ready(PreparedPr {
            draft: PullRequestDraft {
                title,
                description,
                head,
                base: self.base_branch.clone(),
            },
            needs_push,
            changes,
            commits,
        }))
    }

    /// `Push` and `Submit`
    pub async fn submit(&self, prepared: PreparedPr) -> Outcome {
        let PreparedPr {
            draft, needs_push, ..
        } = prepared;

        if needs_push {
            self.progress.on_stage(Stage::Push).await;
            self.progress.on_push(&draft.head, PushStatus::Started).await;
            if let Err(e) = self.vcs.push_branch(&draft.head).await {
                self.progress
                    .on_push(&draft.head, PushStatus::Failed(e.to_string()))
                    .await;
                return Outcome::Aborted(
                    self.abort(AbortReason::PushFailed {
                        branch: draft.head.clone(),
                    })
                    .await,
                );
            }
            self.progress.on_push(&draft.head, PushStatus::Success).await;
        }

        self.progress.on_stage(Stage::Submit).await;
        let target = self.platform.identity();
        debug!(owner = %target.owner, repo = %target.repo, head = %draft.head, "submitting PR");
        match self.platform.create_pr(&draft).await {
            Ok(pr) => {
                info!(pr_number = pr.number, url = %pr.html_url, "pull request created");
                self.progress.on_pr_created(&pr).await;
                self.progress.on_stage(Stage::Done).await;
                Outcome::Created(pr)
            }
            Err(e) => {
                self.progress.on_error(&e).await;
                Outcome::Aborted(self.abort(AbortReason::SubmitFailed).await)
            }
        }
    }

    async fn abort(&self, reason: AbortReason) -> AbortReason {
        debug!(reason = %reason, "run aborted");
        self.progress.on_abort(&reason).await;
        reason
    }
}
