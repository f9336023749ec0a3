//! Core data types

use serde::Deserialize;
use std::fmt;

/// Default branch pull requests target
pub const DEFAULT_BASE_BRANCH: &str = "main";

/// Owner, repository, and token for the hosted repository
///
/// Built once from configuration and handed to the platform service.
#[derive(Clone, PartialEq, Eq)]
pub struct RepositoryIdentity {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Access token sent as a bearer credential
    pub token: String,
}

impl fmt::Debug for RepositoryIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RepositoryIdentity")
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Changed file paths in the order git reported them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    files: Vec<String>,
}

impl ChangeSet {
    /// Wrap a list of paths
    pub const fn new(files: Vec<String>) -> Self {
        Self { files }
    }

    /// Split raw `git diff --name-only` output; empty output means no files
    pub fn from_output(output: &str) -> Self {
        if output.is_empty() {
            return Self::default();
        }
        Self::new(output.split('\n').map(ToString::to_string).collect())
    }

    /// Paths as reported
    pub fn files(&self) -> &[String] {
        &self.files
    }

    /// Number of entries, blank ones included
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// True when there are no entries at all
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// True when there is nothing worth submitting: no entries, or a
    /// single blank one
    pub fn is_effectively_empty(&self) -> bool {
        match self.files.as_slice() {
            [] => true,
            [only] => only.trim().is_empty(),
            _ => false,
        }
    }
}

/// Commit subject lines, newest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitLog {
    messages: Vec<String>,
}

impl CommitLog {
    /// Wrap a list of subjects
    pub const fn new(messages: Vec<String>) -> Self {
        Self { messages }
    }

    /// Split raw `git log --pretty=format:%s` output
    pub fn from_output(output: &str) -> Self {
        if output.is_empty() {
            return Self::default();
        }
        Self::new(output.split('\n').map(ToString::to_string).collect())
    }

    /// Subjects as reported
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// True when the log has no entries
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// The newest subject, if present and not blank
    pub fn latest(&self) -> Option<&str> {
        self.messages
            .first()
            .map(String::as_str)
            .filter(|m| !m.trim().is_empty())
    }
}

/// A pull request ready to be submitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestDraft {
    /// Title line
    pub title: String,
    /// Markdown body
    pub description: String,
    /// Branch holding the changes
    pub head: String,
    /// Branch the changes should merge into
    pub base: String,
}

/// A pull request as returned by the host
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PullRequest {
    /// PR number
    pub number: u64,
    /// Web URL
    pub html_url: String,
}
