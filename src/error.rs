//! Error types for auto-pr

use thiserror::Error;

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by git, the hosting API, and configuration
#[derive(Debug, Error)]
pub enum Error {
    /// No usable access token
    #[error("authentication error: {0}")]
    Auth(String),

    /// Invalid or unreadable configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// A git invocation exited with a non-zero status
    #[error("git command failed: {command}: {stderr}")]
    GitCommand {
        /// The command line that was run
        command: String,
        /// Captured standard error
        stderr: String,
    },

    /// The host answered the pull request request with a non-201 status
    #[error("failed to create PR: {status}\nResponse: {body}")]
    PullRequestRejected {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// Transport-level HTTP failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Process spawn or filesystem failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON payload
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Unparseable input such as a remote URL
    #[error("parse error: {0}")]
    Parse(String),

    /// Unexpected internal failure
    #[error("internal error: {0}")]
    Internal(String),
}
