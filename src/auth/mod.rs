//! Authentication for GitHub
//!
//! A static token, taken from the command line or the environment.

mod github;

pub use github::{GITHUB_TOKEN_VARS, GitHubAuthConfig, get_github_auth, resolve_github_auth};

/// Source of authentication token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthSource {
    /// Token passed with `--token`
    Flag,
    /// Token from environment variable
    EnvVar,
}
