//! GitHub token resolution

use crate::auth::AuthSource;
use crate::error::{Error, Result};
use std::env;
use tracing::debug;

/// Environment variables checked for a token, in priority order
pub const GITHUB_TOKEN_VARS: [&str; 2] = ["GITHUB_TOKEN", "GH_TOKEN"];

/// GitHub authentication configuration
#[derive(Clone)]
pub struct GitHubAuthConfig {
    /// Authentication token
    pub token: String,
    /// Where the token was obtained from
    pub source: AuthSource,
}

impl std::fmt::Debug for GitHubAuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubAuthConfig")
            .field("token", &"<redacted>")
            .field("source", &self.source)
            .finish()
    }
}

/// Get GitHub authentication from the flag or the process environment
///
/// Priority:
/// 1. `--token` flag
/// 2. `GITHUB_TOKEN` environment variable
/// 3. `GH_TOKEN` environment variable
pub fn get_github_auth(flag: Option<&str>) -> Result<GitHubAuthConfig> {
    resolve_github_auth(flag, |var| env::var(var).ok())
}

/// Same as [`get_github_auth`] with an explicit environment lookup.
///
/// Blank values are ignored.
pub fn resolve_github_auth(
    flag: Option<&str>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<GitHubAuthConfig> {
    if let Some(token) = flag.map(str::trim).filter(|t| !t.is_empty()) {
        debug!("using GitHub token from --token");
        return Ok(GitHubAuthConfig {
            token: token.to_string(),
            source: AuthSource::Flag,
        });
    }

    for var in GITHUB_TOKEN_VARS {
        debug!(var, "checking env var");
        if let Some(token) = lookup(var) {
            let token = token.trim();
            if !token.is_empty() {
                debug!(var, "obtained GitHub token from env var");
                return Ok(GitHubAuthConfig {
                    token: token.to_string(),
                    source: AuthSource::EnvVar,
                });
            }
        }
    }

    debug!("no GitHub authentication found");
    Err(Error::Auth(
        "GitHub token is required!".to_string(),
    ))
}
