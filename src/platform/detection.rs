//! Repository detection from remote URLs

use crate::error::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Regex for SSH URLs: `git@host:owner/repo.git` or `ssh://git@host[:port]/owner/repo.git`
static RE_SSH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:ssh://git@([^:/]+)(?::\d+)?/|git@([^:/]+)[:/])(.+?)(?:\.git)?$").unwrap()
});

/// Regex for HTTPS URLs: `https://host/owner/repo.git`
static RE_HTTPS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://(?:[^@/]+@)?[^/]+/(.+?)(?:\.git)?$").unwrap());

/// Owner and repository parsed from a remote URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteRepo {
    /// Repository owner
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Hostname, when it is not github.com
    pub host: Option<String>,
}

/// Parse owner/repo from an SSH or HTTPS remote URL
pub fn parse_repo_info(url: &str) -> Result<RemoteRepo> {
    // Normalize: strip whitespace and trailing slashes
    let url = url.trim().trim_end_matches('/');

    let (hostname, path) = if let Some(caps) = RE_SSH.captures(url) {
        let host = caps.get(1).or_else(|| caps.get(2)).map_or("", |m| m.as_str());
        (host.to_string(), caps[3].to_string())
    } else if let Some(caps) = RE_HTTPS.captures(url) {
        let hostname = extract_hostname(url)
            .ok_or_else(|| Error::Parse(format!("cannot parse remote URL: {url}")))?;
        (hostname, caps[1].to_string())
    } else {
        return Err(Error::Parse(format!("cannot parse remote URL: {url}")));
    };

    let parts: Vec<&str> = path.split('/').filter(|p| !p.is_empty()).collect();
    let [owner, repo] = parts.as_slice() else {
        return Err(Error::Parse(format!("invalid repo path: {path}")));
    };

    let host = (hostname != "github.com").then_some(hostname);

    Ok(RemoteRepo {
        owner: (*owner).to_string(),
        repo: (*repo).to_string(),
        host,
    })
}

fn extract_hostname(url: &str) -> Option<String> {
    url::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(ToString::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_github_https() {
        let info = parse_repo_info("https://github.com/aisharay/ExpensesTracker-BE.git").unwrap();
        assert_eq!(info.owner, "aisharay");
        assert_eq!(info.repo, "ExpensesTracker-BE");
        assert!(info.host.is_none());
    }

    #[test]
    fn test_parse_github_ssh() {
        let info = parse_repo_info("git@github.com:owner/repo.git").unwrap();
        assert_eq!(info.owner, "owner");
        assert_eq!(info.repo, "repo");
        assert!(info.host.is_none());
    }

    #[test]
    fn test_parse_ssh_scheme() {
        let info = parse_repo_info("ssh://git@github.com/owner/repo").unwrap();
        assert_eq!(info.owner, "owner");
        assert_eq!(info.repo, "repo");
    }

    #[test]
    fn test_parse_ssh_scheme_with_port() {
        let info = parse_repo_info("ssh://git@ghe.example.com:22/owner/repo.git").unwrap();
        assert_eq!(info.owner, "owner");
        assert_eq!(info.repo, "repo");
        assert_eq!(info.host.as_deref(), Some("ghe.example.com"));
    }

    #[test]
    fn test_scp_style_numeric_owner_is_not_a_port() {
        let info = parse_repo_info("git@github.com:2048/repo.git").unwrap();
        assert_eq!(info.owner, "2048");
        assert_eq!(info.repo, "repo");
    }

    #[test]
    fn test_parse_https_with_credentials_and_trailing_slash() {
        let info = parse_repo_info("https://user@github.com/owner/repo/").unwrap();
        assert_eq!(info.owner, "owner");
        assert_eq!(info.repo, "repo");
    }

    #[test]
    fn test_enterprise_host_is_kept() {
        let info = parse_repo_info("https://ghe.example.com/team/service.git").unwrap();
        assert_eq!(info.host.as_deref(), Some("ghe.example.com"));
        assert_eq!(info.owner, "team");
    }

    #[test]
    fn test_rejects_nested_paths() {
        assert!(parse_repo_info("https://github.com/a/b/c").is_err());
    }

    #[test]
    fn test_rejects_local_path() {
        assert!(parse_repo_info("/srv/git/repo.git").is_err());
    }
}
