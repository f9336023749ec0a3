//! Configuration
//!
//! Each setting resolves as: command-line flag, remote detection
//! (owner/repo/host only), environment, config file, built-in default.

use crate::error::{Error, Result};
use crate::platform::{DEFAULT_API_URL, RemoteRepo};
use crate::types::{DEFAULT_BASE_BRANCH, RepositoryIdentity};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Owner used when nothing else is configured
pub const DEFAULT_OWNER: &str = "aisharay";

/// Repository used when nothing else is configured
pub const DEFAULT_REPO: &str = "ExpensesTracker-BE";

/// Default HTTP request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable naming an explicit config file
pub const CONFIG_PATH_VAR: &str = "AUTO_PR_CONFIG";

/// Environment variable naming a GitHub Enterprise host
pub const GH_HOST_VAR: &str = "GH_HOST";

/// Contents of `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Repository owner
    pub owner: Option<String>,
    /// Repository name
    pub repo: Option<String>,
    /// Branch pull requests target
    pub base_branch: Option<String>,
    /// REST API root
    pub api_url: Option<String>,
    /// HTTP request timeout in seconds
    pub timeout_secs: Option<u64>,
}

impl FileConfig {
    /// Parse TOML text
    pub fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::Config(format!("invalid config file: {e}")))
    }

    /// Read and parse a config file
    pub fn load_from(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::parse(&text)
    }
}

/// Default config file location: `<config_dir>/auto-pr/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("auto-pr").join("config.toml"))
}

/// Load the config file.
///
/// A path named by `AUTO_PR_CONFIG` must exist. The default location is
/// optional and yields an empty config when absent.
pub fn load_file_config(lookup: impl Fn(&str) -> Option<String>) -> Result<FileConfig> {
    if let Some(explicit) = lookup(CONFIG_PATH_VAR).filter(|p| !p.trim().is_empty()) {
        debug!(path = %explicit, "loading config from AUTO_PR_CONFIG");
        return FileConfig::load_from(Path::new(&explicit));
    }

    match default_config_path() {
        Some(path) if path.is_file() => {
            debug!(path = %path.display(), "loading config");
            FileConfig::load_from(&path)
        }
        _ => {
            debug!("no config file");
            Ok(FileConfig::default())
        }
    }
}

/// Values given on the command line
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// `--owner`
    pub owner: Option<String>,
    /// `--repo`
    pub repo: Option<String>,
    /// `--base`
    pub base_branch: Option<String>,
}

/// Fully resolved settings for one run
#[derive(Debug, Clone)]
pub struct Config {
    /// Target repository and credential
    pub identity: RepositoryIdentity,
    /// Branch pull requests target
    pub base_branch: String,
    /// REST API root
    pub api_url: String,
    /// HTTP request timeout
    pub timeout: Duration,
}

impl Config {
    /// Merge all sources into a [`Config`]
    pub fn resolve(
        overrides: &Overrides,
        detected: Option<&RemoteRepo>,
        gh_host: Option<&str>,
        file: &FileConfig,
        token: String,
    ) -> Result<Self> {
        let owner = overrides
            .owner
            .clone()
            .or_else(|| detected.map(|d| d.owner.clone()))
            .or_else(|| file.owner.clone())
            .unwrap_or_else(|| DEFAULT_OWNER.to_string());

        let repo = overrides
            .repo
            .clone()
            .or_else(|| detected.map(|d| d.repo.clone()))
            .or_else(|| file.repo.clone())
            .unwrap_or_else(|| DEFAULT_REPO.to_string());

        let base_branch = overrides
            .base_branch
            .clone()
            .or_else(|| file.base_branch.clone())
            .unwrap_or_else(|| DEFAULT_BASE_BRANCH.to_string());

        let host = detected
            .and_then(|d| d.host.as_deref())
            .or(gh_host.filter(|h| !h.trim().is_empty()));
        let api_url = host
            .map(|h| format!("https://{}/api/v3", h.trim()))
            .or_else(|| file.api_url.clone())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        validate_api_url(&api_url)?;

        let timeout_secs = file.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(Error::Config("timeout_secs must be greater than 0".to_string()));
        }

        for (name, value) in [("owner", &owner), ("repo", &repo), ("base branch", &base_branch)] {
            if value.trim().is_empty() {
                return Err(Error::Config(format!("{name} must not be empty")));
            }
        }

        Ok(Self {
            identity: RepositoryIdentity { owner, repo, token },
            base_branch,
            api_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn validate_api_url(api_url: &str) -> Result<()> {
    let parsed = url::Url::parse(api_url)
        .map_err(|e| Error::Config(format!("invalid API URL {api_url}: {e}")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(Error::Config(format!(
            "unsupported API URL scheme {other}: {api_url}"
        ))),
    }
}
