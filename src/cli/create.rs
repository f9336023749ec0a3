//! Create command - raise a pull request for the current repository

use crate::cli::CliProgress;
use crate::cli::style::Stylize;
use anstream::println;
use auto_pr::auth::get_github_auth;
use auto_pr::config::{Config, GH_HOST_VAR, Overrides, load_file_config};
use auto_pr::error::{Error, Result};
use auto_pr::platform::{GitHubService, parse_repo_info};
use auto_pr::submit::{Outcome, PrAutomator, PreparedPr, Preparation, RunOptions};
use auto_pr::types::PullRequestDraft;
use auto_pr::vcs::{GitCli, VersionControl};
use dialoguer::Confirm;
use std::env;
use std::path::Path;
use tracing::debug;

/// Options for the create command
#[derive(Debug, Clone, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct CreateOptions<'a> {
    /// Repository owner override
    pub owner: Option<&'a str>,
    /// Repository name override
    pub repo: Option<&'a str>,
    /// Access token override
    pub token: Option<&'a str>,
    /// Base branch override
    pub base: Option<&'a str>,
    /// Feature name for a new branch
    pub feature: Option<&'a str>,
    /// Title override
    pub title: Option<&'a str>,
    /// Description override
    pub description: Option<&'a str>,
    /// Infer owner/repo from the `origin` remote
    pub from_remote: bool,
    /// Show the draft without pushing or submitting
    pub dry_run: bool,
    /// Preview the draft and prompt before pushing
    pub confirm: bool,
}

/// Run the create command
pub async fn run_create(path: &Path, options: CreateOptions<'_>) -> Result<Outcome> {
    let auth = get_github_auth(options.token)?;
    debug!(source = ?auth.source, "resolved GitHub token");

    let file_config = load_file_config(|var| env::var(var).ok())?;
    let vcs = GitCli::new(path);

    let detected = if options.from_remote {
        let url = vcs.remote_url("origin").await?;
        Some(parse_repo_info(&url)?)
    } else {
        None
    };

    let overrides = Overrides {
        owner: options.owner.map(ToString::to_string),
        repo: options.repo.map(ToString::to_string),
        base_branch: options.base.map(ToString::to_string),
    };
    let gh_host = env::var(GH_HOST_VAR).ok();
    let config = Config::resolve(
        &overrides,
        detected.as_ref(),
        gh_host.as_deref(),
        &file_config,
        auth.token,
    )?;
    debug!(identity = ?config.identity, api_url = %config.api_url, "resolved configuration");

    let platform = GitHubService::new(config.identity.clone(), &config.api_url, config.timeout)?;
    let progress = CliProgress::new();
    let automator = PrAutomator::new(&vcs, &platform, &progress, config.base_branch.as_str());

    let run_options = RunOptions {
        feature: options.feature,
        title: options.title,
        description: options.description,
        dry_run: options.dry_run,
    };

    let outcome = if options.confirm && !options.dry_run {
        match automator.prepare(&run_options).await? {
            Preparation::Aborted(reason) => Outcome::Aborted(reason),
            Preparation::Ready(prepared) => {
                print_draft_preview(&prepared);
                if confirm_submission()? {
                    println!();
                    automator.submit(prepared).await
                } else {
                    println!("Aborted");
                    Outcome::Declined
                }
            }
        }
    } else {
        automator.run(&run_options).await?
    };

    if let Outcome::Previewed(draft) = &outcome {
        print_draft(draft);
    }

    Ok(outcome)
}

fn confirm_submission() -> Result<bool> {
    Confirm::new()
        .with_prompt("Proceed with pull request?")
        .default(true)
        .interact()
        .map_err(|e| Error::Internal(format!("Failed to read confirmation: {e}")))
}

/// Print the plan shown before the --confirm prompt
fn print_draft_preview(prepared: &PreparedPr) {
    println!();
    println!("Plan:");
    if prepared.needs_push {
        println!("  Push: {} → origin", prepared.draft.head.accent());
    }
    println!(
        "  Create PR: {} → {} ({})",
        prepared.draft.head, prepared.draft.base, prepared.draft.title
    );
    println!("  Files: {}", prepared.changes.len());
    println!("  Commits: {}", prepared.commits.messages().len());
    println!();
}

/// Print a dry-run draft in full
fn print_draft(draft: &PullRequestDraft) {
    println!();
    println!("{} {}", "Head:".muted(), draft.head);
    println!("{} {}", "Base:".muted(), draft.base);
    println!("{} {}", "Title:".muted(), draft.title.emphasis());
    println!();
    println!("{}", draft.description);
}
