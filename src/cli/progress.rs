//! Console progress callback

use crate::cli::style::{Stylize, check, cross, link, spinner_style};
use anstream::{eprintln, println};
use async_trait::async_trait;
use auto_pr::error::Error;
use auto_pr::submit::{AbortReason, BranchStatus, ProgressCallback, PushStatus, Stage};
use auto_pr::types::{ChangeSet, PullRequest};
use indicatif::ProgressBar;
use std::sync::Mutex;
use std::time::Duration;

/// CLI progress callback that prints to stdout
///
/// Shows a spinner while the hosting API is being called.
pub struct CliProgress {
    spinner: Mutex<Option<ProgressBar>>,
}

impl CliProgress {
    /// Create a console progress printer
    pub const fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn start_spinner(&self, message: &'static str) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(spinner_style());
        spinner.set_message(message);
        spinner.enable_steady_tick(Duration::from_millis(80));
        if let Ok(mut slot) = self.spinner.lock() {
            *slot = Some(spinner);
        }
    }

    fn stop_spinner(&self) {
        if let Ok(mut slot) = self.spinner.lock()
            && let Some(spinner) = slot.take()
        {
            spinner.finish_and_clear();
        }
    }
}

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_stage(&self, stage: Stage) {
        match stage {
            Stage::Start => println!("🚀 Starting Auto PR Creation Process..."),
            Stage::Submit => self.start_spinner("🔄 Creating Pull Request..."),
            _ => {}
        }
    }

    async fn on_branch(&self, branch: &str, status: BranchStatus) {
        match status {
            BranchStatus::Current => println!("📍 Current branch: {}", branch.accent()),
            BranchStatus::Creating => println!("🌿 Creating new branch: {}", branch.accent()),
            BranchStatus::WouldCreate => {
                println!("🌿 Would create branch: {}", branch.accent());
            }
        }
    }

    async fn on_changes(&self, changes: &ChangeSet) {
        println!("📁 Found {} changed files", changes.len());
    }

    async fn on_title(&self, title: &str) {
        println!("📝 PR Title: {}", title.emphasis());
    }

    async fn on_push(&self, branch: &str, status: PushStatus) {
        match &status {
            PushStatus::Started => println!("⬆️ Pushing branch {}...", branch.accent()),
            PushStatus::Success => println!("  {} Pushed {branch}", check()),
            PushStatus::Failed(msg) => {
                eprintln!("  {} Failed to push {branch}: {}", cross(), msg.muted());
            }
        }
    }

    async fn on_pr_created(&self, pr: &PullRequest) {
        self.stop_spinner();
        println!("✅ Pull Request created successfully!");
        println!("🔗 PR URL: {}", link(&pr.html_url).accent());
        println!("📊 PR Number: #{}", pr.number);
    }

    async fn on_error(&self, error: &Error) {
        self.stop_spinner();
        eprintln!("❌ {error}");
    }

    async fn on_abort(&self, reason: &AbortReason) {
        self.stop_spinner();
        match reason {
            AbortReason::NoChanges => println!("⚠️ {reason}"),
            _ => eprintln!("❌ {reason}"),
        }
    }

    async fn on_message(&self, message: &str) {
        println!("{}", message.muted());
    }
}
