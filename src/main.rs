//! auto-pr - create GitHub pull requests from local git state
//!
//! CLI binary: branch, push, and open a PR with a generated title and
//! description.

use anyhow::Result;
use auto_pr::error::Error;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod cli;

/// Exit status when a run stops before creating a PR and `--strict` is set
const EXIT_ABORTED: u8 = 2;

#[derive(Parser)]
#[command(name = "auto-pr")]
#[command(about = "Automatically create GitHub Pull Requests")]
#[command(version)]
#[allow(clippy::struct_excessive_bools)]
struct Cli {
    /// Path to the git repository (defaults to current directory)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// GitHub repository owner [default: aisharay]
    #[arg(long)]
    owner: Option<String>,

    /// Repository name [default: ExpensesTracker-BE]
    #[arg(long)]
    repo: Option<String>,

    /// GitHub personal access token (falls back to GITHUB_TOKEN, then GH_TOKEN)
    #[arg(long)]
    token: Option<String>,

    /// Feature name for branch creation
    #[arg(long)]
    feature: Option<String>,

    /// Custom PR title
    #[arg(long)]
    title: Option<String>,

    /// Custom PR description
    #[arg(long)]
    description: Option<String>,

    /// Branch the PR targets [default: main]
    #[arg(long)]
    base: Option<String>,

    /// Infer owner and repository from the `origin` remote
    #[arg(long)]
    from_remote: bool,

    /// Dry run - show the PR that would be created without changing anything
    #[arg(long)]
    dry_run: bool,

    /// Preview the PR and prompt for confirmation before pushing
    #[arg(long, short = 'c')]
    confirm: bool,

    /// Exit with status 2 when no PR was created
    #[arg(long)]
    strict: bool,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("auto_pr=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let path = cli.path.clone().unwrap_or_else(|| PathBuf::from("."));

    let result = cli::run_create(
        &path,
        cli::CreateOptions {
            owner: cli.owner.as_deref(),
            repo: cli.repo.as_deref(),
            token: cli.token.as_deref(),
            base: cli.base.as_deref(),
            feature: cli.feature.as_deref(),
            title: cli.title.as_deref(),
            description: cli.description.as_deref(),
            from_remote: cli.from_remote,
            dry_run: cli.dry_run,
            confirm: cli.confirm,
        },
    )
    .await;

    match result {
        // A failed run still exits 0 unless --strict asks otherwise
        Ok(outcome) if cli.strict && outcome.is_aborted() => Ok(ExitCode::from(EXIT_ABORTED)),
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(Error::Auth(reason)) => {
            cli::print_token_setup(&reason);
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}
