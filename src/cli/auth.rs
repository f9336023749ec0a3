//! Token setup guidance

use crate::cli::style::Stylize;
use anstream::println;

/// Print how to obtain and provide a GitHub token
pub fn print_token_setup(reason: &str) {
    println!("❌ {reason}");
    println!(
        "Either provide {} or set the {} environment variable",
        "--token".accent(),
        "GITHUB_TOKEN".accent()
    );
    println!();
    println!("{}", "📖 To create a GitHub token:".emphasis());
    println!("  1. Go to GitHub Settings > Developer settings > Personal access tokens");
    println!("  2. Generate new token with {} permissions", "repo".accent());
    println!(
        "  3. Set {} (or {}) or use {}",
        "GITHUB_TOKEN".accent(),
        "GH_TOKEN".accent(),
        "--token".accent()
    );
    println!();
    println!("{}", "For GitHub Enterprise:".muted());
    println!("  {}", "Set GH_HOST to your instance hostname".muted());
}
