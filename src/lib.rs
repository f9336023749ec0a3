//! auto-pr - pull requests from local git state
//!
//! Inspects the current git repository (branch, changed files, commit
//! subjects), creates and pushes a feature branch when needed, generates a
//! title and description, and opens a pull request through the GitHub REST
//! API.

pub mod auth;
pub mod config;
pub mod content;
pub mod error;
pub mod platform;
pub mod submit;
pub mod types;
pub mod vcs;
