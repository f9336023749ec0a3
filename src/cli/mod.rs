//! CLI command implementations

mod auth;
mod create;
mod progress;
mod style;

pub use auth::print_token_setup;
pub use create::{CreateOptions, run_create};
pub use progress::CliProgress;
