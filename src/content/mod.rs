//! Pull request title and description generation
//!
//! Both generators are pure: the same change set and commit log always
//! produce the same text (the description additionally takes its timestamp
//! as an argument).

mod description;
mod rules;
mod title;

pub use description::{TIMESTAMP_FORMAT, generate_pr_description};
pub use rules::{Category, FileKind, categories_for, file_kind};
pub use title::generate_pr_title;
