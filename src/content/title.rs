//! Title generation

use crate::content::rules::{Category, categories_for};
use crate::types::{ChangeSet, CommitLog};
use std::collections::HashSet;

/// Generate a pull request title.
///
/// The newest commit subject is used verbatim when it is not blank.
/// Otherwise the title is picked from the categories the changed paths fall
/// into, in the order docs, config, controllers with routes, controllers,
/// models, routes, and finally a file count.
pub fn generate_pr_title(changes: &ChangeSet, commits: &CommitLog) -> String {
    if let Some(subject) = commits.latest() {
        return subject.to_string();
    }

    let seen: HashSet<Category> = changes
        .files()
        .iter()
        .flat_map(|path| categories_for(path))
        .collect();
    let has = |c: Category| seen.contains(&c);

    if has(Category::Docs) {
        "docs: Update documentation and README".to_string()
    } else if has(Category::Config) {
        "config: Update configuration files".to_string()
    } else if has(Category::Controller) && has(Category::Route) {
        "feat: Add new API endpoints and controllers".to_string()
    } else if has(Category::Controller) {
        "feat: Update API controllers".to_string()
    } else if has(Category::Model) {
        "feat: Update data models".to_string()
    } else if has(Category::Route) {
        "feat: Update API routes".to_string()
    } else {
        format!("feat: Update {} files", changes.len())
    }
}
