//! Two-phase pull request submission
//!
//! 1. Preparation - ensure a feature branch, collect changes, build the draft
//! 2. Submission - push the branch and call the hosting API

mod automator;
mod progress;

pub use automator::{
    AbortReason, FEATURE_PREFIX, Outcome, PrAutomator, PreparedPr, Preparation, RunOptions,
    feature_branch_name,
};
pub use progress::{BranchStatus, NoopProgress, ProgressCallback, PushStatus, Stage};
