//! Description generation

use crate::content::rules::file_kind;
use crate::types::{ChangeSet, CommitLog};
use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// Format of the trailing "generated on" timestamp
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const TESTING_SECTION: &str = "\
## 🧪 Testing
- [ ] All existing tests pass
- [ ] New functionality has been tested
- [ ] API endpoints tested via Swagger

";

const CHECKLIST_SECTION: &str = "\
## 📋 Checklist
- [x] Code follows project style guidelines
- [x] Self-review completed
- [ ] Documentation updated if needed
- [ ] No breaking changes introduced

";

const RELATED_ISSUES_SECTION: &str = "\
## 🔗 Related Issues
<!-- Link any related issues here -->

";

/// Generate the Markdown body of a pull request
pub fn generate_pr_description<Tz>(
    changes: &ChangeSet,
    commits: &CommitLog,
    generated_at: &DateTime<Tz>,
) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut out = String::from("## 🚀 Changes Overview\n\n");

    if !commits.is_empty() {
        out.push_str("### 📝 Commit Messages\n");
        for msg in commits.messages() {
            if !msg.trim().is_empty() {
                out.push_str(&format!("- {msg}\n"));
            }
        }
        out.push('\n');
    }

    out.push_str("### 📁 Files Changed\n");
    for file in changes.files() {
        if file.trim().is_empty() {
            continue;
        }
        let kind = file_kind(file);
        match kind.label {
            Some(label) => out.push_str(&format!("- {} `{file}` - {label}\n", kind.emoji)),
            None => out.push_str(&format!("- {} `{file}`\n", kind.emoji)),
        }
    }

    out.push('\n');
    out.push_str(TESTING_SECTION);
    out.push_str(CHECKLIST_SECTION);
    out.push_str(RELATED_ISSUES_SECTION);

    out.push_str(&format!(
        "**Generated automatically on {} 🤖**",
        generated_at.format(TIMESTAMP_FORMAT)
    ));

    out
}
