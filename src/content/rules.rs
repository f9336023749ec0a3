//! Path classification tables
//!
//! Matching is a case-insensitive substring test on the whole path.

/// Category used to pick a title
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Request handlers
    Controller,
    /// Data models
    Model,
    /// Route definitions
    Route,
    /// Configuration
    Config,
    /// Middleware layers
    Middleware,
    /// Documentation
    Docs,
}

/// Keywords per title category. A path may match several rows.
const CATEGORY_RULES: &[(&[&str], Category)] = &[
    (&["controller"], Category::Controller),
    (&["model"], Category::Model),
    (&["route"], Category::Route),
    (&["config"], Category::Config),
    (&["middleware"], Category::Middleware),
    (&["readme", "doc"], Category::Docs),
];

/// Annotation for one file in the description
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileKind {
    /// Leading emoji
    pub emoji: &'static str,
    /// Trailing label, absent for unclassified files
    pub label: Option<&'static str>,
}

/// Description annotations, first match wins
const FILE_KIND_RULES: &[(&[&str], FileKind)] = &[
    (
        &["controller", "api"],
        FileKind {
            emoji: "🔧",
            label: Some("API Controller changes"),
        },
    ),
    (
        &["model"],
        FileKind {
            emoji: "🗄️",
            label: Some("Data model updates"),
        },
    ),
    (
        &["route"],
        FileKind {
            emoji: "🛣️",
            label: Some("API route changes"),
        },
    ),
    (
        &["config"],
        FileKind {
            emoji: "⚙️",
            label: Some("Configuration updates"),
        },
    ),
    (
        &["middleware"],
        FileKind {
            emoji: "🔒",
            label: Some("Middleware changes"),
        },
    ),
    (
        &["readme"],
        FileKind {
            emoji: "📚",
            label: Some("Documentation updates"),
        },
    ),
];

const GENERIC_FILE: FileKind = FileKind {
    emoji: "📄",
    label: None,
};

fn matches_any(path: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| path.contains(k))
}

/// Every title category `path` belongs to, in table order
pub fn categories_for(path: &str) -> Vec<Category> {
    let lower = path.to_lowercase();
    CATEGORY_RULES
        .iter()
        .filter(|(keywords, _)| matches_any(&lower, keywords))
        .map(|(_, category)| *category)
        .collect()
}

/// Description annotation for `path`
pub fn file_kind(path: &str) -> FileKind {
    let lower = path.to_lowercase();
    FILE_KIND_RULES
        .iter()
        .find(|(keywords, _)| matches_any(&lower, keywords))
        .map_or(GENERIC_FILE, |(_, kind)| *kind)
}
