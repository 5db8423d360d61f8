//! Commit Type Catalog
//!
//! The fixed, ordered set of commit types offered in the selection menu and
//! the two answers of the breaking-change question.

use std::fmt;

/// A commit type: the prefix written into the header and a short explanation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitType {
    pub label: &'static str,
    pub description: &'static str,
}

/// Menu order is significant: the selected index refers into this slice.
pub static COMMIT_TYPES: [CommitType; 9] = [
    CommitType {
        label: "📦 feat",
        description: "A new feature",
    },
    CommitType {
        label: "🐛 fix",
        description: "A bug fix",
    },
    CommitType {
        label: "📃 docs",
        description: "Documentation only changes",
    },
    CommitType {
        label: "💅 style",
        description: "Changes that do not affect the meaning of the code",
    },
    CommitType {
        label: "🔧 refactor",
        description: "A code change that neither fixes a bug nor adds a feature",
    },
    CommitType {
        label: "🚀 perf",
        description: "A code change that improves performance",
    },
    CommitType {
        label: "🧪 test",
        description: "Adding missing tests",
    },
    CommitType {
        label: "👀 chore",
        description: "Changes to the build process or auxiliary tools",
    },
    CommitType {
        label: "👈 revert",
        description: "Reverts a previous commit",
    },
];

/// One answer of the "does this break backwards compatibility" question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakingChangeOption {
    pub answer: &'static str,
    pub is_breaking: bool,
}

impl fmt::Display for BreakingChangeOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.answer)
    }
}

pub static BREAKING_CHANGE_OPTIONS: [BreakingChangeOption; 2] = [
    BreakingChangeOption {
        answer: "No",
        is_breaking: false,
    },
    BreakingChangeOption {
        answer: "Yes",
        is_breaking: true,
    },
];

/// Formats catalog entries as menu lines.
///
/// Each line is `"<label>: "` followed by enough spaces to align every
/// description on the column after the longest label. Widths are counted in
/// characters.
///
/// # Examples
///
/// ```
/// use commits_assistant::commit::types::{COMMIT_TYPES, format_commit_options};
///
/// let options = format_commit_options(&COMMIT_TYPES);
/// assert_eq!(options[0], format!("📦 feat: {}A new feature", " ".repeat(4)));
/// ```
#[must_use]
pub fn format_commit_options(types: &[CommitType]) -> Vec<String> {
    let longest = types
        .iter()
        .map(|commit_type| commit_type.label.chars().count())
        .max()
        .unwrap_or(0);

    types
        .iter()
        .map(|commit_type| {
            let padding = longest - commit_type.label.chars().count();
            format!(
                "{}: {}{}",
                commit_type.label,
                " ".repeat(padding),
                commit_type.description
            )
        })
        .collect()
}

/// Returns the menu labels of the breaking-change question, in order.
#[must_use]
pub fn format_breaking_change_options() -> Vec<String> {
    BREAKING_CHANGE_OPTIONS
        .iter()
        .map(ToString::to_string)
        .collect()
}
