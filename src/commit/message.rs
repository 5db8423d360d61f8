//! Commit Message Composition
//!
//! Turns a completed `CommitDraft` into the text shown to the user and the
//! paragraphs handed to `git commit`.

use super::types::{COMMIT_TYPES, CommitType};

pub const BREAKING_CHANGE_PREFIX: &str = "BREAKING CHANGE: ";

/// Answers collected by the prompt flow.
///
/// `breaking_description` is `Some` exactly when `is_breaking` is true; the
/// prompt flow guarantees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitDraft {
    pub type_index: usize,
    pub description: String,
    pub body: Option<String>,
    pub is_breaking: bool,
    pub breaking_description: Option<String>,
}

impl CommitDraft {
    /// The catalog entry selected for this draft.
    ///
    /// Falls back to the first entry if `type_index` is out of range, which
    /// cannot happen for drafts produced by the prompt flow.
    #[must_use]
    pub fn commit_type(&self) -> &'static CommitType {
        COMMIT_TYPES.get(self.type_index).unwrap_or(&COMMIT_TYPES[0])
    }
}

/// A composed commit message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedMessage {
    /// Header, body and footer joined with single newlines.
    pub display_text: String,
    /// Header, optional body, optional footer; one `-m` argument each.
    pub paragraphs: Vec<String>,
}

/// Composes the commit message for `draft`.
///
/// # Examples
///
/// ```
/// use commits_assistant::commit::message::{CommitDraft, compose};
///
/// let draft = CommitDraft {
///     type_index: 0,
///     description: "add parser".to_string(),
///     body: None,
///     is_breaking: false,
///     breaking_description: None,
/// };
///
/// assert_eq!(compose(&draft).display_text, "📦 feat: add parser");
/// ```
#[must_use]
pub fn compose(draft: &CommitDraft) -> ComposedMessage {
    let mut paragraphs = vec![format!(
        "{}: {}",
        draft.commit_type().label,
        draft.description
    )];

    if let Some(body) = draft.body.as_deref().filter(|body| !body.is_empty()) {
        paragraphs.push(body.to_string());
    }

    if draft.is_breaking {
        paragraphs.push(format!(
            "{BREAKING_CHANGE_PREFIX}{}",
            draft.breaking_description.as_deref().unwrap_or_default()
        ));
    }

    ComposedMessage {
        display_text: paragraphs.join("\n"),
        paragraphs,
    }
}
