//! Commit Module
//!
//! The commit-type catalog and the message composer.

pub mod message;
pub mod types;

pub use message::{CommitDraft, ComposedMessage, compose};
pub use types::{BREAKING_CHANGE_OPTIONS, COMMIT_TYPES, CommitType};
