//! Git Operations Module
//!
//! This module provides the git-facing side of the commits assistant.
//! It's split into focused submodules for better maintainability.

pub mod runner;
pub mod status;

pub use runner::{CommandRunner, GitCli, GitCommand};
pub use status::RepositoryStatus;
