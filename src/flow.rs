//! Prompt Flow
//!
//! The sequence of questions that turns a repository status into a commit
//! draft:
//!
//! 1. offer `git init` when there is no repository,
//! 2. offer `git add .` when nothing is staged but files changed,
//! 3. stop when there is nothing to commit,
//! 4. ask for the commit type, description, optional body and the
//!    breaking-change details.
//!
//! Declining a confirmation or finding nothing to commit ends the flow with
//! an [`Outcome::Exit`]; cancelling a prompt or a failing git command is an
//! error.

use tracing::{debug, info};

use crate::{
    commit::{
        message::CommitDraft,
        types::{
            BREAKING_CHANGE_OPTIONS, COMMIT_TYPES, format_breaking_change_options,
            format_commit_options,
        },
    },
    errors::{PromptError, Result},
    git::{CommandRunner, GitCommand, RepositoryStatus},
    prompt::{
        Prompter,
        validation::{
            INVALID_CONFIRMATION, parse_confirmation, validate_breaking_description,
            validate_description,
        },
    },
    utils::{format_list, print_info, print_success, print_warning},
};

pub const INIT_QUESTION: &str = "Want to initialize git repo?";
pub const STAGE_QUESTION: &str = "Do you want to add all files to staging?";
pub const TYPE_QUESTION: &str = "Select type of commit";
pub const DESCRIPTION_QUESTION: &str = "Enter commit message";
pub const BODY_QUESTION: &str = "Enter commit body (optional)";
pub const BREAKING_QUESTION: &str = "Does this commit break backwards compatibility?";
pub const BREAKING_DESCRIPTION_QUESTION: &str = "Enter breaking change description";

/// Why the flow ended without a commit. All of these are successful exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    InitDeclined,
    StagingDeclined,
    NothingToCommit,
}

/// How the flow ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Commit(CommitDraft),
    Exit(ExitReason),
}

pub struct PromptFlow<'a, R: CommandRunner + ?Sized, P: Prompter + ?Sized> {
    runner: &'a R,
    prompter: &'a mut P,
}

impl<'a, R: CommandRunner + ?Sized, P: Prompter + ?Sized> PromptFlow<'a, R, P> {
    pub fn new(runner: &'a R, prompter: &'a mut P) -> Self {
        Self { runner, prompter }
    }

    /// Runs the flow from the given repository status to its end.
    ///
    /// # Errors
    /// * If `git init`, `git add .` or the follow-up status query fails
    /// * If a menu or text prompt is cancelled
    pub fn run(&mut self, status: RepositoryStatus) -> Result<Outcome> {
        let mut status = status;

        if !status.is_initialized {
            print_warning("Git repo not initialized.", "");

            if !self.confirm(INIT_QUESTION)? {
                return Ok(Outcome::Exit(ExitReason::InitDeclined));
            }

            self.runner.run_interactive(&GitCommand::Init)?;
            print_success("Git repo initialized!", "");
            status = RepositoryStatus::inspect(self.runner)?;
        }

        if status.needs_staging() {
            print_info(
                "There are no staged files for committing.",
                &format!(
                    "List of non-staged modified files:\n{}",
                    format_list(&status.modified_paths)
                ),
            );

            if !self.confirm(STAGE_QUESTION)? {
                return Ok(Outcome::Exit(ExitReason::StagingDeclined));
            }

            self.runner.run_interactive(&GitCommand::AddAll)?;
            print_success("Files added to staging!", "");
        }

        if status.is_clean() {
            return Ok(Outcome::Exit(ExitReason::NothingToCommit));
        }

        let draft = self.collect_draft()?;
        info!(type_index = draft.type_index, breaking = draft.is_breaking, "draft ready");

        Ok(Outcome::Commit(draft))
    }

    /// Asks `question` until the answer is `y` or `n`.
    fn confirm(&mut self, question: &str) -> Result<bool> {
        loop {
            let answer = self.prompter.confirm(question)?;

            if let Some(accepted) = parse_confirmation(&answer) {
                debug!(question, accepted, "confirmation answered");
                return Ok(accepted);
            }

            self.prompter.reject(INVALID_CONFIRMATION);
        }
    }

    fn select(&mut self, message: &str, options: Vec<String>) -> Result<usize> {
        let available = options.len();
        let index = self.prompter.select(message, options)?;

        if index < available {
            Ok(index)
        } else {
            Err(PromptError::InvalidSelection { index, available }.into())
        }
    }

    fn collect_draft(&mut self) -> Result<CommitDraft> {
        let type_index = self.select(TYPE_QUESTION, format_commit_options(&COMMIT_TYPES))?;
        let description = self
            .prompter
            .text(DESCRIPTION_QUESTION, Some(validate_description))?;
        let body = self.prompter.text(BODY_QUESTION, None)?;

        let breaking_index = self.select(BREAKING_QUESTION, format_breaking_change_options())?;
        let is_breaking = BREAKING_CHANGE_OPTIONS[breaking_index].is_breaking;

        let breaking_description = if is_breaking {
            Some(
                self.prompter
                    .text(BREAKING_DESCRIPTION_QUESTION, Some(validate_breaking_description))?,
            )
        } else {
            None
        };

        Ok(CommitDraft {
            type_index,
            description,
            body: Some(body).filter(|body| !body.is_empty()),
            is_breaking,
            breaking_description,
        })
    }
}
