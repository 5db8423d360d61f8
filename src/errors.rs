use thiserror::Error;

/// Main error type for the commits assistant
#[derive(Error, Debug)]
pub enum AssistantError {
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    #[error("Prompt error: {0}")]
    Prompt(#[from] PromptError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Git-related errors
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Could not run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Git command failed: {command}\nOutput: {output}")]
    CommandFailed { command: String, output: String },

    #[error("Git commit failed: {command}")]
    CommitFailed { command: String },
}

/// Errors raised while collecting answers from the user
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Operation cancelled by user")]
    Cancelled,

    #[error("Input stream closed before an answer was given")]
    EndOfInput,

    #[error("Selection {index} is not one of the {available} menu options")]
    InvalidSelection { index: usize, available: usize },

    #[error("Terminal interaction failed: {0}")]
    Terminal(String),
}

impl From<inquire::InquireError> for PromptError {
    fn from(error: inquire::InquireError) -> Self {
        use inquire::InquireError;

        match error {
            InquireError::OperationCanceled | InquireError::OperationInterrupted => {
                PromptError::Cancelled
            }
            other => PromptError::Terminal(other.to_string()),
        }
    }
}

impl From<inquire::InquireError> for AssistantError {
    fn from(error: inquire::InquireError) -> Self {
        AssistantError::Prompt(error.into())
    }
}

impl AssistantError {
    /// A hint shown to the user alongside the error.
    #[must_use]
    pub fn suggestion(&self) -> &'static str {
        match self {
            AssistantError::Prompt(PromptError::Cancelled | PromptError::EndOfInput) => {
                "Run the assistant again when you are ready to commit."
            }
            AssistantError::Prompt(_) => "Run the assistant from an interactive terminal.",
            AssistantError::Git(GitError::Spawn { .. }) => {
                "Please ensure git is installed and available on your PATH."
            }
            AssistantError::Git(GitError::CommitFailed { .. }) => {
                "Check the git output above, fix the problem and try again."
            }
            AssistantError::Git(GitError::CommandFailed { .. }) | AssistantError::Io(_) => {
                "Please ensure you're in a healthy Git repository."
            }
        }
    }
}

/// Type alias for Result using `AssistantError`
pub type Result<T> = std::result::Result<T, AssistantError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inquire_cancellation_maps_to_cancelled() {
        let error: PromptError = inquire::InquireError::OperationCanceled.into();
        assert!(matches!(error, PromptError::Cancelled));

        let error: PromptError = inquire::InquireError::OperationInterrupted.into();
        assert!(matches!(error, PromptError::Cancelled));
    }

    #[test]
    fn test_other_inquire_errors_map_to_terminal() {
        let error: AssistantError = inquire::InquireError::NotTTY.into();
        assert!(matches!(
            error,
            AssistantError::Prompt(PromptError::Terminal(_))
        ));
    }

    #[test]
    fn test_command_failed_display_contains_output() {
        let error = AssistantError::from(GitError::CommandFailed {
            command: "git commit -m test".to_string(),
            output: "nothing added to commit".to_string(),
        });

        let rendered = error.to_string();
        assert!(rendered.contains("git commit -m test"));
        assert!(rendered.contains("nothing added to commit"));
    }
}
