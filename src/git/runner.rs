//! Git Command Execution
//!
//! Typed git invocations and the `CommandRunner` seam that executes them.
//! Every command is spawned as a literal argument vector, never through a
//! shell, so commit text containing quotes or metacharacters reaches git
//! untouched.

use std::{
    fmt,
    path::{Path, PathBuf},
    process::{Command, Output, Stdio},
};

use tracing::debug;

use crate::errors::{GitError, Result};

const GIT: &str = "git";

// `core.quotePath=false` keeps non-ASCII paths readable; quoting of special
// characters remains and is undone by `status::unquote_path`.
const QUOTE_PATH_OFF: &str = "core.quotePath=false";

/// A git invocation the assistant knows how to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitCommand {
    /// `git rev-parse --is-inside-work-tree`
    WorkTreeCheck,
    /// `git -c core.quotePath=false diff --cached --name-only`
    StagedNames,
    /// `git -c core.quotePath=false status --porcelain`
    StatusPorcelain,
    /// `git init`
    Init,
    /// `git add .`
    AddAll,
    /// `git commit -m <p1> [-m <p2> ...]`, one `-m` per paragraph.
    Commit { paragraphs: Vec<String> },
}

impl GitCommand {
    /// Returns the arguments passed to `git`, excluding the program name.
    #[must_use]
    pub fn args(&self) -> Vec<&str> {
        match self {
            GitCommand::WorkTreeCheck => vec!["rev-parse", "--is-inside-work-tree"],
            GitCommand::StagedNames => {
                vec!["-c", QUOTE_PATH_OFF, "diff", "--cached", "--name-only"]
            }
            GitCommand::StatusPorcelain => vec!["-c", QUOTE_PATH_OFF, "status", "--porcelain"],
            GitCommand::Init => vec!["init"],
            GitCommand::AddAll => vec!["add", "."],
            GitCommand::Commit { paragraphs } => {
                let mut args = Vec::with_capacity(1 + paragraphs.len() * 2);
                args.push("commit");

                for paragraph in paragraphs {
                    args.push("-m");
                    args.push(paragraph.as_str());
                }

                args
            }
        }
    }
}

impl fmt::Display for GitCommand {
    /// Renders the command line for diagnostics. Arguments containing
    /// whitespace or quotes are wrapped in double quotes for readability only.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{GIT}")?;

        for arg in self.args() {
            if arg.is_empty() || arg.contains(|c: char| c.is_whitespace() || c == '"') {
                write!(f, " \"{}\"", arg.replace('"', "\\\""))?;
            } else {
                write!(f, " {arg}")?;
            }
        }

        Ok(())
    }
}

/// Executes git commands on behalf of the assistant.
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner {
    /// Runs `command` and reports whether it exited successfully.
    /// Spawn failures count as unsuccessful.
    fn succeeds(&self, command: &GitCommand) -> bool;

    /// Runs `command` with the terminal attached.
    ///
    /// # Errors
    /// * If the command cannot be spawned or exits with a non-zero status
    fn run_interactive(&self, command: &GitCommand) -> Result<()>;

    /// Runs `command` and returns its standard output split into lines.
    /// A trailing empty line is dropped; leading whitespace is preserved.
    ///
    /// # Errors
    /// * If the command cannot be spawned or exits with a non-zero status
    fn run_capture(&self, command: &GitCommand) -> Result<Vec<String>>;

    /// Commits with one `-m` argument per paragraph and returns git's
    /// combined stdout and stderr.
    ///
    /// # Errors
    /// * `GitError::CommandFailed` carrying the combined output if git fails
    fn commit(&self, paragraphs: &[String]) -> Result<String>;
}

/// Runs the real `git` binary, in the current working directory unless a
/// repository directory is given.
#[derive(Debug, Default, Clone)]
pub struct GitCli {
    dir: Option<PathBuf>,
}

impl GitCli {
    /// Runs git inside `dir` instead of the current working directory.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: Some(dir.as_ref().to_path_buf()),
        }
    }

    fn command(&self, command: &GitCommand) -> Command {
        debug!(%command, dir = ?self.dir, "running git");

        let mut process = Command::new(GIT);
        process.args(command.args());

        if let Some(dir) = &self.dir {
            process.current_dir(dir);
        }

        process
    }

    fn spawn_error(command: &GitCommand, source: std::io::Error) -> GitError {
        GitError::Spawn {
            command: command.to_string(),
            source,
        }
    }

    fn output(&self, command: &GitCommand) -> Result<Output> {
        Ok(self
            .command(command)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| Self::spawn_error(command, e))?)
    }
}

impl CommandRunner for GitCli {
    fn succeeds(&self, command: &GitCommand) -> bool {
        self.command(command)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }

    fn run_interactive(&self, command: &GitCommand) -> Result<()> {
        let status = self
            .command(command)
            .status()
            .map_err(|e| Self::spawn_error(command, e))?;

        if status.success() {
            Ok(())
        } else {
            Err(GitError::CommandFailed {
                command: command.to_string(),
                output: format!("exited with {status}"),
            }
            .into())
        }
    }

    fn run_capture(&self, command: &GitCommand) -> Result<Vec<String>> {
        let output = self.output(command)?;

        if output.status.success() {
            Ok(split_lines(&String::from_utf8_lossy(&output.stdout)))
        } else {
            Err(GitError::CommandFailed {
                command: command.to_string(),
                output: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into())
        }
    }

    fn commit(&self, paragraphs: &[String]) -> Result<String> {
        let command = GitCommand::Commit {
            paragraphs: paragraphs.to_vec(),
        };
        let output = self.output(&command)?;
        let combined = combined_output(&output);

        if output.status.success() {
            Ok(combined)
        } else {
            Err(GitError::CommandFailed {
                command: command.to_string(),
                output: combined,
            }
            .into())
        }
    }
}

/// Splits command output into lines, dropping only the final empty entry.
fn split_lines(stdout: &str) -> Vec<String> {
    let mut lines: Vec<String> = stdout.split('\n').map(str::to_string).collect();

    if lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }

    lines
}

fn combined_output(output: &Output) -> String {
    let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
    combined.push_str(&String::from_utf8_lossy(&output.stderr));
    combined.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_args() {
        assert_eq!(
            GitCommand::WorkTreeCheck.args(),
            ["rev-parse", "--is-inside-work-tree"]
        );
        assert_eq!(
            GitCommand::StagedNames.args(),
            ["-c", "core.quotePath=false", "diff", "--cached", "--name-only"]
        );
        assert_eq!(
            GitCommand::StatusPorcelain.args(),
            ["-c", "core.quotePath=false", "status", "--porcelain"]
        );
        assert_eq!(GitCommand::Init.args(), ["init"]);
        assert_eq!(GitCommand::AddAll.args(), ["add", "."]);
    }

    #[test]
    fn test_commit_args_one_flag_per_paragraph() {
        let command = GitCommand::Commit {
            paragraphs: vec![
                "🐛 fix: handle nil".to_string(),
                "details here".to_string(),
                "BREAKING CHANGE: changes API shape".to_string(),
            ],
        };

        assert_eq!(
            command.args(),
            [
                "commit",
                "-m",
                "🐛 fix: handle nil",
                "-m",
                "details here",
                "-m",
                "BREAKING CHANGE: changes API shape",
            ]
        );
    }

    #[test]
    fn test_commit_args_keep_shell_metacharacters_literal() {
        let message = r#"fix: "quoted" $(rm -rf /) --amend"#.to_string();
        let command = GitCommand::Commit {
            paragraphs: vec![message.clone()],
        };

        assert_eq!(command.args(), ["commit", "-m", message.as_str()]);
    }

    #[test]
    fn test_display_quotes_arguments_with_spaces() {
        let command = GitCommand::Commit {
            paragraphs: vec!["📦 feat: add parser".to_string()],
        };

        assert_eq!(command.to_string(), "git commit -m \"📦 feat: add parser\"");
        assert_eq!(GitCommand::AddAll.to_string(), "git add .");
    }

    #[test]
    fn test_split_lines_keeps_leading_whitespace() {
        let lines = split_lines(" M src/main.rs\n?? notes.txt\n");
        assert_eq!(lines, [" M src/main.rs", "?? notes.txt"]);
    }

    #[test]
    fn test_split_lines_empty_output() {
        assert!(split_lines("").is_empty());
    }
}
