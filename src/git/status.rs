//! Git Status Operations
//!
//! Repository detection and the staged / modified snapshot the prompt flow
//! branches on.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::errors::Result;

use super::runner::{CommandRunner, GitCommand};

// Matches porcelain v1 entries such as:
// MM file.txt
//  M file.txt
// ?? file.txt
// R  old_file.txt -> new_file.txt
static PORCELAIN_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[ MTADRCU?!][ MTADRCU?!] (.+?)(?: -> (.+))?$")
        .expect("porcelain pattern is a valid regex")
});

/// Snapshot of the repository taken once per run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryStatus {
    pub is_initialized: bool,
    pub staged_paths: Vec<String>,
    pub modified_paths: Vec<String>,
}

impl RepositoryStatus {
    /// Inspects the repository in the current working directory.
    ///
    /// A failing work-tree check means "not a repository" and is not an
    /// error: the returned status simply has `is_initialized == false`.
    ///
    /// # Errors
    /// * If the staged-files or status query fails in an initialized repository
    pub fn inspect<R: CommandRunner + ?Sized>(runner: &R) -> Result<Self> {
        if !runner.succeeds(&GitCommand::WorkTreeCheck) {
            debug!("no git work tree found");
            return Ok(Self::default());
        }

        let staged_paths = runner
            .run_capture(&GitCommand::StagedNames)?
            .into_iter()
            .filter(|line| !line.trim().is_empty())
            .map(|line| unquote_path(&line))
            .collect();
        let status_lines = runner.run_capture(&GitCommand::StatusPorcelain)?;
        let modified_paths = parse_porcelain(&status_lines);

        let status = Self {
            is_initialized: true,
            staged_paths,
            modified_paths,
        };
        debug!(
            staged = status.staged_paths.len(),
            modified = status.modified_paths.len(),
            "repository inspected"
        );

        Ok(status)
    }

    /// True when nothing is staged but the working tree has changes.
    #[must_use]
    pub fn needs_staging(&self) -> bool {
        self.staged_paths.is_empty() && !self.modified_paths.is_empty()
    }

    /// True when there is nothing at all to commit.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.staged_paths.is_empty() && self.modified_paths.is_empty()
    }
}

/// Extracts the paths from `git status --porcelain` lines.
///
/// For renamed or copied entries the new path is returned. Lines that do not
/// look like porcelain entries are kept verbatim (trimmed) so that no change
/// is hidden from the user.
#[must_use]
pub fn parse_porcelain(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| match PORCELAIN_LINE.captures(line) {
            Some(captures) => captures
                .get(2)
                .or_else(|| captures.get(1))
                .map_or_else(|| line.trim().to_string(), |m| unquote_path(m.as_str())),
            None => line.trim().to_string(),
        })
        .collect()
}

/// Undoes git's C-style quoting of a path (`"my file.txt"`, `"caf\303\251"`).
///
/// Unquoted paths are returned unchanged. Escaped bytes are decoded as UTF-8,
/// lossily.
#[must_use]
pub fn unquote_path(raw: &str) -> String {
    let Some(inner) = raw
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    else {
        return raw.to_string();
    };

    let mut bytes = Vec::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            let mut buffer = [0; 4];
            bytes.extend_from_slice(c.encode_utf8(&mut buffer).as_bytes());
            continue;
        }

        match chars.next() {
            Some('n') => bytes.push(b'\n'),
            Some('t') => bytes.push(b'\t'),
            Some('r') => bytes.push(b'\r'),
            Some('a') => bytes.push(0x07),
            Some('b') => bytes.push(0x08),
            Some('f') => bytes.push(0x0c),
            Some('v') => bytes.push(0x0b),
            Some(digit @ '0'..='7') => {
                let mut value = digit.to_digit(8).unwrap_or(0);

                for _ in 0..2 {
                    match chars.peek().and_then(|next| next.to_digit(8)) {
                        Some(next) => {
                            value = value * 8 + next;
                            chars.next();
                        }
                        None => break,
                    }
                }

                bytes.push(u8::try_from(value).unwrap_or(u8::MAX));
            }
            Some(other) => {
                let mut buffer = [0; 4];
                bytes.extend_from_slice(other.encode_utf8(&mut buffer).as_bytes());
            }
            None => bytes.push(b'\\'),
        }
    }

    String::from_utf8_lossy(&bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        errors::{AssistantError, GitError},
        git::runner::MockCommandRunner,
    };

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|line| (*line).to_string()).collect()
    }

    #[test]
    fn test_porcelain_pattern_compiles() {
        let pattern = LazyLock::force(&PORCELAIN_LINE);
        assert!(pattern.is_match("?? notes.txt"));
        assert!(!pattern.is_match("not a status line"));
    }

    #[test]
    fn test_unquote_path() {
        assert_eq!(unquote_path("plain.txt"), "plain.txt");
        assert_eq!(unquote_path("\"my file.txt\""), "my file.txt");
        assert_eq!(unquote_path(r#""say \"hi\".txt""#), "say \"hi\".txt");
        assert_eq!(unquote_path(r#""back\\slash""#), "back\\slash");
        assert_eq!(unquote_path(r#""tab\there""#), "tab\there");
        assert_eq!(unquote_path(r#""caf\303\251.md""#), "café.md");
        assert_eq!(unquote_path("\""), "\"");
    }

    #[test]
    fn test_parse_porcelain_unquotes_paths() {
        let status = lines(&[
            "?? \"my file.txt\"",
            "?? -n.txt",
            "R  \"old name.txt\" -> \"new name.txt\"",
            "?? \"caf\\303\\251.md\"",
        ]);

        assert_eq!(
            parse_porcelain(&status),
            ["my file.txt", "-n.txt", "new name.txt", "café.md"]
        );
    }

    #[test]
    fn test_parse_porcelain() {
        let status = lines(&[
            " M src/main.rs",
            "M  Cargo.toml",
            "MM src/lib.rs",
            "?? notes.txt",
            " D removed.rs",
            "R  old_name.txt -> new_name.txt",
        ]);

        assert_eq!(
            parse_porcelain(&status),
            [
                "src/main.rs",
                "Cargo.toml",
                "src/lib.rs",
                "notes.txt",
                "removed.rs",
                "new_name.txt",
            ]
        );
    }

    #[test]
    fn test_parse_porcelain_keeps_unknown_lines() {
        let status = lines(&["something unexpected", ""]);
        assert_eq!(parse_porcelain(&status), ["something unexpected"]);
    }

    #[test]
    fn test_inspect_not_a_repository() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_succeeds()
            .withf(|command| *command == GitCommand::WorkTreeCheck)
            .times(1)
            .return_const(false);
        runner.expect_run_capture().never();

        let status = RepositoryStatus::inspect(&runner).unwrap();
        assert_eq!(status, RepositoryStatus::default());
        assert!(!status.is_initialized);
    }

    #[test]
    fn test_inspect_collects_staged_and_modified() {
        let mut runner = MockCommandRunner::new();
        runner.expect_succeeds().return_const(true);
        runner
            .expect_run_capture()
            .withf(|command| *command == GitCommand::StagedNames)
            .times(1)
            .returning(|_| Ok(vec!["src/lib.rs".to_string(), "\"a b.txt\"".to_string()]));
        runner
            .expect_run_capture()
            .withf(|command| *command == GitCommand::StatusPorcelain)
            .times(1)
            .returning(|_| Ok(vec!["M  src/lib.rs".to_string(), "?? todo.md".to_string()]));

        let status = RepositoryStatus::inspect(&runner).unwrap();
        assert!(status.is_initialized);
        assert_eq!(status.staged_paths, ["src/lib.rs", "a b.txt"]);
        assert_eq!(status.modified_paths, ["src/lib.rs", "todo.md"]);
        assert!(!status.needs_staging());
        assert!(!status.is_clean());
    }

    #[test]
    fn test_inspect_status_failure_is_fatal() {
        let mut runner = MockCommandRunner::new();
        runner.expect_succeeds().return_const(true);
        runner.expect_run_capture().returning(|command| {
            Err(GitError::CommandFailed {
                command: command.to_string(),
                output: "fatal: index file corrupt".to_string(),
            }
            .into())
        });

        let result = RepositoryStatus::inspect(&runner);
        assert!(matches!(
            result,
            Err(AssistantError::Git(GitError::CommandFailed { .. }))
        ));
    }

    #[test]
    fn test_needs_staging_and_clean() {
        let unstaged = RepositoryStatus {
            is_initialized: true,
            staged_paths: vec![],
            modified_paths: vec!["a.txt".to_string()],
        };
        assert!(unstaged.needs_staging());
        assert!(!unstaged.is_clean());

        let clean = RepositoryStatus {
            is_initialized: true,
            ..RepositoryStatus::default()
        };
        assert!(!clean.needs_staging());
        assert!(clean.is_clean());
    }
}
