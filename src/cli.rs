use std::io;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use console::style;
use tracing::debug;

use crate::{
    commit::message::{CommitDraft, compose},
    errors::{AssistantError, GitError, Result},
    flow::{ExitReason, Outcome, PromptFlow},
    git::{CommandRunner, GitCli, GitCommand, RepositoryStatus},
    prompt::TerminalPrompter,
    utils::{print_info, print_success},
};

const BIN_NAME: &str = "commits-assistant";

#[derive(Subcommand)]
enum Commands {
    /// Print shell completions for the given shell to stdout
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser)]
#[command(about = "Interactive assistant that writes a conventional commit message and commits it:\n\
\t- offers to initialize the repository and stage changes,\n\
\t- asks for the commit type, description, body and breaking changes,\n\
\t- runs `git commit` with the composed message.")]
#[command(help_template = "{about}\n\nUSAGE:\n{usage}\n\n{all-args}\n")]
#[command(name = "commits-assistant", version)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Print debug logs and git's output after committing.
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Compose the message and show the git command without committing.
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

/// # `run`
/// Runs the program.
///
/// ## Errors
/// Returns an error if a git command fails or a prompt is cancelled.
pub fn run(cli: Cli) -> Result<()> {
    if let Some(Commands::Completions { shell }) = cli.command {
        generate(shell, &mut Cli::command(), BIN_NAME, &mut io::stdout());
        return Ok(());
    }

    let runner = GitCli::default();
    let mut prompter = TerminalPrompter;

    let status = RepositoryStatus::inspect(&runner)?;
    let outcome = PromptFlow::new(&runner, &mut prompter).run(status)?;

    match outcome {
        Outcome::Exit(reason) => {
            report_exit(reason);
            Ok(())
        }
        Outcome::Commit(draft) => commit_draft(&runner, &draft, cli.dry_run, cli.verbose),
    }
}

fn report_exit(reason: ExitReason) {
    debug!(?reason, "nothing committed");

    match reason {
        ExitReason::InitDeclined | ExitReason::StagingDeclined => {
            println!("{}", style("Exiting commits assistant...").red());
        }
        ExitReason::NothingToCommit => {
            print_info(
                "There are no changes to commit.",
                "Exiting commits assistant...",
            );
        }
    }
}

/// Composes the draft and records the commit.
///
/// On failure git's combined output is printed to stdout before the error is
/// returned.
///
/// # Errors
/// * `GitError::CommitFailed` if git rejects the commit
/// * Any error raised while spawning git
pub fn commit_draft<R: CommandRunner + ?Sized>(
    runner: &R,
    draft: &CommitDraft,
    dry_run: bool,
    verbose: bool,
) -> Result<()> {
    let message = compose(draft);

    println!("Committing ---> {}", message.display_text.trim());

    if dry_run {
        let command = GitCommand::Commit {
            paragraphs: message.paragraphs,
        };
        print_info("Dry run, nothing was committed.", &format!("Would run: {command}"));
        return Ok(());
    }

    match runner.commit(&message.paragraphs) {
        Ok(output) => {
            if verbose && !output.is_empty() {
                println!("{output}");
            }

            print_success("Successful commit. Thanks for using the assistant!", "");
            Ok(())
        }
        Err(AssistantError::Git(GitError::CommandFailed { command, output })) => {
            println!("\n🚨 Git commit failed:\n{output}");
            Err(GitError::CommitFailed { command }.into())
        }
        Err(other) => Err(other),
    }
}
