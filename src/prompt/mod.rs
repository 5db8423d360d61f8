//! User Prompts
//!
//! The `Prompter` seam between the prompt flow and the terminal, and its
//! terminal implementation built on `inquire`.

pub mod validation;

use std::io::{self, BufRead, IsTerminal, Write};

use console::style;
use inquire::{CustomUserError, Select, Text, validator::Validation};

use crate::errors::{PromptError, Result};

pub use validation::Validator;

/// Asks the user questions.
pub trait Prompter {
    /// Asks a Y/N question and returns the raw line typed by the user.
    ///
    /// # Errors
    /// * If input is closed or cannot be read
    fn confirm(&mut self, question: &str) -> Result<String>;

    /// Presents a single-choice menu and returns the index of the choice.
    ///
    /// # Errors
    /// * If the menu is cancelled
    fn select(&mut self, message: &str, options: Vec<String>) -> Result<usize>;

    /// Asks for free text. When a validator is given the question is
    /// repeated, with the validator's message, until it accepts the answer.
    ///
    /// # Errors
    /// * If the prompt is cancelled
    fn text(&mut self, message: &str, validator: Option<Validator>) -> Result<String>;

    /// Tells the user their last answer was rejected.
    fn reject(&mut self, message: &str);
}

/// Prompts on the controlling terminal.
///
/// Every question goes through `inquire` while stdin is a terminal, so a
/// single reader owns the keyboard. Piped input only answers Y/N questions,
/// which are then read as plain lines.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    fn confirm_on_terminal(question: &str) -> Result<String> {
        Ok(Text::new(&confirmation_label(question)).prompt()?)
    }

    fn confirm_from_pipe(question: &str) -> Result<String> {
        print!("{}: ", confirmation_label(question));
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            println!();
            return Err(PromptError::EndOfInput.into());
        }

        Ok(line)
    }
}

fn confirmation_label(question: &str) -> String {
    format!("{question} (Y/N)")
}

impl Prompter for TerminalPrompter {
    fn confirm(&mut self, question: &str) -> Result<String> {
        if io::stdin().is_terminal() {
            Self::confirm_on_terminal(question)
        } else {
            Self::confirm_from_pipe(question)
        }
    }

    fn select(&mut self, message: &str, options: Vec<String>) -> Result<usize> {
        let page_size = options.len().max(1);
        let choice = Select::new(message, options)
            .with_page_size(page_size)
            .raw_prompt()?;

        Ok(choice.index)
    }

    fn text(&mut self, message: &str, validator: Option<Validator>) -> Result<String> {
        let mut prompt = Text::new(message);

        if let Some(validate) = validator {
            prompt = prompt.with_validator(
                move |input: &str| -> std::result::Result<Validation, CustomUserError> {
                    Ok(match validate(input) {
                        Ok(()) => Validation::Valid,
                        Err(reason) => Validation::Invalid(reason.into()),
                    })
                },
            );
        }

        Ok(prompt.prompt()?)
    }

    fn reject(&mut self, message: &str) {
        println!("{}", style(message).red());
    }
}
