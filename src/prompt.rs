//! Interactive terminal prompts
//!
//! [`Prompter`] is the seam between the decision logic and the terminal, so
//! confirmation flows can be driven by scripted answers in tests.

use std::io::{self, BufRead};

use console::{style, Term};
use dialoguer::{theme::ColorfulTheme, MultiSelect, Select};

use crate::error::{Error, Result};

/// User interaction needed by kubesafe
pub trait Prompter {
    /// Ask a yes/no question; only an explicit "y" is affirmative
    fn confirm(&self, message: &str) -> Result<bool>;

    /// Pick one of `options`
    fn select_one(&self, options: &[String], prompt: &str) -> Result<String>;

    /// Pick any subset of `options`, all pre-selected
    fn select_many(&self, options: &[String], prompt: &str) -> Result<Vec<String>>;

    /// Print a highlighted warning
    fn warn(&self, message: &str) -> Result<()>;
}

/// Interpret a typed confirmation answer
pub fn is_affirmative(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("y")
}

/// Read one confirmation answer from `reader`
///
/// An empty line is a decline. End of input and read errors are prompt
/// failures, so a closed stdin never counts as the user saying no.
pub fn read_confirmation(reader: &mut impl BufRead) -> Result<bool> {
    let mut input = String::new();
    let read = reader.read_line(&mut input).map_err(Error::prompt)?;
    if read == 0 {
        return Err(Error::prompt("unexpected end of input"));
    }
    Ok(is_affirmative(&input))
}

/// Prompts on the controlling terminal
pub struct TerminalPrompter {
    term: Term,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn confirm(&self, message: &str) -> Result<bool> {
        self.term
            .write_str(&format!("{} ", style(format!("{message} (y/n):")).yellow()))
            .map_err(Error::prompt)?;
        self.term.flush().map_err(Error::prompt)?;
        // Read stdin directly: the answer must come through even when stdout
        // is redirected
        read_confirmation(&mut io::stdin().lock())
    }

    fn select_one(&self, options: &[String], prompt: &str) -> Result<String> {
        let index = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .items(options)
            .default(0)
            .interact()
            .map_err(Error::prompt)?;
        Ok(options[index].clone())
    }

    fn select_many(&self, options: &[String], prompt: &str) -> Result<Vec<String>> {
        let defaults = vec![true; options.len()];
        let chosen = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .items(options)
            .defaults(&defaults)
            .interact()
            .map_err(Error::prompt)?;
        Ok(chosen.into_iter().map(|i| options[i].clone()).collect())
    }

    fn warn(&self, message: &str) -> Result<()> {
        self.term
            .write_line(&style(message).yellow().to_string())
            .map_err(Error::prompt)
    }
}
