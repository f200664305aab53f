//! Line-oriented interactive input.

use std::io;

use dialoguer::Input;

/// Reads one line of user input after showing a prompt.
///
/// This abstraction allows scripting answers in tests.
#[cfg_attr(test, mockall::automock)]
pub trait Prompter {
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;
}

/// [`Prompter`] reading from the terminal.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(io::Error::other)
    }
}
