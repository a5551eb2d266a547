//! Inquire-backed terminal.
//!
//! Reads lines through [inquire](https://crates.io/crates/inquire), which adds
//! line editing and styled prompts. The retry loop is unchanged.

use std::io;

use inquire::{InquireError, Text};

use crate::terminal::{RealTerminal, TerminalIO};

/// Convert inquire errors to I/O errors the console understands.
fn map_inquire_error(e: InquireError) -> io::Error {
    match e {
        InquireError::OperationCanceled => {
            io::Error::new(io::ErrorKind::UnexpectedEof, "prompt cancelled")
        }
        InquireError::OperationInterrupted => {
            io::Error::new(io::ErrorKind::Interrupted, "prompt interrupted")
        }
        InquireError::IO(err) => err,
        other => io::Error::other(other.to_string()),
    }
}

/// Terminal that reads each line with an [`inquire::Text`] prompt.
///
/// # Example
///
/// ```ignore
/// use reprompt::{Console, InquireTerminal};
///
/// let console = Console::with_terminal(InquireTerminal::new().help("yyyy-mm-dd"));
/// let date = console.read_iso_date("Start date", "Invalid date:")?;
/// ```
#[derive(Debug, Default, Clone)]
pub struct InquireTerminal {
    help_message: Option<String>,
}

impl InquireTerminal {
    /// Create a new inquire terminal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a help message shown below every prompt.
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help_message = Some(help.into());
        self
    }
}

impl TerminalIO for InquireTerminal {
    fn write_str(&self, text: &str) -> io::Result<()> {
        RealTerminal.write_str(text)
    }

    fn read_line(&self, prompt: &str) -> io::Result<String> {
        let mut text = Text::new(prompt);
        if let Some(help) = &self.help_message {
            text = text.with_help_message(help);
        }
        text.prompt().map_err(map_inquire_error)
    }
}
