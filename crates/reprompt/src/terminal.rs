//! Terminal abstraction.
//!
//! [`TerminalIO`] is the only thing the retry engine needs from the outside
//! world: write some text, and read one line after showing a prompt. Swapping
//! the implementation lets the same validators run against a real console, a
//! rich prompt library, or a scripted mock in tests.

use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

/// Abstraction over terminal I/O for testability.
pub trait TerminalIO: Send + Sync {
    /// Write text verbatim, without a line terminator.
    fn write_str(&self, text: &str) -> io::Result<()>;

    /// Write text followed by a line terminator.
    fn write_line(&self, text: &str) -> io::Result<()> {
        self.write_str(&format!("{}\n", text))
    }

    /// Show `prompt` and block until the operator supplies one line.
    ///
    /// The returned line has its trailing terminator removed. End of input is
    /// reported as an error of kind [`io::ErrorKind::UnexpectedEof`].
    fn read_line(&self, prompt: &str) -> io::Result<String>;
}

/// Real terminal I/O over stdin and stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealTerminal;

impl TerminalIO for RealTerminal {
    fn write_str(&self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()
    }

    fn read_line(&self, prompt: &str) -> io::Result<String> {
        self.write_str(prompt)?;
        read_line_from(&mut io::stdin().lock())
    }
}

/// Read one line from `reader`, decoding invalid UTF-8 lossily.
///
/// A line with bad bytes still reaches the converter, which rejects it like
/// any other unusable text.
fn read_line_from<R: BufRead>(reader: &mut R) -> io::Result<String> {
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "stdin closed",
        ));
    }
    Ok(strip_terminator(String::from_utf8_lossy(&buf).into_owned()))
}

/// Remove one trailing `\n` or `\r\n`, leaving all other whitespace intact.
pub(crate) fn strip_terminator(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

/// Mock terminal for testing.
///
/// Returns scripted responses in order and records every prompt and every
/// write. Once the script is exhausted, reads behave like end of input.
#[derive(Debug)]
pub struct MockTerminal {
    responses: Vec<String>,
    /// Index of the next response to return.
    response_index: AtomicUsize,
    prompts: Mutex<Vec<String>>,
    output: Mutex<String>,
}

impl Clone for MockTerminal {
    fn clone(&self) -> Self {
        Self {
            responses: self.responses.clone(),
            response_index: AtomicUsize::new(self.response_index.load(Ordering::SeqCst)),
            prompts: Mutex::new(self.prompts()),
            output: Mutex::new(self.output()),
        }
    }
}

impl MockTerminal {
    /// Create a mock terminal that returns the given response.
    pub fn with_response(response: impl Into<String>) -> Self {
        Self::with_responses([response.into()])
    }

    /// Create a mock terminal that returns multiple responses in sequence.
    ///
    /// Useful for testing retry scenarios.
    pub fn with_responses(responses: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            responses: responses.into_iter().map(Into::into).collect(),
            response_index: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
            output: Mutex::new(String::new()),
        }
    }

    /// Create a mock that is already at end of input.
    pub fn eof() -> Self {
        Self::with_responses(Vec::<String>::new())
    }

    /// Every prompt shown so far, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Everything written so far, concatenated.
    pub fn output(&self) -> String {
        self.output
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Written output split into lines.
    pub fn output_lines(&self) -> Vec<String> {
        self.output().lines().map(str::to_string).collect()
    }

    /// Number of scripted responses consumed so far.
    pub fn reads(&self) -> usize {
        self.response_index
            .load(Ordering::SeqCst)
            .min(self.responses.len())
    }
}

impl TerminalIO for MockTerminal {
    fn write_str(&self, text: &str) -> io::Result<()> {
        self.output
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_str(text);
        Ok(())
    }

    fn read_line(&self, prompt: &str) -> io::Result<String> {
        self.prompts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(prompt.to_string());

        let idx = self.response_index.fetch_add(1, Ordering::SeqCst);
        match self.responses.get(idx) {
            Some(response) => Ok(response.clone()),
            None => Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "mock terminal has no more responses",
            )),
        }
    }
}
