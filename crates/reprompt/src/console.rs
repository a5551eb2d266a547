//! The retry engine and its validator shortcuts.

use std::collections::HashSet;
use std::fmt::{self, Display};
use std::sync::Arc;

use chrono::NaiveDate;

use crate::converter::Converter;
use crate::terminal::{RealTerminal, TerminalIO};
use crate::{validators, Result};

/// A value accepted by the retry loop, with how many reads it took.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted<T> {
    /// The converted value.
    pub value: T,
    /// Number of lines read, including the accepted one.
    pub attempts: usize,
}

/// Prompts for input until a converter accepts it.
///
/// Every `read_*` method is a thin wrapper that hands one converter from
/// [`validators`] to [`read_validated`](Self::read_validated). A rejected line
/// is answered with `"<error prompt> <reason>"` and the prompt is shown again;
/// there is no retry limit.
///
/// # Example
///
/// ```
/// use reprompt::{Console, MockTerminal};
///
/// let console = Console::with_terminal(MockTerminal::with_responses(["4.2", "42"]));
/// let n = console.read_int("Age: ", "Invalid age:").unwrap();
///
/// assert_eq!(n, 42);
/// assert_eq!(
///     console.terminal().output(),
///     "Invalid age: Your input is not an integer\n"
/// );
/// ```
pub struct Console<T: TerminalIO = RealTerminal> {
    terminal: Arc<T>,
}

impl Console<RealTerminal> {
    /// Create a console bound to stdin and stdout.
    pub fn new() -> Self {
        Self {
            terminal: Arc::new(RealTerminal),
        }
    }
}

impl Default for Console<RealTerminal> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TerminalIO> Console<T> {
    /// Create a console with a custom terminal.
    pub fn with_terminal(terminal: T) -> Self {
        Self {
            terminal: Arc::new(terminal),
        }
    }

    /// The underlying terminal.
    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    /// Write text without a line terminator.
    pub fn write_str(&self, text: &str) -> Result<()> {
        Ok(self.terminal.write_str(text)?)
    }

    /// Write a value followed by a line terminator.
    pub fn write_line(&self, value: impl Display) -> Result<()> {
        Ok(self.terminal.write_line(&value.to_string())?)
    }

    /// Read lines until `converter` accepts one, and return its value.
    ///
    /// Each rejection is reported as `"<error_prompt> <reason>"` on its own
    /// line before prompting again. Rejections never reach the caller; the
    /// only errors returned come from the terminal itself.
    pub fn read_validated<V, C>(&self, prompt: &str, error_prompt: &str, converter: C) -> Result<V>
    where
        C: Converter<V>,
    {
        self.read_validated_with_attempts(prompt, error_prompt, converter)
            .map(|accepted| accepted.value)
    }

    /// Like [`read_validated`](Self::read_validated), but also reports how
    /// many lines were read.
    pub fn read_validated_with_attempts<V, C>(
        &self,
        prompt: &str,
        error_prompt: &str,
        converter: C,
    ) -> Result<Accepted<V>>
    where
        C: Converter<V>,
    {
        let mut attempts = 0;
        loop {
            attempts += 1;
            tracing::trace!(prompt, attempt = attempts, "reading line");
            let line = self.terminal.read_line(prompt)?;

            match converter.convert(&line) {
                Ok(value) => {
                    tracing::debug!(prompt, attempts, "input accepted");
                    return Ok(Accepted { value, attempts });
                }
                Err(rejection) => {
                    tracing::debug!(
                        prompt,
                        attempt = attempts,
                        reason = rejection.reason(),
                        "input rejected"
                    );
                    self.terminal
                        .write_line(&format!("{} {}", error_prompt, rejection))?;
                }
            }
        }
    }

    /// Read a 32-bit signed integer.
    pub fn read_int(&self, prompt: &str, error_prompt: &str) -> Result<i32> {
        self.read_validated(prompt, error_prompt, validators::integer)
    }

    /// Read a 64-bit signed integer.
    pub fn read_long(&self, prompt: &str, error_prompt: &str) -> Result<i64> {
        self.read_validated(prompt, error_prompt, validators::long)
    }

    /// Read a floating-point number.
    pub fn read_double(&self, prompt: &str, error_prompt: &str) -> Result<f64> {
        self.read_validated(prompt, error_prompt, validators::double)
    }

    /// Read a number in `[min, max)`: `min` is allowed, `max` is not.
    pub fn read_number_range(
        &self,
        prompt: &str,
        error_prompt: &str,
        min: f64,
        max: f64,
    ) -> Result<f64> {
        self.read_validated(prompt, error_prompt, validators::number_range(min, max))
    }

    /// Read a line that satisfies `predicate`, returned verbatim.
    pub fn read_string_predicate<P>(
        &self,
        prompt: &str,
        error_prompt: &str,
        predicate: P,
    ) -> Result<String>
    where
        P: Fn(&str) -> bool,
    {
        self.read_validated(prompt, error_prompt, validators::matching(predicate))
    }

    /// Read a line that is exactly one of `options`, returned verbatim.
    pub fn read_string_options(
        &self,
        prompt: &str,
        error_prompt: &str,
        options: &HashSet<String>,
    ) -> Result<String> {
        self.read_validated(prompt, error_prompt, validators::one_of_set(options))
    }

    /// Read an ISO-8601 date (`yyyy-mm-dd`).
    pub fn read_iso_date(&self, prompt: &str, error_prompt: &str) -> Result<NaiveDate> {
        self.read_validated(prompt, error_prompt, validators::iso_date)
    }

    /// Read an ISO-8601 date in `[from, to]`, both ends included.
    pub fn read_iso_date_range(
        &self,
        prompt: &str,
        error_prompt: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<NaiveDate> {
        self.read_validated(prompt, error_prompt, validators::iso_date_range(from, to))
    }
}

impl<T: TerminalIO> Clone for Console<T> {
    fn clone(&self) -> Self {
        Self {
            terminal: Arc::clone(&self.terminal),
        }
    }
}

impl<T: TerminalIO> fmt::Debug for Console<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Console")
            .field("terminal", &std::any::type_name::<T>())
            .finish()
    }
}
