//! Error types for console input.
//!
//! There are two distinct failure kinds. A [`Rejection`] is produced by a
//! converter and is always recovered from by re-prompting. An [`InputError`]
//! means the terminal itself failed and is the only error a caller sees.

use std::io;

/// A converter refused a line of input.
///
/// The reason is shown to the operator after the error prompt, so it should be
/// a short human-readable sentence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{reason}")]
pub struct Rejection {
    reason: String,
}

impl Rejection {
    /// Create a rejection with the given reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// The human-readable reason for the rejection.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Errors raised by the terminal collaborator.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// Input was closed before an acceptable line was supplied.
    #[error("Input closed before a valid value was entered.")]
    Closed,

    /// Reading from or writing to the terminal failed.
    #[error("Terminal I/O failed: {0}")]
    Io(#[source] io::Error),
}

impl From<io::Error> for InputError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::UnexpectedEof => Self::Closed,
            _ => Self::Io(err),
        }
    }
}

/// Result type for console operations.
pub type Result<T> = std::result::Result<T, InputError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_displays_reason() {
        let rejection = Rejection::new("Your input is not an integer");
        assert_eq!(rejection.to_string(), "Your input is not an integer");
        assert_eq!(rejection.reason(), "Your input is not an integer");
    }

    #[test]
    fn eof_maps_to_closed() {
        let err = InputError::from(io::Error::new(io::ErrorKind::UnexpectedEof, "eof"));
        assert!(matches!(err, InputError::Closed));
    }

    #[test]
    fn other_io_errors_are_kept() {
        let err = InputError::from(io::Error::new(io::ErrorKind::BrokenPipe, "gone"));
        match err {
            InputError::Io(inner) => assert_eq!(inner.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("expected Io, got {other:?}"),
        }
    }
}
