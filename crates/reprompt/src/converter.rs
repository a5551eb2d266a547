//! The converter seam.
//!
//! A [`Converter`] turns one raw line into a typed value or a [`Rejection`].
//! Every validator in this crate is a converter, and any closure of the right
//! shape is one too, so adding a new validated type never means writing a new
//! retry loop.

use crate::Rejection;

/// Turns raw input text into a typed value, or rejects it with a reason.
///
/// Implementations must be deterministic and free of side effects. Every
/// failure, including malformed text or an out-of-range value, must come back
/// as a [`Rejection`] so the caller can re-prompt.
///
/// # Example
///
/// ```
/// use reprompt::{Converter, Rejection};
///
/// let even = |raw: &str| -> Result<u32, Rejection> {
///     match raw.parse::<u32>() {
///         Ok(n) if n % 2 == 0 => Ok(n),
///         _ => Err(Rejection::new("Your input is not an even number")),
///     }
/// };
///
/// assert_eq!(even.convert("4"), Ok(4));
/// assert!(even.convert("5").is_err());
/// ```
pub trait Converter<T> {
    /// Convert `raw` or explain why it is not acceptable.
    fn convert(&self, raw: &str) -> Result<T, Rejection>;
}

impl<T, F> Converter<T> for F
where
    F: Fn(&str) -> Result<T, Rejection>,
{
    fn convert(&self, raw: &str) -> Result<T, Rejection> {
        self(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shout(raw: &str) -> Result<String, Rejection> {
        if raw.is_empty() {
            Err(Rejection::new("empty"))
        } else {
            Ok(raw.to_uppercase())
        }
    }

    #[test]
    fn fn_items_are_converters() {
        assert_eq!(shout.convert("hi"), Ok("HI".to_string()));
        assert_eq!(shout.convert(""), Err(Rejection::new("empty")));
    }

    #[test]
    fn closures_capture_state() {
        let limit = 3;
        let short = move |raw: &str| {
            if raw.len() <= limit {
                Ok(raw.len())
            } else {
                Err(Rejection::new("too long"))
            }
        };
        assert_eq!(short.convert("abc"), Ok(3));
        assert!(short.convert("abcd").is_err());
    }
}
