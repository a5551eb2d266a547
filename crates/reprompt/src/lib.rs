//! Retry-until-valid console input.
//!
//! `reprompt` reads a line from the operator, hands it to a converter, and if
//! the converter rejects it, prints the reason and asks again. It loops until
//! the input is acceptable. A catalog of ready-made converters covers the
//! common cases: integers, floats, ranged numbers, ISO dates, date ranges,
//! predicate-matched strings and option lists.
//!
//! # Quick Start
//!
//! ```no_run
//! use reprompt::Console;
//!
//! let console = Console::new();
//! let age = console.read_int("Age: ", "Invalid age:")?;
//! let ratio = console.read_number_range("Ratio: ", "Invalid ratio:", 0.0, 1.0)?;
//! console.write_line(format!("{age} {ratio}"))?;
//! # Ok::<(), reprompt::InputError>(())
//! ```
//!
//! # Features
//!
//! - **`inquire`** - Enable [`InquireTerminal`] for rich line-editing prompts
//!
//! # Architecture
//!
//! There is exactly one retry loop, [`Console::read_validated`]. Everything
//! else is a [`Converter`] plugged into it:
//!
//! ```text
//! Console::read_int
//! └── read_validated(prompt, error_prompt, validators::integer)
//!     ├── TerminalIO::read_line   → "4.2"
//!     ├── validators::integer     → Rejection("Your input is not an integer")
//!     ├── TerminalIO::write_line  → "<error_prompt> Your input is not an integer"
//!     ├── TerminalIO::read_line   → "42"
//!     └── validators::integer     → Ok(42) ← returned
//! ```
//!
//! A custom type needs only a converter:
//!
//! ```
//! use reprompt::{Console, MockTerminal, Rejection};
//!
//! let console = Console::with_terminal(MockTerminal::with_responses(["3,4", "3;4"]));
//! let parse_point = |raw: &str| -> Result<(i32, i32), Rejection> {
//!     let (x, y) = raw
//!         .split_once(';')
//!         .ok_or_else(|| Rejection::new("expected <x>;<y>"))?;
//!     let x: i32 = x.parse().map_err(|_| Rejection::new("x is not an integer"))?;
//!     let y: i32 = y.parse().map_err(|_| Rejection::new("y is not an integer"))?;
//!     Ok((x, y))
//! };
//! let point = console.read_validated("Point: ", "Bad point:", parse_point)?;
//!
//! assert_eq!(point, (3, 4));
//! # Ok::<(), reprompt::InputError>(())
//! ```
//!
//! # Testing
//!
//! [`MockTerminal`] replays scripted lines and records prompts and output, so
//! retry behaviour can be checked without a TTY.

mod console;
mod converter;
mod error;
#[cfg(feature = "inquire")]
mod inquire_terminal;
pub mod terminal;
pub mod validators;

// Re-export core types
pub use console::{Accepted, Console};
pub use converter::Converter;
pub use error::{InputError, Rejection, Result};

// Re-export terminals at crate root for convenience
pub use terminal::{MockTerminal, RealTerminal, TerminalIO};

#[cfg(feature = "inquire")]
pub use inquire_terminal::InquireTerminal;
