//! Field rules for the registration form.
//!
//! Each rule is either a predicate for
//! [`Console::read_string_predicate`](reprompt::Console::read_string_predicate)
//! or a converter built from the `reprompt::validators` catalog.

use chrono::NaiveDate;
use regex::Regex;
use reprompt::{validators, Rejection};

/// Characters that count as "special" in a password.
pub const SPECIAL_CHARS: &str = "#$*&%";

/// Compiled patterns for the text fields.
#[derive(Debug, Clone)]
pub struct Patterns {
    username: Regex,
    phone: Regex,
}

impl Patterns {
    /// Compile the field patterns.
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            username: Regex::new(r"^[A-Z][a-z]{5,}$")?,
            phone: Regex::new(r"^05\d{8}$")?,
        })
    }

    /// Capitalised name of at least six letters, e.g. `Robert`.
    pub fn is_username(&self, s: &str) -> bool {
        self.username.is_match(s)
    }

    /// Israeli mobile number: `05` followed by eight digits.
    pub fn is_phone_number(&self, s: &str) -> bool {
        self.phone.is_match(s)
    }
}

/// At least eight characters with an uppercase letter, a lowercase letter, a
/// digit, and one of [`SPECIAL_CHARS`]. All five must hold.
pub fn is_strong_password(s: &str) -> bool {
    s.chars().count() >= 8
        && s.chars().any(char::is_uppercase)
        && s.chars().any(char::is_lowercase)
        && s.chars().any(|c| c.is_ascii_digit())
        && s.chars().any(|c| SPECIAL_CHARS.contains(c))
}

/// A last-login date: ISO format, not after `today`, not before `not_before`.
pub fn last_login(
    today: NaiveDate,
    not_before: Option<NaiveDate>,
) -> impl Fn(&str) -> Result<NaiveDate, Rejection> {
    move |raw: &str| {
        let date = validators::iso_date(raw)?;
        if date > today {
            return Err(Rejection::new("Your date is later than the current date"));
        }
        if let Some(floor) = not_before.filter(|floor| date < *floor) {
            return Err(Rejection::new(format!(
                "Your date is earlier than {}",
                floor
            )));
        }
        Ok(date)
    }
}

/// A login count: an integer that is not negative.
pub fn login_count(raw: &str) -> Result<i32, Rejection> {
    let count = validators::integer(raw)?;
    if count < 0 {
        return Err(Rejection::new("Your number of logins cannot be negative"));
    }
    Ok(count)
}
