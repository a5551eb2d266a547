//! The registration form: one `User`, collected field by field or as a
//! single `#`-separated record.

use std::fmt;

use chrono::NaiveDate;
use reprompt::{validators, Console, Rejection, TerminalIO};

use crate::rules::{self, Patterns};

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub password: String,
    pub date_last_login: NaiveDate,
    pub phone_number: String,
    pub number_of_logins: i32,
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "User[username={}, password={}, dateLastLogin={}, phoneNumber={}, numberOfLogins={}]",
            self.username,
            "*".repeat(self.password.chars().count()),
            self.date_last_login,
            self.phone_number,
            self.number_of_logins
        )
    }
}

/// Settings shared by both form modes.
#[derive(Debug, Clone)]
pub struct FormSettings {
    /// Replaces every per-field error prompt when set.
    pub error_prompt: Option<String>,
    /// Earliest acceptable last-login date.
    pub not_before: Option<NaiveDate>,
    /// The date treated as "now" for last-login checks.
    pub today: NaiveDate,
}

impl FormSettings {
    fn error_prompt<'a>(&'a self, field_default: &'a str) -> &'a str {
        self.error_prompt.as_deref().unwrap_or(field_default)
    }
}

/// Prompts for each field in turn.
pub fn read_by_fields<T: TerminalIO>(
    console: &Console<T>,
    patterns: &Patterns,
    settings: &FormSettings,
) -> reprompt::Result<User> {
    let username = console.read_string_predicate(
        "Enter username (first letter uppercase, at least 6 letters): ",
        settings.error_prompt("Mistake in username:"),
        |s| patterns.is_username(s),
    )?;

    let password = console.read_string_predicate(
        "Enter password (at least 8 characters, one uppercase, one lowercase, one digit, one of #$*&%): ",
        settings.error_prompt("Mistake in password:"),
        rules::is_strong_password,
    )?;

    let phone_number = console.read_string_predicate(
        "Enter phone number (05XXXXXXXX): ",
        settings.error_prompt("Mistake in phone number:"),
        |s| patterns.is_phone_number(s),
    )?;

    let date_last_login = console.read_validated(
        "Enter last login date (yyyy-mm-dd): ",
        settings.error_prompt("Mistake in last login date:"),
        rules::last_login(settings.today, settings.not_before),
    )?;

    let number_of_logins = console.read_validated(
        "Enter number of logins (non-negative integer): ",
        settings.error_prompt("Mistake in number of logins:"),
        rules::login_count,
    )?;

    Ok(User {
        username,
        password,
        date_last_login,
        phone_number,
        number_of_logins,
    })
}

/// Prompts once for the whole user as
/// `<username>#<password>#<dateLastLogin>#<phone number>#<number of logins>`.
pub fn read_as_record<T: TerminalIO>(
    console: &Console<T>,
    patterns: &Patterns,
    settings: &FormSettings,
) -> reprompt::Result<User> {
    console.read_validated(
        "Enter user as <username>#<password>#<dateLastLogin>#<phone number>#<number of logins>: ",
        settings.error_prompt("Wrong user input format:"),
        |raw: &str| parse_record(raw, patterns, settings),
    )
}

/// Converter for the single-line record format.
pub fn parse_record(
    raw: &str,
    patterns: &Patterns,
    settings: &FormSettings,
) -> Result<User, Rejection> {
    let tokens: Vec<&str> = raw.split('#').collect();
    let (username, password, date, phone, logins) = match tokens.as_slice() {
        [username, password, date, phone, logins] => {
            (*username, *password, *date, *phone, *logins)
        }
        _ => {
            return Err(Rejection::new(format!(
                "Expected 5 fields separated by '#', got {}",
                tokens.len()
            )))
        }
    };

    let check = |ok: bool, field: &str| {
        if ok {
            Ok(())
        } else {
            Err(Rejection::new(format!("Invalid {}", field)))
        }
    };
    check(patterns.is_username(username), "username")?;
    check(rules::is_strong_password(password), "password")?;
    check(patterns.is_phone_number(phone), "phone number")?;

    Ok(User {
        username: username.to_string(),
        password: password.to_string(),
        date_last_login: rules::last_login(settings.today, settings.not_before)(date)?,
        phone_number: phone.to_string(),
        number_of_logins: rules::login_count(logins)?,
    })
}

/// Fail fast on a malformed `--not-before` value.
pub fn parse_date_arg(raw: &str) -> Result<NaiveDate, String> {
    validators::iso_date(raw).map_err(|rejection| rejection.to_string())
}
