//! reprompt-form - a registration form built on `reprompt`.
//!
//! Collects a user either field by field (the default) or as one
//! `#`-separated record, re-prompting on every invalid answer.
//!
//! Run with: cargo run -p reprompt-form -- [fields|record] [--error-prompt TEXT]

mod form;
mod logging;
mod rules;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use reprompt::Console;
use tracing::info;

use crate::form::{FormSettings, User};
use crate::rules::Patterns;

#[derive(Parser)]
#[command(name = "reprompt-form")]
#[command(about = "Collect a validated user record from the terminal", version)]
struct Cli {
    #[command(subcommand)]
    mode: Option<Mode>,

    /// Error prefix shown before every rejection reason.
    #[arg(long, global = true)]
    error_prompt: Option<String>,

    /// Reject last-login dates before this day (yyyy-mm-dd).
    #[arg(long, global = true, value_parser = form::parse_date_arg)]
    not_before: Option<NaiveDate>,

    /// Log retry decisions to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Mode {
    /// Ask for each field separately.
    #[default]
    Fields,
    /// Ask for the whole user on one line: name#password#date#phone#logins.
    /// The password cannot contain '#' in this mode.
    Record,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mode = cli.mode.unwrap_or_default();
    let settings = FormSettings {
        error_prompt: cli.error_prompt,
        not_before: cli.not_before,
        today: Local::now().date_naive(),
    };
    let patterns = Patterns::new().context("failed to compile field patterns")?;
    let console = Console::new();

    info!(?mode, "collecting user");
    let user: User = match mode {
        Mode::Fields => form::read_by_fields(&console, &patterns, &settings),
        Mode::Record => form::read_as_record(&console, &patterns, &settings),
    }
    .context("no valid user was entered")?;

    console
        .write_line(&user)
        .context("failed to print the user")?;
    Ok(())
}
