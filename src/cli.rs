//! Command line arguments.

use clap::CommandFactory;
use clap::Parser;

use crate::error::AppError;

pub const DEFAULT_MAX_EVENTS: usize = 10;

/// Fetch and display recent GitHub user activity.
#[derive(Parser, Debug)]
#[command(name = "github-activity", version)]
#[command(after_help = "Examples:
    github-activity kamranahmedse
    github-activity torvalds 5
    github-activity microsoft 20")]
pub struct Args {
    /// GitHub username to fetch activity for
    pub username: Option<String>,

    /// Maximum number of events to display (default: 10)
    #[arg(allow_hyphen_values = true)]
    pub max_events: Option<String>,

    /// Trailing arguments after `max_events` are ignored.
    #[arg(hide = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// A validated request to display a user's activity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityRequest {
    pub username: String,
    pub max_events: usize,
}

impl Args {
    /// Validates the arguments. Returns `None` when no username was given and
    /// usage should be shown instead.
    pub fn validate(&self) -> Result<Option<ActivityRequest>, AppError> {
        let Some(username) = &self.username else {
            return Ok(None);
        };

        let max_events = match &self.max_events {
            Some(value) => parse_max_events(value)?,
            None => DEFAULT_MAX_EVENTS,
        };

        if username.trim().is_empty() {
            return Err(AppError::EmptyUsername);
        }

        Ok(Some(ActivityRequest {
            username: username.clone(),
            max_events,
        }))
    }
}

fn parse_max_events(value: &str) -> Result<usize, AppError> {
    value
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|n| *n > 0)
        .and_then(|n| usize::try_from(n).ok())
        .ok_or_else(|| AppError::InvalidMaxEvents {
            value: value.to_string(),
        })
}

/// Prints the usage text to stdout.
pub fn print_usage() -> std::io::Result<()> {
    Args::command().print_help()
}
