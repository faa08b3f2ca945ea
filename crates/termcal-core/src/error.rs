use chrono::NaiveDateTime;
use thiserror::Error;

use crate::types::Clock;

/// Core-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Parse error: {reason} in {raw:?}{}", summary_suffix(.summary.as_deref()))]
    ParseError {
        raw: String,
        summary: Option<String>,
        reason: ParseFailure,
    },

    #[error("Time or period was not defined on <summary: {summary}>")]
    MissingFieldError { summary: String },
}

impl CoreError {
    pub(crate) fn parse(raw: &str, reason: ParseFailure) -> Self {
        Self::ParseError {
            raw: raw.to_string(),
            summary: None,
            reason,
        }
    }

    /// ## Summary
    /// Attaches a record summary to a `ParseError`. Other variants pass through.
    #[must_use]
    pub fn with_summary(self, summary: &str) -> Self {
        match self {
            Self::ParseError { raw, reason, .. } => Self::ParseError {
                raw,
                summary: Some(summary.to_string()),
                reason,
            },
            other => other,
        }
    }

    /// Returns the raw field value that failed to parse, if any.
    #[must_use]
    pub fn raw_value(&self) -> Option<&str> {
        match self {
            Self::ParseError { raw, .. } => Some(raw),
            _ => None,
        }
    }
}

/// What exactly went wrong while interpreting a time or period value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseFailure {
    #[error("no digits found")]
    NoDigits,

    #[error("number {0} is too large")]
    NumberTooLarge(String),

    #[error("period index {index} is outside 1..={max}")]
    PeriodOutOfRange { index: i64, max: usize },

    #[error("negative clock value")]
    NegativeClock,

    #[error("clock {0} is not a valid time of day")]
    ClockOutOfRange(Clock),

    #[error("local time {0} does not exist in the timezone")]
    NonexistentLocalTime(NaiveDateTime),
}

fn summary_suffix(summary: Option<&str>) -> String {
    summary.map_or_else(String::new, |s| format!(" on <summary: {s}>"))
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
