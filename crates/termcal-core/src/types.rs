//! Domain types shared by the resolver, the schedule loader and the calendar assembler.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;

use crate::error::{CoreError, CoreResult};

/// Academic half-year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Term {
    First,
    Second,
}

impl Term {
    /// Both terms in document order.
    pub const ALL: [Self; 2] = [Self::First, Self::Second];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Second => "second",
        }
    }

    /// Anchor (month, day) on which every recurring event of the term starts.
    #[must_use]
    pub const fn anchor_month_day(self) -> (u32, u32) {
        match self {
            Self::First => (4, 1),
            Self::Second => (9, 1),
        }
    }

    /// ## Summary
    /// Returns the anchor civil date of this term in `year`.
    ///
    /// ## Errors
    /// Returns `ConfigError` if the date is not representable.
    pub fn anchor(self, year: i32) -> CoreResult<NaiveDate> {
        let (month, day) = self.anchor_month_day();
        civil_date(year, month, day)
    }

    /// ## Summary
    /// Returns the last day of the term: July 31 of `year` for the first
    /// term, March 31 of `year + 1` for the second.
    ///
    /// ## Errors
    /// Returns `ConfigError` if the date is not representable.
    pub fn end_of_term(self, year: i32) -> CoreResult<NaiveDate> {
        match self {
            Self::First => civil_date(year, 7, 31),
            Self::Second => {
                let next = year
                    .checked_add(1)
                    .ok_or_else(|| CoreError::ConfigError(format!("year {year} is out of range")))?;
                civil_date(next, 3, 31)
            }
        }
    }
}

fn civil_date(year: i32, month: u32, day: u32) -> CoreResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| CoreError::ConfigError(format!("year {year} is out of range")))
}

impl FromStr for Term {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" => Ok(Self::First),
            "second" => Ok(Self::Second),
            other => Err(CoreError::ConfigError(format!(
                "unknown term {other:?}, expected \"first\" or \"second\""
            ))),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A civil clock reading.
///
/// Not validated on construction: `24:30` is representable so that the
/// default one-hour duration never wraps past midnight silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Clock {
    pub hour: u32,
    pub minute: u32,
}

impl Clock {
    #[must_use]
    pub const fn new(hour: u32, minute: u32) -> Self {
        Self { hour, minute }
    }

    /// Same minute, one hour later. No normalization.
    #[must_use]
    pub const fn plus_one_hour(self) -> Self {
        Self::new(self.hour.saturating_add(1), self.minute)
    }
}

impl fmt::Display for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Start and end clocks of one occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockSpan {
    pub start: Clock,
    pub end: Clock,
}

impl ClockSpan {
    #[must_use]
    pub const fn new(start: Clock, end: Clock) -> Self {
        Self { start, end }
    }
}

/// One entry of the period table.
pub type Slot = ClockSpan;

/// How a schedule record specifies its time of day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OccurrenceSpec {
    /// `time` field: `"13:30"` or `"13:30-15:00"`.
    Clock(String),
    /// `period` field: `"2"` or `"2-4"`.
    Period(String),
}

impl OccurrenceSpec {
    #[must_use]
    pub fn raw(&self) -> &str {
        match self {
            Self::Clock(raw) | Self::Period(raw) => raw,
        }
    }

    /// Name of the schedule field this spec came from.
    #[must_use]
    pub const fn field_name(&self) -> &'static str {
        match self {
            Self::Clock(_) => "time",
            Self::Period(_) => "period",
        }
    }
}

/// A schedule entry as handed over by the loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRecord {
    pub summary: String,
    pub description: String,
    pub weekday: String,
    pub occurrence: Option<OccurrenceSpec>,
}

/// Concrete instants for one record, plus the recurrence horizon of its term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOccurrence {
    pub dtstart: DateTime<Tz>,
    pub dtend: DateTime<Tz>,
    pub until: NaiveDate,
}
