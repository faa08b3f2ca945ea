//! Weekly RRULE value (RFC 5545 §3.3.10, §3.8.5.3).

use std::fmt;
use std::str::FromStr;

use super::DateTime;
use crate::error::RfcError;

/// Day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// Returns the two-letter abbreviation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sunday => "SU",
            Self::Monday => "MO",
            Self::Tuesday => "TU",
            Self::Wednesday => "WE",
            Self::Thursday => "TH",
            Self::Friday => "FR",
            Self::Saturday => "SA",
        }
    }

    /// Parses a weekday from a two-letter abbreviation (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.trim().to_ascii_uppercase().as_str() {
            "SU" => Self::Sunday,
            "MO" => Self::Monday,
            "TU" => Self::Tuesday,
            "WE" => Self::Wednesday,
            "TH" => Self::Thursday,
            "FR" => Self::Friday,
            "SA" => Self::Saturday,
            _ => return None,
        })
    }

    /// ## Summary
    /// Parses a comma- or whitespace-separated list such as `"MO,TH"`.
    ///
    /// ## Errors
    /// Returns `ValidationError` naming the first unknown entry, or if the
    /// list is empty.
    pub fn parse_list(s: &str) -> Result<Vec<Self>, RfcError> {
        let days = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .map(|part| {
                Self::parse(part)
                    .ok_or_else(|| RfcError::ValidationError(format!("unknown weekday {part:?}")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if days.is_empty() {
            return Err(RfcError::ValidationError(format!(
                "no weekday given in {s:?}"
            )));
        }
        Ok(days)
    }
}

impl FromStr for Weekday {
    type Err = RfcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| RfcError::ValidationError(format!("unknown weekday {s:?}")))
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weekly recurrence rule: `FREQ=WEEKLY`, an optional UNTIL and the BYDAY list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RRule {
    /// Must be UTC when DTSTART is zoned.
    pub until: Option<DateTime>,
    pub by_day: Vec<Weekday>,
}

impl RRule {
    #[must_use]
    pub fn weekly() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_until(mut self, until: DateTime) -> Self {
        self.until = Some(until);
        self
    }

    #[must_use]
    pub fn with_by_day(mut self, days: Vec<Weekday>) -> Self {
        self.by_day = days;
        self
    }
}

impl fmt::Display for RRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FREQ=WEEKLY")?;

        if let Some(until) = &self.until {
            write!(f, ";UNTIL={until}")?;
        }

        if !self.by_day.is_empty() {
            let days: Vec<_> = self.by_day.iter().map(ToString::to_string).collect();
            write!(f, ";BYDAY={}", days.join(","))?;
        }

        Ok(())
    }
}
