//! Period/time resolution.
//!
//! Turns the compact notations found in schedule files (`"2"`, `"2-4"`,
//! `"13:30"`, `"13:30-15:00"`) into timezone-aware start and end instants on
//! the anchor date of a term.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;

use crate::constants::PERIOD_TABLE;
use crate::error::{CoreError, CoreResult, ParseFailure};
use crate::tokenize::{clock_tokens, digit_runs, has_leading_minus, normalize, parse_number};
use crate::types::{Clock, ClockSpan, OccurrenceSpec, ResolvedOccurrence, ScheduleRecord, Term};

/// Resolver bound to one (year, term, timezone).
///
/// Immutable after construction; share it freely across records and threads.
#[derive(Debug, Clone)]
pub struct PeriodResolver {
    year: i32,
    term: Term,
    anchor: NaiveDate,
    term_end: NaiveDate,
    tz: Tz,
}

impl PeriodResolver {
    /// ## Summary
    /// Creates a resolver for `term` of `year` in the IANA zone `timezone`.
    ///
    /// ## Errors
    /// Returns `ConfigError` if the timezone is unknown or the year cannot be
    /// represented.
    pub fn new(year: i32, term: Term, timezone: &str) -> CoreResult<Self> {
        let tz = Tz::from_str(timezone.trim())
            .map_err(|_err| CoreError::ConfigError(format!("unknown timezone {timezone:?}")))?;
        let anchor = term.anchor(year)?;
        let term_end = term.end_of_term(year)?;

        tracing::debug!(year, %term, %tz, %anchor, %term_end, "Period resolver created");

        Ok(Self {
            year,
            term,
            anchor,
            term_end,
            tz,
        })
    }

    /// ## Summary
    /// Like [`PeriodResolver::new`], taking the term by name.
    ///
    /// ## Errors
    /// Returns `ConfigError` if the term name or the timezone is not recognized.
    pub fn from_names(year: i32, term: &str, timezone: &str) -> CoreResult<Self> {
        Self::new(year, term.parse()?, timezone)
    }

    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[must_use]
    pub const fn term(&self) -> Term {
        self.term
    }

    #[must_use]
    pub const fn timezone(&self) -> Tz {
        self.tz
    }

    /// Date on which every occurrence produced by this resolver falls.
    #[must_use]
    pub const fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    /// Last day of the term, used as the recurrence horizon.
    #[must_use]
    pub const fn term_end(&self) -> NaiveDate {
        self.term_end
    }

    /// ## Summary
    /// Parses `"9"` as 09:00 and `"9:30"` as 09:30. Digit runs after the
    /// second one are ignored.
    ///
    /// ## Errors
    /// Returns `ParseError` if `raw` contains no digits, is negative or a
    /// number overflows.
    pub fn parse_clock(raw: &str) -> CoreResult<Clock> {
        let text = normalize(raw);
        if has_leading_minus(&text) {
            return Err(CoreError::parse(raw, ParseFailure::NegativeClock));
        }
        match digit_runs(&text).as_slice() {
            [] => Err(CoreError::parse(raw, ParseFailure::NoDigits)),
            [hour] => Ok(Clock::new(parse_number(hour, raw)?, 0)),
            [hour, minute, ..] => Ok(Clock::new(
                parse_number(hour, raw)?,
                parse_number(minute, raw)?,
            )),
        }
    }

    /// ## Summary
    /// Parses a single clock (`"13:30"`, lasting one hour) or a pair of
    /// clocks separated by anything (`"13:30-15:00"`).
    ///
    /// The one-hour default is literal: `"23:30"` ends at `24:30`.
    ///
    /// ## Errors
    /// Returns `ParseError` if `raw` contains no clock token or starts with a
    /// negative one.
    pub fn parse_time(raw: &str) -> CoreResult<ClockSpan> {
        let text = normalize(raw);
        if has_leading_minus(&text) {
            return Err(CoreError::parse(raw, ParseFailure::NegativeClock));
        }
        match clock_tokens(&text).as_slice() {
            [] => Err(CoreError::parse(raw, ParseFailure::NoDigits)),
            [single] => {
                let start = Self::parse_clock(single).map_err(|e| reraw(e, raw))?;
                Ok(ClockSpan::new(start, start.plus_one_hour()))
            }
            [start, end, ..] => Ok(ClockSpan::new(
                Self::parse_clock(start).map_err(|e| reraw(e, raw))?,
                Self::parse_clock(end).map_err(|e| reraw(e, raw))?,
            )),
        }
    }

    /// ## Summary
    /// Parses a single period (`"2"`) or an inclusive range (`"2-4"`) against
    /// the period table. A range runs from the start of the first slot to the
    /// end of the second.
    ///
    /// A minus sign directly before the first index makes it negative
    /// (`"-1"`); anywhere else it separates a range.
    ///
    /// ## Errors
    /// Returns `ParseError` if `raw` contains no digits or an index is
    /// outside `1..=5`.
    pub fn parse_period(raw: &str) -> CoreResult<ClockSpan> {
        let text = normalize(raw);
        let sign = if has_leading_minus(&text) { -1 } else { 1 };
        match digit_runs(&text).as_slice() {
            [] => Err(CoreError::parse(raw, ParseFailure::NoDigits)),
            [single] => lookup_slot(sign * i64::from(parse_number(single, raw)?), raw),
            [first, last, ..] => {
                let start = lookup_slot(sign * i64::from(parse_number(first, raw)?), raw)?;
                let end = lookup_slot(i64::from(parse_number(last, raw)?), raw)?;
                Ok(ClockSpan::new(start.start, end.end))
            }
        }
    }

    /// ## Summary
    /// Resolves a schedule record to concrete instants on the term's anchor
    /// date, together with the term end.
    ///
    /// ## Errors
    /// Returns `MissingFieldError` if the record has neither a time nor a
    /// period, and `ParseError` (carrying the record summary) if its value
    /// cannot be interpreted or names a clock that does not exist.
    #[tracing::instrument(level = "trace", skip(self, record), fields(summary = %record.summary))]
    pub fn resolve(&self, record: &ScheduleRecord) -> CoreResult<ResolvedOccurrence> {
        let Some(spec) = &record.occurrence else {
            return Err(CoreError::MissingFieldError {
                summary: record.summary.clone(),
            });
        };

        let span = match spec {
            OccurrenceSpec::Clock(raw) => Self::parse_time(raw),
            OccurrenceSpec::Period(raw) => Self::parse_period(raw),
        }
        .map_err(|e| e.with_summary(&record.summary))?;

        let dtstart = self
            .instant(span.start, spec.raw())
            .map_err(|e| e.with_summary(&record.summary))?;
        let dtend = self
            .instant(span.end, spec.raw())
            .map_err(|e| e.with_summary(&record.summary))?;

        if dtend <= dtstart {
            tracing::warn!(
                summary = %record.summary,
                raw = spec.raw(),
                %dtstart,
                %dtend,
                "Occurrence does not end after it starts"
            );
        }

        tracing::debug!(
            summary = %record.summary,
            field = spec.field_name(),
            raw = spec.raw(),
            %dtstart,
            %dtend,
            until = %self.term_end,
            "Resolved schedule record"
        );

        Ok(ResolvedOccurrence {
            dtstart,
            dtend,
            until: self.term_end,
        })
    }

    /// ## Summary
    /// The last second of the term end date in the resolver's zone, as UTC.
    ///
    /// This is the inclusive UNTIL bound of the weekly recurrence: a class on
    /// the term end date itself still takes place, whatever the zone's offset.
    ///
    /// ## Errors
    /// Returns `ParseError` if that local time does not exist in the zone.
    pub fn recurrence_end(&self) -> CoreResult<DateTime<Utc>> {
        let raw = self.term_end.to_string();
        let last = Clock::new(23, 59);
        let naive = self
            .term_end
            .and_hms_opt(last.hour, last.minute, 59)
            .ok_or_else(|| CoreError::parse(&raw, ParseFailure::ClockOutOfRange(last)))?;

        self.tz
            .from_local_datetime(&naive)
            .latest()
            .map(|dt| dt.with_timezone(&Utc))
            .ok_or_else(|| CoreError::parse(&raw, ParseFailure::NonexistentLocalTime(naive)))
    }

    /// Places `clock` on the anchor date in the resolver's zone.
    fn instant(&self, clock: Clock, raw: &str) -> CoreResult<DateTime<Tz>> {
        let naive = self
            .anchor
            .and_hms_opt(clock.hour, clock.minute, 0)
            .ok_or_else(|| CoreError::parse(raw, ParseFailure::ClockOutOfRange(clock)))?;

        self.tz
            .from_local_datetime(&naive)
            .earliest()
            .ok_or_else(|| CoreError::parse(raw, ParseFailure::NonexistentLocalTime(naive)))
    }
}

/// Looks up a 1-indexed slot of the period table.
fn lookup_slot(index: i64, raw: &str) -> CoreResult<ClockSpan> {
    usize::try_from(index)
        .ok()
        .and_then(|i| i.checked_sub(1))
        .and_then(|i| PERIOD_TABLE.get(i))
        .copied()
        .ok_or_else(|| {
            CoreError::parse(
                raw,
                ParseFailure::PeriodOutOfRange {
                    index,
                    max: PERIOD_TABLE.len(),
                },
            )
        })
}

/// Reports a sub-token failure against the whole field value.
fn reraw(err: CoreError, raw: &str) -> CoreError {
    match err {
        CoreError::ParseError {
            summary, reason, ..
        } => CoreError::ParseError {
            raw: raw.to_string(),
            summary,
            reason,
        },
        other => other,
    }
}
