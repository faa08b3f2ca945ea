//! Expands an event's DTSTART + RRULE into concrete instants with the
//! `rrule` crate.

use chrono::DateTime;
use chrono_tz::Tz;
use rrule::RRuleSet;

use crate::error::{RfcError, RfcResult};
use crate::rfc::ical::core::{Component, names};

/// Instants produced by one event's recurrence.
#[derive(Debug, Clone, PartialEq)]
pub struct Expansion {
    pub dates: Vec<DateTime<Tz>>,
    /// Whether `limit` cut the expansion short.
    pub limited: bool,
}

/// ## Summary
/// Expands a VEVENT with a zoned DTSTART and an RRULE into at most `limit`
/// instants, in the DTSTART zone.
///
/// ## Errors
/// Returns `ValidationError` if DTSTART or RRULE is missing or DTSTART is
/// not zoned, and `RRuleError` if the `rrule` crate rejects the rule.
pub fn expand_event(event: &Component, limit: u16) -> RfcResult<Expansion> {
    let dtstart = event
        .get_property(names::DTSTART)
        .and_then(|p| p.as_datetime())
        .ok_or_else(|| RfcError::ValidationError("event has no DTSTART date-time".to_string()))?;
    let rrule = event
        .get_property(names::RRULE)
        .and_then(|p| p.as_recur())
        .ok_or_else(|| RfcError::ValidationError("event has no RRULE".to_string()))?;
    let zoned = dtstart
        .to_zoned()
        .ok_or_else(|| RfcError::ValidationError(format!("DTSTART {dtstart} is not zoned")))?;
    let tz = zoned.timezone();

    let source = format!(
        "DTSTART;TZID={}:{}\nRRULE:{rrule}",
        tz.name(),
        zoned.naive_local().format("%Y%m%dT%H%M%S")
    );
    let set: RRuleSet = source.parse()?;
    let result = set.all(limit);

    tracing::trace!(
        uid = event.uid().unwrap_or_default(),
        count = result.dates.len(),
        limited = result.limited,
        "Expanded recurrence"
    );

    Ok(Expansion {
        dates: result
            .dates
            .into_iter()
            .map(|d| d.with_timezone(&tz))
            .collect(),
        limited: result.limited,
    })
}
