//! VTIMEZONE generation (RFC 5545 §3.6.5) from the IANA database.
//!
//! The zone is sampled over the span the calendar covers. Each change of
//! offset, abbreviation or daylight flag becomes one STANDARD or DAYLIGHT
//! observance, pinned to the exact second it takes effect.

use chrono::{Duration, Offset, TimeZone, Utc};
use chrono_tz::{OffsetComponents, Tz};

use crate::rfc::ical::core::{
    Component, ComponentKind, DateTime as ICalDateTime, Property, UtcOffset, names,
};

/// What a zone observes at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Observed {
    offset: UtcOffset,
    name: String,
    daylight: bool,
}

impl Observed {
    fn at(tz: Tz, instant: &chrono::DateTime<Utc>) -> Self {
        let offset = tz.offset_from_utc_datetime(&instant.naive_utc());
        Self {
            offset: UtcOffset::from(offset.fix()),
            name: offset.to_string(),
            daylight: !offset.dst_offset().is_zero(),
        }
    }

    /// Observance starting at `start`; its DTSTART is written in the local
    /// time of the offset in force just before it.
    fn observance(&self, start: &chrono::DateTime<Utc>, previous: &Self) -> Component {
        let kind = if self.daylight {
            ComponentKind::Daylight
        } else {
            ComponentKind::Standard
        };
        let local = start.naive_utc() + Duration::seconds(i64::from(previous.offset.seconds));

        let mut observance = Component::new(kind);
        observance.add_property(Property::datetime(
            names::DTSTART,
            ICalDateTime::floating(local),
        ));
        observance.add_property(Property::utc_offset(names::TZOFFSETFROM, previous.offset));
        observance.add_property(Property::utc_offset(names::TZOFFSETTO, self.offset));
        observance.add_property(Property::text(names::TZNAME, self.name.clone()));
        observance
    }
}

/// ## Summary
/// Builds the VTIMEZONE for `tz` covering `from..=to`.
///
/// The first observance starts at `from` and carries the rules in force
/// there; one further observance follows per transition up to `to`.
#[must_use]
pub fn vtimezone(
    tz: Tz,
    from: chrono::DateTime<Utc>,
    to: chrono::DateTime<Utc>,
) -> Component {
    let mut component = Component::new(ComponentKind::Timezone);
    component.add_property(Property::text(names::TZID, tz.name()));

    let mut previous = Observed::at(tz, &from);
    component.children.push(previous.observance(&from, &previous));

    for change in transitions(tz, from, to) {
        let observed = Observed::at(tz, &change);
        component.children.push(observed.observance(&change, &previous));
        previous = observed;
    }

    component
}

/// Instants in `(from, to]` at which the zone's observance changes.
///
/// Steps an hour at a time and bisects each step that saw a change down to
/// the second. Zones do not change twice within an hour.
fn transitions(
    tz: Tz,
    from: chrono::DateTime<Utc>,
    to: chrono::DateTime<Utc>,
) -> Vec<chrono::DateTime<Utc>> {
    let step = Duration::hours(1);
    let second = Duration::seconds(1);

    let mut found = Vec::new();
    let mut cursor = from;
    let mut current = Observed::at(tz, &cursor);

    while cursor < to {
        let next = (cursor + step).min(to);
        let seen = Observed::at(tz, &next);
        if seen != current {
            let (mut before, mut after) = (cursor, next);
            while after - before > second {
                let mid = before + (after - before) / 2;
                if Observed::at(tz, &mid) == current {
                    before = mid;
                } else {
                    after = mid;
                }
            }
            found.push(after);
            current = seen;
        }
        cursor = next;
    }

    found
}
