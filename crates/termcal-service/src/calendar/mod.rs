//! Calendar assembly: one weekly recurring VEVENT per schedule record, plus
//! the VTIMEZONE those events reference.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use chrono_tz::Tz;
use termcal_core::{PeriodResolver, ScheduleRecord, Term};
use termcal_rfc::rfc::ical::build::vtimezone;
use termcal_rfc::rfc::ical::core::{
    Component, DateTime as IcalDateTime, ICalendar, Property, RRule, Weekday, names,
};
use termcal_rfc::rfc::ical::expand::expand_event;
use uuid::Uuid;

use crate::error::{RecordError, RecordFailure, ServiceError, ServiceResult};
use crate::schedule::ScheduleDocument;

/// Namespace for deterministic event UIDs.
const UID_NAMESPACE: Uuid = Uuid::from_u128(0x6f1c_2b9e_4d3a_5e07_8a61_c0f4_92d7_1b35);

/// Builds calendars from schedule documents.
#[derive(Debug, Clone)]
pub struct CalendarAssembler {
    prodid: String,
    timezone: String,
    dtstamp: DateTime<Utc>,
}

impl CalendarAssembler {
    /// `timezone` applies to documents that do not name their own;
    /// `dtstamp` is written to every event.
    #[must_use]
    pub fn new(
        prodid: impl Into<String>,
        timezone: impl Into<String>,
        dtstamp: DateTime<Utc>,
    ) -> Self {
        Self {
            prodid: prodid.into(),
            timezone: timezone.into(),
            dtstamp,
        }
    }

    /// ## Summary
    /// Builds the calendar for `doc`: first-term events, then second-term
    /// events, and a VTIMEZONE spanning every term that has records.
    ///
    /// Every record is attempted; failures are collected rather than
    /// stopping at the first one.
    ///
    /// ## Errors
    /// Returns `CoreError` if the year or timezone is unusable, and
    /// `InvalidRecords` listing every record that could not be converted.
    #[tracing::instrument(skip(self, doc), fields(year = doc.year))]
    pub fn assemble(&self, doc: &ScheduleDocument) -> ServiceResult<ICalendar> {
        let timezone = doc.timezone.as_deref().unwrap_or(&self.timezone);

        let mut ical = ICalendar::new(self.prodid.clone());
        if let Some(mailto) = &doc.mailto {
            ical.add_property(Property::cal_address(
                names::ATTENDEE,
                format!("MAILTO:{mailto}"),
            ));
        }

        let mut errors = Vec::new();
        let mut span: Option<(Tz, DateTime<Utc>, DateTime<Utc>)> = None;
        for term in Term::ALL {
            let resolver = PeriodResolver::new(doc.year, term, timezone)?;
            if !doc.records(term).is_empty() {
                let from = midnight_utc(resolver.anchor()) - Duration::days(1);
                let to = midnight_utc(resolver.term_end()) + Duration::days(2);
                span = Some(span.map_or((resolver.timezone(), from, to), |(tz, start, end)| {
                    (tz, start.min(from), end.max(to))
                }));
            }

            for (index, raw) in doc.records(term).iter().enumerate() {
                let record = raw.to_record();
                match self.build_event(&resolver, index, &record) {
                    Ok(event) => ical.add_event(event),
                    Err(source) => {
                        tracing::warn!(
                            %term,
                            index,
                            summary = %record.summary,
                            error = %source,
                            "Skipping record"
                        );
                        errors.push(RecordError {
                            term,
                            index,
                            summary: record.summary.clone(),
                            source,
                        });
                    }
                }
            }
        }

        if !errors.is_empty() {
            return Err(ServiceError::InvalidRecords(errors));
        }

        if let Some((tz, from, to)) = span {
            ical.add_timezone(vtimezone(tz, from, to));
        }

        tracing::info!(events = ical.events().len(), %timezone, "Calendar assembled");
        Ok(ical)
    }

    fn build_event(
        &self,
        resolver: &PeriodResolver,
        index: usize,
        record: &ScheduleRecord,
    ) -> Result<Component, RecordFailure> {
        let weekdays = Weekday::parse_list(&record.weekday)?;
        let resolved = resolver.resolve(record)?;

        let rrule = RRule::weekly()
            .with_until(IcalDateTime::from(&resolver.recurrence_end()?))
            .with_by_day(weekdays);

        let mut event = Component::event();
        event.add_property(Property::text(
            names::UID,
            event_uid(resolver.year(), resolver.term(), index, &record.summary),
        ));
        event.add_property(Property::datetime(
            names::DTSTAMP,
            IcalDateTime::from(&self.dtstamp),
        ));
        event.add_property(Property::datetime(
            names::DTSTART,
            IcalDateTime::from(&resolved.dtstart),
        ));
        event.add_property(Property::datetime(
            names::DTEND,
            IcalDateTime::from(&resolved.dtend),
        ));
        event.add_property(Property::recur(names::RRULE, rrule));
        event.add_property(Property::text(names::SUMMARY, record.summary.as_str()));
        if !record.description.is_empty() {
            event.add_property(Property::text(
                names::DESCRIPTION,
                record.description.as_str(),
            ));
        }

        Ok(event)
    }
}

fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Stable across runs, so re-importing an updated file replaces events.
fn event_uid(year: i32, term: Term, index: usize, summary: &str) -> String {
    let key = format!("{year}/{term}/{index}/{summary}");
    format!("{}@termcal", Uuid::new_v5(&UID_NAMESPACE, key.as_bytes()))
}

/// Occurrences of one event, as listed by `--list`.
#[derive(Debug, Clone, PartialEq)]
pub struct EventPreview {
    pub summary: String,
    pub dates: Vec<DateTime<Tz>>,
    pub limited: bool,
}

/// ## Summary
/// Expands every event in `ical` into at most `limit` occurrences each.
///
/// ## Errors
/// Returns `RfcError` if an event lacks a zoned DTSTART or a valid RRULE.
pub fn preview(ical: &ICalendar, limit: u16) -> ServiceResult<Vec<EventPreview>> {
    ical.events()
        .into_iter()
        .map(|event| -> ServiceResult<EventPreview> {
            let expansion = expand_event(event, limit)?;
            Ok(EventPreview {
                summary: event.summary().unwrap_or_default().to_string(),
                dates: expansion.dates,
                limited: expansion.limited,
            })
        })
        .collect()
}
