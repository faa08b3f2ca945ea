//! iCalendar property type (RFC 5545 §3.1, §3.8).

use super::{DateTime, Parameter, RRule, UtcOffset, Value};

/// An iCalendar property: name, parameters and a typed value.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// Property name (normalized to uppercase).
    pub name: String,
    /// Parameters in order of insertion.
    pub params: Vec<Parameter>,
    pub value: Value,
}

impl Property {
    fn with_value(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            params: Vec::new(),
            value,
        }
    }

    /// Creates a property with a text value.
    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::with_value(name, Value::Text(value.into()))
    }

    /// Creates a property with a CAL-ADDRESS value.
    #[must_use]
    pub fn cal_address(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self::with_value(name, Value::CalAddress(address.into()))
    }

    /// Creates a property with a date-time value; zoned values get a TZID parameter.
    #[must_use]
    pub fn datetime(name: impl Into<String>, dt: DateTime) -> Self {
        let mut prop = Self::with_value(name, Value::DateTime(dt.clone()));
        if let Some(tzid) = dt.tzid() {
            prop.add_param(Parameter::tzid(tzid));
        }
        prop
    }

    /// Creates a property with a recurrence rule value.
    #[must_use]
    pub fn recur(name: impl Into<String>, rrule: RRule) -> Self {
        Self::with_value(name, Value::Recur(Box::new(rrule)))
    }

    #[must_use]
    pub fn utc_offset(name: impl Into<String>, offset: UtcOffset) -> Self {
        Self::with_value(name, Value::UtcOffset(offset))
    }

    /// Returns the parameter with the given name.
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&Parameter> {
        self.params
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    pub fn add_param(&mut self, param: Parameter) {
        self.params.push(param);
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        self.value.as_text()
    }

    #[must_use]
    pub fn as_datetime(&self) -> Option<&DateTime> {
        self.value.as_datetime()
    }

    #[must_use]
    pub fn as_recur(&self) -> Option<&RRule> {
        self.value.as_recur()
    }
}

/// Property names used by the generated calendars.
pub mod names {
    pub const PRODID: &str = "PRODID";
    pub const VERSION: &str = "VERSION";

    pub const ATTENDEE: &str = "ATTENDEE";
    pub const DESCRIPTION: &str = "DESCRIPTION";
    pub const DTEND: &str = "DTEND";
    pub const DTSTAMP: &str = "DTSTAMP";
    pub const DTSTART: &str = "DTSTART";
    pub const RRULE: &str = "RRULE";
    pub const SUMMARY: &str = "SUMMARY";
    pub const UID: &str = "UID";

    pub const TZID: &str = "TZID";
    pub const TZNAME: &str = "TZNAME";
    pub const TZOFFSETFROM: &str = "TZOFFSETFROM";
    pub const TZOFFSETTO: &str = "TZOFFSETTO";
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn property_text() {
        let prop = Property::text("summary", "Algorithms");
        assert_eq!(prop.name, "SUMMARY");
        assert_eq!(prop.as_text(), Some("Algorithms"));
        assert!(prop.params.is_empty());
    }

    #[test]
    fn zoned_datetime_gets_tzid() {
        let local = NaiveDate::from_ymd_opt(2024, 4, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        let prop = Property::datetime(names::DTSTART, DateTime::zoned(local, "Asia/Tokyo"));
        assert_eq!(
            prop.get_param("tzid").and_then(Parameter::value),
            Some("Asia/Tokyo")
        );

        let prop = Property::datetime(names::DTSTAMP, DateTime::utc(local));
        assert!(prop.get_param("TZID").is_none());
    }
}
