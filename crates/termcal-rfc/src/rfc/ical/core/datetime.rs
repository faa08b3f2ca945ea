//! iCalendar DATE-TIME and UTC-OFFSET value types (RFC 5545 §3.3.5, §3.3.14).

use std::fmt;

use chrono::{NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Form of DATE-TIME value (RFC 5545 §3.3.5).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateTimeForm {
    /// Absolute instant, e.g. `19980119T070000Z`.
    Utc,

    /// Local time with a TZID reference, e.g.
    /// `TZID=America/New_York:19980119T020000`.
    Zoned {
        /// The IANA timezone identifier.
        tzid: String,
    },

    /// Wall-clock reading with no zone, used for VTIMEZONE observance starts.
    Floating,
}

/// DATE-TIME value (RFC 5545 §3.3.5).
///
/// Stores the wall-clock reading in `local`; `form` says how to read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTime {
    pub local: NaiveDateTime,
    pub form: DateTimeForm,
}

impl DateTime {
    #[must_use]
    pub const fn utc(local: NaiveDateTime) -> Self {
        Self {
            local,
            form: DateTimeForm::Utc,
        }
    }

    #[must_use]
    pub fn zoned(local: NaiveDateTime, tzid: impl Into<String>) -> Self {
        Self {
            local,
            form: DateTimeForm::Zoned { tzid: tzid.into() },
        }
    }

    #[must_use]
    pub const fn floating(local: NaiveDateTime) -> Self {
        Self {
            local,
            form: DateTimeForm::Floating,
        }
    }

    #[must_use]
    pub fn is_utc(&self) -> bool {
        matches!(self.form, DateTimeForm::Utc)
    }

    /// Returns the timezone ID if this is a zoned time.
    #[must_use]
    pub fn tzid(&self) -> Option<&str> {
        match &self.form {
            DateTimeForm::Zoned { tzid } => Some(tzid),
            DateTimeForm::Utc | DateTimeForm::Floating => None,
        }
    }
}

impl From<&chrono::DateTime<Tz>> for DateTime {
    fn from(dt: &chrono::DateTime<Tz>) -> Self {
        Self::zoned(dt.naive_local(), dt.timezone().name())
    }
}

impl From<&chrono::DateTime<Utc>> for DateTime {
    fn from(dt: &chrono::DateTime<Utc>) -> Self {
        Self::utc(dt.naive_utc())
    }
}

impl DateTime {
    /// ## Summary
    /// Interprets this value as a zoned instant.
    ///
    /// Returns `None` for floating values, unknown zones and local times
    /// that do not exist in the zone.
    #[must_use]
    pub fn to_zoned(&self) -> Option<chrono::DateTime<Tz>> {
        match &self.form {
            DateTimeForm::Utc => Some(Utc.from_utc_datetime(&self.local).with_timezone(&Tz::UTC)),
            DateTimeForm::Zoned { tzid } => {
                let tz: Tz = tzid.parse().ok()?;
                tz.from_local_datetime(&self.local).earliest()
            }
            DateTimeForm::Floating => None,
        }
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.local.format("%Y%m%dT%H%M%S"))?;
        if self.is_utc() {
            write!(f, "Z")?;
        }
        Ok(())
    }
}

/// UTC-OFFSET value (RFC 5545 §3.3.14).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UtcOffset {
    /// Offset east of UTC in seconds.
    pub seconds: i32,
}

impl UtcOffset {
    pub const UTC: Self = Self { seconds: 0 };

    #[must_use]
    pub const fn from_seconds(seconds: i32) -> Self {
        Self { seconds }
    }
}

impl From<chrono::FixedOffset> for UtcOffset {
    fn from(offset: chrono::FixedOffset) -> Self {
        Self::from_seconds(offset.local_minus_utc())
    }
}

/// `+HHMM`, with a trailing `SS` only when the offset has seconds.
impl fmt::Display for UtcOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.seconds < 0 { '-' } else { '+' };
        let abs = self.seconds.unsigned_abs();
        let (hours, minutes, seconds) = (abs / 3600, (abs % 3600) / 60, abs % 60);
        write!(f, "{sign}{hours:02}{minutes:02}")?;
        if seconds != 0 {
            write!(f, "{seconds:02}")?;
        }
        Ok(())
    }
}
