//! iCalendar core models (RFC 5545).
//!
//! Only the structures a generated timetable uses are modelled: a calendar
//! of events with zoned start/end, the VTIMEZONE describing their zone, text
//! properties, calendar addresses and a weekly recurrence rule.

mod component;
mod datetime;
mod parameter;
mod property;
mod rrule;
mod value;

pub use component::{Component, ComponentKind, ICalendar};
pub use datetime::{DateTime, DateTimeForm, UtcOffset};
pub use parameter::Parameter;
pub use property::{Property, names};
pub use rrule::{RRule, Weekday};
pub use value::Value;
