//! iCalendar RFC 5545 output.
//!
//! - `core`: the subset of iCalendar structures a term timetable needs
//! - `build`: serialization to content lines and VTIMEZONE generation
//! - `expand`: recurrence expansion for previews
//!
//! ## Example
//!
//! ```rust
//! use termcal_rfc::rfc::ical::{build, core::*};
//!
//! let mut ical = ICalendar::new("-//My App//EN");
//! let mut event = Component::event();
//! event.add_property(Property::text("UID", "my-event-1"));
//! event.add_property(Property::text("SUMMARY", "Algorithms"));
//! ical.add_event(event);
//!
//! let output = build::serialize(&ical);
//! assert!(output.starts_with("BEGIN:VCALENDAR\r\n"));
//! ```

pub mod build;
pub mod core;
pub mod expand;

pub use self::build::serialize;
pub use self::core::{Component, ComponentKind, ICalendar, Parameter, Property};
