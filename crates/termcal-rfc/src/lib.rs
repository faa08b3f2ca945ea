//! iCalendar (RFC 5545) model, serialization and recurrence expansion.

pub mod error;
pub mod rfc;
