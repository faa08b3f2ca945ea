//! Schedule loading and calendar assembly for `termcal`.

pub mod calendar;
pub mod error;
pub mod schedule;

pub use calendar::{CalendarAssembler, EventPreview, preview};
pub use error::{RecordError, RecordFailure, ServiceError, ServiceResult};
pub use schedule::{FieldValue, RawRecord, ScheduleDocument};
