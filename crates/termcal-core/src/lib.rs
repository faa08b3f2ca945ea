//! Core types and the period/time resolution engine for `termcal`.
//!
//! Everything in this crate is pure: no file or network I/O happens here
//! beyond loading [`config::Settings`].

pub mod config;
pub mod constants;
pub mod error;
pub mod resolver;
pub mod tokenize;
pub mod types;

pub use error::{CoreError, CoreResult, ParseFailure};
pub use resolver::PeriodResolver;
pub use types::{
    Clock, ClockSpan, OccurrenceSpec, ResolvedOccurrence, ScheduleRecord, Slot, Term,
};
