//! Recurrence expansion of generated events.

mod occurrences;

pub use occurrences::{Expansion, expand_event};
