//! iCalendar serialization (RFC 5545).
//!
//! - Escape: TEXT and parameter value escaping
//! - Fold: content line folding at 75 octets
//! - Serializer: document serialization with canonical ordering
//! - VTimezone: VTIMEZONE generation from the IANA database

mod escape;
mod fold;
mod serializer;
mod vtimezone;

pub use escape::{escape_param_value, escape_text};
pub use fold::fold_line;
pub use serializer::{serialize, serialize_component, serialize_property};
pub use vtimezone::vtimezone;
