//! Property value types (RFC 5545 §3.3).

use std::fmt;

use super::{DateTime, RRule, UtcOffset};

/// Parsed value of a property.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// CAL-ADDRESS value, e.g. `mailto:someone@example.com`.
    CalAddress(String),
    DateTime(DateTime),
    /// RECUR value (recurrence rule).
    Recur(Box<RRule>),
    /// TEXT value (unescaped).
    Text(String),
    UtcOffset(UtcOffset),
}

impl Value {
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_cal_address(&self) -> Option<&str> {
        match self {
            Self::CalAddress(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_datetime(&self) -> Option<&DateTime> {
        match self {
            Self::DateTime(dt) => Some(dt),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_utc_offset(&self) -> Option<UtcOffset> {
        match self {
            Self::UtcOffset(offset) => Some(*offset),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_recur(&self) -> Option<&RRule> {
        match self {
            Self::Recur(r) => Some(r),
            _ => None,
        }
    }
}

/// Unescaped textual form; the serializer applies TEXT escaping.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CalAddress(s) | Self::Text(s) => f.write_str(s),
            Self::DateTime(dt) => write!(f, "{dt}"),
            Self::Recur(r) => write!(f, "{r}"),
            Self::UtcOffset(offset) => write!(f, "{offset}"),
        }
    }
}
