//! Schedule document loading.
//!
//! A schedule is a YAML mapping with the academic `year`, an optional
//! `mailto` and `timezone`, and one list of records per term:
//!
//! ```yaml
//! year: 2024
//! mailto: someone@example.com
//! first:
//!   - summary: Algorithms
//!     description: Room 101
//!     weekday: MO
//!     period: 1-2
//! second:
//!   - summary: Seminar
//!     weekday: TH
//!     time: "13:30-15:00"
//! ```

use std::fmt;
use std::io::Read;

use serde::Deserialize;
use termcal_core::{OccurrenceSpec, ScheduleRecord, Term};

use crate::error::ServiceResult;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScheduleDocument {
    pub year: i32,
    #[serde(default)]
    pub mailto: Option<String>,
    /// IANA zone overriding the configured default.
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub first: Vec<RawRecord>,
    #[serde(default)]
    pub second: Vec<RawRecord>,
}

impl ScheduleDocument {
    /// ## Summary
    /// Parses a schedule document from YAML text.
    ///
    /// ## Errors
    /// Returns `YamlError` if the text is not a valid schedule document.
    pub fn from_yaml(text: &str) -> ServiceResult<Self> {
        let doc: Self = serde_yaml::from_str(text)?;
        doc.log_loaded();
        Ok(doc)
    }

    /// ## Summary
    /// Parses a schedule document from a reader.
    ///
    /// ## Errors
    /// Returns `YamlError` if reading fails or the content is not a valid
    /// schedule document.
    pub fn from_reader(reader: impl Read) -> ServiceResult<Self> {
        let doc: Self = serde_yaml::from_reader(reader)?;
        doc.log_loaded();
        Ok(doc)
    }

    /// Records listed under `term`.
    #[must_use]
    pub fn records(&self, term: Term) -> &[RawRecord] {
        match term {
            Term::First => &self.first,
            Term::Second => &self.second,
        }
    }

    fn log_loaded(&self) {
        tracing::debug!(
            year = self.year,
            first = self.first.len(),
            second = self.second.len(),
            timezone = self.timezone.as_deref(),
            "Schedule document loaded"
        );
    }
}

/// A record exactly as written in the document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawRecord {
    pub summary: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub weekday: String,
    #[serde(default)]
    pub time: Option<FieldValue>,
    #[serde(default)]
    pub period: Option<FieldValue>,
}

impl RawRecord {
    /// Decides once which notation the record uses. `time` wins over `period`.
    #[must_use]
    pub fn to_record(&self) -> ScheduleRecord {
        if self.time.is_some() && self.period.is_some() {
            tracing::warn!(
                summary = %self.summary,
                "Record has both time and period; using time"
            );
        }

        let occurrence = match (&self.time, &self.period) {
            (Some(time), _) => Some(OccurrenceSpec::Clock(time.to_string())),
            (None, Some(period)) => Some(OccurrenceSpec::Period(period.to_string())),
            (None, None) => None,
        };

        ScheduleRecord {
            summary: self.summary.clone(),
            description: self.description.clone(),
            weekday: self.weekday.clone(),
            occurrence,
        }
    }
}

/// A `time` or `period` value, which YAML may type as a number.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}
