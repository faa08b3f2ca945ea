use termcal_core::Term;
use thiserror::Error;

/// Service-level errors
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Schedule document error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("{} schedule record(s) could not be converted", .0.len())]
    InvalidRecords(Vec<RecordError>),

    #[error(transparent)]
    CoreError(#[from] termcal_core::CoreError),

    #[error(transparent)]
    RfcError(#[from] termcal_rfc::error::RfcError),
}

/// A schedule record that could not be turned into an event.
#[derive(Error, Debug)]
#[error("{term} term, record {index} <summary: {summary}>: {source}")]
pub struct RecordError {
    pub term: Term,
    /// Position of the record within its term list, starting at 0.
    pub index: usize,
    pub summary: String,
    pub source: RecordFailure,
}

impl RecordError {
    /// The offending raw `time`/`period` value, when the failure was a parse error.
    #[must_use]
    pub fn raw_value(&self) -> Option<&str> {
        match &self.source {
            RecordFailure::Core(err) => err.raw_value(),
            RecordFailure::Rfc(_) => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum RecordFailure {
    #[error(transparent)]
    Core(#[from] termcal_core::CoreError),

    #[error(transparent)]
    Rfc(#[from] termcal_rfc::error::RfcError),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
