use thiserror::Error;

/// RFC model and recurrence errors
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("RRule error: {0}")]
    RRuleError(#[from] rrule::RRuleError),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
