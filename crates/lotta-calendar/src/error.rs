use thiserror::Error;

use crate::recur::parse::RuleParseError;

/// Calendar domain errors - covers rule validation, parsing, and expansion.
#[derive(Error, Debug)]
pub enum CalendarError {
    #[error(transparent)]
    CoreError(#[from] lotta_core::error::CoreError),

    #[error("Invalid recurrence rule: {0}")]
    InvalidRule(&'static str),

    #[error(transparent)]
    ParseError(#[from] RuleParseError),

    #[error("Expansion exceeded maximum limit of {0} occurrences")]
    TooManyOccurrences(usize),

    #[error("Date arithmetic overflow while stepping occurrences")]
    DateOverflow,
}

pub type CalendarResult<T> = std::result::Result<T, CalendarError>;
