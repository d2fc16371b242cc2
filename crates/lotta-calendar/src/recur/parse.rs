//! Parser for the compact recurrence rule text form.
//!
//! Rules travel as `KEY=VALUE` parts joined by `;`, e.g.
//! `FREQ=WEEKLY;INTERVAL=2;UNTIL=20240120T000000Z`. `FREQ` is mandatory.
//! An unknown frequency or part is a hard error rather than being skipped,
//! so malformed rules surface to the caller instead of dropping events.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use thiserror::Error;

use super::{Frequency, RecurrenceRule};

/// Error type for recurrence rule text parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleParseError {
    /// Input was empty or whitespace.
    #[error("empty recurrence rule")]
    Empty,

    /// No `FREQ` part present.
    #[error("recurrence rule is missing FREQ")]
    MissingFrequency,

    /// `FREQ` value is not one of the recognized spellings.
    #[error("unrecognized frequency: {0}")]
    UnknownFrequency(String),

    /// A part key is not part of the rule language.
    #[error("unrecognized rule part: {0}")]
    UnknownPart(String),

    /// A part value failed to parse.
    #[error("invalid value for {part}: {value}")]
    InvalidValue {
        /// The rule part whose value was rejected.
        part: &'static str,
        /// The offending value text.
        value: String,
    },
}

/// ## Summary
/// Parses the compact text form of a recurrence rule.
///
/// Part keys are case-insensitive; `INTERVAL` defaults to 1 when absent.
///
/// ## Errors
/// Returns a [`RuleParseError`] if the input is empty, `FREQ` is missing or
/// unrecognized, a part key is unknown, or a part value fails to parse.
pub fn parse_rule(input: &str) -> Result<RecurrenceRule, RuleParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(RuleParseError::Empty);
    }

    let mut frequency = None;
    let mut interval = None;
    let mut until = None;
    let mut count = None;

    for part in input.split(';') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let Some((key, value)) = part.split_once('=') else {
            return Err(RuleParseError::UnknownPart(part.to_string()));
        };
        match key.to_ascii_uppercase().as_str() {
            "FREQ" => {
                frequency = Some(
                    Frequency::parse(value)
                        .ok_or_else(|| RuleParseError::UnknownFrequency(value.to_string()))?,
                );
            }
            "INTERVAL" => {
                interval = Some(parse_positive(value, "INTERVAL")?);
            }
            "COUNT" => {
                count = Some(parse_positive(value, "COUNT")?);
            }
            "UNTIL" => {
                until = Some(parse_until(value)?);
            }
            _ => return Err(RuleParseError::UnknownPart(key.to_string())),
        }
    }

    let Some(frequency) = frequency else {
        return Err(RuleParseError::MissingFrequency);
    };

    Ok(RecurrenceRule {
        frequency,
        interval: interval.unwrap_or(1),
        until,
        count,
    })
}

fn parse_positive(value: &str, part: &'static str) -> Result<u32, RuleParseError> {
    match value.parse::<u32>() {
        Ok(parsed) if parsed > 0 => Ok(parsed),
        _ => Err(RuleParseError::InvalidValue {
            part,
            value: value.to_string(),
        }),
    }
}

/// Accepts the date-time form `YYYYMMDDTHHMMSSZ` and the date form
/// `YYYYMMDD` (interpreted as midnight UTC).
fn parse_until(value: &str) -> Result<DateTime<Utc>, RuleParseError> {
    if let Ok(datetime) = NaiveDateTime::parse_from_str(value, "%Y%m%dT%H%M%SZ") {
        return Ok(datetime.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y%m%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }
    Err(RuleParseError::InvalidValue {
        part: "UNTIL",
        value: value.to_string(),
    })
}
