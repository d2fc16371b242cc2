//! Recurrence rule attached to a calendar event.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Frequency;
use super::parse::{self, RuleParseError};
use crate::error::{CalendarError, CalendarResult};

/// Describes how a single calendar event repeats.
///
/// A rule always has a frequency and an interval. `until` and `count` are
/// independent end conditions; whichever limit is hit first wins. A rule
/// with neither runs until the display window ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurrenceRule {
    /// Step unit between occurrences.
    pub frequency: Frequency,
    /// Step width in units of `frequency` (default 1).
    #[serde(default = "default_interval")]
    pub interval: u32,
    /// No occurrence starts at or after this instant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub until: Option<DateTime<Utc>>,
    /// Maximum number of occurrences generated from the rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

const fn default_interval() -> u32 {
    1
}

impl RecurrenceRule {
    /// Creates a rule with the given frequency and an interval of 1.
    #[must_use]
    pub const fn new(frequency: Frequency) -> Self {
        Self {
            frequency,
            interval: 1,
            until: None,
            count: None,
        }
    }

    /// Creates a daily rule.
    #[must_use]
    pub const fn daily() -> Self {
        Self::new(Frequency::Daily)
    }

    /// Creates a weekly rule.
    #[must_use]
    pub const fn weekly() -> Self {
        Self::new(Frequency::Weekly)
    }

    /// Creates a monthly rule.
    #[must_use]
    pub const fn monthly() -> Self {
        Self::new(Frequency::Monthly)
    }

    /// Creates a yearly rule.
    #[must_use]
    pub const fn yearly() -> Self {
        Self::new(Frequency::Yearly)
    }

    /// Sets the interval.
    #[must_use]
    pub const fn with_interval(mut self, interval: u32) -> Self {
        self.interval = interval;
        self
    }

    /// Sets the end instant; no occurrence starts at or after it.
    #[must_use]
    pub fn with_until(mut self, until: DateTime<Utc>) -> Self {
        self.until = Some(until);
        self
    }

    /// Sets the occurrence count.
    #[must_use]
    pub const fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    /// Checks the rule invariants.
    ///
    /// ## Errors
    /// Returns [`CalendarError::InvalidRule`] if `interval` is zero or
    /// `count` is present but zero. Both are programming errors in the
    /// caller, surfaced before any occurrence is generated.
    pub fn validate(&self) -> CalendarResult<()> {
        if self.interval == 0 {
            return Err(CalendarError::InvalidRule("interval must be positive"));
        }
        if self.count == Some(0) {
            return Err(CalendarError::InvalidRule("count must be positive when present"));
        }
        Ok(())
    }
}

impl fmt::Display for RecurrenceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FREQ={}", self.frequency)?;

        if self.interval != 1 {
            write!(f, ";INTERVAL={}", self.interval)?;
        }

        if let Some(until) = self.until {
            write!(f, ";UNTIL={}", until.format("%Y%m%dT%H%M%SZ"))?;
        }

        if let Some(count) = self.count {
            write!(f, ";COUNT={count}")?;
        }

        Ok(())
    }
}

impl FromStr for RecurrenceRule {
    type Err = RuleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse::parse_rule(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn rule_display_basic() {
        let rule = RecurrenceRule::daily().with_count(10);
        assert_eq!(rule.to_string(), "FREQ=DAILY;COUNT=10");
    }

    #[test]
    fn rule_display_with_interval() {
        let rule = RecurrenceRule::weekly().with_interval(2);
        assert_eq!(rule.to_string(), "FREQ=WEEKLY;INTERVAL=2");
    }

    #[test]
    fn rule_display_with_until() {
        let until = Utc.with_ymd_and_hms(2024, 1, 20, 0, 0, 0).unwrap();
        let rule = RecurrenceRule::weekly().with_interval(2).with_until(until);
        assert_eq!(rule.to_string(), "FREQ=WEEKLY;INTERVAL=2;UNTIL=20240120T000000Z");
    }

    #[test]
    fn rule_keeps_both_limits() {
        let until = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let rule = RecurrenceRule::monthly().with_until(until).with_count(3);
        assert_eq!(rule.until, Some(until));
        assert_eq!(rule.count, Some(3));
    }

    #[test]
    fn validate_rejects_zero_interval() {
        let rule = RecurrenceRule::daily().with_interval(0);
        assert!(matches!(rule.validate(), Err(CalendarError::InvalidRule(_))));
    }

    #[test]
    fn validate_rejects_zero_count() {
        let rule = RecurrenceRule::daily().with_count(0);
        assert!(matches!(rule.validate(), Err(CalendarError::InvalidRule(_))));
    }

    #[test]
    fn from_str_round_trips_display() {
        let rule: RecurrenceRule = "FREQ=MONTHLY;INTERVAL=3;COUNT=4".parse().expect("rule should parse");
        assert_eq!(rule.to_string(), "FREQ=MONTHLY;INTERVAL=3;COUNT=4");
    }
}
