//! Base calendar event as supplied by the caller.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::recur::RecurrenceRule;

/// A calendar event as stored by the platform.
///
/// Timestamps are absolute UTC instants; time-zone resolution happens in the
/// caller before events reach the expansion engine. A missing `recurrence`
/// means the event is a single, non-repeating occurrence - structurally
/// distinct from a rule that happens to carry no limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique identifier.
    pub id: String,
    /// Short human-readable title.
    pub summary: String,
    /// Longer free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Where the event takes place.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Start instant.
    pub start: DateTime<Utc>,
    /// End instant.
    pub end: DateTime<Utc>,
    /// Repetition description; `None` for one-off events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<RecurrenceRule>,
}

impl Event {
    /// Creates a one-off event with the given identity and time span.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        summary: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            summary: summary.into(),
            description: None,
            location: None,
            start,
            end,
            recurrence: None,
        }
    }

    /// Attaches a recurrence rule.
    #[must_use]
    pub fn with_recurrence(mut self, rule: RecurrenceRule) -> Self {
        self.recurrence = Some(rule);
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the location.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Event duration (`end - start`).
    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        self.end.signed_duration_since(self.start)
    }

    /// Whether the event carries a recurrence rule.
    #[must_use]
    pub fn is_recurring(&self) -> bool {
        self.recurrence.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recur::Frequency;
    use chrono::TimeZone;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn duration_is_end_minus_start() {
        let event = Event::new("1", "Staff meeting", utc(2024, 1, 1, 10, 0), utc(2024, 1, 1, 11, 30));
        assert_eq!(event.duration(), TimeDelta::minutes(90));
    }

    #[test]
    fn one_off_event_is_not_recurring() {
        let event = Event::new("1", "Field trip", utc(2024, 5, 10, 8, 0), utc(2024, 5, 10, 16, 0));
        assert!(!event.is_recurring());
    }

    #[test]
    fn deserializes_camel_case_payload() {
        let raw = r#"{
            "id": "ev-7",
            "summary": "Choir rehearsal",
            "location": "Music room",
            "start": "2024-01-08T15:00:00Z",
            "end": "2024-01-08T16:00:00Z",
            "recurrence": {"frequency": "WEEKLY", "interval": 2}
        }"#;

        let event: Event = serde_json::from_str(raw).expect("payload should deserialize");
        assert_eq!(event.id, "ev-7");
        assert_eq!(event.location.as_deref(), Some("Music room"));
        let rule = event.recurrence.expect("rule should be present");
        assert_eq!(rule.frequency, Frequency::Weekly);
        assert_eq!(rule.interval, 2);
        assert_eq!(rule.count, None);
    }

    #[test]
    fn serializes_without_absent_fields() {
        let event = Event::new("1", "Exam", utc(2024, 6, 3, 9, 0), utc(2024, 6, 3, 12, 0));
        let json = serde_json::to_string(&event).expect("event should serialize");
        assert!(!json.contains("description"));
        assert!(!json.contains("recurrence"));
    }
}
