//! Concrete occurrences produced for a display window.

use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;

use super::Event;

/// One concrete instance generated from a recurring event.
///
/// Occurrences exist only for the duration of a single expansion; they
/// borrow the display fields of the event that generated them and keep a
/// reference back to it for "edit series" style operations in the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Occurrence<'a> {
    /// Synthetic identifier, stable across calls: `"{event.id}-{start date}"`.
    pub id: String,
    /// Title copied from the generating event.
    pub summary: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<&'a str>,
    /// Start instant of this repetition.
    pub start: DateTime<Utc>,
    /// End instant; `end - start` always equals the base event's duration.
    pub end: DateTime<Utc>,
    /// The event this occurrence was generated from.
    pub original_event: &'a Event,
}

impl<'a> Occurrence<'a> {
    /// Creates the occurrence of `event` starting at `start`.
    ///
    /// The synthetic id is derived from the event id and the occurrence
    /// start date, so repeated expansions of identical inputs produce
    /// identical ids.
    #[must_use]
    pub fn generated(event: &'a Event, start: DateTime<Utc>, duration: TimeDelta) -> Self {
        Self {
            id: format!("{}-{}", event.id, start.date_naive()),
            summary: &event.summary,
            description: event.description.as_deref(),
            location: event.location.as_deref(),
            start,
            end: start + duration,
            original_event: event,
        }
    }
}

/// Entry in an expanded window: either a one-off event passed through
/// unchanged or an occurrence generated from a recurrence rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum WindowEntry<'a> {
    /// A non-recurring event, by reference, keeping its own id.
    Event(&'a Event),
    /// A generated occurrence of a recurring event.
    Occurrence(Occurrence<'a>),
}

impl<'a> WindowEntry<'a> {
    /// Identifier of the entry.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Event(event) => &event.id,
            Self::Occurrence(occurrence) => &occurrence.id,
        }
    }

    /// Start instant of the entry.
    #[must_use]
    pub fn start(&self) -> DateTime<Utc> {
        match self {
            Self::Event(event) => event.start,
            Self::Occurrence(occurrence) => occurrence.start,
        }
    }

    /// End instant of the entry.
    #[must_use]
    pub fn end(&self) -> DateTime<Utc> {
        match self {
            Self::Event(event) => event.end,
            Self::Occurrence(occurrence) => occurrence.end,
        }
    }

    /// Display title of the entry.
    #[must_use]
    pub fn summary(&self) -> &str {
        match self {
            Self::Event(event) => &event.summary,
            Self::Occurrence(occurrence) => occurrence.summary,
        }
    }

    /// The generating event for occurrences, `None` for pass-through events.
    #[must_use]
    pub fn original_event(&self) -> Option<&'a Event> {
        match self {
            Self::Event(_) => None,
            Self::Occurrence(occurrence) => Some(occurrence.original_event),
        }
    }
}
