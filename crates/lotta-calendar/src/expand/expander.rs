//! Event expansion over a display window.

use chrono::{DateTime, Utc};

use super::step;
use crate::error::{CalendarError, CalendarResult};
use crate::model::{Event, Occurrence, WindowEntry};
use crate::recur::RecurrenceRule;

/// Default cap on occurrences generated from a single rule.
///
/// Guards against runaway rules (small interval, huge window) while staying
/// far above anything a realistic display window produces.
pub const DEFAULT_MAX_OCCURRENCES: usize = 10_000;

/// Expands base events into the concrete entries of a display window.
///
/// The expander is a pure function of its inputs: no caching, no mutation,
/// and repeated calls with identical inputs produce identical entries,
/// including the synthetic occurrence ids.
#[derive(Debug, Clone)]
pub struct EventExpander {
    max_occurrences: usize,
}

impl Default for EventExpander {
    fn default() -> Self {
        Self {
            max_occurrences: DEFAULT_MAX_OCCURRENCES,
        }
    }
}

impl EventExpander {
    /// Creates an expander with the default occurrence cap.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the cap on occurrences generated from a single rule.
    #[must_use]
    pub fn with_max_occurrences(mut self, max: usize) -> Self {
        self.max_occurrences = max;
        self
    }

    /// ## Summary
    /// Produces the entries of `[range_start, range_end)` for `events`.
    ///
    /// Non-recurring events pass through unchanged. Recurring events
    /// contribute one entry per occurrence whose start falls before the
    /// effective upper bound (the rule's `until` when it is earlier than
    /// `range_end`). Entries keep the relative order of the input events,
    /// with occurrences of one event contiguous and oldest first.
    ///
    /// No clipping is applied beyond that bound: an occurrence ending
    /// before `range_start` is still emitted when its start is rule-aligned
    /// with the window edge, and callers needing pixel-perfect clipping
    /// filter further. `range_start <= range_end` is a precondition, not a
    /// condition this function recovers from.
    ///
    /// ## Errors
    /// Fails fast on an invalid rule (zero interval or count), on a rule
    /// producing more than the configured occurrence cap, and on date
    /// arithmetic leaving chrono's representable range.
    pub fn expand<'a>(
        &self,
        events: &'a [Event],
        range_start: DateTime<Utc>,
        range_end: DateTime<Utc>,
    ) -> CalendarResult<Vec<WindowEntry<'a>>> {
        tracing::trace!(
            event_count = events.len(),
            %range_start,
            %range_end,
            "Expanding events for window"
        );

        let mut entries = Vec::with_capacity(events.len());
        for event in events {
            match &event.recurrence {
                None => entries.push(WindowEntry::Event(event)),
                Some(rule) => self.expand_rule(event, *rule, range_start, range_end, &mut entries)?,
            }
        }
        Ok(entries)
    }

    /// Generates the occurrences of one recurring event, oldest first.
    fn expand_rule<'a>(
        &self,
        event: &'a Event,
        rule: RecurrenceRule,
        range_start: DateTime<Utc>,
        range_end: DateTime<Utc>,
        entries: &mut Vec<WindowEntry<'a>>,
    ) -> CalendarResult<()> {
        rule.validate()?;

        let duration = event.duration();
        let upper = rule.until.map_or(range_end, |until| until.min(range_end));

        // Seek forward from the event's own start to the latest rule-aligned
        // occurrence at or before the window start, so partially visible
        // occurrences at the left edge are kept.
        let steps = step::whole_steps_between(rule.frequency, event.start, range_start);
        let snapped = steps - steps % rule.interval;
        let mut cursor =
            step::advance(rule.frequency, event.start, snapped).ok_or(CalendarError::DateOverflow)?;

        tracing::trace!(
            event_id = %event.id,
            frequency = %rule.frequency,
            interval = rule.interval,
            snapped_steps = snapped,
            %cursor,
            %upper,
            "Expanding recurrence rule"
        );

        let count_limit = rule.count.map(|count| usize::try_from(count).unwrap_or(usize::MAX));
        let mut emitted: usize = 0;

        while cursor < upper && count_limit.is_none_or(|limit| emitted < limit) {
            if emitted >= self.max_occurrences {
                return Err(CalendarError::TooManyOccurrences(self.max_occurrences));
            }
            entries.push(WindowEntry::Occurrence(Occurrence::generated(
                event, cursor, duration,
            )));
            emitted += 1;
            cursor = step::advance(rule.frequency, cursor, rule.interval)
                .ok_or(CalendarError::DateOverflow)?;
        }

        Ok(())
    }
}
