//! Reads events, expands them, and writes window entries.

use std::fs;
use std::io::Read as _;

use anyhow::{Context as _, Result};
use chrono::{DateTime, TimeDelta, Utc};
use lotta_calendar::{Event, EventExpander};
use lotta_core::config::Settings;

use crate::cli::Args;

/// ## Summary
/// Runs one expansion pass: read events, expand, print entries as JSON.
///
/// ## Errors
/// Returns an error if the input cannot be read or parsed, if expansion
/// fails, or if the output cannot be serialized.
pub fn run(args: &Args, settings: &Settings) -> Result<()> {
    let events = read_events(&args.input)?;
    let range_start = args.from;
    let range_end = window_end(args.from, args.to, settings.expansion.default_window_days);

    tracing::info!(
        event_count = events.len(),
        %range_start,
        %range_end,
        "Expanding events"
    );

    let expander = EventExpander::new().with_max_occurrences(settings.expansion.max_occurrences);
    let entries = expander.expand(&events, range_start, range_end)?;

    tracing::info!(entry_count = entries.len(), "Expansion complete");

    let output = if args.pretty {
        serde_json::to_string_pretty(&entries)?
    } else {
        serde_json::to_string(&entries)?
    };
    println!("{output}");

    Ok(())
}

/// Resolves the window end: the explicit `--to` value, or `from` plus the
/// configured default window length.
#[must_use]
pub fn window_end(
    from: DateTime<Utc>,
    to: Option<DateTime<Utc>>,
    default_window_days: u32,
) -> DateTime<Utc> {
    to.unwrap_or_else(|| from + TimeDelta::days(i64::from(default_window_days)))
}

/// Parses a JSON array of events.
///
/// ## Errors
/// Returns an error if the input is not a JSON array of event objects.
pub fn parse_events(raw: &str) -> Result<Vec<Event>> {
    serde_json::from_str(raw).context("failed to parse events JSON")
}

fn read_events(path: &str) -> Result<Vec<Event>> {
    let raw = if path == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read events from stdin")?;
        buffer
    } else {
        fs::read_to_string(path).with_context(|| format!("failed to read events from {path}"))?
    };
    parse_events(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parse_events_accepts_event_array() {
        let raw = r#"[
            {
                "id": "1",
                "summary": "Sports day",
                "start": "2024-05-01T08:00:00Z",
                "end": "2024-05-01T14:00:00Z"
            },
            {
                "id": "2",
                "summary": "Weekly assembly",
                "start": "2024-05-06T09:00:00Z",
                "end": "2024-05-06T09:30:00Z",
                "recurrence": {"frequency": "WEEKLY"}
            }
        ]"#;

        let events = parse_events(raw).expect("events should parse");
        assert_eq!(events.len(), 2);
        assert!(!events[0].is_recurring());
        assert!(events[1].is_recurring());
    }

    #[test]
    fn parse_events_rejects_non_array_payload() {
        assert!(parse_events(r#"{"id": "1"}"#).is_err());
    }

    #[test_log::test]
    fn window_end_defaults_to_configured_length() {
        let from = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(
            window_end(from, None, 35),
            Utc.with_ymd_and_hms(2024, 2, 5, 0, 0, 0).unwrap()
        );

        let to = Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap();
        assert_eq!(window_end(from, Some(to), 35), to);
    }
}
