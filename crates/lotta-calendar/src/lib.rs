//! Calendar domain for the lotta platform: event model, recurrence rules,
//! and display-window expansion.
//!
//! The engine turns a list of base events, each optionally carrying a
//! [`RecurrenceRule`], plus a half-open window `[range_start, range_end)`
//! into the flat list of concrete entries a calendar view renders. One-off
//! events pass through unchanged; recurring events contribute one
//! [`Occurrence`] per repetition intersecting the window.

pub mod error;
pub mod expand;
pub mod model;
pub mod recur;

pub use error::{CalendarError, CalendarResult};
pub use expand::EventExpander;
pub use model::{Event, Occurrence, WindowEntry};
pub use recur::{Frequency, RecurrenceRule};
