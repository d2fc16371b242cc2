//! Display-window expansion of recurring events.
//!
//! Turns base events plus a half-open window into the concrete entries a
//! calendar view renders, generating one entry per repetition of each
//! recurring event.

mod expander;
mod step;

pub use expander::{DEFAULT_MAX_OCCURRENCES, EventExpander};
