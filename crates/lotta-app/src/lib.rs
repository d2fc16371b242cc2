//! Command-line front end for the calendar expansion engine.
//!
//! Reads a JSON array of events, expands them over a display window, and
//! writes the resulting entries as JSON to stdout. Logs go to stderr so the
//! output stream stays machine-readable.

pub mod cli;
pub mod run;
