//! Command-line arguments.

use chrono::{DateTime, Utc};
use clap::Parser;

/// Expands recurring calendar events over a display window.
#[derive(Debug, Parser)]
#[command(name = "lotta-app", version, about)]
pub struct Args {
    /// Path to the events JSON file, or `-` for stdin.
    #[arg(short, long, default_value = "-")]
    pub input: String,

    /// Window start (RFC 3339, e.g. 2024-01-01T00:00:00Z).
    #[arg(long)]
    pub from: DateTime<Utc>,

    /// Window end (RFC 3339, exclusive). Defaults to `from` plus the
    /// configured window length.
    #[arg(long)]
    pub to: Option<DateTime<Utc>>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pub pretty: bool,
}
