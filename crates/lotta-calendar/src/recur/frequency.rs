//! Recurrence frequency for repeating events.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How often a recurring event repeats.
///
/// The platform's rule language recognizes exactly these four step units.
/// An unknown spelling is rejected when a rule is parsed or deserialized
/// rather than being silently skipped, and every consumer matches
/// exhaustively over the variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    /// Returns the wire spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "DAILY",
            Self::Weekly => "WEEKLY",
            Self::Monthly => "MONTHLY",
            Self::Yearly => "YEARLY",
        }
    }

    /// Parses a frequency from a string (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.to_ascii_uppercase().as_str() {
            "DAILY" => Self::Daily,
            "WEEKLY" => Self::Weekly,
            "MONTHLY" => Self::Monthly,
            "YEARLY" => Self::Yearly,
            _ => return None,
        })
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequency_parse() {
        assert_eq!(Frequency::parse("DAILY"), Some(Frequency::Daily));
        assert_eq!(Frequency::parse("weekly"), Some(Frequency::Weekly));
        assert_eq!(Frequency::parse("HOURLY"), None);
        assert_eq!(Frequency::parse(""), None);
    }

    #[test]
    fn frequency_display() {
        assert_eq!(Frequency::Monthly.to_string(), "MONTHLY");
        assert_eq!(Frequency::Yearly.as_str(), "YEARLY");
    }

    #[test]
    fn frequency_serde_spelling() {
        let json = serde_json::to_string(&Frequency::Weekly).expect("should serialize");
        assert_eq!(json, "\"WEEKLY\"");

        let parsed: Frequency = serde_json::from_str("\"DAILY\"").expect("should deserialize");
        assert_eq!(parsed, Frequency::Daily);
    }
}
