use chrono::{DateTime, Utc};

/// Match status as reported by the feed's `status.full` field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FixtureStatus {
    Scheduled,
    Cancelled,
    Postponed,
    Tentative,
    /// Anything else the feed sends ("Fixture", "Full Time", ...), kept verbatim.
    Other(String),
}

impl FixtureStatus {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "" | "scheduled" => FixtureStatus::Scheduled,
            "cancelled" => FixtureStatus::Cancelled,
            "postponed" => FixtureStatus::Postponed,
            "tentative" => FixtureStatus::Tentative,
            _ => FixtureStatus::Other(trimmed.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FixtureStatus::Scheduled => "scheduled",
            FixtureStatus::Cancelled => "cancelled",
            FixtureStatus::Postponed => "postponed",
            FixtureStatus::Tentative => "tentative",
            FixtureStatus::Other(s) => s,
        }
    }
}

/// A fixture after date parsing, orientation and venue resolution.
#[derive(Clone, Debug)]
pub struct CanonicalFixture {
    /// Source identifier; empty when the feed omits it.
    pub id: String,
    pub kickoff: DateTime<Utc>,
    pub status: FixtureStatus,
    pub competition: String,
    pub is_home: bool,
    pub opponent: String,
    pub venue: String,
}
