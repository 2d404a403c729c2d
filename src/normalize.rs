use std::fmt;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::classify;
use crate::club::ClubProfile;
use crate::dates::{combine_date_time, parse_kickoff};
use crate::model::fixture::{CanonicalFixture, FixtureStatus};
use crate::model::raw::{non_blank, FixturesDocument, RawFixture};

pub const DEFAULT_STATUS: &str = "scheduled";
pub const DEFAULT_COMPETITION: &str = "League";

/// Why a match record did not become a canonical fixture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// The record does not have the shape of a match.
    Malformed(String),
    /// Date and time did not combine into a recognised layout. Holds the
    /// combined string (empty when a part was missing).
    UnparseableDate(String),
    /// Kickoff is not after the processing time.
    InPast(DateTime<Utc>),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Malformed(e) => write!(f, "malformed record: {}", e),
            SkipReason::UnparseableDate(s) if s.is_empty() => f.write_str("missing date or time"),
            SkipReason::UnparseableDate(s) => write!(f, "could not parse date: {}", s),
            SkipReason::InPast(dt) => write!(f, "kickoff {} already passed", dt.to_rfc3339()),
        }
    }
}

#[derive(Debug)]
pub enum FixtureOutcome {
    Kept(CanonicalFixture),
    Skipped(SkipReason),
}

#[derive(Clone, Debug)]
pub struct SkippedFixture {
    /// Position of the record in the payload.
    pub index: usize,
    pub reason: SkipReason,
}

/// Result of one normalization pass.
#[derive(Debug, Default)]
pub struct NormalizeReport {
    /// Kept fixtures, in payload order.
    pub fixtures: Vec<CanonicalFixture>,
    pub skipped: Vec<SkippedFixture>,
}

impl NormalizeReport {
    pub fn kept_count(&self) -> usize {
        self.fixtures.len()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    /// Skips caused by the record itself rather than by it being in the past.
    pub fn rejected_count(&self) -> usize {
        self.skipped
            .iter()
            .filter(|s| !matches!(s.reason, SkipReason::InPast(_)))
            .count()
    }
}

/// Turn one decoded match record into a canonical fixture, or say why not.
pub fn normalize_fixture(raw: &RawFixture, club: &ClubProfile, now: DateTime<Utc>) -> FixtureOutcome {
    let combined = combine_date_time(raw.date.as_deref(), raw.time.as_deref());
    let kickoff = match parse_kickoff(&combined, club.home_tz) {
        Some(dt) => dt,
        None => return FixtureOutcome::Skipped(SkipReason::UnparseableDate(combined)),
    };
    if kickoff <= now {
        return FixtureOutcome::Skipped(SkipReason::InPast(kickoff));
    }

    let is_home = classify::is_home(raw, club);
    let opponent = classify::opponent_name(raw, club);
    let venue = classify::venue(raw, club, is_home, &opponent);
    let status = non_blank(raw.status.full.as_deref()).unwrap_or(DEFAULT_STATUS);
    let competition = non_blank(raw.competition.name.as_deref()).unwrap_or(DEFAULT_COMPETITION);

    FixtureOutcome::Kept(CanonicalFixture {
        id: raw.id.as_ref().map(|id| id.to_string()).unwrap_or_default(),
        kickoff,
        status: FixtureStatus::parse(status),
        competition: competition.to_string(),
        is_home,
        opponent,
        venue,
    })
}

/// Decode and normalize a single match record from the payload.
pub fn normalize_record(record: &serde_json::Value, club: &ClubProfile, now: DateTime<Utc>) -> FixtureOutcome {
    match RawFixture::deserialize(record) {
        Ok(raw) => normalize_fixture(&raw, club, now),
        Err(e) => FixtureOutcome::Skipped(SkipReason::Malformed(e.to_string())),
    }
}

/// Normalize every match in the payload. Skips are logged and collected;
/// none of them stop the pass. Payload order is preserved.
pub fn normalize_fixtures(doc: &FixturesDocument, club: &ClubProfile, now: DateTime<Utc>) -> NormalizeReport {
    let mut report = NormalizeReport::default();

    for (index, record) in doc.matches().iter().enumerate() {
        match normalize_record(record, club, now) {
            FixtureOutcome::Kept(fixture) => report.fixtures.push(fixture),
            FixtureOutcome::Skipped(reason) => {
                match &reason {
                    SkipReason::InPast(_) => debug!(index, reason = %reason, "Filtered past fixture"),
                    _ => warn!(index, reason = %reason, "Skipping fixture"),
                }
                report.skipped.push(SkippedFixture { index, reason });
            }
        }
    }

    info!(
        total = doc.matches().len(),
        kept = report.kept_count(),
        skipped = report.skipped_count(),
        "Processed upcoming fixtures"
    );
    report
}
