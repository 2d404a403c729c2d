use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use icalendar::Calendar;
use tracing::{info, instrument};

use crate::api::FixtureFeed;
use crate::club::ClubProfile;
use crate::error::Result;
use crate::ical;
use crate::normalize::{normalize_fixtures, NormalizeReport};

/// A calendar built from one fetch, not yet written.
#[derive(Debug)]
pub struct Generation {
    pub report: NormalizeReport,
    pub calendar: Calendar,
}

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub path: PathBuf,
    pub events: usize,
    pub skipped: usize,
}

/// Fetch, normalize and assemble. Only a failed fetch is an error.
pub fn generate<F: FixtureFeed>(feed: &F, club: &ClubProfile, now: DateTime<Utc>) -> Result<Generation> {
    let document = feed.fetch()?;
    let report = normalize_fixtures(&document, club, now);
    let calendar = ical::assemble_calendar(&report.fixtures, club, now);
    Ok(Generation { report, calendar })
}

/// One full update: [`generate`] then write the calendar to `output`.
/// Nothing is written if the fetch fails. An empty calendar is still written.
#[instrument(level = "info", skip(feed, club), fields(output = %output.display()))]
pub fn run<F: FixtureFeed>(feed: &F, club: &ClubProfile, output: &Path, now: DateTime<Utc>) -> Result<RunSummary> {
    let generation = generate(feed, club, now)?;
    let path = ical::write_calendar(&generation.calendar, output)?;
    let summary = RunSummary {
        path,
        events: generation.calendar.components.len(),
        skipped: generation.report.skipped_count(),
    };
    info!(events = summary.events, skipped = summary.skipped, "Calendar update completed successfully");
    Ok(summary)
}
