use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use icalendar::{Calendar, Component, Event, EventLike, EventStatus, Property};
use tracing::info;

use crate::club::ClubProfile;
use crate::error::{Error, Result};
use crate::model::fixture::{CanonicalFixture, FixtureStatus};

/// Every event is booked for this long, extra time or not.
pub fn match_duration() -> Duration {
    Duration::minutes(105)
}

pub const CATEGORIES: [&str; 2] = ["Football", "Fixture"];

/// `(home, away)` display names with the tracked team on its side.
fn sides<'a>(fixture: &'a CanonicalFixture, club: &'a ClubProfile) -> (&'a str, &'a str) {
    if fixture.is_home {
        (club.name.as_str(), fixture.opponent.as_str())
    } else {
        (fixture.opponent.as_str(), club.name.as_str())
    }
}

fn status_prefix(status: &FixtureStatus) -> &'static str {
    match status {
        FixtureStatus::Cancelled => "CANCELLED: ",
        FixtureStatus::Postponed => "POSTPONED: ",
        FixtureStatus::Tentative => "TBD: ",
        _ => "",
    }
}

pub fn event_summary(fixture: &CanonicalFixture, club: &ClubProfile) -> String {
    let (home, away) = sides(fixture, club);
    format!("{}{} vs {}", status_prefix(&fixture.status), home, away)
}

pub fn event_description(fixture: &CanonicalFixture, club: &ClubProfile) -> String {
    let (home, away) = sides(fixture, club);
    format!("{} match between {} and {}", fixture.competition, home, away)
}

/// `{YYYYMMDD}-{club slug}-{opponent slug}@{domain}`.
///
/// Stable across runs for the same date and opponent. Two fixtures against
/// the same opponent on one day share a UID.
pub fn event_uid(fixture: &CanonicalFixture, club: &ClubProfile) -> String {
    format!(
        "{}-{}-{}@{}",
        fixture.kickoff.format("%Y%m%d"),
        club.slug,
        fixture.opponent.to_lowercase().replace(' ', "-"),
        club.uid_domain
    )
}

pub fn calendar_status(status: &FixtureStatus) -> EventStatus {
    match status {
        FixtureStatus::Cancelled => EventStatus::Cancelled,
        FixtureStatus::Postponed | FixtureStatus::Tentative => EventStatus::Tentative,
        _ => EventStatus::Confirmed,
    }
}

/// Build the VEVENT for one fixture. `stamp` becomes DTSTAMP.
pub fn build_event(fixture: &CanonicalFixture, club: &ClubProfile, stamp: DateTime<Utc>) -> Event {
    let mut event = Event::new();
    event
        .uid(&event_uid(fixture, club))
        .summary(&event_summary(fixture, club))
        .starts(fixture.kickoff)
        .ends(fixture.kickoff + match_duration())
        .timestamp(stamp)
        .location(&fixture.venue)
        .description(&event_description(fixture, club))
        .status(calendar_status(&fixture.status));
    // One property per category; a joined value would be escaped into a single category.
    for category in CATEGORIES {
        event.add_multi_property("CATEGORIES", category);
    }
    event.done()
}

/// Build the full calendar: fixed metadata, then one event per fixture in
/// input order.
pub fn assemble_calendar(fixtures: &[CanonicalFixture], club: &ClubProfile, stamp: DateTime<Utc>) -> Calendar {
    let mut calendar = Calendar::new();
    // Replace the library's default PRODID with ours.
    calendar.properties.clear();
    calendar
        .append_property(Property::new("VERSION", "2.0"))
        .append_property(Property::new("PRODID", &club.product_id()))
        .append_property(Property::new("CALSCALE", "GREGORIAN"))
        .append_property(Property::new("METHOD", "PUBLISH"))
        .name(&club.calendar_name)
        .description(&club.calendar_description)
        .timezone(club.home_tz.name());

    for fixture in fixtures {
        calendar.push(build_event(fixture, club, stamp));
    }

    info!(events = calendar.components.len(), "Created calendar");
    calendar
}

/// Serialize and write the calendar in one call, replacing any previous file.
pub fn write_calendar(calendar: &Calendar, path: &Path) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| Error::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }
    }
    std::fs::write(path, calendar.to_string()).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "Calendar written");
    Ok(path.to_path_buf())
}

/// Parse ICS text back into a calendar.
pub fn parse_calendar(ics: &str) -> Result<Calendar> {
    let unfolded = icalendar::parser::unfold(ics);
    let parsed = icalendar::parser::read_calendar(&unfolded).map_err(|e| Error::Parse(e.to_string()))?;
    Ok(parsed.into())
}
