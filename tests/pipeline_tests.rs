use std::path::PathBuf;

use chrono::{TimeZone, Utc};
use icalendar::{CalendarComponent, Component};

use larkhall_fixtures::api::{FixtureFeed, JsonFeed};
use larkhall_fixtures::club::ClubProfile;
use larkhall_fixtures::config::{resolve_api_key, Settings};
use larkhall_fixtures::error::{Error, Result};
use larkhall_fixtures::model::raw::FixturesDocument;
use larkhall_fixtures::pipeline::{generate, run};
use larkhall_fixtures::validate::validate_file;

fn output_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("larkhall-fixtures-{}-{}.ics", name, std::process::id()))
}

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 4, 1, 12, 0, 0).unwrap()
}

fn events(path: &PathBuf) -> Vec<icalendar::Event> {
    let ics = std::fs::read_to_string(path).expect("written calendar");
    let calendar = larkhall_fixtures::ical::parse_calendar(&ics).expect("reparse");
    calendar
        .components
        .into_iter()
        .filter_map(|c| match c {
            CalendarComponent::Event(e) => Some(e),
            _ => None,
        })
        .collect()
}

struct FailingFeed;

impl FixtureFeed for FailingFeed {
    fn fetch(&self) -> Result<FixturesDocument> {
        Err(Error::Decode("connection reset".to_string()))
    }
}

#[test]
fn future_home_fixture_becomes_confirmed_event_at_home_ground() {
    let feed = JsonFeed::new(
        r#"{"fixtures-results": {"matches": [{
            "id": 1, "date": "2025-04-05", "time": "15:00",
            "status": {"full": "Fixture"},
            "competition": {"name": "Southern League Division One South"},
            "home-team": {"id": 1169, "name": "Larkhall Athletic"},
            "away-team": {"id": 224, "name": "Yate"}
        }]}}"#,
    );
    let path = output_path("home");
    let summary = run(&feed, &ClubProfile::larkhall(), &path, now()).expect("run");
    assert_eq!(summary.events, 1);

    let written = events(&path);
    assert_eq!(written.len(), 1);
    assert_eq!(written[0].property_value("SUMMARY"), Some("Larkhall Athletic vs Yate Town"));
    assert_eq!(written[0].property_value("STATUS"), Some("CONFIRMED"));
    let location = written[0].property_value("LOCATION").unwrap_or("");
    assert!(location.contains("Plain Ham") && location.contains("Bath"), "location was: {}", location);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn postponed_away_fixture_is_prefixed_and_tentative() {
    let feed = JsonFeed::new(
        r#"{"fixtures-results": {"matches": [{
            "id": 2, "date": "2025-04-12", "time": "19:45",
            "status": {"full": "Postponed"},
            "home-team": {"id": 388, "name": "Malvern"},
            "away-team": {"id": 1169, "name": "Larkhall Athletic"}
        }]}}"#,
    );
    let path = output_path("postponed");
    run(&feed, &ClubProfile::larkhall(), &path, now()).expect("run");

    let written = events(&path);
    assert_eq!(written.len(), 1);
    assert_eq!(
        written[0].property_value("SUMMARY"),
        Some("POSTPONED: Malvern Town vs Larkhall Athletic")
    );
    assert_eq!(written[0].property_value("STATUS"), Some("TENTATIVE"));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn only_past_fixtures_still_writes_empty_calendar() {
    let feed = JsonFeed::new(
        r#"{"fixtures-results": {"matches": [{
            "id": 3, "date": "2025-03-01", "time": "15:00",
            "status": {"full": "Full Time"},
            "home-team": {"id": 1169}, "away-team": {"id": 863}
        }]}}"#,
    );
    let path = output_path("past");
    let summary = run(&feed, &ClubProfile::larkhall(), &path, now()).expect("run");
    assert_eq!(summary.events, 0);
    assert_eq!(summary.skipped, 1);
    assert!(path.exists());
    assert!(events(&path).is_empty());
    let _ = std::fs::remove_file(&path);
}

#[test]
fn unparseable_date_is_dropped_without_failing_the_run() {
    let feed = JsonFeed::new(
        r#"{"fixtures-results": {"matches": [
            {"id": 4, "date": "to be confirmed", "time": "15:00",
             "home-team": {"id": 1169}, "away-team": {"id": 863}},
            {"id": 5, "date": "2025-04-19", "time": "15:00",
             "home-team": {"id": 1169}, "away-team": {"id": 863}}
        ]}}"#,
    );
    let path = output_path("unparseable");
    let summary = run(&feed, &ClubProfile::larkhall(), &path, now()).expect("run");
    assert_eq!(summary.events, 1);
    assert_eq!(summary.skipped, 1);
    assert_eq!(
        events(&path)[0].property_value("SUMMARY"),
        Some("Larkhall Athletic vs Melksham Town")
    );
    let _ = std::fs::remove_file(&path);
}

#[test]
fn written_sample_calendar_validates_with_matching_event_count() {
    let body = std::fs::read_to_string("tests/sample_fixtures.json").expect("failed to read sample_fixtures.json");
    let feed = JsonFeed::new(body);
    let club = ClubProfile::larkhall();
    let path = output_path("sample");

    let generation = generate(&feed, &club, now()).expect("generate");
    let kept = generation.report.kept_count();
    run(&feed, &club, &path, now()).expect("run");

    let report = validate_file(&path).expect("validate");
    assert!(report.is_valid(), "findings: {:?}", report.findings);
    assert_eq!(report.event_count, kept);
    assert_eq!(report.valid_events, kept);
    assert_eq!(report.warnings().count(), 0, "findings: {:?}", report.findings);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn failed_fetch_writes_nothing() {
    let path = output_path("failed");
    let _ = std::fs::remove_file(&path);
    let result = run(&FailingFeed, &ClubProfile::larkhall(), &path, now());
    assert!(matches!(result, Err(Error::Decode(_))));
    assert!(!path.exists());
}

#[test]
fn undecodable_payload_is_a_run_error() {
    let feed = JsonFeed::new("<html>rate limited</html>");
    assert!(matches!(
        generate(&feed, &ClubProfile::larkhall(), now()),
        Err(Error::Decode(_))
    ));
}

#[test]
fn unwritable_output_is_a_run_error() {
    let feed = JsonFeed::new(r#"{"fixtures-results": {"matches": []}}"#);
    // A directory cannot be overwritten as a file.
    let dir = std::env::temp_dir();
    let result = run(&feed, &ClubProfile::larkhall(), &dir, now());
    assert!(matches!(result, Err(Error::Write { .. })));
}

#[test]
fn missing_api_key_fails_before_any_request() {
    let club = ClubProfile::larkhall();
    let settings = Settings::default().with_api_key(None);
    assert!(matches!(settings.client(&club), Err(Error::MissingApiKey)));

    let blank = Settings::default().with_api_key(Some("  ".to_string()));
    assert!(matches!(blank.api_key(), Err(Error::MissingApiKey)));

    let ok = Settings::default().with_api_key(Some("secret".to_string()));
    assert_eq!(ok.api_key().expect("key"), "secret");
    assert!(ok.client(&club).is_ok());
}

#[test]
fn blank_primary_key_falls_back_to_legacy_key() {
    let legacy = || Some("legacy".to_string());
    assert_eq!(resolve_api_key(Some(String::new()), legacy).as_deref(), Some("legacy"));
    assert_eq!(resolve_api_key(Some(" \t".to_string()), legacy).as_deref(), Some("legacy"));
    assert_eq!(resolve_api_key(None, legacy).as_deref(), Some("legacy"));
    assert_eq!(
        resolve_api_key(Some("primary".to_string()), || panic!("fallback read")).as_deref(),
        Some("primary")
    );
    assert_eq!(resolve_api_key(Some(String::new()), || Some("  ".to_string())), None);
}
