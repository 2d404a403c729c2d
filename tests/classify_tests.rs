use larkhall_fixtures::classify::{is_home, opponent_name, venue, UNKNOWN_OPPONENT};
use larkhall_fixtures::club::{ClubProfile, TeamDirectory};
use larkhall_fixtures::model::raw::RawFixture;

fn raw(value: serde_json::Value) -> RawFixture {
    serde_json::from_value(value).expect("raw fixture")
}

#[test]
fn home_when_home_team_id_matches_as_number_or_string() {
    let club = ClubProfile::larkhall();
    let numeric = raw(serde_json::json!({ "home-team": { "id": 1169 }, "away-team": { "id": 217 } }));
    let textual = raw(serde_json::json!({ "home-team": { "id": "1169" }, "away-team": { "id": "217" } }));
    assert!(is_home(&numeric, &club));
    assert!(is_home(&textual, &club));
}

#[test]
fn away_for_any_other_home_id() {
    let club = ClubProfile::larkhall();
    for home in [
        serde_json::json!({ "id": 217 }),
        serde_json::json!({ "id": "11690" }),
        serde_json::json!({ "id": "Larkhall" }),
        serde_json::json!({ "name": "Larkhall Athletic" }),
    ] {
        let fixture = raw(serde_json::json!({ "home-team": home, "away-team": { "id": 1169 } }));
        assert!(!is_home(&fixture, &club), "home was: {:?}", fixture.home_team);
    }
    assert!(!is_home(&RawFixture::default(), &club));
}

#[test]
fn directory_name_wins_over_feed_name() {
    let club = ClubProfile::larkhall();
    let fixture = raw(serde_json::json!({
        "home-team": { "id": 1169, "name": "Larkhall Athletic" },
        "away-team": { "id": 217, "name": "Paulton" }
    }));
    assert_eq!(opponent_name(&fixture, &club), "Paulton Rovers");

    let away = raw(serde_json::json!({
        "home-team": { "id": "912", "name": "Westbury Utd" },
        "away-team": { "id": "1169" }
    }));
    assert_eq!(opponent_name(&away, &club), "Westbury United");
}

#[test]
fn falls_back_to_feed_name_then_unknown() {
    let club = ClubProfile::larkhall();
    let named = raw(serde_json::json!({
        "home-team": { "id": 1169 },
        "away-team": { "id": 4242, "name": "Brand New FC" }
    }));
    assert_eq!(opponent_name(&named, &club), "Brand New FC");

    let blank = raw(serde_json::json!({
        "home-team": { "id": 1169 },
        "away-team": { "id": 4242, "name": "  " }
    }));
    assert_eq!(opponent_name(&blank, &club), UNKNOWN_OPPONENT);
    assert_eq!(opponent_name(&RawFixture::default(), &club), UNKNOWN_OPPONENT);
}

#[test]
fn custom_directory_replaces_builtin() {
    let directory = TeamDirectory::new([(4242, "Renamed Town".to_string())]);
    let club = ClubProfile::larkhall().with_directory(directory);
    let fixture = raw(serde_json::json!({
        "home-team": { "id": 1169 },
        "away-team": { "id": 217, "name": "Paulton" }
    }));
    assert_eq!(opponent_name(&fixture, &club), "Paulton");
    assert_eq!(club.directory().get("4242"), Some("Renamed Town"));
    assert_eq!(TeamDirectory::builtin().len(), 20);
}

#[test]
fn venue_prefers_feed_then_home_ground_then_away_label() {
    let club = ClubProfile::larkhall();
    let given = raw(serde_json::json!({ "venue": "Meadow Lane" }));
    assert_eq!(venue(&given, &club, false, "Westbury United"), "Meadow Lane");

    let missing = raw(serde_json::json!({ "venue": "" }));
    assert_eq!(venue(&missing, &club, true, "Paulton Rovers"), "Plain Ham, Bath");
    assert_eq!(venue(&missing, &club, false, "Paulton Rovers"), "Away at Paulton Rovers");
}
