use crate::club::ClubProfile;
use crate::model::raw::{non_blank, RawFixture, RawTeam};

pub const UNKNOWN_OPPONENT: &str = "Unknown Opponent";

/// True when the tracked team is the home side. Ids are compared in string
/// form so `1169` and `"1169"` both match.
pub fn is_home(raw: &RawFixture, club: &ClubProfile) -> bool {
    raw.home_team
        .id
        .as_ref()
        .map(|id| id.to_string() == club.team_id.to_string())
        .unwrap_or(false)
}

/// The side of the fixture that is not the tracked team.
fn opponent_side<'a>(raw: &'a RawFixture, club: &ClubProfile) -> &'a RawTeam {
    if is_home(raw, club) {
        &raw.away_team
    } else {
        &raw.home_team
    }
}

/// Opponent display name: directory entry first, then the feed's name.
pub fn opponent_name(raw: &RawFixture, club: &ClubProfile) -> String {
    let side = opponent_side(raw, club);
    let from_directory = side
        .id
        .as_ref()
        .and_then(|id| club.directory().get(&id.to_string()));
    from_directory
        .or_else(|| non_blank(side.name.as_deref()))
        .unwrap_or(UNKNOWN_OPPONENT)
        .to_string()
}

/// Venue from the feed, else the home ground, else a generic away label.
pub fn venue(raw: &RawFixture, club: &ClubProfile, is_home: bool, opponent: &str) -> String {
    if let Some(v) = raw.venue.as_deref().filter(|v| !v.trim().is_empty()) {
        return v.to_string();
    }
    if is_home {
        club.home_venue.clone()
    } else {
        format!("Away at {}", opponent)
    }
}
