use std::fmt;

use serde::{Deserialize, Deserializer};

/// Top level of a `fixtures-results.json` response.
///
/// Matches are kept as raw JSON so one malformed record cannot sink the
/// whole payload; they are decoded one at a time during normalization.
#[derive(Debug, Default, Deserialize)]
pub struct FixturesDocument {
    #[serde(rename = "fixtures-results", default, deserialize_with = "null_as_default")]
    pub fixtures_results: FixturesResults,
}

#[derive(Debug, Default, Deserialize)]
pub struct FixturesResults {
    #[serde(default, deserialize_with = "null_as_default")]
    pub matches: Vec<serde_json::Value>,
}

impl FixturesDocument {
    pub fn matches(&self) -> &[serde_json::Value] {
        &self.fixtures_results.matches
    }
}

/// `null` and a missing key both mean "use the default".
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Ids arrive as numbers from some endpoints and strings from others.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum FeedId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for FeedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedId::Number(n) => match n.as_f64() {
                // 1169.0 and 1169 are the same team.
                Some(x) if n.is_f64() && x.fract() == 0.0 && x.abs() < 1e15 => write!(f, "{}", x as i64),
                _ => write!(f, "{}", n),
            },
            FeedId::Text(s) => f.write_str(s.trim()),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct RawFixture {
    pub id: Option<FeedId>,
    pub date: Option<String>,
    pub time: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: RawStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub competition: RawCompetition,
    #[serde(rename = "home-team", default, deserialize_with = "null_as_default")]
    pub home_team: RawTeam,
    #[serde(rename = "away-team", default, deserialize_with = "null_as_default")]
    pub away_team: RawTeam,
    pub venue: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawStatus {
    pub full: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawCompetition {
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawTeam {
    pub id: Option<FeedId>,
    pub name: Option<String>,
}

/// Treat blank strings from the feed the same as missing ones.
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}
