use std::collections::HashMap;

use chrono_tz::Tz;

/// Clubs the feed is known to name inconsistently, keyed by Football Web Pages team id.
const KNOWN_TEAMS: &[(i64, &str)] = &[
    (250, "Bashley"),
    (677, "Bemerton Heath Harlequins"),
    (412, "Bideford"),
    (387, "Bishops Cleeve"),
    (835, "Bristol Manor Farm"),
    (1509, "Cribbs"),
    (213, "Evesham United"),
    (1866, "Exmouth Town"),
    (851, "Frome Town"),
    (1431, "Hamworthy United"),
    (1169, "Larkhall Athletic"),
    (388, "Malvern Town"),
    (863, "Melksham Town"),
    (2522, "Mousehole AFC"),
    (217, "Paulton Rovers"),
    (795, "Tavistock"),
    (912, "Westbury United"),
    (471, "Willand Rovers"),
    (914, "Wimborne Town"),
    (224, "Yate Town"),
];

/// Immutable id -> canonical club name lookup.
///
/// Ids are stored in their string form so numeric and textual ids from the
/// feed resolve to the same entry.
#[derive(Debug, Clone, Default)]
pub struct TeamDirectory {
    names: HashMap<String, String>,
}

impl TeamDirectory {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, String)>,
        S: ToString,
    {
        let names = entries
            .into_iter()
            .map(|(id, name)| (id.to_string(), name))
            .collect();
        Self { names }
    }

    /// The directory shipped with this deployment.
    pub fn builtin() -> Self {
        Self::new(KNOWN_TEAMS.iter().map(|(id, name)| (*id, name.to_string())))
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.names.get(id.trim()).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Everything fixed about the tracked team for one deployment.
#[derive(Debug, Clone)]
pub struct ClubProfile {
    pub team_id: i64,
    pub name: String,
    /// Used inside event UIDs.
    pub slug: String,
    pub home_venue: String,
    pub home_tz: Tz,
    pub calendar_name: String,
    pub calendar_description: String,
    pub uid_domain: String,
    directory: TeamDirectory,
}

impl ClubProfile {
    pub fn larkhall() -> Self {
        Self {
            team_id: 1169,
            name: "Larkhall Athletic".to_string(),
            slug: "larkhall".to_string(),
            home_venue: "Plain Ham, Bath".to_string(),
            home_tz: chrono_tz::Europe::London,
            calendar_name: "Larkhall Athletic Fixtures".to_string(),
            calendar_description: "Official fixtures calendar for Larkhall Athletic Football Club"
                .to_string(),
            uid_domain: "larkhall-fixtures.example.com".to_string(),
            directory: TeamDirectory::builtin(),
        }
    }

    /// Swap the opponent directory, e.g. for a new season's league.
    pub fn with_directory(mut self, directory: TeamDirectory) -> Self {
        self.directory = directory;
        self
    }

    pub fn directory(&self) -> &TeamDirectory {
        &self.directory
    }

    pub fn product_id(&self) -> String {
        format!("-//{}//Fixtures Calendar//EN", self.name)
    }
}
