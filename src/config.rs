use std::path::PathBuf;
use std::time::Duration;

use crate::api::{Endpoint, FootballWebPages};
use crate::club::ClubProfile;
use crate::error::{Error, Result};

pub const DEFAULT_OUTPUT: &str = "fixtures.ics";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

fn non_blank(key: Option<String>) -> Option<String> {
    key.filter(|k| !k.trim().is_empty())
}

/// First non-blank key of `primary` and `fallback`. The fallback is only read
/// when the primary key is absent or blank.
pub fn resolve_api_key(
    primary: Option<String>,
    fallback: impl FnOnce() -> Option<String>,
) -> Option<String> {
    non_blank(primary).or_else(|| non_blank(fallback()))
}

/// Run configuration resolved from flags and environment.
#[derive(Debug, Clone)]
pub struct Settings {
    api_key: Option<String>,
    pub endpoint: Endpoint,
    pub timeout: Duration,
    pub output: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: Endpoint::RapidApi,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl Settings {
    /// Blank keys count as missing.
    pub fn with_api_key(mut self, key: Option<String>) -> Self {
        self.api_key = non_blank(key);
        self
    }

    pub fn api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or(Error::MissingApiKey)
    }

    /// Build the API client. Fails before any network traffic when no key is set.
    pub fn client(&self, club: &ClubProfile) -> Result<FootballWebPages> {
        let key = self.api_key()?.to_string();
        Ok(FootballWebPages::new(key, club.team_id, self.endpoint, self.timeout))
    }
}
