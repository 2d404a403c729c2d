use std::path::PathBuf;

use thiserror::Error;

/// Run-level failures. Problems with a single fixture are not errors; they
/// surface as [`crate::normalize::SkipReason`] values instead.
#[derive(Debug, Error)]
pub enum Error {
    #[error("API key not found. Set RAPIDAPI_KEY (or FOOTBALL_WEB_PAGES_API_KEY)")]
    MissingApiKey,

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: ureq::Error,
    },

    #[error("could not decode fixtures payload: {0}")]
    Decode(String),

    #[error("failed to write calendar to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid iCalendar data: {0}")]
    Parse(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
