use std::time::Duration;

use tracing::{error, info, info_span, instrument};

use crate::error::{Error, Result};
use crate::model::raw::FixturesDocument;

/// Where fixture payloads come from. The pipeline only depends on this, so
/// tests can feed it canned documents.
pub trait FixtureFeed {
    fn fetch(&self) -> Result<FixturesDocument>;
}

/// The two ways of reaching Football Web Pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Endpoint {
    /// Through the RapidAPI marketplace.
    #[value(name = "rapidapi")]
    RapidApi,
    /// Football Web Pages' own v2 API.
    Direct,
}

impl Endpoint {
    pub fn url(self) -> &'static str {
        match self {
            Endpoint::RapidApi => "https://football-web-pages1.p.rapidapi.com/fixtures-results.json",
            Endpoint::Direct => "https://api.footballwebpages.co.uk/v2/fixtures-results.json",
        }
    }

    pub fn key_header(self) -> &'static str {
        match self {
            Endpoint::RapidApi => "X-RapidAPI-Key",
            Endpoint::Direct => "FWP-API-Key",
        }
    }
}

/// Blocking client for one team's `fixtures-results` feed.
#[derive(Debug, Clone)]
pub struct FootballWebPages {
    api_key: String,
    team_id: i64,
    endpoint: Endpoint,
    timeout: Duration,
}

impl FootballWebPages {
    pub fn new(api_key: String, team_id: i64, endpoint: Endpoint, timeout: Duration) -> Self {
        Self { api_key, team_id, endpoint, timeout }
    }

    /// Fetch the response body as untyped JSON.
    #[instrument(level = "info", skip(self), fields(team_id = self.team_id))]
    pub fn fetch_raw(&self) -> Result<serde_json::Value> {
        let url = self.endpoint.url();
        info!("Fetching fixtures");
        let response = {
            let _span = info_span!("fwp_fetch", url = %url).entered();
            ureq::get(url)
                .config()
                .timeout_global(Some(self.timeout))
                .build()
                .header(self.endpoint.key_header(), &self.api_key)
                .query("team", self.team_id.to_string())
                .call()
        };
        let response = response.map_err(|source| {
            error!(error = %source, url = %url, "API request failed");
            Error::Transport { url: url.to_string(), source }
        })?;

        let mut body = response.into_body();
        body.read_json::<serde_json::Value>().map_err(|e| {
            error!(error = %e, "Failed to decode response body");
            Error::Decode(e.to_string())
        })
    }
}

impl FixtureFeed for FootballWebPages {
    fn fetch(&self) -> Result<FixturesDocument> {
        let value = self.fetch_raw()?;
        serde_json::from_value(value).map_err(|e| Error::Decode(e.to_string()))
    }
}

/// A feed backed by a JSON string already in memory.
#[derive(Debug, Clone)]
pub struct JsonFeed {
    body: String,
}

impl JsonFeed {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}

impl FixtureFeed for JsonFeed {
    fn fetch(&self) -> Result<FixturesDocument> {
        serde_json::from_str(&self.body).map_err(|e| Error::Decode(e.to_string()))
    }
}
