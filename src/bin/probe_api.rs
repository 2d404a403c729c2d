use std::time::Duration;

use anyhow::Context as _;
use clap::Parser;

use larkhall_fixtures::api::Endpoint;
use larkhall_fixtures::club::ClubProfile;
use larkhall_fixtures::config::{resolve_api_key, Settings, DEFAULT_TIMEOUT_SECS};
use larkhall_fixtures::probe::{render_structure, sample_matches};

/// Make one API call and print the shape of the response.
#[derive(Parser, Debug)]
#[command(name = "probe-api", version, about)]
struct Args {
    #[arg(long, env = "FOOTBALL_WEB_PAGES_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    #[arg(long, value_enum, default_value = "direct")]
    endpoint: Endpoint,

    /// How deep to print the response tree.
    #[arg(long, default_value_t = 3)]
    depth: usize,

    /// How many match records to print in full.
    #[arg(long, default_value_t = 2)]
    samples: usize,
}

fn main() -> anyhow::Result<()> {
    larkhall_fixtures::init_tracing();
    let args = Args::parse();

    let api_key = resolve_api_key(args.api_key, || std::env::var("RAPIDAPI_KEY").ok());
    let mut settings = Settings::default().with_api_key(api_key);
    settings.endpoint = args.endpoint;
    settings.timeout = Duration::from_secs(DEFAULT_TIMEOUT_SECS);

    let club = ClubProfile::larkhall();
    let client = settings.client(&club)?;
    println!("Making API request to {} for team ID {}...", args.endpoint.url(), club.team_id);
    let body = client.fetch_raw().context("API request failed")?;

    println!("\nResponse Structure:");
    print!("{}", render_structure(&body, args.depth));

    println!("\nSample Response Data (first {} fixtures if available):", args.samples);
    match sample_matches(&body, args.samples) {
        Some(matches) => {
            println!("{}", serde_json::to_string_pretty(matches)?);
            let total = body["fixtures-results"]["matches"].as_array().map_or(0, |m| m.len());
            println!("\nTotal fixtures in response: {}", total);
        }
        None => println!("{}", serde_json::to_string_pretty(&body)?),
    }
    Ok(())
}
