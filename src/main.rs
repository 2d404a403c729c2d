use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context as _;
use clap::Parser;
use tracing::{error, info};

use larkhall_fixtures::api::Endpoint;
use larkhall_fixtures::club::ClubProfile;
use larkhall_fixtures::config::{resolve_api_key, Settings, DEFAULT_OUTPUT, DEFAULT_TIMEOUT_SECS};
use larkhall_fixtures::pipeline::{self, RunSummary};

/// Regenerate the Larkhall Athletic fixtures calendar.
#[derive(Parser, Debug)]
#[command(name = "update-calendar", version, about)]
struct Args {
    /// Football Web Pages API key.
    #[arg(long, env = "RAPIDAPI_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Where to write the calendar.
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    #[arg(long, value_enum, default_value = "rapidapi")]
    endpoint: Endpoint,

    /// Request timeout in seconds.
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,
}

fn update(args: Args) -> anyhow::Result<RunSummary> {
    let api_key = resolve_api_key(args.api_key, || {
        std::env::var("FOOTBALL_WEB_PAGES_API_KEY").ok()
    });
    let mut settings = Settings::default().with_api_key(api_key);
    settings.endpoint = args.endpoint;
    settings.timeout = Duration::from_secs(args.timeout_secs);
    settings.output = args.output;

    let club = ClubProfile::larkhall();
    let client = settings.client(&club).context("invalid configuration")?;
    let summary = pipeline::run(&client, &club, &settings.output, chrono::Utc::now())
        .context("calendar update failed")?;
    Ok(summary)
}

fn main() -> ExitCode {
    larkhall_fixtures::init_tracing();
    let args = Args::parse();

    match update(args) {
        Ok(summary) => {
            info!(path = %summary.path.display(), events = summary.events, "Done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %format!("{:#}", e), "Calendar update failed");
            ExitCode::FAILURE
        }
    }
}
