use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use larkhall_fixtures::config::DEFAULT_OUTPUT;
use larkhall_fixtures::validate::validate_file;

/// Check that a generated calendar parses and every event is well formed.
#[derive(Parser, Debug)]
#[command(name = "validate-calendar", version, about)]
struct Args {
    /// Calendar file to check.
    #[arg(default_value = DEFAULT_OUTPUT)]
    path: PathBuf,
}

fn main() -> ExitCode {
    larkhall_fixtures::init_tracing();
    let args = Args::parse();
    println!("Validating iCalendar file: {}", args.path.display());

    let report = match validate_file(&args.path) {
        Ok(report) => report,
        Err(e) => {
            println!("VALIDATION FAILED: {}", e);
            return ExitCode::FAILURE;
        }
    };

    for finding in &report.findings {
        println!("{}", finding);
    }
    println!("Calendar contains {} events, {} valid", report.event_count, report.valid_events);
    println!("Calendar version: {}", report.version.as_deref().unwrap_or("-"));
    println!("Calendar product ID: {}", report.product_id.as_deref().unwrap_or("-"));

    match report.failure_summary() {
        None => {
            println!("VALIDATION SUCCESSFUL: Calendar is valid");
            ExitCode::SUCCESS
        }
        Some(reason) => {
            println!("VALIDATION FAILED: {}", reason);
            ExitCode::FAILURE
        }
    }
}
