//! `TripAI` CLI - multi-agent trip planning
//!
//! Collects a trip request (interactively or from the built-in demo),
//! runs the three-agent sequential pipeline against a local Ollama
//! endpoint, and prints the resulting itinerary.

use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use tripai::intake::{Intake, parse_date};
use tripai::models::{Location, TripRequest};
use tripai::{TripAiConfig, TripAiError, TripPlannerManager};

/// TripAI - AI-powered trip planning with role-specialized agents
#[derive(Parser)]
#[command(name = "tripai")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file path
    #[arg(short, long, env = "TRIPAI_CONFIG", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan a trip from interactive prompts
    Plan,

    /// Plan the built-in sample trip (New York to Paris and Rome)
    Demo,
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    init_logging(cli.verbose);

    let rt = tokio::runtime::Runtime::new().expect("failed to create tokio runtime");

    match rt.block_on(run(cli)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let Some(trip_err) = e.downcast_ref::<TripAiError>() {
                eprintln!("Error: {}", trip_err.user_message());
            } else {
                eprintln!("Error: {e:#}");
            }
            ExitCode::FAILURE
        }
    }
}

/// Initialize logging with the given verbosity level
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tripai={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbosity >= 2)
        .init();
}

/// Main async entry point
async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = TripAiConfig::load_from_path(cli.config)?;

    let request = match cli.command.unwrap_or(Commands::Plan) {
        Commands::Plan => collect_interactive(&config)?,
        Commands::Demo => demo_request()?,
    };

    println!("\nPlanning your trip...");
    println!("----------------------");

    let manager = TripPlannerManager::new(&config).await?;
    let itinerary = manager.create_itinerary(&request).await?;

    println!("\n{}", itinerary.summary());

    Ok(())
}

/// Collect a trip request from interactive prompts on stdin/stdout
fn collect_interactive(config: &TripAiConfig) -> anyhow::Result<TripRequest> {
    println!("Welcome to the AI Trip Planner!");
    println!("--------------------------------");

    let stdin = std::io::stdin();
    let request = prompt_trip_request(stdin.lock(), std::io::stdout(), config)?;
    Ok(request)
}

/// Drive intake over the given reader/writer pair
fn prompt_trip_request<R: BufRead, W: Write>(
    reader: R,
    writer: W,
    config: &TripAiConfig,
) -> anyhow::Result<TripRequest> {
    let mut intake = Intake::new(reader, writer, &config.intake);
    Ok(intake.collect_trip_request()?)
}

/// The hard-coded programmatic trip request
fn demo_request() -> anyhow::Result<TripRequest> {
    let request = TripRequest::new(
        Location::with_country("New York".to_string(), "USA".to_string()),
        vec![
            Location::with_country("Paris".to_string(), "France".to_string()),
            Location::with_country("Rome".to_string(), "Italy".to_string()),
        ],
        parse_date("2024-03-01")?,
        parse_date("2024-03-10")?,
        3000.0,
        vec![
            "art".to_string(),
            "food".to_string(),
            "history".to_string(),
        ],
    )?;

    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_request_is_valid() {
        let request = demo_request().unwrap();
        assert_eq!(request.origin.name, "New York");
        assert_eq!(request.destinations.len(), 2);
        assert_eq!(request.destinations[0].country, Some("France".to_string()));
        assert_eq!(request.date_range(), "2024-03-01 - 2024-03-10");
    }
}
