//! CLI for the RepoRecon harvester.
//!
//! Reads a topics file, sweeps the GitHub repository search API for each
//! topic, and maintains one JSON record file per topic.

use clap::Parser;
use repo_recon::{RunSummary, Runner, RunnerConfig, RunnerError};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// RepoRecon - incrementally harvest GitHub repositories per topic.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The name of the topics file.
    #[arg(default_value = "topics.json")]
    topic_file: PathBuf,

    /// GitHub Personal Access Token. Optional; without one, queries run
    /// against much lower unauthenticated rate limits.
    #[arg(long, env = "REPORECON_GITHUB_TOKEN")]
    token: Option<String>,

    /// Directory the per-topic record files are written to.
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Parse arguments
    let args = Args::parse();

    // Run the main logic
    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);
            ExitCode::from(0)
        }
        Err(e) => {
            error!(error = %e, "Harvest failed");
            ExitCode::from(1)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        // Use compact formatting without module target paths for cleaner output
        .with(fmt::layer().compact().with_target(false))
        // Allow runtime log filtering via RUST_LOG env var (e.g., RUST_LOG=debug)
        // Falls back to "info" level if RUST_LOG is not set or invalid
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        // Register as the global default subscriber
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let config = RunnerConfig::new(args.topic_file, args.token).with_output_dir(args.output_dir);
    let runner = Runner::new(config)?;
    runner.run().await
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!("  Topics processed: {}", summary.topics_processed);
    println!("  Queries issued: {}", summary.queries_issued);
    println!("  Records fetched: {}", summary.records_fetched);
    println!("  Records written: {}", summary.records_written);
}
