//! scholar-compare - Entry Point
//!
//! Fetches author snapshots from the analysis service and renders analytics
//! reports and comparisons on the command line.

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Datelike;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use scholar_compare::formatters;
use scholar_compare::models::AuthorSnapshot;
use scholar_compare::{AnalysisClient, Config};

#[derive(Parser, Debug)]
#[command(name = "scholar-compare")]
#[command(about = "Publication analytics for academic author profiles")]
#[command(version)]
struct Cli {
    /// Analysis service API key
    #[arg(long, env = "SCHOLAR_COMPARE_API_KEY", global = true)]
    api_key: Option<String>,

    /// Analysis service base URL
    #[arg(long, env = "SCHOLAR_COMPARE_BASE_URL", global = true)]
    base_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG", global = true)]
    log_level: String,

    /// Output logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Analyze a scholar profile URL and print its report
    Analyze {
        /// Google Scholar profile URL
        #[arg(long)]
        url: String,

        /// Bypass the service cache and re-scrape
        #[arg(long)]
        force_refresh: bool,

        /// Print the report as JSON instead of Markdown
        #[arg(long)]
        json: bool,

        /// Show the full publication timeline instead of the recent window
        #[arg(long)]
        full_history: bool,
    },

    /// Render the report for a saved snapshot file
    Report {
        /// Path to a snapshot JSON file
        #[arg(long)]
        input: PathBuf,

        /// Print the report as JSON instead of Markdown
        #[arg(long)]
        json: bool,

        /// Show the full publication timeline instead of the recent window
        #[arg(long)]
        full_history: bool,
    },

    /// Compare two saved snapshot files side by side
    Compare {
        /// Path to the first snapshot JSON file
        #[arg(long)]
        left: PathBuf,

        /// Path to the second snapshot JSON file
        #[arg(long)]
        right: PathBuf,

        /// Print the comparison as JSON instead of Markdown
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        subscriber.with(tracing_subscriber::fmt::layer().compact()).init();
    }
}

fn load_snapshot(path: &Path) -> anyhow::Result<AuthorSnapshot> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading snapshot file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("parsing snapshot file {}", path.display()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting scholar-compare");

    let current_year = chrono::Utc::now().year();

    match cli.command {
        Command::Analyze { url, force_refresh, json, full_history } => {
            let mut config = Config::from_env()?;
            if let Some(api_key) = cli.api_key {
                config.api_key = Some(api_key);
            }
            if let Some(base_url) = cli.base_url {
                config.base_url = base_url;
            }

            let client = AnalysisClient::new(config)?;
            let snapshot = client
                .fetch_snapshot(&url, force_refresh)
                .await
                .map_err(|e| anyhow::anyhow!(e.to_user_message()))?;

            print_report(&snapshot, current_year, full_history, json)?;
        }
        Command::Report { input, json, full_history } => {
            let snapshot = load_snapshot(&input)?;
            print_report(&snapshot, current_year, full_history, json)?;
        }
        Command::Compare { left, right, json } => {
            let left = load_snapshot(&left)?;
            let right = load_snapshot(&right)?;

            if json {
                let value = formatters::comparison_json(&left, &right, current_year);
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                println!("{}", formatters::format_comparison_markdown(&left, &right, current_year));
            }
        }
    }

    Ok(())
}

fn print_report(
    snapshot: &AuthorSnapshot,
    current_year: i32,
    full_history: bool,
    json: bool,
) -> anyhow::Result<()> {
    if json {
        let value = formatters::snapshot_report_json(snapshot, current_year, full_history);
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{}", formatters::format_snapshot_markdown(snapshot, current_year, full_history));
    }
    Ok(())
}
