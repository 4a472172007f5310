//! scholarank — rank academic papers by relevance, impact and recency.
//! Entry point for the command-line binary.

mod commands;
mod config;

use std::path::PathBuf;

use anyhow::Context;
use chrono::Datelike;
use clap::{Parser, Subcommand};
use scholarank_ingestion::sources::semantic_scholar::{SemanticScholarClient, API_KEY_ENV};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "scholarank", version, about = "Score and rank academic papers")]
struct Cli {
    /// Debug-level logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Query Semantic Scholar and write ranked results
    Search {
        #[arg(long)]
        query: String,
        #[arg(long, default_value_t = 25)]
        limit: usize,
        #[arg(long, default_value = "outputs")]
        outdir: PathBuf,
        /// Scoring config (JSON or TOML)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Reference year for recency; defaults to the current year
        #[arg(long)]
        this_year: Option<i64>,
    },
    /// Score a local JSON corpus offline
    Analyze {
        #[arg(long)]
        input: PathBuf,
        /// `.json` writes JSON, anything else CSV
        #[arg(long, default_value = "outputs/scored_papers.csv")]
        output: PathBuf,
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        this_year: Option<i64>,
        /// Also write papers grouped by matched topic
        #[arg(long)]
        bundles: Option<PathBuf>,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "scholarank=debug,info" } else { "scholarank=info,warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(std::io::stderr)
        .init();
}

fn current_year() -> i64 {
    i64::from(chrono::Local::now().year())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Command::Search { query, limit, outdir, config: config_path, this_year } => {
            let cfg = config::load_score_config(config_path.as_deref())?;
            let client = SemanticScholarClient::from_env().context("building Semantic Scholar client")?;
            if !client.has_api_key() {
                info!("No {API_KEY_ENV} set; using the shared rate limit");
            }
            let year = this_year.unwrap_or_else(current_year);
            commands::run_search(&client, &query, limit, &outdir, &cfg, year).await?;
            info!(outdir = %outdir.display(), "Done");
        }
        Command::Analyze { input, output, config: config_path, this_year, bundles } => {
            let cfg = config::load_score_config(config_path.as_deref())?;
            let year = this_year.unwrap_or_else(current_year);
            commands::run_analyze(&input, &output, bundles.as_deref(), &cfg, year)?;
            info!(output = %output.display(), "Done");
        }
    }

    Ok(())
}
