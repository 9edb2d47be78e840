#![forbid(unsafe_code)]

//! `star-census` — people catalog harvester binary.
//!
//! Bootstraps configuration, the shared HTTP client, and the `SQLite` pool,
//! then runs the fetch/resolve/commit pipeline to completion.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use star_census::api::client::ApiClient;
use star_census::api::fetcher::PersonFetcher;
use star_census::config::GlobalConfig;
use star_census::persistence::{db, person_repo::PersonRepo};
use star_census::pipeline::runner::run_harvest;
use star_census::{AppError, Result};

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "star-census", about = "SWAPI people catalog harvester", version, long_about = None)]
struct Cli {
    /// Path to the TOML configuration file; built-in defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log output format (text or json).
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    /// Override the configured database connection string.
    #[arg(long)]
    database_url: Option<String>,
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.log_format);
    info!("star-census bootstrap");

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|err| AppError::Config(format!("failed to build tokio runtime: {err}")))?
        .block_on(run(args))
}

async fn run(args: Cli) -> Result<()> {
    // ── Load configuration ──────────────────────────────
    let mut config = match args.config {
        Some(path) => GlobalConfig::load_from_path(path)?,
        None => GlobalConfig::default(),
    };
    if let Some(database_url) = args.database_url {
        config.database_url = database_url;
    }
    info!(
        first_id = config.first_id,
        last_id = config.last_id,
        chunk_size = config.chunk_size,
        "configuration loaded"
    );

    // ── Initialize database ─────────────────────────────
    let pool = db::connect(&config.database_url).await?;
    info!("database connected");

    // ── Run the pipeline ────────────────────────────────
    let client = ApiClient::new(&config.api_base_url, config.request_timeout())?;
    let fetcher = PersonFetcher::new(client);
    let sink = PersonRepo::new(pool.clone());

    let summary = run_harvest(
        &fetcher,
        &sink,
        config.first_id,
        config.last_id,
        config.chunk_size,
    )
    .await?;
    info!(
        batches = summary.batches,
        stored = summary.stored,
        missing = summary.missing,
        "harvest complete"
    );

    pool.close().await;
    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match format {
        LogFormat::Text => fmt().with_env_filter(filter).init(),
        LogFormat::Json => fmt().json().with_env_filter(filter).init(),
    }
}
