//! Command-line interface for impact-score
//!
//! Provides `score`, `snapshot` and `batch` subcommands over contribution JSON files.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod batch;
mod score;
mod snapshot;
mod utils;

/// Score GitHub contribution snapshots into explainable impact profiles
#[derive(Parser)]
#[command(name = "impact-score")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to scoring config file (impact-score.toml or .yml)
    #[arg(short = 'c', long, global = true, value_name = "FILE", env = "IMPACT_SCORE_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Score one contribution payload
    Score(score::ScoreArgs),

    /// Emit daily metrics snapshots as JSONL
    Snapshot(snapshot::SnapshotArgs),

    /// Score many payloads in parallel and emit one JSONL row each
    Batch(batch::BatchArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG takes precedence; without it, --verbose selects DEBUG over WARN.
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let config = utils::resolve_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Score(args) => score::run(args, &config),
        Commands::Snapshot(args) => snapshot::run(args, &config),
        Commands::Batch(args) => batch::run(args, &config),
    }
}
