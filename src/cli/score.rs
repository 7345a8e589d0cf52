//! Score command implementation

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use impact_score::render::{build_report, render_summary, write_report, ReportOptions};
use impact_score::{evaluate, ScoringConfig};
use std::path::PathBuf;

use super::utils::{emit, read_payload};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

#[derive(Args)]
pub struct ScoreArgs {
    /// Contribution payload (JSON) to score
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Include the daily heatmap in JSON output
    #[arg(long)]
    pub include_heatmap: bool,

    /// Omit timestamps for reproducible diffs
    #[arg(long)]
    pub no_timestamp: bool,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

pub fn run(args: ScoreArgs, config: &ScoringConfig) -> Result<()> {
    let raw = read_payload(&args.input)?;
    let (stats, impact) = evaluate(&raw, config);
    tracing::debug!(
        handle = %impact.handle,
        composite = impact.composite_score,
        adjusted = impact.adjusted_composite,
        "scored profile"
    );

    match args.format {
        OutputFormat::Json => {
            let options = ReportOptions {
                include_timestamp: !args.no_timestamp,
                include_heatmap: args.include_heatmap,
            };
            match args.output.as_deref() {
                Some(path) => write_report(path, &stats, &impact, options)
                    .with_context(|| format!("Failed writing report: {}", path.display())),
                None => {
                    let report = build_report(&stats, &impact, options)?;
                    emit(None, &format!("{}\n", serde_json::to_string_pretty(&report)?))
                }
            }
        }
        OutputFormat::Text => emit(args.output.as_deref(), &render_summary(&stats, &impact)),
    }
}
