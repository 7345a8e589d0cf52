//! Batch command implementation

use anyhow::Result;
use clap::Args;
use impact_score::render::{render_jsonl, BatchRow};
use impact_score::{evaluate, ScoringConfig};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::time::Instant;

use super::utils::{collect_inputs, emit, read_payload};

#[derive(Args)]
pub struct BatchArgs {
    /// Contribution payloads or directories of them
    #[arg(value_name = "PATH", required = true, num_args = 1..)]
    pub inputs: Vec<PathBuf>,

    /// Write JSONL to this file instead of stdout
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

pub fn run(args: BatchArgs, config: &ScoringConfig) -> Result<()> {
    let start_time = Instant::now();
    let files = collect_inputs(&args.inputs);
    if files.is_empty() {
        anyhow::bail!("No contribution files found");
    }

    let progress = if std::io::stderr().is_terminal() {
        let bar = ProgressBar::new(files.len() as u64);
        if let Ok(style) = ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}") {
            bar.set_style(style);
        }
        bar
    } else {
        ProgressBar::hidden()
    };

    // Each profile is scored independently; no coordination is needed.
    let results: Vec<(PathBuf, Result<BatchRow>)> = files
        .par_iter()
        .map(|path| {
            let row = read_payload(path).map(|raw| {
                let (_, impact) = evaluate(&raw, config);
                BatchRow::from(&impact)
            });
            progress.inc(1);
            (path.clone(), row)
        })
        .collect();
    progress.finish_and_clear();

    let mut rows = Vec::with_capacity(results.len());
    let mut failures = 0usize;
    for (path, result) in results {
        match result {
            Ok(row) => rows.push(row),
            Err(e) => {
                failures += 1;
                eprintln!("error: {}: {:#}", path.display(), e);
            }
        }
    }

    emit(args.output.as_deref(), &render_jsonl(&rows)?)?;
    tracing::info!(
        scored = rows.len(),
        failed = failures,
        elapsed_ms = start_time.elapsed().as_millis() as u64,
        "batch complete"
    );

    if failures > 0 {
        anyhow::bail!("{} of {} contribution files failed to score", failures, files.len());
    }
    Ok(())
}
