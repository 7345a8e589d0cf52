//! Snapshot command implementation

use anyhow::Result;
use clap::Args;
use impact_score::render::render_snapshots;
use impact_score::snapshot::dedupe_snapshots;
use impact_score::{evaluate, MetricsSnapshot, ScoringConfig};
use std::path::PathBuf;

use super::utils::{collect_inputs, emit, read_payload};

#[derive(Args)]
pub struct SnapshotArgs {
    /// Contribution payloads or directories of them
    #[arg(value_name = "PATH", required = true, num_args = 1..)]
    pub inputs: Vec<PathBuf>,

    /// Write JSONL to this file instead of stdout
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

pub fn run(args: SnapshotArgs, config: &ScoringConfig) -> Result<()> {
    let mut snapshots = Vec::new();
    for path in collect_inputs(&args.inputs) {
        let raw = read_payload(&path)?;
        let (stats, impact) = evaluate(&raw, config);
        snapshots.push(MetricsSnapshot::from_result(&stats, &impact));
    }

    let snapshots = dedupe_snapshots(snapshots);
    emit(args.output.as_deref(), &render_snapshots(&snapshots)?)
}
