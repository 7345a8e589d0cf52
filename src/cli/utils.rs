//! Shared CLI utilities.

use anyhow::{Context, Result};
use impact_score::config::load_config;
use impact_score::{RawContributionData, ScoringConfig};
use std::fs;
use std::path::{Path, PathBuf};

/// Explicit `--config` wins; otherwise look for a config file in the working directory.
pub fn resolve_config(config_path: Option<&Path>) -> Result<ScoringConfig> {
    let cwd = std::env::current_dir().context("Failed to resolve working directory")?;
    load_config(&cwd, config_path)
}

/// Read and validate one contribution payload.
pub fn read_payload(path: &Path) -> Result<RawContributionData> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed reading contribution file: {}", path.display()))?;
    RawContributionData::from_json(&content)
        .with_context(|| format!("Invalid contribution file: {}", path.display()))
}

/// Write to `output` when given, stdout otherwise.
pub fn emit(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, content)
                .with_context(|| format!("Failed writing output file: {}", path.display()))
        }
        None => {
            print!("{content}");
            Ok(())
        }
    }
}

/// Expand directories into the `.json` files beneath them, sorted for stable output.
pub fn collect_inputs(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            let mut found: Vec<PathBuf> = walkdir::WalkDir::new(path)
                .into_iter()
                .filter_map(|entry| entry.ok())
                .filter(|entry| entry.file_type().is_file())
                .map(|entry| entry.into_path())
                .filter(|p| p.extension().and_then(|e| e.to_str()) == Some("json"))
                .collect();
            found.sort();
            files.extend(found);
        } else {
            files.push(path.clone());
        }
    }
    files
}
