//! Scoring config file loading

use crate::domain::ScoringConfig;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_SECTION: &str = "impact-score";

/// Load scoring overrides from `config_path`, or from a file discovered in `search_dir`.
///
/// An explicit path that fails to parse is an error. A discovered file that
/// fails to parse is logged and the calibrated defaults are used instead.
pub fn load_config(search_dir: &Path, config_path: Option<&Path>) -> Result<ScoringConfig> {
    let explicit = config_path.is_some();

    let discovered = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(search_dir),
    };

    let Some(config_file) = discovered else {
        return Ok(ScoringConfig::default());
    };

    let content = fs::read_to_string(&config_file)
        .with_context(|| format!("Failed reading config file: {}", config_file.display()))?;

    let ext = config_file.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();

    let parsed = match ext.as_str() {
        "toml" => parse_toml_config(&content, &config_file),
        "yaml" | "yml" => parse_yaml_config(&content, &config_file),
        other => Err(anyhow::anyhow!(
            "Unsupported config extension '.{}' for file {}",
            other,
            config_file.display()
        )),
    };

    match parsed {
        Ok(config) => {
            tracing::debug!("Loaded scoring config from {}", config_file.display());
            Ok(config)
        }
        Err(e) if explicit => Err(e),
        Err(e) => {
            tracing::warn!(
                "Failed to parse auto-discovered config {}: {:#}",
                config_file.display(),
                e
            );
            Ok(ScoringConfig::default())
        }
    }
}

/// Parse TOML config, accepting an optional `[impact-score]` section.
fn parse_toml_config(content: &str, config_file: &Path) -> Result<ScoringConfig> {
    let raw: toml::Value = toml::from_str(content)
        .with_context(|| format!("Invalid TOML syntax: {}", config_file.display()))?;

    let config_val = match raw.get(CONFIG_SECTION) {
        Some(nested) => nested.clone(),
        None => raw,
    };

    config_val.try_into().with_context(|| format!("Invalid TOML config: {}", config_file.display()))
}

/// Parse YAML config, accepting an optional `impact-score:` section.
fn parse_yaml_config(content: &str, config_file: &Path) -> Result<ScoringConfig> {
    let raw: serde_yaml::Value = serde_yaml::from_str(content)
        .with_context(|| format!("Invalid YAML syntax: {}", config_file.display()))?;

    let config_val = match raw.get(CONFIG_SECTION) {
        Some(nested) => nested.clone(),
        None => raw,
    };

    serde_yaml::from_value(config_val)
        .with_context(|| format!("Invalid YAML config: {}", config_file.display()))
}

fn discover_config(search_dir: &Path) -> Option<PathBuf> {
    let candidates =
        ["impact-score.toml", ".impact-score.toml", "impact-score.yml", "impact-score.yaml"];

    candidates.iter().map(|c| search_dir.join(c)).find(|path| path.exists())
}
