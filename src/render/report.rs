//! Report JSON generation.

use crate::domain::{ImpactV4Result, StatsData, REPORT_SCHEMA_VERSION};
use anyhow::Result;
use chrono::Utc;
use serde_json::{Map, Value};
use std::path::Path;

#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    /// Stamp `generated_at`, `fetchedAt` and `computedAt`. Off for reproducible diffs.
    pub include_timestamp: bool,
    /// Keep the full daily heatmap in the `stats` block.
    pub include_heatmap: bool,
}

pub fn build_report(
    stats: &StatsData,
    impact: &ImpactV4Result,
    options: ReportOptions,
) -> Result<Value> {
    let mut stats_value = serde_json::to_value(stats)?;
    let mut impact_value = serde_json::to_value(impact)?;

    if let Value::Object(map) = &mut stats_value {
        if !options.include_heatmap {
            map.remove("heatmapData");
        }
        if !options.include_timestamp {
            map.remove("fetchedAt");
        }
        if let Some(share) = map.get_mut("topRepoShare") {
            *share = round_value(stats.top_repo_share);
        }
        if let Some(weight) = map.get_mut("prsMergedWeighted") {
            *weight = round_value(stats.prs_merged_weighted);
        }
    }
    if let Value::Object(map) = &mut impact_value {
        if !options.include_timestamp {
            map.remove("computedAt");
        }
    }

    let mut report = Map::new();
    report.insert("schema_version".to_string(), Value::String(REPORT_SCHEMA_VERSION.to_string()));
    if options.include_timestamp {
        report.insert(
            "generated_at".to_string(),
            Value::String(Utc::now().format("%Y-%m-%dT%H:%M:%S+00:00").to_string()),
        );
    }
    report.insert("stats".to_string(), stats_value);
    report.insert("impact".to_string(), impact_value);
    Ok(Value::Object(report))
}

/// Build the report and write it as pretty JSON, creating parent directories.
pub fn write_report(
    report_path: &Path,
    stats: &StatsData,
    impact: &ImpactV4Result,
    options: ReportOptions,
) -> Result<()> {
    let report = build_report(stats, impact, options)?;
    if let Some(parent) = report_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(report_path, format!("{}\n", serde_json::to_string_pretty(&report)?))?;
    Ok(())
}

fn round_value(value: f64) -> Value {
    serde_json::Number::from_f64((value * 1000.0).round() / 1000.0)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::aggregate_stats_at;
    use crate::domain::{
        ContributionCalendar, ContributionDay, ContributionWeek, RawContributionData, RawPullRequest,
        ScoringConfig,
    };
    use crate::score::compute_impact_at;
    use chrono::{TimeZone, Utc};
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn scored() -> (StatsData, ImpactV4Result) {
        let at = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).single().expect("valid time");
        let raw = RawContributionData {
            login: "octocat".to_string(),
            contribution_calendar: ContributionCalendar {
                total_contributions: 3,
                weeks: vec![ContributionWeek {
                    contribution_days: vec![ContributionDay {
                        date: "2024-05-01".to_string(),
                        contribution_count: 3,
                    }],
                }],
            },
            pull_requests: vec![RawPullRequest {
                additions: 100,
                deletions: 20,
                changed_files: 5,
                merged: true,
            }],
            ..Default::default()
        };
        let config = ScoringConfig::default();
        let stats = aggregate_stats_at(&raw, &config, at);
        let impact = compute_impact_at(&stats, &config, at);
        (stats, impact)
    }

    #[test]
    fn report_omits_timestamps_and_heatmap_by_default() {
        let (stats, impact) = scored();
        let report = build_report(&stats, &impact, ReportOptions::default()).expect("report");

        assert_eq!(report["schema_version"], json!(REPORT_SCHEMA_VERSION));
        assert!(report.get("generated_at").is_none());
        assert!(report["stats"].get("heatmapData").is_none());
        assert!(report["stats"].get("fetchedAt").is_none());
        assert!(report["impact"].get("computedAt").is_none());
        assert_eq!(report["stats"]["prsMergedWeighted"], json!(2.147));
        assert_eq!(report["impact"]["tier"], json!("Emerging"));
    }

    #[test]
    fn report_keeps_heatmap_and_timestamps_when_asked() {
        let (stats, impact) = scored();
        let options = ReportOptions { include_timestamp: true, include_heatmap: true };
        let report = build_report(&stats, &impact, options).expect("report");

        assert!(report.get("generated_at").is_some());
        assert_eq!(report["stats"]["heatmapData"][0]["count"], json!(3));
        assert_eq!(report["impact"]["computedAt"], json!("2024-06-01T00:00:00Z"));
    }

    #[test]
    fn write_report_creates_parent_dirs() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("out").join("report.json");
        let (stats, impact) = scored();
        write_report(&path, &stats, &impact, ReportOptions::default()).expect("write");

        let parsed: Value =
            serde_json::from_str(&fs::read_to_string(&path).expect("read")).expect("json");
        assert_eq!(parsed["impact"]["handle"], json!("octocat"));
    }
}
