//! Flat aggregate produced by the stats aggregator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One cell of the contribution heatmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatmapDay {
    pub date: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsData {
    pub handle: String,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub commits_total: u64,
    /// Days with at least one contribution, 0..=365.
    pub active_days: u32,
    pub prs_merged_count: u64,
    /// Sum of per-PR weights, capped at the aggregate ceiling.
    pub prs_merged_weighted: f64,
    pub reviews_count: u64,
    pub issues_count: u64,
    pub lines_added: u64,
    pub lines_deleted: u64,
    pub repos_contributed: u32,
    /// Share of commits landing in the busiest repo, 0..=1.
    pub top_repo_share: f64,
    #[serde(rename = "maxCommitsIn10Min")]
    pub max_commits_in_10_min: u32,
    pub total_stars: u64,
    pub total_forks: u64,
    pub total_watchers: u64,
    pub heatmap_data: Vec<HeatmapDay>,
    pub fetched_at: DateTime<Utc>,
}

impl StatsData {
    pub fn lines_changed(&self) -> u64 {
        self.lines_added.saturating_add(self.lines_deleted)
    }

    /// Reviews plus issues, the raw collaboration signal.
    pub fn collaboration_count(&self) -> u64 {
        self.reviews_count.saturating_add(self.issues_count)
    }
}
