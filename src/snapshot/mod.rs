//! Daily metrics snapshots for historical diffing.
//!
//! A snapshot is keyed by `(handle, date)`; callers keep at most one per user
//! per calendar day. Heatmap and display fields are left out on purpose to
//! keep stored records small.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::domain::{ImpactV4Result, MetricsSnapshot, StatsData};

impl MetricsSnapshot {
    /// Build the snapshot for a scored profile, dated by `computed_at` (UTC).
    pub fn from_result(stats: &StatsData, impact: &ImpactV4Result) -> Self {
        Self {
            handle: impact.handle.clone(),
            date: impact.computed_at.date_naive(),
            commits_total: stats.commits_total,
            prs_merged_count: stats.prs_merged_count,
            reviews_count: stats.reviews_count,
            dimensions: impact.dimensions,
            archetype: impact.archetype,
            profile_type: impact.profile_type,
            composite_score: impact.composite_score,
            adjusted_composite: impact.adjusted_composite,
            confidence: impact.confidence,
            tier: impact.tier,
        }
    }

    pub fn key(&self) -> (String, NaiveDate) {
        (self.handle.to_ascii_lowercase(), self.date)
    }
}

/// Keep the last snapshot seen for each `(handle, date)`, ordered by key.
pub fn dedupe_snapshots(snapshots: Vec<MetricsSnapshot>) -> Vec<MetricsSnapshot> {
    let mut by_key: BTreeMap<(String, NaiveDate), MetricsSnapshot> = BTreeMap::new();
    for snapshot in snapshots {
        by_key.insert(snapshot.key(), snapshot);
    }
    by_key.into_values().collect()
}
