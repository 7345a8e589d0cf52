//! Calibrated scoring constants.
//!
//! Every cap is calibrated for a 365-day contribution window. Defaults are the
//! production values; a config file may override any subset of them.

use serde::{Deserialize, Serialize};

/// Per-field normalisation caps. A field stops contributing once it hits its cap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringCaps {
    pub pr_weight: f64,
    pub issues: f64,
    pub commits: f64,
    pub reviews: f64,
    pub repos: f64,
    pub stars: f64,
    pub forks: f64,
    pub watchers: f64,
    pub active_days: f64,
    pub lines_changed: f64,
}

impl Default for ScoringCaps {
    fn default() -> Self {
        Self {
            pr_weight: 120.0,
            issues: 50.0,
            commits: 750.0,
            reviews: 100.0,
            repos: 10.0,
            stars: 500.0,
            forks: 100.0,
            watchers: 100.0,
            active_days: 250.0,
            lines_changed: 20_000.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArchetypeThresholds {
    /// Every applicable dimension below this is `Emerging`.
    pub floor: u32,
    /// Lead over the runner-up needed for a single dominant dimension.
    pub dominance_margin: u32,
    /// Max - min spread allowed for `Balanced`.
    pub balanced_spread: u32,
}

impl Default for ArchetypeThresholds {
    fn default() -> Self {
        Self { floor: 25, dominance_margin: 10, balanced_spread: 15 }
    }
}

/// Trigger points for the confidence flags. Penalty sizes and the floor of 50
/// are fixed; only the point at which a pattern counts as suspicious moves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfidenceThresholds {
    /// Share of all contributions landing on the busiest day.
    pub burst_min_ratio: f64,
    pub micro_commits_min_total: u64,
    /// Contributions per active day above which commits look trivial.
    pub micro_commits_per_day: f64,
    pub low_collab_min_commits: u64,
    /// Reviews + issues at or below this count as no collaboration.
    pub low_collab_max_signal: u64,
    pub concentration_min_commits: u64,
    pub concentration_share: f64,
    pub sparse_min_commits: u64,
    pub sparse_max_active_days: u32,
    pub no_merged_min_commits: u64,
    pub oversized_min_prs: u64,
    pub oversized_lines_per_pr: f64,
    pub insufficient_max_commits: u64,
    pub insufficient_max_active_days: u32,
}

impl Default for ConfidenceThresholds {
    fn default() -> Self {
        Self {
            burst_min_ratio: 0.2,
            micro_commits_min_total: 100,
            micro_commits_per_day: 15.0,
            low_collab_min_commits: 200,
            low_collab_max_signal: 2,
            concentration_min_commits: 50,
            concentration_share: 0.9,
            sparse_min_commits: 100,
            sparse_max_active_days: 15,
            no_merged_min_commits: 50,
            oversized_min_prs: 3,
            oversized_lines_per_pr: 2_000.0,
            insufficient_max_commits: 10,
            insufficient_max_active_days: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringConfig {
    pub caps: ScoringCaps,
    pub pr_weight_ceiling: f64,
    pub aggregate_pr_weight_ceiling: f64,
    /// Minimum single-day count treated as a burst.
    pub burst_threshold: u32,
    /// Minimum commits in a repo for it to count toward breadth.
    pub repo_depth_threshold: u64,
    pub max_repos_contributed: u32,
    /// Profiles with fewer reviews + issues than this are scored as solo.
    pub solo_threshold: u64,
    pub archetype: ArchetypeThresholds,
    pub confidence: ConfidenceThresholds,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            caps: ScoringCaps::default(),
            pr_weight_ceiling: 3.0,
            aggregate_pr_weight_ceiling: 120.0,
            burst_threshold: 30,
            repo_depth_threshold: 1,
            max_repos_contributed: 20,
            solo_threshold: 3,
            archetype: ArchetypeThresholds::default(),
            confidence: ConfidenceThresholds::default(),
        }
    }
}
