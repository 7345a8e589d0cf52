//! Map aggregated stats onto the four 0-100 dimensions.
//!
//! Each dimension is a weighted sum of capped components, so a field stops
//! helping once its cap is reached and a high score needs several fields to
//! be saturated at once.

use crate::domain::{DimensionScores, ScoringCaps, StatsData};

use super::normalize::{normalize, to_score};

pub fn score_dimensions(stats: &StatsData, caps: &ScoringCaps) -> DimensionScores {
    DimensionScores {
        building: to_score(building(stats, caps)),
        guarding: to_score(guarding(stats, caps)),
        consistency: to_score(consistency(stats, caps)),
        breadth: to_score(breadth(stats, caps)),
    }
}

/// Code volume and substance.
fn building(stats: &StatsData, caps: &ScoringCaps) -> f64 {
    0.35 * normalize(stats.commits_total as f64, caps.commits)
        + 0.50 * normalize(stats.prs_merged_weighted, caps.pr_weight)
        + 0.15 * normalize(stats.lines_changed() as f64, caps.lines_changed)
}

/// Review and issue stewardship.
fn guarding(stats: &StatsData, caps: &ScoringCaps) -> f64 {
    0.65 * normalize(stats.reviews_count as f64, caps.reviews)
        + 0.35 * normalize(stats.issues_count as f64, caps.issues)
}

/// Regular activity, discounted by how much of it arrived in bursts.
fn consistency(stats: &StatsData, caps: &ScoringCaps) -> f64 {
    let regularity = normalize(stats.active_days as f64, caps.active_days);
    regularity * (1.0 - 0.5 * burst_ratio(stats))
}

/// Repo diversity plus adoption of owned work.
fn breadth(stats: &StatsData, caps: &ScoringCaps) -> f64 {
    let repos = normalize(stats.repos_contributed as f64, caps.repos);
    let diversity = if stats.repos_contributed > 0 {
        (1.0 - stats.top_repo_share.clamp(0.0, 1.0)) * 100.0
    } else {
        0.0
    };
    let adoption = 0.5 * normalize(stats.total_stars as f64, caps.stars)
        + 0.3 * normalize(stats.total_forks as f64, caps.forks)
        + 0.2 * normalize(stats.total_watchers as f64, caps.watchers);

    0.60 * repos + 0.25 * diversity + 0.15 * adoption
}

/// Share of the year's contributions that landed in the busiest burst day, 0..=1.
pub(crate) fn burst_ratio(stats: &StatsData) -> f64 {
    if stats.commits_total == 0 {
        return 0.0;
    }
    (stats.max_commits_in_10_min as f64 / stats.commits_total as f64).min(1.0)
}
