//! Confidence evaluation.
//!
//! Confidence starts at 100 and loses points for every suspicious pattern in
//! the stats. It never drops below [`CONFIDENCE_FLOOR`], so it can discount a
//! composite by at most half.

use tracing::debug;

use crate::domain::{ConfidenceFlag, ConfidencePenalty, ConfidenceThresholds, StatsData};

use super::dimensions::burst_ratio;

pub const CONFIDENCE_CEILING: u32 = 100;
pub const CONFIDENCE_FLOOR: u32 = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfidenceAssessment {
    pub confidence: u32,
    pub penalties: Vec<ConfidencePenalty>,
}

pub fn evaluate_confidence(stats: &StatsData, t: &ConfidenceThresholds) -> ConfidenceAssessment {
    let mut penalties = Vec::new();

    let ratio = burst_ratio(stats);
    if stats.max_commits_in_10_min > 0 && ratio >= t.burst_min_ratio {
        let penalty = ((ratio * 40.0).round() as u32).clamp(5, 20);
        penalties.push(flag(
            ConfidenceFlag::BurstActivity,
            penalty,
            format!(
                "{} contributions in a single day make up {:.0}% of the year",
                stats.max_commits_in_10_min,
                ratio * 100.0
            ),
        ));
    }

    if stats.commits_total >= t.micro_commits_min_total && stats.active_days > 0 {
        let per_day = stats.commits_total as f64 / stats.active_days as f64;
        if per_day > t.micro_commits_per_day {
            penalties.push(flag(
                ConfidenceFlag::MicroCommits,
                10,
                format!("{per_day:.1} contributions per active day suggests many trivial commits"),
            ));
        }
    }

    if stats.commits_total >= t.low_collab_min_commits
        && stats.collaboration_count() <= t.low_collab_max_signal
    {
        penalties.push(flag(
            ConfidenceFlag::LowCollaborationSignal,
            10,
            format!(
                "{} contributions but only {} reviews and issues",
                stats.commits_total,
                stats.collaboration_count()
            ),
        ));
    }

    if stats.commits_total >= t.concentration_min_commits
        && stats.top_repo_share > t.concentration_share
    {
        penalties.push(flag(
            ConfidenceFlag::SingleRepoConcentration,
            8,
            format!("{:.0}% of commits land in one repository", stats.top_repo_share * 100.0),
        ));
    }

    if stats.commits_total >= t.sparse_min_commits && stats.active_days < t.sparse_max_active_days {
        penalties.push(flag(
            ConfidenceFlag::SparseActivity,
            12,
            format!(
                "{} contributions packed into {} active days",
                stats.commits_total, stats.active_days
            ),
        ));
    }

    if stats.commits_total >= t.no_merged_min_commits && stats.prs_merged_count == 0 {
        penalties.push(flag(
            ConfidenceFlag::NoMergedPrs,
            5,
            format!("{} contributions without a single merged pull request", stats.commits_total),
        ));
    }

    if stats.prs_merged_count >= t.oversized_min_prs {
        let per_pr = stats.lines_changed() as f64 / stats.prs_merged_count as f64;
        if per_pr > t.oversized_lines_per_pr {
            penalties.push(flag(
                ConfidenceFlag::OversizedPrs,
                8,
                format!("merged pull requests average {per_pr:.0} changed lines"),
            ));
        }
    }

    if stats.commits_total < t.insufficient_max_commits
        && stats.active_days < t.insufficient_max_active_days
    {
        penalties.push(flag(
            ConfidenceFlag::InsufficientData,
            20,
            "too little activity in the window to judge reliably".to_string(),
        ));
    }

    let total: u32 = penalties.iter().map(|p| p.penalty).sum();
    let confidence = CONFIDENCE_CEILING.saturating_sub(total).max(CONFIDENCE_FLOOR);

    for p in &penalties {
        debug!(handle = %stats.handle, flag = p.flag.as_str(), penalty = p.penalty, "confidence flag");
    }

    ConfidenceAssessment { confidence, penalties }
}

fn flag(flag: ConfidenceFlag, penalty: u32, reason: String) -> ConfidencePenalty {
    ConfidencePenalty { flag, penalty, reason }
}
