//! Per-PR substance weight.

use crate::domain::RawPullRequest;

/// Default ceiling for a single PR's weight.
pub const PR_WEIGHT_CEILING: f64 = 3.0;

/// Floor every PR earns, however small.
pub const PR_WEIGHT_BASE: f64 = 0.5;

/// Weight of one pull request from its size.
///
/// `0.5 + 0.25·ln(1 + changed_files) + 0.25·ln(1 + additions + deletions)`,
/// capped at [`PR_WEIGHT_CEILING`]. The result always lies in `[0.5, 3.0]`.
pub fn pr_weight(additions: u64, deletions: u64, changed_files: u64) -> f64 {
    pr_weight_with_ceiling(additions, deletions, changed_files, PR_WEIGHT_CEILING)
}

pub fn pr_weight_with_ceiling(
    additions: u64,
    deletions: u64,
    changed_files: u64,
    ceiling: f64,
) -> f64 {
    let lines = additions.saturating_add(deletions) as f64;
    let files = changed_files as f64;
    let weight = PR_WEIGHT_BASE + 0.25 * files.ln_1p() + 0.25 * lines.ln_1p();
    weight.min(ceiling.max(PR_WEIGHT_BASE))
}

impl RawPullRequest {
    pub fn weight(&self, ceiling: f64) -> f64 {
        pr_weight_with_ceiling(self.additions, self.deletions, self.changed_files, ceiling)
    }
}
