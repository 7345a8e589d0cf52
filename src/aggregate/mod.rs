//! Raw payload aggregation (PR weighting and stats reduction)

pub mod pr_weight;
pub mod stats;

pub use pr_weight::{pr_weight, pr_weight_with_ceiling, PR_WEIGHT_BASE, PR_WEIGHT_CEILING};
pub use stats::{aggregate_stats, aggregate_stats_at, top_repo_share, WINDOW_DAYS};
