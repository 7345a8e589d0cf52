//! impact-score: explainable impact profiles from GitHub contribution snapshots
//!
//! The pipeline is a chain of pure functions over immutable values:
//! [`RawContributionData`] -> [`StatsData`] -> dimensions -> confidence ->
//! archetype and tier, collected in an [`ImpactV4Result`]. Every stage is
//! synchronous and free of shared state, so callers may score any number of
//! profiles in parallel.

pub mod aggregate;
pub mod config;
pub mod domain;
pub mod error;
pub mod render;
pub mod score;
pub mod snapshot;
pub mod utils;

pub use domain::{ImpactV4Result, MetricsSnapshot, RawContributionData, ScoringConfig, StatsData};
pub use error::ValidationError;

/// Run the whole pipeline on one profile.
pub fn evaluate(raw: &RawContributionData, config: &ScoringConfig) -> (StatsData, ImpactV4Result) {
    let stats = aggregate::aggregate_stats(raw, config);
    let impact = score::compute_impact(&stats, config);
    (stats, impact)
}
