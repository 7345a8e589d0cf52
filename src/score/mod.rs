//! Impact scoring: dimensions, confidence, archetype and tier.
//!
//! Stages run strictly forward, `stats -> dimensions -> confidence ->
//! (archetype, tier)`, and none of them mutates an earlier stage's output.

use chrono::{DateTime, Utc};

use crate::domain::{DimensionScores, ImpactV4Result, ProfileType, ScoringConfig, StatsData};

pub mod archetype;
pub mod confidence;
pub mod dimensions;
pub mod normalize;
pub mod tier;

pub use archetype::classify_archetype;
pub use confidence::{evaluate_confidence, ConfidenceAssessment, CONFIDENCE_FLOOR};
pub use dimensions::score_dimensions;
pub use normalize::normalize;
pub use tier::tier_for;

pub fn compute_impact(stats: &StatsData, config: &ScoringConfig) -> ImpactV4Result {
    compute_impact_at(stats, config, Utc::now())
}

pub fn compute_impact_at(
    stats: &StatsData,
    config: &ScoringConfig,
    computed_at: DateTime<Utc>,
) -> ImpactV4Result {
    let dimensions = score_dimensions(stats, &config.caps);
    let profile_type = profile_type(stats, config);
    let composite_score = composite(&dimensions, profile_type);
    let ConfidenceAssessment { confidence, penalties } =
        evaluate_confidence(stats, &config.confidence);
    let adjusted_composite = adjust(composite_score, confidence);
    let archetype = classify_archetype(&dimensions, profile_type, &config.archetype);

    ImpactV4Result {
        handle: stats.handle.clone(),
        profile_type,
        dimensions,
        archetype,
        composite_score,
        confidence,
        confidence_penalties: penalties,
        adjusted_composite,
        tier: tier_for(adjusted_composite),
        computed_at,
    }
}

/// Solo profiles show too little review/issue activity for guarding to be meaningful.
pub fn profile_type(stats: &StatsData, config: &ScoringConfig) -> ProfileType {
    if stats.collaboration_count() < config.solo_threshold {
        ProfileType::Solo
    } else {
        ProfileType::Collaborative
    }
}

/// Unweighted mean of the dimensions that apply to `profile`.
pub fn composite(dimensions: &DimensionScores, profile: ProfileType) -> u32 {
    let applicable = profile.applicable_dimensions();
    let sum: u32 = applicable.iter().map(|d| dimensions.get(*d)).sum();
    (sum as f64 / applicable.len() as f64).round() as u32
}

/// Discount the composite by the confidence shortfall. Never exceeds `composite`.
pub fn adjust(composite: u32, confidence: u32) -> u32 {
    let factor = confidence.min(confidence::CONFIDENCE_CEILING) as f64 / 100.0;
    ((composite as f64 * factor).round() as u32).min(composite)
}
