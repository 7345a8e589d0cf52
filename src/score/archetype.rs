//! Shape-based archetype classification.

use crate::domain::{Archetype, ArchetypeThresholds, Dimension, DimensionScores, ProfileType};

/// Classify the shape of a profile's applicable dimensions.
///
/// Rules, first match wins:
/// 1. every applicable dimension below `floor` -> `Emerging`
/// 2. leader ahead of the runner-up by `dominance_margin` -> leader's archetype
/// 3. spread within `balanced_spread` and nothing below `floor` -> `Balanced`
/// 4. otherwise the leader's archetype
///
/// Ties between leaders resolve in [`Dimension::ALL`] order.
pub fn classify_archetype(
    scores: &DimensionScores,
    profile: ProfileType,
    thresholds: &ArchetypeThresholds,
) -> Archetype {
    let mut ranked: Vec<(Dimension, u32)> =
        profile.applicable_dimensions().iter().map(|d| (*d, scores.get(*d))).collect();
    // Stable sort keeps declaration order among equal scores.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    let Some(&(leader, top)) = ranked.first() else {
        return Archetype::Emerging;
    };
    let runner_up = ranked.get(1).map(|(_, s)| *s).unwrap_or(0);
    let bottom = ranked.last().map(|(_, s)| *s).unwrap_or(0);

    if top < thresholds.floor {
        return Archetype::Emerging;
    }
    if top - runner_up >= thresholds.dominance_margin {
        return Archetype::led_by(leader);
    }
    if top - bottom <= thresholds.balanced_spread && bottom >= thresholds.floor {
        return Archetype::Balanced;
    }
    Archetype::led_by(leader)
}
