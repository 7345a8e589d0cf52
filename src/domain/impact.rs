//! Scoring outputs: dimensions, confidence, classification and the final result.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The four independent scoring axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Building,
    Guarding,
    Consistency,
    Breadth,
}

impl Dimension {
    /// Declaration order doubles as the classifier's tie-break priority.
    pub const ALL: [Dimension; 4] =
        [Dimension::Building, Dimension::Guarding, Dimension::Consistency, Dimension::Breadth];

    pub fn as_str(self) -> &'static str {
        match self {
            Dimension::Building => "building",
            Dimension::Guarding => "guarding",
            Dimension::Consistency => "consistency",
            Dimension::Breadth => "breadth",
        }
    }
}

/// Each score is an integer in `0..=100`, clamped independently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionScores {
    pub building: u32,
    pub guarding: u32,
    pub consistency: u32,
    pub breadth: u32,
}

impl DimensionScores {
    pub fn get(&self, dimension: Dimension) -> u32 {
        match dimension {
            Dimension::Building => self.building,
            Dimension::Guarding => self.guarding,
            Dimension::Consistency => self.consistency,
            Dimension::Breadth => self.breadth,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileType {
    Solo,
    Collaborative,
}

impl ProfileType {
    /// Dimensions that count toward the composite for this profile.
    pub fn applicable_dimensions(self) -> &'static [Dimension] {
        match self {
            ProfileType::Solo => &[Dimension::Building, Dimension::Consistency, Dimension::Breadth],
            ProfileType::Collaborative => &Dimension::ALL,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ProfileType::Solo => "solo",
            ProfileType::Collaborative => "collaborative",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Archetype {
    Builder,
    Guardian,
    Marathoner,
    Polymath,
    Balanced,
    Emerging,
}

impl Archetype {
    /// Archetype for a profile led by `dimension`.
    pub fn led_by(dimension: Dimension) -> Self {
        match dimension {
            Dimension::Building => Archetype::Builder,
            Dimension::Guarding => Archetype::Guardian,
            Dimension::Consistency => Archetype::Marathoner,
            Dimension::Breadth => Archetype::Polymath,
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Archetype::Builder => "Builder",
            Archetype::Guardian => "Guardian",
            Archetype::Marathoner => "Marathoner",
            Archetype::Polymath => "Polymath",
            Archetype::Balanced => "Balanced",
            Archetype::Emerging => "Emerging",
        };
        f.write_str(label)
    }
}

/// Ordinal banding of the adjusted composite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    Emerging,
    Solid,
    High,
    Elite,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Tier::Emerging => "Emerging",
            Tier::Solid => "Solid",
            Tier::High => "High",
            Tier::Elite => "Elite",
        };
        f.write_str(label)
    }
}

/// Suspicious activity patterns that lower confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceFlag {
    BurstActivity,
    MicroCommits,
    LowCollaborationSignal,
    SingleRepoConcentration,
    SparseActivity,
    NoMergedPrs,
    OversizedPrs,
    InsufficientData,
}

impl ConfidenceFlag {
    pub fn as_str(self) -> &'static str {
        match self {
            ConfidenceFlag::BurstActivity => "burst_activity",
            ConfidenceFlag::MicroCommits => "micro_commits",
            ConfidenceFlag::LowCollaborationSignal => "low_collaboration_signal",
            ConfidenceFlag::SingleRepoConcentration => "single_repo_concentration",
            ConfidenceFlag::SparseActivity => "sparse_activity",
            ConfidenceFlag::NoMergedPrs => "no_merged_prs",
            ConfidenceFlag::OversizedPrs => "oversized_prs",
            ConfidenceFlag::InsufficientData => "insufficient_data",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfidencePenalty {
    pub flag: ConfidenceFlag,
    pub penalty: u32,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactV4Result {
    pub handle: String,
    pub profile_type: ProfileType,
    pub dimensions: DimensionScores,
    pub archetype: Archetype,
    pub composite_score: u32,
    /// 50..=100; only ever discounts the composite.
    pub confidence: u32,
    pub confidence_penalties: Vec<ConfidencePenalty>,
    pub adjusted_composite: u32,
    pub tier: Tier,
    pub computed_at: DateTime<Utc>,
}

/// Compact daily record used for score-change diffing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    pub handle: String,
    pub date: NaiveDate,
    pub commits_total: u64,
    pub prs_merged_count: u64,
    pub reviews_count: u64,
    pub dimensions: DimensionScores,
    pub archetype: Archetype,
    pub profile_type: ProfileType,
    pub composite_score: u32,
    pub adjusted_composite: u32,
    pub confidence: u32,
    pub tier: Tier,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flags_serialize_snake_case() {
        for flag in [
            ConfidenceFlag::BurstActivity,
            ConfidenceFlag::MicroCommits,
            ConfidenceFlag::LowCollaborationSignal,
            ConfidenceFlag::SingleRepoConcentration,
            ConfidenceFlag::SparseActivity,
            ConfidenceFlag::NoMergedPrs,
            ConfidenceFlag::OversizedPrs,
            ConfidenceFlag::InsufficientData,
        ] {
            assert_eq!(serde_json::to_value(flag).expect("json"), json!(flag.as_str()));
        }
    }

    #[test]
    fn profile_and_tier_wire_names() {
        assert_eq!(serde_json::to_value(ProfileType::Solo).expect("json"), json!("solo"));
        assert_eq!(serde_json::to_value(Tier::Elite).expect("json"), json!("Elite"));
        assert_eq!(serde_json::to_value(Archetype::Marathoner).expect("json"), json!("Marathoner"));
    }

    #[test]
    fn solo_profiles_skip_guarding() {
        assert!(!ProfileType::Solo.applicable_dimensions().contains(&Dimension::Guarding));
        assert_eq!(ProfileType::Collaborative.applicable_dimensions().len(), 4);
    }

    #[test]
    fn tiers_are_ordered() {
        assert!(Tier::Emerging < Tier::Solid);
        assert!(Tier::Solid < Tier::High);
        assert!(Tier::High < Tier::Elite);
    }
}
