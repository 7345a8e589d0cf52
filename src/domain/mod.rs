//! Core value types shared by every pipeline stage.

pub mod config;
pub mod impact;
pub mod raw;
pub mod stats;

pub use config::{ArchetypeThresholds, ConfidenceThresholds, ScoringCaps, ScoringConfig};
pub use impact::{
    Archetype, ConfidenceFlag, ConfidencePenalty, Dimension, DimensionScores, ImpactV4Result,
    MetricsSnapshot, ProfileType, Tier,
};
pub use raw::{
    CommitHistory, ContributionCalendar, ContributionDay, ContributionWeek, DefaultBranchRef,
    OwnedRepo, RawContributionData, RawPullRequest, RawRepository, MAX_PULL_REQUESTS,
    MAX_REPOSITORIES,
};
pub use stats::{HeatmapDay, StatsData};

/// Version of the JSON report layout written by the CLI.
pub const REPORT_SCHEMA_VERSION: &str = "4.0.0";
