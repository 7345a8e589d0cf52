//! Raw contribution payload as returned by the contribution query.
//!
//! Every field except `login` is optional on the wire. Missing values fall
//! back to zero/empty so that a degraded payload still aggregates.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Number of pull requests the contribution query returns.
pub const MAX_PULL_REQUESTS: usize = 100;

/// Number of contributed repositories the contribution query returns.
pub const MAX_REPOSITORIES: usize = 20;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawContributionData {
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub contribution_calendar: ContributionCalendar,
    pub pull_requests: Vec<RawPullRequest>,
    pub total_pull_request_review_contributions: u64,
    pub total_issue_contributions: u64,
    pub repositories: Vec<RawRepository>,
    pub owned_repos: Vec<OwnedRepo>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContributionCalendar {
    pub total_contributions: u64,
    pub weeks: Vec<ContributionWeek>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContributionWeek {
    pub contribution_days: Vec<ContributionDay>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContributionDay {
    pub date: String,
    #[serde(alias = "count")]
    pub contribution_count: u32,
}

/// Size of a single pull request. Only merged PRs feed the stats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawPullRequest {
    pub additions: u64,
    pub deletions: u64,
    pub changed_files: u64,
    pub merged: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawRepository {
    pub name_with_owner: String,
    /// `None` for empty repositories with no default branch.
    pub default_branch_ref: Option<DefaultBranchRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DefaultBranchRef {
    pub history: CommitHistory,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommitHistory {
    pub total_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OwnedRepo {
    pub name: String,
    pub stargazer_count: u64,
    pub fork_count: u64,
    pub watchers_count: u64,
}

impl RawRepository {
    /// Commits by the user on the default branch within the window.
    pub fn commit_count(&self) -> u64 {
        self.default_branch_ref.as_ref().map(|r| r.history.total_count).unwrap_or(0)
    }
}

impl RawContributionData {
    /// Parse and validate a JSON payload.
    pub fn from_json(content: &str) -> Result<Self, ValidationError> {
        let raw: Self = serde_json::from_str(content)?;
        raw.validate()?;
        Ok(raw)
    }

    /// Check caller preconditions the type system cannot express.
    ///
    /// A day without a date is kept as-is; only a date that is present and
    /// not `YYYY-MM-DD` is rejected.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.login.trim().is_empty() {
            return Err(ValidationError::EmptyLogin);
        }
        for week in &self.contribution_calendar.weeks {
            for day in week.contribution_days.iter().filter(|d| !d.date.is_empty()) {
                chrono::NaiveDate::parse_from_str(&day.date, "%Y-%m-%d").map_err(|source| {
                    ValidationError::InvalidDate { date: day.date.clone(), source }
                })?;
            }
        }
        Ok(())
    }
}
