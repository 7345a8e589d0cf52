//! Reduce a raw contribution payload to a flat [`StatsData`].

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::domain::{
    HeatmapDay, RawContributionData, ScoringConfig, StatsData, MAX_PULL_REQUESTS,
    MAX_REPOSITORIES,
};

/// Length of the contribution window in days.
pub const WINDOW_DAYS: u32 = 365;

pub fn aggregate_stats(raw: &RawContributionData, config: &ScoringConfig) -> StatsData {
    aggregate_stats_at(raw, config, Utc::now())
}

/// Same as [`aggregate_stats`] with an explicit fetch timestamp.
///
/// Never fails: missing optional data is treated as zero.
pub fn aggregate_stats_at(
    raw: &RawContributionData,
    config: &ScoringConfig,
    fetched_at: DateTime<Utc>,
) -> StatsData {
    let heatmap_data = flatten_heatmap(raw);
    let active_days = heatmap_data.iter().filter(|d| d.count > 0).count().min(WINDOW_DAYS as usize);

    let merged = merged_pr_totals(raw, config);
    let repos = repo_totals(raw, config);

    let busiest_day = heatmap_data.iter().map(|d| d.count).max().unwrap_or(0);
    let max_commits_in_10_min = if busiest_day >= config.burst_threshold { busiest_day } else { 0 };

    let (total_stars, total_forks, total_watchers) =
        raw.owned_repos.iter().fold((0u64, 0u64, 0u64), |(s, f, w), repo| {
            (
                s.saturating_add(repo.stargazer_count),
                f.saturating_add(repo.fork_count),
                w.saturating_add(repo.watchers_count),
            )
        });

    StatsData {
        handle: raw.login.clone(),
        display_name: raw.name.clone(),
        avatar_url: raw.avatar_url.clone(),
        commits_total: raw.contribution_calendar.total_contributions,
        active_days: active_days as u32,
        prs_merged_count: merged.count,
        prs_merged_weighted: merged.weight,
        reviews_count: raw.total_pull_request_review_contributions,
        issues_count: raw.total_issue_contributions,
        lines_added: merged.additions,
        lines_deleted: merged.deletions,
        repos_contributed: repos.contributed,
        top_repo_share: repos.top_share,
        max_commits_in_10_min,
        total_stars,
        total_forks,
        total_watchers,
        heatmap_data,
        fetched_at,
    }
}

fn flatten_heatmap(raw: &RawContributionData) -> Vec<HeatmapDay> {
    raw.contribution_calendar
        .weeks
        .iter()
        .flat_map(|week| week.contribution_days.iter())
        .map(|day| HeatmapDay { date: day.date.clone(), count: day.contribution_count })
        .collect()
}

#[derive(Debug, Default)]
struct MergedTotals {
    count: u64,
    weight: f64,
    additions: u64,
    deletions: u64,
}

fn merged_pr_totals(raw: &RawContributionData, config: &ScoringConfig) -> MergedTotals {
    if raw.pull_requests.len() > MAX_PULL_REQUESTS {
        debug!(
            handle = %raw.login,
            received = raw.pull_requests.len(),
            "ignoring pull requests beyond the query window"
        );
    }

    let mut totals = MergedTotals::default();
    for pr in raw.pull_requests.iter().take(MAX_PULL_REQUESTS).filter(|pr| pr.merged) {
        totals.count += 1;
        totals.weight += pr.weight(config.pr_weight_ceiling);
        totals.additions = totals.additions.saturating_add(pr.additions);
        totals.deletions = totals.deletions.saturating_add(pr.deletions);
    }
    totals.weight = totals.weight.min(config.aggregate_pr_weight_ceiling);
    totals
}

struct RepoTotals {
    contributed: u32,
    top_share: f64,
}

fn repo_totals(raw: &RawContributionData, config: &ScoringConfig) -> RepoTotals {
    if raw.repositories.len() > MAX_REPOSITORIES {
        debug!(
            handle = %raw.login,
            received = raw.repositories.len(),
            "ignoring repositories beyond the query window"
        );
    }

    let depth = config.repo_depth_threshold.max(1);
    let mut commits = Vec::new();
    for repo in raw.repositories.iter().take(MAX_REPOSITORIES) {
        let count = repo.commit_count();
        if count >= depth {
            commits.push(count);
        } else {
            debug!(repo = %repo.name_with_owner, commits = count, "repo below depth threshold");
        }
    }

    RepoTotals {
        contributed: (commits.len() as u32).min(config.max_repos_contributed),
        top_share: top_repo_share(&commits),
    }
}

/// `max / sum` of per-repo commits; exactly 0 when there are no commits.
pub fn top_repo_share(commits: &[u64]) -> f64 {
    let sum: u64 = commits.iter().fold(0u64, |acc, c| acc.saturating_add(*c));
    if sum == 0 {
        return 0.0;
    }
    let max = commits.iter().copied().max().unwrap_or(0);
    (max as f64 / sum as f64).clamp(0.0, 1.0)
}
