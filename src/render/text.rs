//! Human-readable impact summary for terminals.

use console::style;
use std::fmt::Write;

use crate::domain::{Dimension, ImpactV4Result, StatsData, Tier};
use crate::utils::{format_compact, format_with_commas};

const BAR_WIDTH: usize = 20;

pub fn render_summary(stats: &StatsData, impact: &ImpactV4Result) -> String {
    let mut out = String::new();

    let name = stats.display_name.as_deref().unwrap_or(&stats.handle);
    let _ = writeln!(out, "{} (@{})", style(name).bold(), stats.handle);
    let _ = writeln!(
        out,
        "Tier: {}  Archetype: {}  Profile: {}",
        styled_tier(impact.tier),
        impact.archetype,
        impact.profile_type.as_str()
    );
    let _ = writeln!(
        out,
        "Composite: {}  Confidence: {}%  Adjusted: {}",
        impact.composite_score, impact.confidence, impact.adjusted_composite
    );

    let _ = writeln!(out, "Dimensions:");
    let applicable = impact.profile_type.applicable_dimensions();
    for dimension in Dimension::ALL {
        let score = impact.dimensions.get(dimension);
        let note = if applicable.contains(&dimension) { "" } else { "  (not counted)" };
        let _ = writeln!(out, "  {:<12} {:>3} {}{}", dimension.as_str(), score, bar(score), note);
    }

    if !impact.confidence_penalties.is_empty() {
        let _ = writeln!(out, "Confidence penalties:");
        for penalty in &impact.confidence_penalties {
            let _ = writeln!(
                out,
                "  -{:<3} {}: {}",
                penalty.penalty,
                penalty.flag.as_str(),
                penalty.reason
            );
        }
    }

    let _ = writeln!(out, "Activity:");
    let _ = writeln!(
        out,
        "  Contributions: {}  Active days: {}",
        format_with_commas(stats.commits_total),
        stats.active_days
    );
    let _ = writeln!(
        out,
        "  Merged PRs: {}  Reviews: {}  Issues: {}",
        stats.prs_merged_count, stats.reviews_count, stats.issues_count
    );
    let _ = writeln!(
        out,
        "  Lines: +{} -{}  Repos: {}  Stars: {}",
        format_compact(stats.lines_added),
        format_compact(stats.lines_deleted),
        stats.repos_contributed,
        format_compact(stats.total_stars)
    );

    out
}

fn bar(score: u32) -> String {
    let filled = (score.min(100) as usize * BAR_WIDTH + 50) / 100;
    format!("{}{}", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

fn styled_tier(tier: Tier) -> String {
    let label = tier.to_string();
    match tier {
        Tier::Elite => style(label).magenta().bold().to_string(),
        Tier::High => style(label).green().bold().to_string(),
        Tier::Solid => style(label).cyan().to_string(),
        Tier::Emerging => style(label).dim().to_string(),
    }
}
