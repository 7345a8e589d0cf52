//! JSONL rendering for snapshots and batch results

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::domain::{ImpactV4Result, MetricsSnapshot};

/// One JSON object per line with keys in alphabetical order, so output diffs cleanly.
///
/// Fails on the first item that cannot be serialized rather than emitting a short file.
pub fn render_jsonl<T: Serialize>(items: &[T]) -> serde_json::Result<String> {
    let mut lines = Vec::with_capacity(items.len());
    for item in items {
        let line = match serde_json::to_value(item)? {
            Value::Object(map) => {
                let sorted: BTreeMap<String, Value> = map.into_iter().collect();
                serde_json::to_string(&sorted)?
            }
            other => serde_json::to_string(&other)?,
        };
        lines.push(line);
    }
    if lines.is_empty() {
        Ok(String::new())
    } else {
        Ok(format!("{}\n", lines.join("\n")))
    }
}

pub fn render_snapshots(snapshots: &[MetricsSnapshot]) -> serde_json::Result<String> {
    render_jsonl(snapshots)
}

/// Compact batch row: the classification without penalties or timestamps.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRow {
    pub handle: String,
    pub tier: String,
    pub archetype: String,
    pub profile_type: String,
    pub composite_score: u32,
    pub confidence: u32,
    pub adjusted_composite: u32,
    pub flags: Vec<String>,
}

impl From<&ImpactV4Result> for BatchRow {
    fn from(impact: &ImpactV4Result) -> Self {
        Self {
            handle: impact.handle.clone(),
            tier: impact.tier.to_string(),
            archetype: impact.archetype.to_string(),
            profile_type: impact.profile_type.as_str().to_string(),
            composite_score: impact.composite_score,
            confidence: impact.confidence,
            adjusted_composite: impact.adjusted_composite,
            flags: impact.confidence_penalties.iter().map(|p| p.flag.as_str().to_string()).collect(),
        }
    }
}
