//! Output rendering (JSON report, text summary, JSONL)

pub mod jsonl;
pub mod report;
pub mod text;

pub use jsonl::{render_jsonl, render_snapshots, BatchRow};
pub use report::{build_report, write_report, ReportOptions};
pub use text::render_summary;
