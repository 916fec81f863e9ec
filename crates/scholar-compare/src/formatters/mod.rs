//! Output formatting for reports and comparisons.

mod json;
mod markdown;

pub use json::{comparison_json, compact_record, snapshot_report_json};
pub use markdown::{format_comparison_markdown, format_snapshot_markdown};
