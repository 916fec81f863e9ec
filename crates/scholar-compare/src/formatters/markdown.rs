//! Markdown output formatting for reports and comparisons.

use crate::config::defaults;
use crate::engine::{
    aggregate_by_year, conference_ranks, journal_quartiles, merge_keywords, snapshot_keywords,
    top_venues, venue_breakdown, window_recent,
};
use crate::models::{AuthorSnapshot, FilterCriteria, PublicationRecord};

/// Format a single-author report as Markdown.
#[must_use]
pub fn format_snapshot_markdown(
    snapshot: &AuthorSnapshot,
    current_year: i32,
    full_history: bool,
) -> String {
    let mut output = format!("# {}\n\n", display_name(snapshot));

    if let Some(affiliations) = &snapshot.affiliations {
        output.push_str(&format!("**Affiliations**: {affiliations}\n\n"));
    }

    output.push_str(&format!(
        "**Citations**: {} | **h-index**: {} | **Publications**: {}\n\n",
        snapshot.total_citations,
        snapshot.h_index,
        snapshot.records.len()
    ));

    // Timeline
    let timeline = aggregate_by_year(&snapshot.records, current_year);
    let full_len = timeline.len();
    let windowed = window_recent(timeline, full_history);
    if !windowed.is_empty() {
        if windowed.len() < full_len {
            output.push_str(&format!(
                "## Timeline (most recent {} of {} years)\n\n",
                windowed.len(),
                full_len
            ));
        } else {
            output.push_str("## Timeline\n\n");
        }
        for bucket in &windowed {
            output.push_str(&format!(
                "- {}: {} papers, {} citations\n",
                bucket.year, bucket.count, bucket.citations
            ));
        }
        output.push('\n');
    }

    // Venue mix
    let breakdown = venue_breakdown(&snapshot.records);
    output.push_str(&format!(
        "## Venues\n\n**Journal**: {} | **Conference**: {} | **Other**: {}\n\n",
        breakdown.journal, breakdown.conference, breakdown.other
    ));

    if breakdown.journal > 0 {
        output.push_str("### Journal Quartiles\n\n");
        for bucket in journal_quartiles(&snapshot.records) {
            output.push_str(&format!("- {}: {}\n", bucket.tier.label(), bucket.count));
        }
        output.push('\n');
    }

    if breakdown.conference > 0 {
        output.push_str("### Conference Ranks\n\n");
        for bucket in conference_ranks(&snapshot.records) {
            output.push_str(&format!("- {}: {}\n", bucket.tier.label(), bucket.count));
        }
        output.push('\n');
    }

    // Top venues
    let venues = top_venues(&snapshot.records, defaults::TOP_VENUES);
    if !venues.is_empty() {
        output.push_str("## Top Venues\n\n");
        for venue in &venues {
            output.push_str(&format!("- {} ({})\n", venue.name, venue.count));
        }
        output.push('\n');
    }

    // Keywords
    let keywords = snapshot_keywords(snapshot, defaults::TOP_KEYWORDS_EACH);
    if !keywords.is_empty() {
        let rendered: Vec<String> =
            keywords.iter().map(|k| format!("{} ({})", k.text, k.count)).collect();
        output.push_str(&format!("## Keywords\n\n{}\n", rendered.join(", ")));
    }

    output
}

/// Format a two-author comparison as Markdown.
#[must_use]
pub fn format_comparison_markdown(
    left: &AuthorSnapshot,
    right: &AuthorSnapshot,
    current_year: i32,
) -> String {
    let mut output =
        format!("# {} vs {}\n\n", display_name(left), display_name(right));

    output.push_str("| Metric | A | B |\n|---|---|---|\n");
    output.push_str(&format!(
        "| Name | {} | {} |\n",
        display_name(left),
        display_name(right)
    ));
    output.push_str(&format!(
        "| Citations | {} | {} |\n",
        left.total_citations, right.total_citations
    ));
    output.push_str(&format!("| h-index | {} | {} |\n", left.h_index, right.h_index));
    output.push_str(&format!(
        "| Publications | {} | {} |\n",
        left.records.len(),
        right.records.len()
    ));
    output.push_str(&format!(
        "| Recent (5y) | {} | {} |\n\n",
        recent_count(&left.records, current_year),
        recent_count(&right.records, current_year)
    ));

    let merged = merge_keywords(
        &snapshot_keywords(left, defaults::TOP_KEYWORDS_EACH),
        &snapshot_keywords(right, defaults::TOP_KEYWORDS_EACH),
        defaults::TOP_KEYWORDS_EACH,
    );

    if !merged.is_empty() {
        output.push_str("## Research Keywords\n\n");
        for keyword in &merged {
            let owner = if keyword.is_shared() {
                "shared"
            } else if keyword.owned_by_a {
                "A"
            } else {
                "B"
            };
            output.push_str(&format!(
                "- {} ({}, {})\n",
                keyword.text, keyword.total_count, owner
            ));
        }
    }

    output
}

fn display_name(snapshot: &AuthorSnapshot) -> &str {
    if snapshot.name.is_empty() { "Unknown Author" } else { &snapshot.name }
}

fn recent_count(records: &[PublicationRecord], current_year: i32) -> usize {
    let filters = FilterCriteria { recent_only: true, ..Default::default() };
    crate::engine::query(
        records,
        &filters,
        None,
        crate::models::Pagination::reveal_all(),
        current_year,
    )
    .total_matches
}
