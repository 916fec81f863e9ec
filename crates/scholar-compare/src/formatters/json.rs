//! JSON output formatting.

use serde_json::{Value, json};

use crate::config::defaults;
use crate::engine::{
    aggregate_by_year, aggregate_by_year_with_role, conference_ranks, journal_quartiles,
    keyword_weights, merge_keywords, snapshot_keywords, top_venues, venue_breakdown,
    window_recent,
};
use crate::models::{AuthorSnapshot, PublicationRecord};

/// Create a compact record representation for JSON output.
#[must_use]
pub fn compact_record(record: &PublicationRecord) -> Value {
    let mut obj = json!({
        "title": record.title,
        "year": record.year,
        "citations": record.citations,
    });

    if let Some(venue) = &record.venue {
        obj["venue"] = json!(venue);
    }

    if let Some(rank) = &record.rank {
        obj["rank"] = json!(rank);
    }

    if let Some(position) = &record.author_position {
        obj["authorPosition"] = json!(position);
    }

    obj
}

/// Full analytics report for one snapshot.
#[must_use]
pub fn snapshot_report_json(
    snapshot: &AuthorSnapshot,
    current_year: i32,
    full_history: bool,
) -> Value {
    let timeline = window_recent(aggregate_by_year(&snapshot.records, current_year), full_history);
    let roles =
        window_recent(aggregate_by_year_with_role(&snapshot.records, current_year), full_history);
    let breakdown = venue_breakdown(&snapshot.records);

    // Top records by citations, compacted.
    let mut by_citations: Vec<&PublicationRecord> = snapshot.records.iter().collect();
    by_citations.sort_by(|a, b| b.citations.cmp(&a.citations));
    let top_cited: Vec<Value> =
        by_citations.iter().take(3).map(|r| compact_record(r)).collect();

    json!({
        "id": snapshot.id,
        "name": snapshot.name,
        "affiliations": snapshot.affiliations,
        "totalCitations": snapshot.total_citations,
        "hIndex": snapshot.h_index,
        "publications": snapshot.records.len(),
        "timeline": timeline,
        "contributionTimeline": roles,
        "venueBreakdown": breakdown,
        "journalQuartiles": journal_quartiles(&snapshot.records),
        "conferenceRanks": conference_ranks(&snapshot.records),
        "topVenues": top_venues(&snapshot.records, defaults::TOP_VENUES),
        "topCited": top_cited,
        "keywords": snapshot_keywords(snapshot, defaults::TOP_KEYWORDS_EACH),
    })
}

/// Two-snapshot comparison with the merged keyword cloud.
#[must_use]
pub fn comparison_json(left: &AuthorSnapshot, right: &AuthorSnapshot, current_year: i32) -> Value {
    let merged = merge_keywords(
        &snapshot_keywords(left, defaults::TOP_KEYWORDS_EACH),
        &snapshot_keywords(right, defaults::TOP_KEYWORDS_EACH),
        defaults::TOP_KEYWORDS_EACH,
    );
    let weights =
        keyword_weights(&merged, defaults::KEYWORD_WEIGHT_MIN, defaults::KEYWORD_WEIGHT_MAX);

    let cloud: Vec<Value> = merged
        .iter()
        .zip(&weights)
        .map(|(keyword, weight)| {
            json!({
                "text": keyword.text,
                "totalCount": keyword.total_count,
                "ownedByA": keyword.owned_by_a,
                "ownedByB": keyword.owned_by_b,
                "weight": weight,
            })
        })
        .collect();

    json!({
        "left": snapshot_report_json(left, current_year, false),
        "right": snapshot_report_json(right, current_year, false),
        "keywordCloud": cloud,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::KeywordEntry;

    #[test]
    fn test_compact_record_skips_missing_fields() {
        let record = PublicationRecord { title: "t".to_string(), ..Default::default() };
        let compact = compact_record(&record);
        assert_eq!(compact["title"], "t");
        assert!(compact.get("venue").is_none());
        assert!(compact.get("rank").is_none());
    }

    #[test]
    fn test_snapshot_report_json_shape() {
        let snapshot = AuthorSnapshot {
            id: "a1".to_string(),
            name: "Ada".to_string(),
            records: vec![PublicationRecord {
                title: "Graph Methods".to_string(),
                year: Some(2022),
                venue_type: Some("Journal".to_string()),
                rank: Some("Q1".to_string()),
                citations: 3,
                ..Default::default()
            }],
            ..Default::default()
        };

        let report = snapshot_report_json(&snapshot, 2024, false);
        assert_eq!(report["publications"], 1);
        assert_eq!(report["timeline"][0]["year"], 2022);
        assert_eq!(report["venueBreakdown"]["journal"], 1);
        assert_eq!(report["journalQuartiles"][0]["tier"], "Q1");
        assert_eq!(report["journalQuartiles"][0]["count"], 1);
        assert_eq!(report["topCited"][0]["title"], "Graph Methods");
    }

    #[test]
    fn test_comparison_json_cloud_flags() {
        let left = AuthorSnapshot {
            keywords: vec![KeywordEntry::new("nlp", 5)],
            ..Default::default()
        };
        let right = AuthorSnapshot {
            keywords: vec![KeywordEntry::new("NLP", 2)],
            ..Default::default()
        };

        let comparison = comparison_json(&left, &right, 2024);
        let cloud = comparison["keywordCloud"].as_array().unwrap();
        assert_eq!(cloud.len(), 1);
        assert_eq!(cloud[0]["totalCount"], 7);
        assert_eq!(cloud[0]["ownedByA"], true);
        assert_eq!(cloud[0]["ownedByB"], true);
    }
}
