//! Analytics over a full snapshot: distributions, timelines, keywords, and
//! report rendering working together.

use scholar_compare::engine::{
    Board, BoardColumn, RankTier, aggregate_by_year_with_role, conference_ranks,
    journal_quartiles, keyword_weights, merge_keywords, move_card, reconcile,
    snapshot_keywords, venue_breakdown, window_recent,
};
use scholar_compare::formatters::{format_snapshot_markdown, snapshot_report_json};
use scholar_compare::models::AuthorSnapshot;

fn service_snapshot() -> AuthorSnapshot {
    let json = serde_json::json!({
        "id": "abc123",
        "name": "Grace Hopper",
        "affiliations": "Harvard Computation Lab",
        "totalCitations": 900,
        "hIndex": 12,
        "records": [
            {
                "title": "Compiling Routines for Automatic Programming",
                "year": 2018,
                "venue": "Journal of Y 12 (3), 45-60",
                "venue_type": "Journal Article",
                "rank": "Q1 (Top 10%)",
                "citations": 300,
                "author_pos": "1st"
            },
            {
                "title": "Automatic Programming in Practice",
                "year": 2019,
                "venue": "Proc. of the 3rd ACM Conf on X, 2019, pp 1-10",
                "venue_type": "Conference Proceedings",
                "rank": "A*",
                "citations": 250,
                "author_pos": "Last"
            },
            {
                "title": "Programming Languages as Interfaces",
                "year": 2019,
                "venue": "ACM Conf on X 2019 (invited talk)",
                "venue_type": "Conference",
                "rank": "National",
                "citations": 50,
                "author_pos": "2"
            },
            {
                "title": "Notes on Debugging",
                "year": "abc",
                "venue": null,
                "venue_type": null,
                "rank": null,
                "citations": "not a number",
                "author_pos": null
            }
        ],
        "keywords": [
            {"text": "compilers", "count": 6},
            {"text": "debugging", "count": 2}
        ]
    });

    serde_json::from_value(json).unwrap()
}

#[test]
fn test_distributions_over_service_snapshot() {
    let snapshot = service_snapshot();

    let breakdown = venue_breakdown(&snapshot.records);
    assert_eq!(breakdown.journal, 1);
    assert_eq!(breakdown.conference, 2);
    assert_eq!(breakdown.other, 1);

    let quartiles = journal_quartiles(&snapshot.records);
    assert_eq!(quartiles.iter().find(|b| b.tier == RankTier::Q1).unwrap().count, 1);

    let ranks = conference_ranks(&snapshot.records);
    assert_eq!(ranks.iter().find(|b| b.tier == RankTier::AStar).unwrap().count, 1);
    // "National" is noise and lands in Unranked.
    assert_eq!(ranks.iter().find(|b| b.tier == RankTier::Unranked).unwrap().count, 1);
}

#[test]
fn test_contribution_timeline_over_service_snapshot() {
    let snapshot = service_snapshot();

    let buckets = aggregate_by_year_with_role(&snapshot.records, 2024);
    // The "abc" year record is excluded entirely.
    assert_eq!(buckets.len(), 2);

    assert_eq!(buckets[0].year, 2018);
    assert_eq!(buckets[0].first_author, 1);

    assert_eq!(buckets[1].year, 2019);
    assert_eq!(buckets[1].last_author, 1);
    assert_eq!(buckets[1].co_author, 1);
    assert_eq!(buckets[1].total(), 2);

    // Short history: windowing leaves it alone either way.
    assert_eq!(window_recent(buckets.clone(), false), buckets);
}

#[test]
fn test_keyword_cloud_between_two_snapshots() {
    let left = service_snapshot();
    let mut right = service_snapshot();
    right.keywords = serde_json::from_value(serde_json::json!([
        {"text": "Compilers", "count": 3},
        {"text": "verification", "count": 1}
    ]))
    .unwrap();

    let merged = merge_keywords(
        &snapshot_keywords(&left, 10),
        &snapshot_keywords(&right, 10),
        10,
    );

    assert_eq!(merged.len(), 3);
    assert_eq!(merged[0].total_count, 9); // compilers: 6 + 3
    assert!(merged[0].is_shared());

    let weights = keyword_weights(&merged, 12.0, 32.0);
    assert_eq!(weights.len(), 3);
    // The most frequent keyword gets the maximum weight, the least the minimum.
    assert!((weights[0] - 32.0).abs() < f64::EPSILON);
    assert!((weights[weights.len() - 1] - 12.0).abs() < f64::EPSILON);
}

#[test]
fn test_reports_render_from_service_snapshot() {
    let snapshot = service_snapshot();

    let markdown = format_snapshot_markdown(&snapshot, 2024, false);
    assert!(markdown.contains("# Grace Hopper"));
    assert!(markdown.contains("**h-index**: 12"));
    // Both conference variants collapse into one canonical top venue.
    assert!(markdown.contains("- ACM Conf on X (2)"));

    let json = snapshot_report_json(&snapshot, 2024, false);
    assert_eq!(json["publications"], 4);
    assert_eq!(json["venueBreakdown"]["conference"], 2);
    assert_eq!(json["topVenues"][0]["name"], "ACM Conf on X");
    assert_eq!(json["topVenues"][0]["count"], 2);
}

#[test]
fn test_board_reconciliation_flow() {
    // Fresh history: everything starts undecided.
    let history = vec!["abc123".to_string(), "def456".to_string()];
    let board = reconcile(&Board::default(), &history);
    assert_eq!(board.undecided, history);

    // Triage one, then a snapshot disappears from history and a new one lands.
    let board = move_card(&board, "abc123", BoardColumn::Confirmed);
    let history = vec!["abc123".to_string(), "xyz789".to_string()];
    let board = reconcile(&board, &history);

    assert_eq!(board.confirmed, vec!["abc123".to_string()]);
    assert_eq!(board.undecided, vec!["xyz789".to_string()]);
    assert!(board.column(BoardColumn::Analysis).is_empty());
}
