//! Snapshot data model matching the analysis service schema.

use serde::{Deserialize, Deserializer, Serialize};

/// One publication from an author's record.
///
/// Every field except `title` is optional on the wire: the scraper behind the
/// analysis service frequently returns partial rows, and downstream views are
/// expected to degrade per field rather than reject the record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationRecord {
    /// Publication title.
    #[serde(default)]
    pub title: String,

    /// Publication year. Accepts a number or a numeric string; anything else
    /// deserializes as missing.
    #[serde(default, deserialize_with = "lenient_year")]
    pub year: Option<i32>,

    /// Raw venue string, possibly carrying volume/issue/page suffixes.
    #[serde(default)]
    pub venue: Option<String>,

    /// Free-text venue type (e.g. "Journal Article", "Conference Proceedings").
    #[serde(default, alias = "venue_type")]
    pub venue_type: Option<String>,

    /// Free-text rank label (e.g. "Q1", "A*", "National").
    #[serde(default)]
    pub rank: Option<String>,

    /// Citation count. Non-numeric or missing values count as 0.
    #[serde(default, deserialize_with = "lenient_count")]
    pub citations: i64,

    /// Authorship position descriptor ("1st", "Last", a numeric string).
    #[serde(default, alias = "author_pos")]
    pub author_position: Option<String>,
}

impl PublicationRecord {
    /// The publication year if it is usable for temporal aggregation:
    /// positive and no more than two years in the future.
    #[must_use]
    pub fn valid_year(&self, current_year: i32) -> Option<i32> {
        self.year.filter(|&y| y > 0 && y <= current_year + 2)
    }

    /// Raw venue string, falling back to the "Unknown" sentinel.
    #[must_use]
    pub fn venue_or_unknown(&self) -> &str {
        self.venue.as_deref().unwrap_or("Unknown")
    }
}

/// A ranked keyword attached to a snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordEntry {
    /// Display text, original casing.
    pub text: String,

    /// Occurrence count from the snapshot producer.
    #[serde(default = "default_keyword_count")]
    pub count: u32,
}

impl KeywordEntry {
    /// Convenience constructor, mostly for tests and extraction.
    #[must_use]
    pub fn new(text: impl Into<String>, count: u32) -> Self {
        Self { text: text.into(), count }
    }
}

fn default_keyword_count() -> u32 {
    1
}

/// One author's analyzed profile, as delivered by the analysis service.
///
/// The engine only ever reads snapshots; derived metrics like the h-index are
/// computed upstream and arrive here as plain numbers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorSnapshot {
    /// Stable author identifier.
    pub id: String,

    /// Author display name.
    #[serde(default)]
    pub name: String,

    /// Affiliation line, if the profile carries one.
    #[serde(default)]
    pub affiliations: Option<String>,

    /// Career citation total.
    #[serde(default)]
    pub total_citations: i64,

    /// h-index as reported by the service.
    #[serde(default)]
    pub h_index: i32,

    /// All scraped publication records.
    #[serde(default)]
    pub records: Vec<PublicationRecord>,

    /// Pre-ranked keywords for this author.
    #[serde(default)]
    pub keywords: Vec<KeywordEntry>,
}

/// Deserialize a year that may arrive as a number, a numeric string, or junk.
fn lenient_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_i64().and_then(|y| i32::try_from(y).ok()),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Deserialize a count that may arrive as a number or a numeric string.
fn lenient_count<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_i64().unwrap_or(0),
        serde_json::Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_deserialize_minimal() {
        let json = r#"{"title": "A Paper"}"#;
        let record: PublicationRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.title, "A Paper");
        assert!(record.year.is_none());
        assert_eq!(record.citations, 0);
    }

    #[test]
    fn test_record_year_accepts_string() {
        let json = r#"{"title": "t", "year": "2019", "citations": "42"}"#;
        let record: PublicationRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.year, Some(2019));
        assert_eq!(record.citations, 42);
    }

    #[test]
    fn test_record_year_rejects_junk() {
        let json = r#"{"title": "t", "year": "abc", "citations": null}"#;
        let record: PublicationRecord = serde_json::from_str(json).unwrap();
        assert!(record.year.is_none());
        assert_eq!(record.citations, 0);
    }

    #[test]
    fn test_record_accepts_scraper_field_names() {
        let json = r#"{"title": "t", "venue_type": "Journal Article", "author_pos": "1st"}"#;
        let record: PublicationRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.venue_type.as_deref(), Some("Journal Article"));
        assert_eq!(record.author_position.as_deref(), Some("1st"));
    }

    #[test]
    fn test_valid_year_bounds() {
        let mut record = PublicationRecord { year: Some(2020), ..Default::default() };
        assert_eq!(record.valid_year(2024), Some(2020));

        record.year = Some(2026);
        assert_eq!(record.valid_year(2024), Some(2026));

        record.year = Some(2035);
        assert_eq!(record.valid_year(2024), None);

        record.year = Some(0);
        assert_eq!(record.valid_year(2024), None);

        record.year = None;
        assert_eq!(record.valid_year(2024), None);
    }

    #[test]
    fn test_keyword_count_defaults_to_one() {
        let json = r#"{"text": "nlp"}"#;
        let kw: KeywordEntry = serde_json::from_str(json).unwrap();
        assert_eq!(kw.count, 1);
    }

    #[test]
    fn test_snapshot_deserialize() {
        let json = r#"{
            "id": "a1",
            "name": "Ada Lovelace",
            "totalCitations": 1234,
            "hIndex": 17,
            "records": [{"title": "On Engines", "year": 1843}],
            "keywords": [{"text": "computation", "count": 3}]
        }"#;

        let snapshot: AuthorSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.id, "a1");
        assert_eq!(snapshot.total_citations, 1234);
        assert_eq!(snapshot.h_index, 17);
        assert_eq!(snapshot.records.len(), 1);
        assert_eq!(snapshot.keywords[0].count, 3);
    }
}
