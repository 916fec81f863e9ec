//! Venue name canonicalization, venue-type classification, and top-venue
//! ranking.
//!
//! Raw venue strings arrive polluted with volume/issue suffixes, page ranges,
//! ordinal conference numbering, and parenthetical annotations. Counting or
//! filtering by venue only works after those are stripped, so every
//! venue-based consumer goes through [`canonicalize`] first.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::models::PublicationRecord;

/// Canonical form of the missing-venue sentinel. Excluded from venue counts
/// and venue filters by every caller.
pub const UNKNOWN_VENUE: &str = "Unknown Venue";

/// Canonical names shorter than this are treated as noise by the ranker.
const MIN_VENUE_NAME_LEN: usize = 3;

static PROCEEDINGS_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:proceedings|proc\.?)\s+of\s+the\s+").unwrap());
static INTL_JOURNAL_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^international\s+journal\s+of\s+").unwrap());
static ORDINAL_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b\d+(?:st|nd|rd|th)\b").unwrap());
static LEADING_YEAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(?:19|20)\d{2}\s+").unwrap());
static VOLUME_ISSUE_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+\d+\s*\(\d+\).*$").unwrap());
static TRAILING_PAGE_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i),?\s*(?:pp\.?\s*)?\d+\s*[-\u{2013}]\s*\d+(?:\s*,\s*(?:19|20)\d{2})?\s*$")
        .unwrap()
});
static TRAILING_BARE_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",?\s*(?:19|20)\d{2}\s*$").unwrap());
static TRAILING_PARENTHETICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\([^)]*\)\s*$").unwrap());
static REPEATED_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Normalize a raw venue string into a comparable canonical name.
///
/// The cleaning pass runs to a fixpoint, so the function is idempotent even
/// when stripping one suffix exposes another (a trailing parenthetical hiding
/// a trailing year, for instance). Missing venues use the `"Unknown"`
/// sentinel and canonicalize to [`UNKNOWN_VENUE`].
#[must_use]
pub fn canonicalize(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "Unknown" {
        return UNKNOWN_VENUE.to_string();
    }

    // Run the pass to a fixpoint. Termination: every rule either shortens
    // the string or replaces a hyphen, and nothing reintroduces either.
    let mut current = trimmed.to_string();
    loop {
        let next = clean_pass(&current);
        if next == current {
            break;
        }
        current = next;
    }

    // Strings that clean down to nothing (or to the bare sentinel word)
    // carry no venue information.
    if current.is_empty() || current == "Unknown" {
        UNKNOWN_VENUE.to_string()
    } else {
        current
    }
}

/// Canonical venue for a record, routing missing venues to the sentinel.
#[must_use]
pub fn canonical_venue(record: &PublicationRecord) -> String {
    canonicalize(record.venue_or_unknown())
}

/// One ordered application of every cleaning rule.
fn clean_pass(name: &str) -> String {
    let name = strip_proceedings_prefix(name);
    let name = strip_intl_journal_prefix(&name);
    let name = strip_ordinal_markers(&name);
    let name = strip_leading_year(&name);
    let name = strip_volume_issue_suffix(&name);
    let name = strip_trailing_page_range(&name);
    let name = strip_trailing_bare_year(&name);
    let name = strip_trailing_parenthetical(&name);
    normalize_separators(&name)
}

fn strip_proceedings_prefix(name: &str) -> String {
    PROCEEDINGS_PREFIX.replace(name, "").into_owned()
}

fn strip_intl_journal_prefix(name: &str) -> String {
    INTL_JOURNAL_PREFIX.replace(name, "").into_owned()
}

fn strip_ordinal_markers(name: &str) -> String {
    ORDINAL_MARKER.replace_all(name, "").into_owned()
}

fn strip_leading_year(name: &str) -> String {
    LEADING_YEAR.replace(name, "").into_owned()
}

fn strip_volume_issue_suffix(name: &str) -> String {
    VOLUME_ISSUE_SUFFIX.replace(name, "").into_owned()
}

fn strip_trailing_page_range(name: &str) -> String {
    TRAILING_PAGE_RANGE.replace(name, "").into_owned()
}

fn strip_trailing_bare_year(name: &str) -> String {
    TRAILING_BARE_YEAR.replace(name, "").into_owned()
}

fn strip_trailing_parenthetical(name: &str) -> String {
    TRAILING_PARENTHETICAL.replace(name, "").into_owned()
}

fn normalize_separators(name: &str) -> String {
    let dehyphenated = name.replace('-', " ");
    REPEATED_WHITESPACE.replace_all(dehyphenated.trim(), " ").into_owned()
}

/// Coarse venue type derived from the free-text type string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum VenueType {
    /// Journal article.
    Journal,
    /// Conference or workshop proceedings.
    Conference,
    /// Book or book chapter.
    Book,
    /// Anything else, including missing type strings.
    #[default]
    Other,
}

impl VenueType {
    /// Display label, matching the chart axis labels.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Journal => "Journal",
            Self::Conference => "Conference",
            Self::Book => "Book",
            Self::Other => "Other",
        }
    }
}

/// Bucket a free-text venue-type string.
///
/// Lower-case substring match, first rule wins. Total over any input; missing
/// and unrecognized values land in [`VenueType::Other`].
#[must_use]
pub fn classify_venue_type(raw: Option<&str>) -> VenueType {
    let Some(raw) = raw else {
        return VenueType::Other;
    };
    let lower = raw.to_lowercase();

    if lower.contains("journal") {
        VenueType::Journal
    } else if lower.contains("conference") || lower.contains("proceeding") {
        VenueType::Conference
    } else if lower.contains("book") || lower.contains("chapter") {
        VenueType::Book
    } else {
        VenueType::Other
    }
}

/// A canonical venue with its publication count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueCount {
    /// Canonical venue name.
    pub name: String,

    /// Number of records published there.
    pub count: usize,
}

/// Rank venues by publication frequency, truncated to `n`.
///
/// The unknown-venue sentinel and canonical names shorter than 3 characters
/// are dropped as noise. Ties sort by ascending name so equal counts (common
/// with small samples) order deterministically.
#[must_use]
pub fn top_venues(records: &[PublicationRecord], n: usize) -> Vec<VenueCount> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for record in records {
        let name = canonical_venue(record);
        if name == UNKNOWN_VENUE || name.len() < MIN_VENUE_NAME_LEN {
            continue;
        }
        *counts.entry(name).or_insert(0) += 1;
    }

    let mut ranked: Vec<VenueCount> =
        counts.into_iter().map(|(name, count)| VenueCount { name, count }).collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    ranked.truncate(n);
    ranked
}
