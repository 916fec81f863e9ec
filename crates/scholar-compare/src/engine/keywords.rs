//! Keyword merging for the comparison view, weight scaling for the cloud,
//! and title keyword extraction.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::{AuthorSnapshot, KeywordEntry};

/// Title words shorter than this are noise.
const MIN_KEYWORD_LEN: usize = 4;

/// Academic boilerplate that says nothing about a research area.
const STOPWORDS: &[&str] = &[
    "using", "based", "approach", "system", "analysis", "study", "research", "evaluation",
    "framework", "method", "towards", "process", "new", "multi", "systematic", "review",
    "perspective", "case", "application", "design", "efficient", "optimization", "performance",
    "modeling", "via", "learning", "intelligent", "automated", "data", "information",
    "implementation", "with", "and", "of", "a", "in", "for", "on", "to", "an", "at", "survey",
    "development", "comparative", "algorithm", "model", "user", "proposed",
];

/// A keyword after merging two authors' lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergedKeyword {
    /// Representative display text (first-seen casing).
    pub text: String,

    /// Whether the first author's list contributed this keyword.
    pub owned_by_a: bool,

    /// Whether the second author's list contributed this keyword.
    pub owned_by_b: bool,

    /// Combined occurrence count across both lists.
    pub total_count: u32,
}

impl MergedKeyword {
    /// True when both authors share this keyword.
    #[must_use]
    pub const fn is_shared(&self) -> bool {
        self.owned_by_a && self.owned_by_b
    }
}

/// Case- and whitespace-insensitive dedup key.
fn dedup_key(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Merge two pre-ranked keyword lists into one ownership-tagged set.
///
/// Takes the first `top_n_each` entries of each list, dedups on the
/// lower-cased trimmed text, sums counts across both sources, and marks
/// which side(s) contributed each keyword. The result sorts by descending
/// total count, ties broken by the dedup key, so swapping the inputs yields
/// the same sequence with the ownership flags exchanged.
#[must_use]
pub fn merge_keywords(
    list_a: &[KeywordEntry],
    list_b: &[KeywordEntry],
    top_n_each: usize,
) -> Vec<MergedKeyword> {
    let mut merged: HashMap<String, MergedKeyword> = HashMap::new();

    for (entries, from_a) in [(list_a, true), (list_b, false)] {
        for entry in entries.iter().take(top_n_each) {
            let key = dedup_key(&entry.text);
            if key.is_empty() {
                continue;
            }
            let slot = merged.entry(key).or_insert_with(|| MergedKeyword {
                text: entry.text.trim().to_string(),
                owned_by_a: false,
                owned_by_b: false,
                total_count: 0,
            });
            slot.total_count += entry.count.max(1);
            if from_a {
                slot.owned_by_a = true;
            } else {
                slot.owned_by_b = true;
            }
        }
    }

    let mut result: Vec<MergedKeyword> = merged.into_values().collect();
    result.sort_by(|a, b| {
        b.total_count.cmp(&a.total_count).then_with(|| dedup_key(&a.text).cmp(&dedup_key(&b.text)))
    });
    result
}

/// Linear weight scale over the merged set's own count range.
///
/// Each weight lands in `[min_weight, max_weight]` by interpolating between
/// the set's minimum and maximum total counts. When every count is equal the
/// denominator degenerates and is forced to 1, leaving every keyword at
/// `min_weight`.
#[must_use]
pub fn keyword_weights(merged: &[MergedKeyword], min_weight: f64, max_weight: f64) -> Vec<f64> {
    let Some(max_count) = merged.iter().map(|k| k.total_count).max() else {
        return Vec::new();
    };
    let min_count = merged.iter().map(|k| k.total_count).min().unwrap_or(max_count);
    let span = f64::from(max_count - min_count).max(1.0);

    merged
        .iter()
        .map(|k| {
            min_weight + f64::from(k.total_count - min_count) / span * (max_weight - min_weight)
        })
        .collect()
}

/// Extract the most frequent topical words from publication titles.
///
/// Strips non-alphabetic characters, lowercases, and tallies words longer
/// than 3 characters that are not boilerplate. Ties break by ascending word.
#[must_use]
pub fn extract_keywords<'a, I>(titles: I, top_n: usize) -> Vec<KeywordEntry>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: HashMap<String, u32> = HashMap::new();

    for title in titles {
        let cleaned: String = title
            .chars()
            .map(|c| if c.is_ascii_alphabetic() || c.is_whitespace() { c } else { ' ' })
            .collect();
        for word in cleaned.to_lowercase().split_whitespace() {
            if word.len() >= MIN_KEYWORD_LEN && !STOPWORDS.contains(&word) {
                *counts.entry(word.to_string()).or_insert(0) += 1;
            }
        }
    }

    let mut ranked: Vec<(String, u32)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(top_n);
    ranked.into_iter().map(|(text, count)| KeywordEntry { text, count }).collect()
}

/// The keyword list to use for a snapshot.
///
/// Prefers the service-supplied ranked list; when a snapshot arrives without
/// one, falls back to extracting keywords from the publication titles.
#[must_use]
pub fn snapshot_keywords(snapshot: &AuthorSnapshot, top_n: usize) -> Vec<KeywordEntry> {
    if snapshot.keywords.is_empty() {
        extract_keywords(snapshot.records.iter().map(|r| r.title.as_str()), top_n)
    } else {
        snapshot.keywords.iter().take(top_n).cloned().collect()
    }
}
