//! Temporal aggregation: per-year publication and citation buckets.

use std::collections::HashMap;

use serde::Serialize;

use super::role::{Role, classify_role};
use crate::models::PublicationRecord;

/// Above this many distinct years, the default chart view truncates.
const FULL_HISTORY_THRESHOLD: usize = 15;

/// Number of most-recent buckets kept by the truncated view.
const RECENT_WINDOW: usize = 10;

/// One year of publication output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct YearBucket {
    /// Publication year.
    pub year: i32,

    /// Records published that year.
    pub count: u32,

    /// Citations accumulated by that year's records.
    pub citations: i64,
}

/// One year of publication output, split by authorship role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RoleYearBucket {
    /// Publication year.
    pub year: i32,

    /// First-author records.
    pub first_author: u32,

    /// Solo-author records.
    pub solo_author: u32,

    /// Last-author records.
    pub last_author: u32,

    /// Co-author records.
    pub co_author: u32,
}

impl RoleYearBucket {
    /// Count for one role.
    #[must_use]
    pub const fn count(&self, role: Role) -> u32 {
        match role {
            Role::FirstAuthor => self.first_author,
            Role::SoloAuthor => self.solo_author,
            Role::LastAuthor => self.last_author,
            Role::CoAuthor => self.co_author,
        }
    }

    /// Total records across all roles.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.first_author + self.solo_author + self.last_author + self.co_author
    }

    fn bump(&mut self, role: Role) {
        match role {
            Role::FirstAuthor => self.first_author += 1,
            Role::SoloAuthor => self.solo_author += 1,
            Role::LastAuthor => self.last_author += 1,
            Role::CoAuthor => self.co_author += 1,
        }
    }
}

/// Bucket records by publication year, ascending.
///
/// Records without a usable year (missing, non-positive, or more than two
/// years past `current_year`) are skipped entirely; years with no eligible
/// records produce no bucket.
#[must_use]
pub fn aggregate_by_year(records: &[PublicationRecord], current_year: i32) -> Vec<YearBucket> {
    let mut by_year: HashMap<i32, YearBucket> = HashMap::new();

    for record in records {
        let Some(year) = record.valid_year(current_year) else {
            continue;
        };
        let bucket = by_year.entry(year).or_insert(YearBucket { year, ..Default::default() });
        bucket.count += 1;
        bucket.citations += record.citations;
    }

    let mut buckets: Vec<YearBucket> = by_year.into_values().collect();
    buckets.sort_by_key(|b| b.year);
    buckets
}

/// Bucket records by publication year with per-role counts, ascending.
///
/// Same year-validity rule as [`aggregate_by_year`]; the role split feeds the
/// stacked contribution chart.
#[must_use]
pub fn aggregate_by_year_with_role(
    records: &[PublicationRecord],
    current_year: i32,
) -> Vec<RoleYearBucket> {
    let mut by_year: HashMap<i32, RoleYearBucket> = HashMap::new();

    for record in records {
        let Some(year) = record.valid_year(current_year) else {
            continue;
        };
        let role = classify_role(record.author_position.as_deref());
        by_year.entry(year).or_insert(RoleYearBucket { year, ..Default::default() }).bump(role);
    }

    let mut buckets: Vec<RoleYearBucket> = by_year.into_values().collect();
    buckets.sort_by_key(|b| b.year);
    buckets
}

/// Apply the recent-window presentation policy to an ascending bucket list.
///
/// With more than 15 distinct years and `full_history` off, only the 10 most
/// recent buckets remain. Truncation is never silent: callers own the
/// `full_history` toggle and pass it explicitly.
#[must_use]
pub fn window_recent<T>(buckets: Vec<T>, full_history: bool) -> Vec<T> {
    if full_history || buckets.len() <= FULL_HISTORY_THRESHOLD {
        return buckets;
    }
    let skip = buckets.len() - RECENT_WINDOW;
    buckets.into_iter().skip(skip).collect()
}
