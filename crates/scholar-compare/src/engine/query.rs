//! The record query engine: AND-composed filtering, field-specific sorting,
//! and windowed pagination.

use std::cmp::Ordering;

use super::rank::classify_rank;
use super::venue::{VenueType, canonical_venue, classify_venue_type};
use crate::models::{
    FilterCriteria, Pagination, PublicationRecord, QueryResult, SortCriteria, SortDirection,
    SortKey, TypeFilter,
};

/// Recent-only keeps records within this many years of `current_year`.
const RECENT_YEARS: i32 = 5;

/// Ordinal for positions that parse to nothing useful.
const POSITION_FALLBACK: i64 = 99;

/// Ordinal for an explicit last-author marker.
const POSITION_LAST: i64 = 999;

/// Run the full query pipeline: filter, sort, paginate.
///
/// Filtering applies every active criterion (logical AND). Sorting is stable,
/// so records that compare equal keep their input order; passing `None` skips
/// sorting entirely and preserves the input order (the service emits records
/// newest-first). Pagination windows the filtered and sorted sequence.
///
/// Callers own the interaction contract around pagination: reset it via
/// [`Pagination::reset`] whenever `filters` change, never on a sort change.
#[must_use]
pub fn query<'a>(
    records: &'a [PublicationRecord],
    filters: &FilterCriteria,
    sort: Option<SortCriteria>,
    page: Pagination,
    current_year: i32,
) -> QueryResult<'a> {
    let mut matched: Vec<&PublicationRecord> =
        records.iter().filter(|r| matches_filters(r, filters, current_year)).collect();

    if let Some(criteria) = sort {
        matched.sort_by(|a, b| {
            let ordering = compare_by_key(a, b, criteria.key);
            match criteria.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
    }

    let total_matches = matched.len();
    let (items, total_pages) = match page {
        Pagination::Pages { index, size } => {
            let size = size.max(1);
            let pages = total_matches.div_ceil(size);
            let items = matched.into_iter().skip(index * size).take(size).collect();
            (items, Some(pages))
        }
        Pagination::Reveal { visible } => {
            let items = matched.into_iter().take(visible).collect();
            (items, None)
        }
    };

    QueryResult { items, total_matches, total_pages }
}

/// Apply every active filter to one record.
fn matches_filters(
    record: &PublicationRecord,
    filters: &FilterCriteria,
    current_year: i32,
) -> bool {
    if let Some(venue) = &filters.venue {
        if canonical_venue(record) != *venue {
            return false;
        }
    }

    if let Some(type_filter) = filters.venue_type {
        let wanted = match type_filter {
            TypeFilter::Journal => VenueType::Journal,
            TypeFilter::Conference => VenueType::Conference,
        };
        if classify_venue_type(record.venue_type.as_deref()) != wanted {
            return false;
        }
    }

    if let Some(tier) = &filters.rank_tier {
        // Raw substring test on the rank label, not the classified tier:
        // legacy labels like "Q1 (Top 10%)" must keep matching a Q1 filter.
        let Some(rank) = record.rank.as_deref() else {
            return false;
        };
        if !rank.to_uppercase().contains(&tier.to_uppercase()) {
            return false;
        }
    }

    if filters.recent_only {
        match record.valid_year(current_year) {
            Some(year) if year >= current_year - RECENT_YEARS => {}
            _ => return false,
        }
    }

    true
}

/// Field-specific comparison, ascending.
fn compare_by_key(a: &PublicationRecord, b: &PublicationRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        SortKey::Year => a.year.unwrap_or(0).cmp(&b.year.unwrap_or(0)),
        SortKey::Citations => a.citations.cmp(&b.citations),
        SortKey::Rank => {
            let pa = classify_rank(a.rank.as_deref()).priority;
            let pb = classify_rank(b.rank.as_deref()).priority;
            pa.cmp(&pb)
        }
        SortKey::AuthorPosition => {
            position_ordinal(a.author_position.as_deref())
                .cmp(&position_ordinal(b.author_position.as_deref()))
        }
    }
}

/// Map an authorship-position descriptor to a sortable ordinal.
fn position_ordinal(raw: Option<&str>) -> i64 {
    let Some(raw) = raw else {
        return POSITION_FALLBACK;
    };
    let trimmed = raw.trim();

    if trimmed.eq_ignore_ascii_case("1st") {
        1
    } else if trimmed.eq_ignore_ascii_case("last") {
        POSITION_LAST
    } else {
        trimmed.parse().unwrap_or(POSITION_FALLBACK)
    }
}
