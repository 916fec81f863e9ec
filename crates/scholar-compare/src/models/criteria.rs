//! Query criteria: filters, sort state, and pagination.

use serde::{Deserialize, Serialize};

use super::PublicationRecord;

/// Default page size for fixed-size pagination.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Initial number of rows in incremental-reveal mode.
pub const DEFAULT_VISIBLE: usize = 20;

/// How many rows each "show more" step adds in incremental-reveal mode.
pub const REVEAL_INCREMENT: usize = 20;

/// Venue types a caller can filter on independently.
///
/// Book and Other records exist in classification output but are not
/// independently selectable in any view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeFilter {
    /// Journal publications only.
    Journal,
    /// Conference publications only.
    Conference,
}

/// Record filters. All active fields combine with logical AND.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    /// Keep records whose canonical venue equals this canonical name.
    #[serde(default)]
    pub venue: Option<String>,

    /// Keep records classified as this venue type.
    #[serde(default, rename = "type")]
    pub venue_type: Option<TypeFilter>,

    /// Keep records whose raw rank string contains this token
    /// (case-insensitive). A raw substring test, not the classified tier.
    #[serde(default)]
    pub rank_tier: Option<String>,

    /// Keep records with a valid year within the last 5 years inclusive.
    #[serde(default)]
    pub recent_only: bool,
}

impl FilterCriteria {
    /// True when no filter is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.venue.is_none()
            && self.venue_type.is_none()
            && self.rank_tier.is_none()
            && !self.recent_only
    }
}

/// Sortable record fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    /// Case-insensitive lexicographic title order.
    Title,
    /// Numeric year, missing treated as 0.
    Year,
    /// Numeric citation count.
    Citations,
    /// Classified rank priority, not the raw string.
    Rank,
    /// Ordinal authorship position.
    AuthorPosition,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

/// Active sort state for the record table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortCriteria {
    /// Field to sort by.
    pub key: SortKey,

    /// Direction to sort in.
    pub direction: SortDirection,
}

impl SortCriteria {
    /// The default ordering: year, descending. Equivalent to "no explicit
    /// sort" since the service emits records newest-first.
    pub const DEFAULT: Self = Self { key: SortKey::Year, direction: SortDirection::Desc };

    /// Advance the sort state for a click on a column header.
    ///
    /// First click on a column sorts descending, a second click flips to
    /// ascending, a third click resets to [`Self::DEFAULT`]. Clicking a
    /// different column always restarts at descending.
    #[must_use]
    pub fn click(self, key: SortKey) -> Self {
        if self.key != key {
            return Self { key, direction: SortDirection::Desc };
        }
        match self.direction {
            SortDirection::Desc => Self { key, direction: SortDirection::Asc },
            SortDirection::Asc => Self::DEFAULT,
        }
    }
}

impl Default for SortCriteria {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Pagination over the filtered and sorted record sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Pagination {
    /// Fixed-size pages with a zero-based page index.
    Pages {
        /// Zero-based page index.
        index: usize,
        /// Rows per page.
        size: usize,
    },
    /// Incremental reveal: the first `visible` rows.
    Reveal {
        /// Number of rows currently revealed.
        visible: usize,
    },
}

impl Pagination {
    /// First page at the default page size.
    #[must_use]
    pub const fn pages() -> Self {
        Self::Pages { index: 0, size: DEFAULT_PAGE_SIZE }
    }

    /// Incremental reveal at the default initial count.
    #[must_use]
    pub const fn reveal() -> Self {
        Self::Reveal { visible: DEFAULT_VISIBLE }
    }

    /// Terminal "show all" state for incremental reveal.
    #[must_use]
    pub const fn reveal_all() -> Self {
        Self::Reveal { visible: usize::MAX }
    }

    /// Initial state for this mode. Callers must apply this whenever the
    /// filter criteria change; changing the sort alone keeps the window.
    #[must_use]
    pub const fn reset(self) -> Self {
        match self {
            Self::Pages { size, .. } => Self::Pages { index: 0, size },
            Self::Reveal { .. } => Self::Reveal { visible: DEFAULT_VISIBLE },
        }
    }

    /// Advance: next page, or one more reveal increment.
    #[must_use]
    pub const fn advance(self) -> Self {
        match self {
            Self::Pages { index, size } => Self::Pages { index: index + 1, size },
            Self::Reveal { visible } => {
                Self::Reveal { visible: visible.saturating_add(REVEAL_INCREMENT) }
            }
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::reveal()
    }
}

/// One page (or reveal window) of query output.
#[derive(Debug, Clone)]
pub struct QueryResult<'a> {
    /// Records in the current window, in sorted order.
    pub items: Vec<&'a PublicationRecord>,

    /// Number of records matching the filters, before pagination.
    pub total_matches: usize,

    /// Page count, fixed-size mode only.
    pub total_pages: Option<usize>,
}
