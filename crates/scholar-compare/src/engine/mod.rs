//! The publication analytics engine.
//!
//! Pure, synchronous transformations from a snapshot's records to the views
//! the comparison UI renders: canonical venues, rank tiers, authorship
//! roles, yearly timelines, merged keyword sets, venue rankings, and the
//! filtered/sorted/paginated record table. Every function is total over its
//! input domain and referentially transparent: malformed fields degrade to
//! documented defaults, empty inputs produce empty outputs, and no call
//! retains state.

mod board;
mod distribution;
mod keywords;
mod query;
mod rank;
mod role;
mod timeline;
mod venue;

pub use board::{Board, BoardColumn, move_card, reconcile};
pub use distribution::{
    TierBucket, VenueBreakdown, conference_ranks, journal_quartiles, venue_breakdown,
};
pub use keywords::{
    MergedKeyword, extract_keywords, keyword_weights, merge_keywords, snapshot_keywords,
};
pub use query::query;
pub use rank::{RankClass, RankTier, classify_rank};
pub use role::{Role, classify_role};
pub use timeline::{
    RoleYearBucket, YearBucket, aggregate_by_year, aggregate_by_year_with_role, window_recent,
};
pub use venue::{
    UNKNOWN_VENUE, VenueCount, VenueType, canonical_venue, canonicalize, classify_venue_type,
    top_venues,
};
