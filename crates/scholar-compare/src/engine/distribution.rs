//! Venue-type and rank-tier distributions for the analytics overview.

use serde::Serialize;

use super::rank::{RankTier, classify_rank};
use super::venue::{VenueType, classify_venue_type};
use crate::models::PublicationRecord;

/// Journal quartile axis, in chart order.
const JOURNAL_AXIS: [RankTier; 5] =
    [RankTier::Q1, RankTier::Q2, RankTier::Q3, RankTier::Q4, RankTier::Unranked];

/// Conference rank axis, in chart order.
const CONFERENCE_AXIS: [RankTier; 5] =
    [RankTier::AStar, RankTier::A, RankTier::B, RankTier::C, RankTier::Unranked];

/// Journal / Conference / Other record counts.
///
/// The overview chart only distinguishes journals and conferences; book
/// records fold into `other` alongside unclassified ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VenueBreakdown {
    /// Journal-classified records.
    pub journal: u32,

    /// Conference-classified records.
    pub conference: u32,

    /// Everything else.
    pub other: u32,
}

impl VenueBreakdown {
    /// Total records counted.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.journal + self.conference + self.other
    }
}

/// One fixed-axis rank bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TierBucket {
    /// The tier this bucket counts.
    pub tier: RankTier,

    /// Records in this tier.
    pub count: u32,
}

/// Count records per coarse venue type.
#[must_use]
pub fn venue_breakdown(records: &[PublicationRecord]) -> VenueBreakdown {
    let mut breakdown = VenueBreakdown::default();
    for record in records {
        match classify_venue_type(record.venue_type.as_deref()) {
            VenueType::Journal => breakdown.journal += 1,
            VenueType::Conference => breakdown.conference += 1,
            VenueType::Book | VenueType::Other => breakdown.other += 1,
        }
    }
    breakdown
}

/// Quartile distribution of journal-classified records.
///
/// Buckets come back in fixed axis order (`Q1..Q4, Unranked`) including
/// zero counts, so chart axes stay stable across snapshots. A journal whose
/// rank classifies outside the quartiles counts as `Unranked`.
#[must_use]
pub fn journal_quartiles(records: &[PublicationRecord]) -> Vec<TierBucket> {
    tier_distribution(records, VenueType::Journal, &JOURNAL_AXIS)
}

/// Rank distribution of conference-classified records.
///
/// Same fixed-axis contract as [`journal_quartiles`], over `A*, A, B, C,
/// Unranked`.
#[must_use]
pub fn conference_ranks(records: &[PublicationRecord]) -> Vec<TierBucket> {
    tier_distribution(records, VenueType::Conference, &CONFERENCE_AXIS)
}

fn tier_distribution(
    records: &[PublicationRecord],
    venue_type: VenueType,
    axis: &[RankTier],
) -> Vec<TierBucket> {
    let mut buckets: Vec<TierBucket> =
        axis.iter().map(|&tier| TierBucket { tier, count: 0 }).collect();

    for record in records {
        if classify_venue_type(record.venue_type.as_deref()) != venue_type {
            continue;
        }
        let tier = classify_rank(record.rank.as_deref()).tier;
        let slot = buckets
            .iter()
            .position(|b| b.tier == tier)
            .or_else(|| buckets.iter().position(|b| b.tier == RankTier::Unranked));
        if let Some(idx) = slot {
            buckets[idx].count += 1;
        }
    }

    buckets
}
