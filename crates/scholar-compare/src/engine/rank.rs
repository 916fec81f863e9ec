//! Rank tier classification.
//!
//! Raw rank labels come from several quality datasets and are wildly
//! inconsistent ("Q1 (Top 10%)", "A* Conference", "National Journal"). The
//! classifier reduces them to a fixed tier set with a numeric sort priority.

use serde::Serialize;

/// Canonical rank tiers, most prestigious first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum RankTier {
    /// Flagship conferences.
    #[serde(rename = "A*")]
    AStar,
    /// Elite conferences.
    A,
    /// Top-quartile journals.
    Q1,
    /// Second-quartile journals.
    Q2,
    /// Third-quartile journals.
    Q3,
    /// Bottom-quartile journals.
    Q4,
    /// Mid-tier conferences.
    B,
    /// Lower-tier conferences.
    C,
    /// Everything else, including noise labels.
    #[default]
    Unranked,
}

impl RankTier {
    /// Display label, matching the chart axis labels.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AStar => "A*",
            Self::A => "A",
            Self::Q1 => "Q1",
            Self::Q2 => "Q2",
            Self::Q3 => "Q3",
            Self::Q4 => "Q4",
            Self::B => "B",
            Self::C => "C",
            Self::Unranked => "Unranked",
        }
    }

    /// Sort priority: higher is more prestigious. Interleaves journal
    /// quartiles with conference ranks so a mixed table orders sensibly.
    #[must_use]
    pub const fn priority(self) -> i32 {
        match self {
            Self::AStar => 100,
            Self::A => 80,
            Self::Q1 => 79,
            Self::B => 60,
            Self::Q2 => 59,
            Self::C => 40,
            Self::Q3 => 39,
            Self::Q4 => 20,
            Self::Unranked => 1,
        }
    }
}

/// Classification result: the tier plus the priority to sort by.
///
/// Priority is almost always `tier.priority()`; the exception is a record
/// with no rank at all (`None` or the scraper's `"-"` sentinel), which sorts
/// below explicit unranked labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankClass {
    /// Canonical tier.
    pub tier: RankTier,

    /// Numeric sort priority.
    pub priority: i32,
}

/// Tier tokens checked by substring containment, first match wins.
/// The order is load-bearing: `A*` must precede `A`, and quartiles must
/// precede the bare `B`/`C` letters.
const TIER_RULES: &[(&str, RankTier)] = &[
    ("A*", RankTier::AStar),
    ("A", RankTier::A),
    ("Q1", RankTier::Q1),
    ("Q2", RankTier::Q2),
    ("Q3", RankTier::Q3),
    ("Q4", RankTier::Q4),
    ("B", RankTier::B),
    ("C", RankTier::C),
];

/// Classify a raw rank label.
///
/// Labels containing `NATIONAL` or `USA` are forced to `Unranked` regardless
/// of other matches; those datasets mark regional listings, not quality
/// tiers. Many raw strings map to the same tier; the function is not
/// invertible.
#[must_use]
pub fn classify_rank(raw: Option<&str>) -> RankClass {
    let trimmed = raw.map(str::trim);
    let Some(value) = trimmed.filter(|v| *v != "-") else {
        // No rank at all: sorts below explicit unranked labels.
        return RankClass { tier: RankTier::Unranked, priority: 0 };
    };

    let upper = value.to_uppercase();

    if upper.contains("NATIONAL") || upper.contains("USA") {
        return RankClass { tier: RankTier::Unranked, priority: RankTier::Unranked.priority() };
    }

    for &(token, tier) in TIER_RULES {
        if upper.contains(token) {
            return RankClass { tier, priority: tier.priority() };
        }
    }

    RankClass { tier: RankTier::Unranked, priority: RankTier::Unranked.priority() }
}
