//! Authorship role classification.

use serde::Serialize;

/// Canonical authorship roles for contribution analysis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Role {
    /// First-listed author.
    #[serde(rename = "First Author")]
    FirstAuthor,
    /// Sole author.
    #[serde(rename = "Solo Author")]
    SoloAuthor,
    /// Last-listed author.
    #[serde(rename = "Last Author")]
    LastAuthor,
    /// Any other position, including unknown.
    #[default]
    #[serde(rename = "Co-Author")]
    CoAuthor,
}

impl Role {
    /// Display label, matching the stacked-chart legend.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FirstAuthor => "First Author",
            Self::SoloAuthor => "Solo Author",
            Self::LastAuthor => "Last Author",
            Self::CoAuthor => "Co-Author",
        }
    }

    /// All roles in legend order.
    pub const ALL: [Self; 4] = [Self::FirstAuthor, Self::SoloAuthor, Self::LastAuthor, Self::CoAuthor];
}

/// Classify a free-text role or position descriptor.
///
/// Case-insensitive substring match, checked in a fixed order so a value
/// matching several keywords resolves to the first rule. The scraper's
/// positional vocabulary ("1st", bare "1") counts as first authorship.
/// Missing input is co-authorship.
#[must_use]
pub fn classify_role(raw: Option<&str>) -> Role {
    let Some(raw) = raw else {
        return Role::CoAuthor;
    };
    let lower = raw.trim().to_lowercase();

    if lower.contains("first") || lower == "1st" || lower == "1" {
        Role::FirstAuthor
    } else if lower.contains("solo") {
        Role::SoloAuthor
    } else if lower.contains("last") {
        Role::LastAuthor
    } else {
        Role::CoAuthor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_role_keywords() {
        assert_eq!(classify_role(Some("First Author")), Role::FirstAuthor);
        assert_eq!(classify_role(Some("solo")), Role::SoloAuthor);
        assert_eq!(classify_role(Some("Last Author")), Role::LastAuthor);
        assert_eq!(classify_role(Some("3")), Role::CoAuthor);
    }

    #[test]
    fn test_classify_role_positional_vocabulary() {
        assert_eq!(classify_role(Some("1st")), Role::FirstAuthor);
        assert_eq!(classify_role(Some("1")), Role::FirstAuthor);
        assert_eq!(classify_role(Some("Last")), Role::LastAuthor);
        assert_eq!(classify_role(Some("12")), Role::CoAuthor);
    }

    #[test]
    fn test_classify_role_missing_defaults_to_coauthor() {
        assert_eq!(classify_role(None), Role::CoAuthor);
        assert_eq!(classify_role(Some("")), Role::CoAuthor);
    }

    #[test]
    fn test_classify_role_first_rule_wins() {
        // Matches both "first" and "last"; the first rule in the list wins.
        assert_eq!(classify_role(Some("First and Last Author")), Role::FirstAuthor);
        assert_eq!(classify_role(Some("Solo (last listed)")), Role::SoloAuthor);
    }
}
