//! Stats query and normalized stats record

use serde::{Deserialize, Serialize};

use super::difficulty::{CategoryTotals, Difficulty};

/// Rejected input, raised before any provider is contacted
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Username is required")]
    EmptyIdentifier,
}

/// A validated, provider-specific username.
///
/// Construction is the only place the identifier is checked, so holding a
/// `StatsQuery` means the value is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StatsQuery {
    identifier: String,
}

impl StatsQuery {
    /// Validate an identifier. Whitespace-only input counts as empty.
    pub fn new(identifier: impl Into<String>) -> Result<Self, ValidationError> {
        let identifier = identifier.into();
        let trimmed = identifier.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyIdentifier);
        }
        Ok(Self {
            identifier: trimmed.to_string(),
        })
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

impl std::fmt::Display for StatsQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.identifier)
    }
}

/// Normalized problem-solving statistics.
///
/// Solved counts are not cross-checked against totals: providers disagree
/// with each other and the record carries whatever the winning provider said.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResult {
    pub total_solved: u64,
    pub easy_solved: u64,
    pub medium_solved: u64,
    pub hard_solved: u64,
    pub easy_total: u64,
    pub medium_total: u64,
    pub hard_total: u64,
    /// 0-100, 0 when the provider does not report it
    pub acceptance_rate_percent: f64,
    /// 0 when unknown
    pub ranking: u64,
}

impl StatsResult {
    /// The renderable record used when no provider could be reached
    pub fn unavailable(totals: &CategoryTotals) -> Self {
        Self {
            total_solved: 0,
            easy_solved: 0,
            medium_solved: 0,
            hard_solved: 0,
            easy_total: totals.easy,
            medium_total: totals.medium,
            hard_total: totals.hard,
            acceptance_rate_percent: 0.0,
            ranking: 0,
        }
    }

    /// Solved count for one category
    pub fn solved(&self, difficulty: Difficulty) -> u64 {
        match difficulty {
            Difficulty::Easy => self.easy_solved,
            Difficulty::Medium => self.medium_solved,
            Difficulty::Hard => self.hard_solved,
        }
    }

    /// Available problem count for one category
    pub fn total(&self, difficulty: Difficulty) -> u64 {
        match difficulty {
            Difficulty::Easy => self.easy_total,
            Difficulty::Medium => self.medium_total,
            Difficulty::Hard => self.hard_total,
        }
    }

    /// Sum of the three category totals (denominator of "x / N solved")
    pub fn total_available(&self) -> u64 {
        self.easy_total
            .saturating_add(self.medium_total)
            .saturating_add(self.hard_total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_rejects_empty_and_blank() {
        assert_eq!(StatsQuery::new(""), Err(ValidationError::EmptyIdentifier));
        assert_eq!(StatsQuery::new("   "), Err(ValidationError::EmptyIdentifier));
    }

    #[test]
    fn test_query_trims_identifier() {
        let query = StatsQuery::new("  alice ").unwrap();
        assert_eq!(query.identifier(), "alice");
    }

    #[test]
    fn test_unavailable_uses_given_totals() {
        let result = StatsResult::unavailable(&CategoryTotals::default());
        assert_eq!(result.total_solved, 0);
        assert_eq!(result.easy_total, 828);
        assert_eq!(result.medium_total, 1732);
        assert_eq!(result.hard_total, 758);
        assert_eq!(result.acceptance_rate_percent, 0.0);
        assert_eq!(result.ranking, 0);
        assert_eq!(result.total_available(), 3318);
    }

    #[test]
    fn test_total_available_saturates() {
        let mut result = StatsResult::unavailable(&CategoryTotals::default());
        result.easy_total = u64::MAX;
        assert_eq!(result.total_available(), u64::MAX);
    }

    #[test]
    fn test_serializes_camel_case() {
        let result = StatsResult::unavailable(&CategoryTotals::default());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["totalSolved"], 0);
        assert_eq!(json["easyTotal"], 828);
        assert_eq!(json["acceptanceRatePercent"], 0.0);
    }
}
