//! Difficulty categories and their platform-wide problem totals

use serde::{Deserialize, Serialize};

/// Fallback number of easy problems on the platform.
///
/// Snapshot of the upstream corpus; drifts as problems are added, so it can be
/// overridden through `[stats.totals]` in the config file.
pub const DEFAULT_EASY_TOTAL: u64 = 828;

/// Fallback number of medium problems on the platform.
pub const DEFAULT_MEDIUM_TOTAL: u64 = 1732;

/// Fallback number of hard problems on the platform.
pub const DEFAULT_HARD_TOTAL: u64 = 758;

/// Problem difficulty category.
///
/// The declaration order (easy, medium, hard) is also the ring order of the
/// gauge, outermost first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All categories in ring order
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Label used by the GraphQL provider (`"Easy"`, `"Medium"`, `"Hard"`)
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Canonical lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Total number of problems available per category.
///
/// Shared by every adapter's defaulting rules and by the terminal fallback
/// result, so all of them agree on the same numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotals {
    #[serde(default = "default_easy")]
    pub easy: u64,
    #[serde(default = "default_medium")]
    pub medium: u64,
    #[serde(default = "default_hard")]
    pub hard: u64,
}

fn default_easy() -> u64 {
    DEFAULT_EASY_TOTAL
}

fn default_medium() -> u64 {
    DEFAULT_MEDIUM_TOTAL
}

fn default_hard() -> u64 {
    DEFAULT_HARD_TOTAL
}

impl Default for CategoryTotals {
    fn default() -> Self {
        Self {
            easy: DEFAULT_EASY_TOTAL,
            medium: DEFAULT_MEDIUM_TOTAL,
            hard: DEFAULT_HARD_TOTAL,
        }
    }
}

impl CategoryTotals {
    /// Total for one category
    pub fn get(&self, difficulty: Difficulty) -> u64 {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }

    /// Sum across all categories
    pub fn sum(&self) -> u64 {
        self.easy.saturating_add(self.medium).saturating_add(self.hard)
    }
}
