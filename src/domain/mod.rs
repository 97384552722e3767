//! Core domain types for solvegauge

mod difficulty;
mod profile;
mod stats;

pub use difficulty::{
    CategoryTotals, DEFAULT_EASY_TOTAL, DEFAULT_HARD_TOTAL, DEFAULT_MEDIUM_TOTAL, Difficulty,
};
pub use profile::{Certificate, PortfolioProfile, ProfileFieldError, Project};
pub use stats::{StatsQuery, StatsResult, ValidationError};
