//! Settings configuration types

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::CategoryTotals;

/// Stats fetching settings (`[stats]`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSettings {
    /// Provider username; falls back to the stored profile when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// GitHub account; falls back to the stored profile when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_username: Option<String>,

    /// Per-provider timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Category totals used when a provider omits them
    #[serde(default)]
    pub totals: CategoryTotals,
}

fn default_timeout_secs() -> u64 {
    8
}

impl StatsSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

impl Default for StatsSettings {
    fn default() -> Self {
        Self {
            username: None,
            github_username: None,
            timeout_secs: default_timeout_secs(),
            totals: CategoryTotals::default(),
        }
    }
}
