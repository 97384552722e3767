//! Configuration loading and management

mod io;
mod settings;

pub use settings::StatsSettings;

use serde::{Deserialize, Serialize};

use crate::domain::PortfolioProfile;
use crate::gauge::RingLayout;
use crate::provider::ProviderEndpoints;

/// Main configuration structure (`~/.solvegauge/config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Stats fetching settings
    #[serde(default)]
    pub stats: StatsSettings,

    /// Ring gauge geometry
    #[serde(default)]
    pub gauge: RingLayout,

    /// Upstream base URLs
    #[serde(default)]
    pub providers: ProviderEndpoints,
}

impl Config {
    /// Pick the stats identifier: explicit override, then config, then the
    /// stored profile. Blank values are skipped.
    pub fn stats_username(
        &self,
        explicit: Option<&str>,
        profile: Option<&PortfolioProfile>,
    ) -> Option<String> {
        first_non_blank([
            explicit,
            self.stats.username.as_deref(),
            profile.map(|p| p.leetcode_username.as_str()),
        ])
    }

    /// Same precedence as [`Config::stats_username`], for the GitHub account
    pub fn github_username(
        &self,
        explicit: Option<&str>,
        profile: Option<&PortfolioProfile>,
    ) -> Option<String> {
        first_non_blank([
            explicit,
            self.stats.github_username.as_deref(),
            profile.map(|p| p.github_username.as_str()),
        ])
    }
}

fn first_non_blank<'a>(candidates: impl IntoIterator<Item = Option<&'a str>>) -> Option<String> {
    candidates
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CategoryTotals;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.stats.totals, CategoryTotals::default());
        assert_eq!(config.gauge, RingLayout::default());
    }

    #[test]
    fn test_partial_sections_override() {
        let config: Config = toml::from_str(
            r#"
            [stats]
            username = "alice"
            timeout_secs = 3

            [stats.totals]
            hard = 800

            [gauge]
            base_radius = 50.0

            [providers]
            alfa = "http://localhost:9000"
            "#,
        )
        .unwrap();

        assert_eq!(config.stats.username.as_deref(), Some("alice"));
        assert_eq!(config.stats.timeout_secs, 3);
        assert_eq!(config.stats.totals.hard, 800);
        assert_eq!(config.stats.totals.easy, 828);
        assert_eq!(config.gauge.base_radius, 50.0);
        assert_eq!(config.gauge.ring_offset, 7.0);
        assert_eq!(config.providers.alfa, "http://localhost:9000");
        assert_eq!(
            config.providers.graphql,
            crate::provider::DEFAULT_GRAPHQL_BASE
        );
    }

    #[test]
    fn test_username_precedence() {
        let mut config = Config::default();
        let mut profile = PortfolioProfile::default();
        profile.leetcode_username = "from-profile".to_string();

        assert_eq!(
            config.stats_username(None, Some(&profile)).as_deref(),
            Some("from-profile")
        );

        config.stats.username = Some("from-config".to_string());
        assert_eq!(
            config.stats_username(None, Some(&profile)).as_deref(),
            Some("from-config")
        );
        assert_eq!(
            config.stats_username(Some("cli"), Some(&profile)).as_deref(),
            Some("cli")
        );
        assert_eq!(
            config.stats_username(Some("  "), None).as_deref(),
            Some("from-config")
        );
    }

    #[test]
    fn test_no_username_anywhere() {
        let config = Config::default();
        let profile = PortfolioProfile::default();
        assert_eq!(config.stats_username(None, Some(&profile)), None);
    }
}
