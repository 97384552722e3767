//! Adapter C: community REST mirror (`/{username}`), last in line

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{CategoryTotals, StatsResult};
use crate::http::{HttpClient, HttpRequest};

use super::adapter::{FetchError, StatsAdapter, fetch_json};
use super::fields::{as_object, count, path_segment, rate, reject_error_payload, total_or};

pub const DEFAULT_STATS_API_BASE: &str = "https://leetcode-stats-api.herokuapp.com";

pub struct StatsApiAdapter {
    client: Arc<dyn HttpClient>,
    base_url: String,
    totals: CategoryTotals,
}

impl StatsApiAdapter {
    pub const ID: &'static str = "leetcode-stats-api";

    pub fn new(
        client: Arc<dyn HttpClient>,
        base_url: impl Into<String>,
        totals: CategoryTotals,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            totals,
        }
    }
}

#[async_trait]
impl StatsAdapter for StatsApiAdapter {
    fn id(&self) -> &str {
        Self::ID
    }

    async fn fetch(&self, identifier: &str) -> Result<StatsResult, FetchError> {
        let url = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path_segment(identifier)
        );
        let body = fetch_json(self.client.as_ref(), HttpRequest::get(url)).await?;
        normalize(&body, &self.totals)
    }
}

pub(crate) fn normalize(body: &Value, totals: &CategoryTotals) -> Result<StatsResult, FetchError> {
    let object = as_object(body)?;
    reject_error_payload(object)?;

    Ok(StatsResult {
        total_solved: count(object, "totalSolved"),
        easy_solved: count(object, "easySolved"),
        medium_solved: count(object, "mediumSolved"),
        hard_solved: count(object, "hardSolved"),
        easy_total: total_or(object, "totalEasy", totals.easy),
        medium_total: total_or(object, "totalMedium", totals.medium),
        hard_total: total_or(object, "totalHard", totals.hard),
        acceptance_rate_percent: rate(object, "acceptanceRate"),
        ranking: count(object, "ranking"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flat_body_defaults_totals() {
        let body = json!({
            "totalSolved": 120,
            "easySolved": 80,
            "mediumSolved": 30,
            "hardSolved": 10
        });
        let stats = normalize(&body, &CategoryTotals::default()).unwrap();
        assert_eq!(stats.total_solved, 120);
        assert_eq!(stats.easy_total, 828);
        assert_eq!(stats.medium_total, 1732);
        assert_eq!(stats.hard_total, 758);
        assert_eq!(stats.acceptance_rate_percent, 0.0);
    }

    #[test]
    fn test_reads_rate_and_ranking() {
        let body = json!({
            "status": "success",
            "totalSolved": 5,
            "acceptanceRate": 61.5,
            "ranking": 1200000
        });
        let stats = normalize(&body, &CategoryTotals::default()).unwrap();
        assert_eq!(stats.acceptance_rate_percent, 61.5);
        assert_eq!(stats.ranking, 1_200_000);
    }

    #[test]
    fn test_all_zero_counts_are_valid() {
        let stats = normalize(&json!({}), &CategoryTotals::default()).unwrap();
        assert_eq!(stats, StatsResult::unavailable(&CategoryTotals::default()));
    }

    #[test]
    fn test_user_missing_reply_is_semantic() {
        let body = json!({"status": "error", "message": "user does not exist"});
        assert_eq!(
            normalize(&body, &CategoryTotals::default()).unwrap_err(),
            FetchError::Semantic("user does not exist".to_string())
        );
    }

    #[test]
    fn test_string_body_is_parse_error() {
        assert!(matches!(
            normalize(&json!("oops"), &CategoryTotals::default()),
            Err(FetchError::Parse(_))
        ));
    }
}
