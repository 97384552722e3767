//! Adapter B: community REST mirror (`/{username}/solved`)

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{CategoryTotals, StatsResult};
use crate::http::{HttpClient, HttpRequest};

use super::adapter::{FetchError, StatsAdapter, fetch_json};
use super::fields::{as_object, count, path_segment, rate, reject_error_payload, total_or};

pub const DEFAULT_ALFA_BASE: &str = "https://alfa-leetcode-api.onrender.com";

/// REST mirror adapter with flat fields and per-category total fallbacks
pub struct AlfaAdapter {
    client: Arc<dyn HttpClient>,
    base_url: String,
    totals: CategoryTotals,
}

impl AlfaAdapter {
    pub const ID: &'static str = "alfa-leetcode-api";

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

    fn url(&self, identifier: &str) -> String {
        format!(
            "{}/{}/solved",
            self.base_url.trim_end_matches('/'),
            path_segment(identifier)
        )
    }
}

#[async_trait]
impl StatsAdapter for AlfaAdapter {
    fn id(&self) -> &str {
        Self::ID
    }

    async fn fetch(&self, identifier: &str) -> Result<StatsResult, FetchError> {
        let request = HttpRequest::get(self.url(identifier));
        let body = fetch_json(self.client.as_ref(), request).await?;
        normalize(&body, &self.totals)
    }
}

pub(crate) fn normalize(body: &Value, totals: &CategoryTotals) -> Result<StatsResult, FetchError> {
    let object = as_object(body)?;
    reject_error_payload(object)?;

    Ok(StatsResult {
        total_solved: count(object, "solvedProblem"),
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
