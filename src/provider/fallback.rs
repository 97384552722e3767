//! Ordered fallback across stats adapters
//!
//! Adapters are tried strictly in priority order, one at a time. The first
//! adapter that yields a [`StatsResult`] wins and no later adapter is
//! consulted. When every adapter fails, the outcome still carries a
//! renderable default record plus a human-readable message; only an invalid
//! identifier is reported as an error.
//!
//! ```text
//! identifier ──► validate ──► A ──fail──► B ──fail──► C ──fail──► default + message
//!                   │          │           │           │
//!                   ▼          └──ok───────┴──ok───────┴──ok──► StatsResult
//!            ValidationError
//! ```

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{CategoryTotals, StatsQuery, StatsResult, ValidationError};
use crate::http::HttpClient;

use super::ProviderEndpoints;
use super::adapter::{AttemptOutcome, FetchError, ProviderAttempt, StatsAdapter};
use super::alfa::AlfaAdapter;
use super::leetcode_graphql::GraphqlAdapter;
use super::stats_api::StatsApiAdapter;

/// Message attached to the default record when every provider failed
pub const UNAVAILABLE_MESSAGE: &str =
    "Unable to fetch data. Please check your username and try again.";

/// Per-adapter timeout applied when none is configured
pub const DEFAULT_ADAPTER_TIMEOUT: Duration = Duration::from_secs(8);

/// Result of one full pass over the adapter list
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsOutcome {
    pub identifier: String,
    /// Winning adapter's record, or the default record when all failed
    pub stats: StatsResult,
    /// Id of the adapter that produced `stats`
    pub source: Option<String>,
    /// Set only when every adapter failed
    pub error: Option<String>,
    /// Every attempt in the order it was made
    pub attempts: Vec<ProviderAttempt>,
    pub fetched_at: DateTime<Utc>,
}

impl StatsOutcome {
    /// `true` when `stats` is the default record rather than provider data
    pub fn is_degraded(&self) -> bool {
        self.error.is_some()
    }
}

/// Multi-provider stats fetcher
#[derive(Clone)]
pub struct StatsProvider {
    adapters: Vec<Arc<dyn StatsAdapter>>,
    totals: CategoryTotals,
    timeout: Duration,
}

impl StatsProvider {
    /// Create a provider over `adapters`, tried in the given order
    pub fn new(adapters: Vec<Arc<dyn StatsAdapter>>, totals: CategoryTotals) -> Self {
        Self {
            adapters,
            totals,
            timeout: DEFAULT_ADAPTER_TIMEOUT,
        }
    }

    /// Create the standard GraphQL → alfa mirror → stats-api mirror chain
    pub fn with_defaults(
        client: Arc<dyn HttpClient>,
        endpoints: &ProviderEndpoints,
        totals: CategoryTotals,
    ) -> Self {
        let adapters: Vec<Arc<dyn StatsAdapter>> = vec![
            Arc::new(GraphqlAdapter::new(
                Arc::clone(&client),
                endpoints.graphql.clone(),
            )),
            Arc::new(AlfaAdapter::new(
                Arc::clone(&client),
                endpoints.alfa.clone(),
                totals,
            )),
            Arc::new(StatsApiAdapter::new(
                client,
                endpoints.stats_api.clone(),
                totals,
            )),
        ];
        Self::new(adapters, totals)
    }

    /// Override the per-adapter timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Adapter ids in priority order
    pub fn adapter_ids(&self) -> Vec<&str> {
        self.adapters.iter().map(|a| a.id()).collect()
    }

    pub fn totals(&self) -> &CategoryTotals {
        &self.totals
    }

    /// Validate `identifier` and run the fallback chain.
    ///
    /// Returns `Err` only for an empty identifier, in which case no adapter
    /// is called.
    pub async fn fetch(&self, identifier: &str) -> Result<StatsOutcome, ValidationError> {
        let query = StatsQuery::new(identifier)?;
        Ok(self.fetch_query(&query).await)
    }

    /// Run the fallback chain for an already validated query
    pub async fn fetch_query(&self, query: &StatsQuery) -> StatsOutcome {
        let mut attempts = Vec::with_capacity(self.adapters.len());

        for adapter in &self.adapters {
            let id = adapter.id();
            tracing::debug!("Fetching stats for {} from {}", query, id);

            match self.attempt(adapter.as_ref(), query).await {
                Ok(stats) => {
                    tracing::info!("Stats for {} served by {}", query, id);
                    attempts.push(ProviderAttempt {
                        provider: id.to_string(),
                        outcome: AttemptOutcome::Success,
                        detail: None,
                    });
                    return StatsOutcome {
                        identifier: query.identifier().to_string(),
                        stats,
                        source: Some(id.to_string()),
                        error: None,
                        attempts,
                        fetched_at: Utc::now(),
                    };
                }
                Err(e) => {
                    tracing::warn!("Provider {} failed ({}), trying next: {}", id, e.outcome(), e);
                    attempts.push(ProviderAttempt {
                        provider: id.to_string(),
                        outcome: e.outcome(),
                        detail: Some(e.to_string()),
                    });
                }
            }
        }

        tracing::error!(
            "All {} stats providers failed for {}",
            self.adapters.len(),
            query
        );

        StatsOutcome {
            identifier: query.identifier().to_string(),
            stats: StatsResult::unavailable(&self.totals),
            source: None,
            error: Some(UNAVAILABLE_MESSAGE.to_string()),
            attempts,
            fetched_at: Utc::now(),
        }
    }

    async fn attempt(
        &self,
        adapter: &dyn StatsAdapter,
        query: &StatsQuery,
    ) -> Result<StatsResult, FetchError> {
        tokio::time::timeout(self.timeout, adapter.fetch(query.identifier()))
            .await
            .unwrap_or_else(|_| {
                Err(FetchError::Transport(format!(
                    "timed out after {:?}",
                    self.timeout
                )))
            })
    }
}
