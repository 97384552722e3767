//! GitHub profile counters shown next to the solved-problem gauge

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::StatsQuery;
use crate::http::{HttpClient, HttpRequest};

use super::adapter::FetchError;
use super::fields::path_segment;

pub const DEFAULT_GITHUB_BASE: &str = "https://api.github.com";

/// Public counters of a GitHub account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GithubStats {
    pub login: String,
    #[serde(default)]
    pub public_repos: u64,
    #[serde(default)]
    pub public_gists: u64,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
}

/// Single-endpoint fetcher; there is no fallback chain for GitHub
pub struct GithubFetcher {
    client: Arc<dyn HttpClient>,
    base_url: String,
}

impl GithubFetcher {
    pub fn new(client: Arc<dyn HttpClient>, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub async fn fetch(&self, query: &StatsQuery) -> Result<GithubStats, FetchError> {
        let url = format!(
            "{}/users/{}",
            self.base_url.trim_end_matches('/'),
            path_segment(query.identifier())
        );
        let request = HttpRequest::get(url).header("Accept", "application/vnd.github.v3+json");
        let response = self.client.send(request).await?;

        match response.status {
            404 => Err(FetchError::Semantic(format!(
                "GitHub user {} not found",
                query
            ))),
            status if !response.is_success() => Err(FetchError::Transport(format!(
                "HTTP error! status: {}",
                status
            ))),
            _ => serde_json::from_str(&response.body)
                .map_err(|e| FetchError::Parse(format!("Failed to parse JSON: {}", e))),
        }
    }
}
