//! Stats adapter trait and per-attempt outcomes

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::StatsResult;
use crate::http::{HttpClient, HttpError, HttpRequest};

/// Why a single adapter could not produce a [`StatsResult`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// Non-2xx status, connection failure or timeout
    #[error("transport error: {0}")]
    Transport(String),

    /// Body could not be decoded into the expected shape
    #[error("parse error: {0}")]
    Parse(String),

    /// Decoded, but the provider says the query is invalid (e.g. unknown user)
    #[error("semantic error: {0}")]
    Semantic(String),
}

impl FetchError {
    pub fn outcome(&self) -> AttemptOutcome {
        match self {
            FetchError::Transport(_) => AttemptOutcome::TransportError,
            FetchError::Parse(_) => AttemptOutcome::ParseError,
            FetchError::Semantic(_) => AttemptOutcome::SemanticError,
        }
    }
}

impl From<HttpError> for FetchError {
    fn from(err: HttpError) -> Self {
        FetchError::Transport(err.0)
    }
}

/// Classified result of one adapter attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttemptOutcome {
    Success,
    TransportError,
    ParseError,
    SemanticError,
}

impl AttemptOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttemptOutcome::Success => "success",
            AttemptOutcome::TransportError => "transport-error",
            AttemptOutcome::ParseError => "parse-error",
            AttemptOutcome::SemanticError => "semantic-error",
        }
    }
}

impl std::fmt::Display for AttemptOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the attempt log
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderAttempt {
    /// Adapter id (e.g. `"leetcode-graphql"`)
    pub provider: String,
    pub outcome: AttemptOutcome,
    /// Error text for failed attempts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Trait for stats provider adapters
///
/// Each implementation talks to one upstream service and normalizes its
/// response shape into a [`StatsResult`].
#[async_trait]
pub trait StatsAdapter: Send + Sync {
    /// Stable identifier used in logs and the attempt log
    fn id(&self) -> &str;

    /// Fetch and normalize stats for an already validated identifier
    async fn fetch(&self, identifier: &str) -> Result<StatsResult, FetchError>;
}

/// Send a request and decode a JSON body.
///
/// Non-2xx responses are transport errors; undecodable bodies are parse errors.
pub(crate) async fn fetch_json(
    client: &dyn HttpClient,
    request: HttpRequest,
) -> Result<serde_json::Value, FetchError> {
    let response = client.send(request).await?;

    if !response.is_success() {
        return Err(FetchError::Transport(format!(
            "HTTP error! status: {}",
            response.status
        )));
    }

    serde_json::from_str(&response.body)
        .map_err(|e| FetchError::Parse(format!("Failed to parse JSON: {}", e)))
}
