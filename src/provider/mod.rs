//! Stats providers and the fallback chain over them.
//!
//! # Architecture
//!
//! - **[`StatsAdapter`]** - one upstream service, normalized into a
//!   [`StatsResult`](crate::domain::StatsResult):
//!   - [`GraphqlAdapter`] - the platform's GraphQL endpoint
//!   - [`AlfaAdapter`] - community REST mirror `/{user}/solved`
//!   - [`StatsApiAdapter`] - community REST mirror `/{user}`
//! - **[`StatsProvider`]** - tries adapters in order, first success wins,
//!   exhaustion degrades to a default record plus a message.
//! - **[`StatsLoader`]** - refetch and stale-result handling for consumers.
//! - **[`GithubFetcher`]** - GitHub profile counters, single source.
//!
//! # Example
//!
//! ```rust,ignore
//! use solvegauge::http::UreqClient;
//! use solvegauge::provider::{ProviderEndpoints, StatsProvider};
//!
//! let client = Arc::new(UreqClient::new(Duration::from_secs(8)));
//! let provider = StatsProvider::with_defaults(client, &ProviderEndpoints::default(), totals);
//! let outcome = provider.fetch("alice").await?;
//! if let Some(message) = &outcome.error {
//!     eprintln!("{}", message);
//! }
//! ```

mod adapter;
mod alfa;
mod fallback;
mod fields;
mod github;
mod leetcode_graphql;
mod loader;
mod stats_api;

pub use adapter::{AttemptOutcome, FetchError, ProviderAttempt, StatsAdapter};
pub use alfa::{AlfaAdapter, DEFAULT_ALFA_BASE};
pub use fallback::{DEFAULT_ADAPTER_TIMEOUT, StatsOutcome, StatsProvider, UNAVAILABLE_MESSAGE};
pub use github::{DEFAULT_GITHUB_BASE, GithubFetcher, GithubStats};
pub use leetcode_graphql::{DEFAULT_GRAPHQL_BASE, GraphqlAdapter};
pub use loader::{LoadState, StatsLoader};
pub use stats_api::{DEFAULT_STATS_API_BASE, StatsApiAdapter};

use serde::{Deserialize, Serialize};

/// Base URLs of the upstream services
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderEndpoints {
    #[serde(default = "default_graphql")]
    pub graphql: String,

    #[serde(default = "default_alfa")]
    pub alfa: String,

    #[serde(default = "default_stats_api")]
    pub stats_api: String,

    #[serde(default = "default_github")]
    pub github: String,
}

fn default_graphql() -> String {
    DEFAULT_GRAPHQL_BASE.to_string()
}

fn default_alfa() -> String {
    DEFAULT_ALFA_BASE.to_string()
}

fn default_stats_api() -> String {
    DEFAULT_STATS_API_BASE.to_string()
}

fn default_github() -> String {
    DEFAULT_GITHUB_BASE.to_string()
}

impl Default for ProviderEndpoints {
    fn default() -> Self {
        Self {
            graphql: default_graphql(),
            alfa: default_alfa(),
            stats_api: default_stats_api(),
            github: default_github(),
        }
    }
}
