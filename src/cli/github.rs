//! GitHub command implementation

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;

use solvegauge::StatsQuery;
use solvegauge::config::Config;
use solvegauge::http::UreqClient;
use solvegauge::provider::GithubFetcher;
use solvegauge::store::{FileProfileStore, ProfileStore};

/// Print public counters of a GitHub account
pub async fn github_command(config_path: Option<&Path>, user: Option<&str>, json: bool) -> Result<()> {
    let config = Config::load(config_path)?;
    let profile = FileProfileStore::for_config(config_path).get().unwrap_or_else(|e| {
        tracing::warn!("Ignoring unreadable profile: {:#}", e);
        None
    });

    let username = config
        .github_username(user, profile.as_ref())
        .unwrap_or_default();
    let query = StatsQuery::new(username).context("GitHub username is required")?;

    let client = Arc::new(UreqClient::new(config.stats.timeout()));
    let fetcher = GithubFetcher::new(client, config.providers.github.clone());
    let stats = fetcher
        .fetch(&query)
        .await
        .with_context(|| format!("Failed to fetch GitHub profile for {}", query))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("GitHub @{}\n", stats.login);
    println!("  Public repos  {}", stats.public_repos);
    println!("  Followers     {}", stats.followers);
    println!("  Following     {}", stats.following);
    println!("  Gists         {}", stats.public_gists);

    Ok(())
}
