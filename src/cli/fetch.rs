//! Fetch command implementation

use anyhow::{Result, bail};
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;

use solvegauge::config::Config;
use solvegauge::gauge::{RingGauge, RingLayout, RingSpec, map_rings};
use solvegauge::http::UreqClient;
use solvegauge::provider::{LoadState, StatsLoader, StatsOutcome, StatsProvider};
use solvegauge::store::{FileProfileStore, ProfileStore};
use solvegauge::{Difficulty, PortfolioProfile};

#[derive(Serialize)]
struct FetchReport<'a> {
    outcome: &'a StatsOutcome,
    gauge: RingGauge,
}

/// Run the provider fallback chain and print the result
pub async fn fetch_command(config_path: Option<&Path>, user: Option<&str>, json: bool) -> Result<()> {
    let config = Config::load(config_path)?;
    let profile = stored_profile(config_path);
    let username = config
        .stats_username(user, profile.as_ref())
        .unwrap_or_default();

    let client = Arc::new(UreqClient::new(config.stats.timeout()));
    let provider = StatsProvider::with_defaults(client, &config.providers, config.stats.totals)
        .with_timeout(config.stats.timeout());

    let mut loader = StatsLoader::start(Arc::new(provider), username);
    let outcome = match loader.wait().await {
        LoadState::Ready(outcome) => outcome.clone(),
        LoadState::Invalid(message) => bail!(
            "{}. Pass --user, set [stats].username, or `solvegauge profile set leetcode_username <name>`",
            message
        ),
        LoadState::Failed(message) => bail!("{}", message),
        LoadState::Idle | LoadState::Loading => bail!("Stats request did not complete"),
    };

    let gauge = map_rings(&RingSpec::from(&outcome.stats), &config.gauge);

    if json {
        let report = FetchReport {
            outcome: &outcome,
            gauge,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_outcome(&outcome, &gauge, &config.gauge);
    Ok(())
}

/// The stored profile, if any. A broken profile file must not block fetching.
fn stored_profile(config_path: Option<&Path>) -> Option<PortfolioProfile> {
    match FileProfileStore::for_config(config_path).get() {
        Ok(profile) => profile,
        Err(e) => {
            tracing::warn!("Ignoring unreadable profile: {:#}", e);
            None
        }
    }
}

fn print_outcome(outcome: &StatsOutcome, gauge: &RingGauge, layout: &RingLayout) {
    let stats = &outcome.stats;

    match &outcome.source {
        Some(source) => println!("Stats for {} (via {})\n", outcome.identifier, source),
        None => println!("Stats for {} (unavailable)\n", outcome.identifier),
    }

    println!(
        "  Solved      {}/{}",
        stats.total_solved,
        stats.total_available()
    );

    for difficulty in Difficulty::ALL {
        let ring = gauge.ring(difficulty);
        println!(
            "  {:<10}  {:>4}/{:<5}  r={:<5} dash {:>7.2}  gap {:>7.2}",
            difficulty.as_str(),
            stats.solved(difficulty),
            stats.total(difficulty),
            ring.radius,
            ring.dash_length,
            ring.gap_length
        );
    }

    println!("  Acceptance  {:.1}%", stats.acceptance_rate_percent);
    if stats.ranking > 0 {
        println!("  Ranking     {}", stats.ranking);
    } else {
        println!("  Ranking     -");
    }
    println!(
        "  Gauge       outer radius {}, step {}",
        layout.base_radius, layout.ring_offset
    );

    println!("\nAttempts:");
    for (index, attempt) in outcome.attempts.iter().enumerate() {
        match &attempt.detail {
            Some(detail) => println!(
                "  {}. {:<20} {:<16} {}",
                index + 1,
                attempt.provider,
                attempt.outcome.as_str(),
                detail
            ),
            None => println!(
                "  {}. {:<20} {}",
                index + 1,
                attempt.provider,
                attempt.outcome.as_str()
            ),
        }
    }

    if let Some(message) = &outcome.error {
        println!("\n{}", message);
        println!("Run `solvegauge fetch` again to retry.");
    }
}
