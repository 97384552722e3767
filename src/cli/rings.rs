//! Rings command implementation

use anyhow::Result;
use std::path::Path;

use solvegauge::config::Config;
use solvegauge::gauge::{CategoryCount, RingLayout, RingSpec, map_rings};

/// Parse `SOLVED/TOTAL` (e.g. `80/828`)
pub fn parse_count(value: &str) -> Result<CategoryCount, String> {
    let (solved, total) = value
        .split_once('/')
        .ok_or_else(|| format!("expected SOLVED/TOTAL, got '{}'", value))?;

    let solved = solved
        .trim()
        .parse::<u64>()
        .map_err(|e| format!("invalid solved count '{}': {}", solved.trim(), e))?;
    let total = total
        .trim()
        .parse::<u64>()
        .map_err(|e| format!("invalid total '{}': {}", total.trim(), e))?;

    Ok(CategoryCount::new(solved, total))
}

/// Print stroke lengths for the given counts
pub fn rings_command(
    config_path: Option<&Path>,
    spec: RingSpec,
    radius: Option<f64>,
    offset: Option<f64>,
    json: bool,
) -> Result<()> {
    let config = Config::load(config_path)?;
    let layout = RingLayout {
        base_radius: radius.unwrap_or(config.gauge.base_radius),
        ring_offset: offset.unwrap_or(config.gauge.ring_offset),
    };

    let gauge = map_rings(&spec, &layout);

    if json {
        println!("{}", serde_json::to_string_pretty(&gauge)?);
        return Ok(());
    }

    for ring in &gauge.rings {
        println!(
            "{:<7} r={:<5} circumference {:>7.2}  {:>6.2}%  dasharray \"{:.2} {:.2}\"  offset {:.2}",
            ring.difficulty.as_str(),
            ring.radius,
            ring.circumference,
            ring.percentage * 100.0,
            ring.dash_length,
            ring.gap_length,
            ring.dash_offset
        );
    }

    Ok(())
}
