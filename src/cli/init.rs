//! Init command implementation

use anyhow::{Result, bail};
use std::path::Path;

use solvegauge::config::Config;
use solvegauge::persist::write_atomic;

/// Default configuration content for solvegauge init
pub const DEFAULT_CONFIG: &str = r#"# solvegauge configuration
# ========================

# ============================================================================
# STATS - Provider fallback chain
# ============================================================================
#
# Providers are tried in order: GraphQL endpoint, alfa mirror, stats-api
# mirror. The first one that answers wins; if all fail, a zeroed record is
# shown together with an error message.
#
#   username         - Provider username (falls back to the stored profile)
#   github_username  - GitHub account (falls back to the stored profile)
#   timeout_secs     - Per-provider timeout in seconds (default: 8)

[stats]
# username = "your-name"
# github_username = "your-name"
timeout_secs = 8

# Category totals used when a provider omits them. These track the
# platform's problem corpus and drift over time.
[stats.totals]
easy = 828
medium = 1732
hard = 758

# ============================================================================
# GAUGE - Concentric ring geometry (easy outermost, hard innermost)
# ============================================================================
[gauge]
base_radius = 42.0
ring_offset = 7.0

# ============================================================================
# PROVIDERS - Upstream base URLs
# ============================================================================
[providers]
graphql = "https://leetcode.com"
alfa = "https://alfa-leetcode-api.onrender.com"
stats_api = "https://leetcode-stats-api.herokuapp.com"
github = "https://api.github.com"
"#;

/// Write the default configuration file
pub fn init_command(config_path: Option<&Path>, force: bool) -> Result<()> {
    let global_path = Config::global_config_path();
    let config_path = config_path.unwrap_or(global_path.as_path());

    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    write_atomic(config_path, DEFAULT_CONFIG)?;
    println!("Created: {}", config_path.display());

    Ok(())
}
