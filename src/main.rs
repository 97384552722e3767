use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

use cli::profile::ProfileAction;

#[derive(Parser)]
#[command(name = "solvegauge")]
#[command(about = "Problem-solving stats with provider fallback and a ring gauge")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.solvegauge/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch stats through the provider fallback chain
    Fetch {
        /// Username (overrides config and stored profile)
        #[arg(short, long)]
        user: Option<String>,

        /// Print the full outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compute ring gauge stroke lengths from solved/total pairs
    Rings {
        /// Easy count as SOLVED/TOTAL
        #[arg(long, value_parser = cli::rings::parse_count)]
        easy: solvegauge::gauge::CategoryCount,

        /// Medium count as SOLVED/TOTAL
        #[arg(long, value_parser = cli::rings::parse_count)]
        medium: solvegauge::gauge::CategoryCount,

        /// Hard count as SOLVED/TOTAL
        #[arg(long, value_parser = cli::rings::parse_count)]
        hard: solvegauge::gauge::CategoryCount,

        /// Outer ring radius (overrides config)
        #[arg(long)]
        radius: Option<f64>,

        /// Radius step between rings (overrides config)
        #[arg(long)]
        offset: Option<f64>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show GitHub profile counters
    Github {
        /// GitHub username (overrides config and stored profile)
        #[arg(short, long)]
        user: Option<String>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Inspect or edit the stored portfolio profile (profile.json beside the config file)
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// Write a default ~/.solvegauge/config.toml
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.as_deref();

    match cli.command {
        Some(Commands::Fetch { user, json }) => {
            cli::fetch::fetch_command(config_path, user.as_deref(), json).await?;
        }
        Some(Commands::Rings {
            easy,
            medium,
            hard,
            radius,
            offset,
            json,
        }) => {
            let spec = solvegauge::gauge::RingSpec::new(easy, medium, hard);
            cli::rings::rings_command(config_path, spec, radius, offset, json)?;
        }
        Some(Commands::Github { user, json }) => {
            cli::github::github_command(config_path, user.as_deref(), json).await?;
        }
        Some(Commands::Profile { action }) => {
            cli::profile::profile_command(config_path, action)?;
        }
        Some(Commands::Init { force }) => {
            cli::init::init_command(config_path, force)?;
        }
        None => {
            // Default: fetch with configured username
            cli::fetch::fetch_command(config_path, None, false).await?;
        }
    }

    Ok(())
}
