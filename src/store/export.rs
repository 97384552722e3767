//! Render a profile as a file that can seed the built-in defaults

use anyhow::{Context, Result};
use serde::Serialize;

use crate::domain::PortfolioProfile;

/// Output format for [`export_profile`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ExportFormat {
    #[default]
    Json,
    Toml,
}

#[derive(Serialize)]
struct ProfileDocument<'a> {
    profile: &'a PortfolioProfile,
}

/// Serialize `profile` for pasting into a checked-in data file.
///
/// TOML output wraps the record in a `[profile]` table.
pub fn export_profile(profile: &PortfolioProfile, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Json => {
            serde_json::to_string_pretty(profile).context("Failed to serialize profile as JSON")
        }
        ExportFormat::Toml => toml::to_string_pretty(&ProfileDocument { profile })
            .context("Failed to serialize profile as TOML"),
    }
}
