//! Profile command implementation

use std::path::Path;

use anyhow::Result;
use clap::Subcommand;

use solvegauge::store::{
    ExportFormat, FileProfileStore, ProfileStore, export_profile, load_or_initial, update,
};

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Print the stored profile (or the built-in initial one)
    Show,

    /// Set a profile field (skills takes a comma-separated list)
    Set {
        /// One of: name, title, bio, profile_pic, github_username,
        /// leetcode_username, ambitions, email, linkedin, skills
        field: String,
        value: String,
    },

    /// Discard the stored profile and return to the initial one
    Reset,

    /// Print the profile for checking into a data file
    Export {
        #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
    },
}

/// Run a profile action against `profile.json` beside the config file
pub fn profile_command(config_path: Option<&Path>, action: ProfileAction) -> Result<()> {
    let store = FileProfileStore::for_config(config_path);
    run(&store, action)
}

fn run(store: &dyn ProfileStore, action: ProfileAction) -> Result<()> {
    match action {
        ProfileAction::Show => {
            let profile = load_or_initial(store)?;
            println!("{}", export_profile(&profile, ExportFormat::Toml)?);
        }
        ProfileAction::Set { field, value } => {
            update(store, |profile| Ok(profile.set_field(&field, &value)?))?;
            println!("Updated {}", field);
        }
        ProfileAction::Reset => {
            store.clear()?;
            println!("Profile reset to initial data");
        }
        ProfileAction::Export { format } => {
            let profile = load_or_initial(store)?;
            println!("{}", export_profile(&profile, format)?);
        }
    }
    Ok(())
}
