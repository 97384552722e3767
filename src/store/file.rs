//! JSON-file profile store (`~/.solvegauge/profile.json`)

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::Config;
use crate::domain::PortfolioProfile;
use crate::persist::write_atomic;

use super::ProfileStore;

const PROFILE_FILE: &str = "profile.json";

/// Profile store persisted as pretty-printed JSON
pub struct FileProfileStore {
    path: PathBuf,
}

impl FileProfileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default location inside the global config directory
    pub fn open_default() -> Self {
        Self::new(Config::global_config_dir().join(PROFILE_FILE))
    }

    /// Store next to an explicit config file, or the default one
    pub fn for_config(config_path: Option<&Path>) -> Self {
        match config_path.and_then(Path::parent) {
            Some(dir) => Self::new(dir.join(PROFILE_FILE)),
            None => Self::open_default(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProfileStore for FileProfileStore {
    fn get(&self) -> Result<Option<PortfolioProfile>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read profile: {}", self.path.display()))?;

        let profile = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse profile: {}", self.path.display()))?;

        Ok(Some(profile))
    }

    fn set(&self, profile: &PortfolioProfile) -> Result<()> {
        let content =
            serde_json::to_string_pretty(profile).context("Failed to serialize profile")?;
        write_atomic(&self.path, &content)?;
        tracing::debug!("Saved profile to {}", self.path.display());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e)
                .with_context(|| format!("Failed to remove profile: {}", self.path.display())),
        }
    }
}
