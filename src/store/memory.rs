//! In-process profile store

use std::sync::Mutex;

use anyhow::{Result, anyhow};

use crate::domain::PortfolioProfile;

use super::ProfileStore;

/// Profile store that lives only as long as the process
#[derive(Default)]
pub struct MemoryProfileStore {
    profile: Mutex<Option<PortfolioProfile>>,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(profile: PortfolioProfile) -> Self {
        Self {
            profile: Mutex::new(Some(profile)),
        }
    }
}

impl ProfileStore for MemoryProfileStore {
    fn get(&self) -> Result<Option<PortfolioProfile>> {
        let guard = self
            .profile
            .lock()
            .map_err(|_| anyhow!("profile store lock poisoned"))?;
        Ok(guard.clone())
    }

    fn set(&self, profile: &PortfolioProfile) -> Result<()> {
        let mut guard = self
            .profile
            .lock()
            .map_err(|_| anyhow!("profile store lock poisoned"))?;
        *guard = Some(profile.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut guard = self
            .profile
            .lock()
            .map_err(|_| anyhow!("profile store lock poisoned"))?;
        *guard = None;
        Ok(())
    }
}
