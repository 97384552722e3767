//! Injected storage for the editable portfolio profile
//!
//! The profile used to live in ambient browser storage. Here it sits behind
//! the [`ProfileStore`] trait so nothing else in the crate touches storage
//! directly; stats fetching and gauge mapping have no storage dependency.

mod export;
mod file;
mod memory;

pub use export::{ExportFormat, export_profile};
pub use file::FileProfileStore;
pub use memory::MemoryProfileStore;

use anyhow::Result;

use crate::domain::PortfolioProfile;

/// Storage capability for the profile record
pub trait ProfileStore: Send + Sync {
    /// Stored profile, `None` when nothing has been saved
    fn get(&self) -> Result<Option<PortfolioProfile>>;

    /// Replace the stored profile
    fn set(&self, profile: &PortfolioProfile) -> Result<()>;

    /// Remove the stored profile
    fn clear(&self) -> Result<()>;
}

/// Stored profile, or the built-in initial profile when the store is empty
pub fn load_or_initial(store: &dyn ProfileStore) -> Result<PortfolioProfile> {
    Ok(store.get()?.unwrap_or_default())
}

/// Apply `edit` to the current profile and persist the result
pub fn update(
    store: &dyn ProfileStore,
    edit: impl FnOnce(&mut PortfolioProfile) -> Result<()>,
) -> Result<PortfolioProfile> {
    let mut profile = load_or_initial(store)?;
    edit(&mut profile)?;
    store.set(&profile)?;
    Ok(profile)
}
