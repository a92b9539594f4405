use std::sync::Arc;

use milestone_core::Catalogue;
use storage::repository::Storage;

use crate::Clock;
use crate::error::AppServicesError;
use crate::milestones::MilestoneService;

/// Assembles app-facing services over one storage backend.
#[derive(Clone)]
pub struct AppServices {
    catalogue: Arc<Catalogue>,
    milestones: Arc<MilestoneService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails or the
    /// built-in catalogue does not validate.
    pub async fn new_sqlite(db_url: &str, clock: Clock) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Self::from_storage(&storage, clock)
    }

    /// Build services over an in-memory cache.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Catalogue` if the built-in catalogue does not validate.
    pub fn in_memory(clock: Clock) -> Result<Self, AppServicesError> {
        Self::from_storage(&Storage::in_memory(), clock)
    }

    fn from_storage(storage: &Storage, clock: Clock) -> Result<Self, AppServicesError> {
        let catalogue = Arc::new(Catalogue::standard()?);
        let milestones = Arc::new(MilestoneService::new(
            clock,
            Arc::clone(&catalogue),
            Arc::clone(&storage.responses),
        ));
        Ok(Self {
            catalogue,
            milestones,
        })
    }

    #[must_use]
    pub fn catalogue(&self) -> Arc<Catalogue> {
        Arc::clone(&self.catalogue)
    }

    #[must_use]
    pub fn milestones(&self) -> Arc<MilestoneService> {
        Arc::clone(&self.milestones)
    }
}
