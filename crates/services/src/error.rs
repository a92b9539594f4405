//! Shared error types for the services crate.

use thiserror::Error;

use milestone_core::CatalogueError;
use milestone_core::model::{AgeBand, ResponseError, ResponseRecord};
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by `MilestoneTracker`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TrackerError {
    #[error("every category in band {band} has been answered")]
    BandExhausted { band: AgeBand },
    #[error(transparent)]
    Catalogue(#[from] CatalogueError),
    #[error(transparent)]
    Response(#[from] ResponseError),
}

/// Errors emitted by `MilestoneService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MilestoneError {
    #[error(transparent)]
    Tracker(#[from] TrackerError),
    /// The answer is already applied in memory; only the cache write failed.
    #[error("failed to persist answer for band {}, {}: {source}", .record.age_band(), .record.category())]
    Persist {
        record: Box<ResponseRecord>,
        #[source]
        source: StorageError,
    },
    #[error("background save task failed: {0}")]
    BackgroundTask(String),
    #[error("no async runtime available for a background save")]
    NoRuntime,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl MilestoneError {
    /// The record whose write failed, for callers that want to retry.
    #[must_use]
    pub fn unsaved_record(&self) -> Option<&ResponseRecord> {
        match self {
            MilestoneError::Persist { record, .. } => Some(record),
            _ => None,
        }
    }
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Catalogue(#[from] CatalogueError),
}
