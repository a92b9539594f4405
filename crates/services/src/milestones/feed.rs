use std::sync::Arc;

use milestone_core::model::ResponseRecord;
use storage::repository::{ResponseRepository, StorageError};
use tokio::sync::watch;

/// Long-lived view of the response cache.
///
/// The first call to [`ResponseFeed::next_snapshot`] returns the current
/// contents immediately; later calls wait for the next write or clear and
/// return a fresh full snapshot. Bursts of writes coalesce into one snapshot.
pub struct ResponseFeed {
    responses: Arc<dyn ResponseRepository>,
    changes: watch::Receiver<u64>,
    primed: bool,
}

impl ResponseFeed {
    pub(crate) fn new(responses: Arc<dyn ResponseRepository>) -> Self {
        let changes = responses.subscribe();
        Self {
            responses,
            changes,
            primed: false,
        }
    }

    /// Wait for the next snapshot of every cached response.
    ///
    /// Returns `Ok(None)` if the change channel has closed.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if reading the cache fails.
    pub async fn next_snapshot(&mut self) -> Result<Option<Vec<ResponseRecord>>, StorageError> {
        if self.primed {
            if self.changes.changed().await.is_err() {
                return Ok(None);
            }
        } else {
            self.primed = true;
        }
        let revision = *self.changes.borrow_and_update();
        let snapshot = self.responses.all_responses().await?;
        tracing::debug!(revision, records = snapshot.len(), "response cache replay");
        Ok(Some(snapshot))
    }
}

impl std::fmt::Debug for ResponseFeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseFeed")
            .field("revision", &*self.changes.borrow())
            .field("primed", &self.primed)
            .finish_non_exhaustive()
    }
}
