use std::sync::Arc;

use milestone_core::Catalogue;
use milestone_core::model::{AgeBand, Category, ResponseRecord};
use storage::repository::{ResponseRepository, StorageError};
use tokio::task::JoinHandle;

use super::feed::ResponseFeed;
use super::tracker::{AnswerOutcome, MilestoneTracker, RestoreReport};
use crate::Clock;
use crate::error::MilestoneError;

/// Answer applied in memory whose cache write runs on the async runtime.
#[derive(Debug)]
pub struct PendingSave {
    outcome: AnswerOutcome,
    handle: JoinHandle<Result<(), StorageError>>,
}

impl PendingSave {
    #[must_use]
    pub fn outcome(&self) -> &AnswerOutcome {
        &self.outcome
    }

    /// Wait for the write to finish.
    ///
    /// # Errors
    ///
    /// Returns `MilestoneError::Persist` carrying the unsaved record if the
    /// write failed, or `MilestoneError::BackgroundTask` if the task died.
    pub async fn wait(self) -> Result<AnswerOutcome, MilestoneError> {
        match self.handle.await {
            Ok(Ok(())) => Ok(self.outcome),
            Ok(Err(source)) => Err(persist_failed(self.outcome.record, source)),
            Err(join) => Err(MilestoneError::BackgroundTask(join.to_string())),
        }
    }
}

fn persist_failed(record: ResponseRecord, source: StorageError) -> MilestoneError {
    tracing::warn!(
        band = %record.age_band(),
        category = %record.category(),
        error = %source,
        "milestone answer kept in memory but not persisted"
    );
    MilestoneError::Persist {
        record: Box::new(record),
        source,
    }
}

/// Connects the in-memory tracker to the response cache.
#[derive(Clone)]
pub struct MilestoneService {
    clock: Clock,
    catalogue: Arc<Catalogue>,
    responses: Arc<dyn ResponseRepository>,
}

impl MilestoneService {
    #[must_use]
    pub fn new(
        clock: Clock,
        catalogue: Arc<Catalogue>,
        responses: Arc<dyn ResponseRepository>,
    ) -> Self {
        Self {
            clock,
            catalogue,
            responses,
        }
    }

    #[must_use]
    pub fn catalogue(&self) -> Arc<Catalogue> {
        Arc::clone(&self.catalogue)
    }

    /// A tracker with no answers, positioned at the first band.
    #[must_use]
    pub fn tracker(&self) -> MilestoneTracker {
        MilestoneTracker::new(Arc::clone(&self.catalogue))
    }

    /// Build a tracker from every cached response.
    ///
    /// # Errors
    ///
    /// Returns `MilestoneError::Storage` if the cache cannot be read.
    pub async fn load(&self) -> Result<(MilestoneTracker, RestoreReport), MilestoneError> {
        let mut tracker = self.tracker();
        let report = self.reload(&mut tracker).await?;
        Ok((tracker, report))
    }

    /// Replace the tracker's answers with the cache contents.
    ///
    /// # Errors
    ///
    /// Returns `MilestoneError::Storage` if the cache cannot be read.
    pub async fn reload(&self, tracker: &mut MilestoneTracker) -> Result<RestoreReport, MilestoneError> {
        let records = self.responses.all_responses().await?;
        let report = tracker.restore(records);
        tracing::info!(
            applied = report.applied,
            skipped = report.skipped,
            overall = tracker.overall_percentage(),
            "restored milestone responses"
        );
        Ok(report)
    }

    /// Answer the current question and persist it.
    ///
    /// The tracker is updated before the write and is not rolled back if the
    /// write fails.
    ///
    /// # Errors
    ///
    /// Returns `MilestoneError::Tracker` if there is no current question, or
    /// `MilestoneError::Persist` with the unsaved record if the write failed.
    pub async fn answer(
        &self,
        tracker: &mut MilestoneTracker,
        yes: bool,
    ) -> Result<AnswerOutcome, MilestoneError> {
        let outcome = tracker.answer(yes, self.clock.now())?;
        match self.responses.save_response(&outcome.record).await {
            Ok(()) => Ok(outcome),
            Err(source) => Err(persist_failed(outcome.record, source)),
        }
    }

    /// Answer the current question and persist it on a runtime task.
    ///
    /// # Errors
    ///
    /// Returns `MilestoneError::NoRuntime` outside a tokio runtime (the
    /// tracker is left untouched), or `MilestoneError::Tracker` if there is no
    /// current question.
    pub fn answer_in_background(
        &self,
        tracker: &mut MilestoneTracker,
        yes: bool,
    ) -> Result<PendingSave, MilestoneError> {
        let runtime =
            tokio::runtime::Handle::try_current().map_err(|_| MilestoneError::NoRuntime)?;
        let outcome = tracker.answer(yes, self.clock.now())?;

        let responses = Arc::clone(&self.responses);
        let record = outcome.record.clone();
        let handle = runtime.spawn(async move { responses.save_response(&record).await });

        Ok(PendingSave { outcome, handle })
    }

    /// Persist a record again after a failed write.
    ///
    /// # Errors
    ///
    /// Returns `MilestoneError::Persist` if the write fails again.
    pub async fn retry_save(&self, record: &ResponseRecord) -> Result<(), MilestoneError> {
        self.responses
            .save_response(record)
            .await
            .map_err(|source| persist_failed(record.clone(), source))
    }

    /// Subscribe to cache changes; each snapshot can be fed to `restore`.
    #[must_use]
    pub fn subscribe(&self) -> ResponseFeed {
        ResponseFeed::new(Arc::clone(&self.responses))
    }

    /// Every cached response.
    ///
    /// # Errors
    ///
    /// Returns `MilestoneError::Storage` on read failures.
    pub async fn all_responses(&self) -> Result<Vec<ResponseRecord>, MilestoneError> {
        Ok(self.responses.all_responses().await?)
    }

    /// Cached responses for one band.
    ///
    /// # Errors
    ///
    /// Returns `MilestoneError::Storage` on read failures.
    pub async fn responses_for_band(
        &self,
        band: AgeBand,
    ) -> Result<Vec<ResponseRecord>, MilestoneError> {
        Ok(self.responses.responses_for_band(band).await?)
    }

    /// Cached responses for one band and category.
    ///
    /// # Errors
    ///
    /// Returns `MilestoneError::Storage` on read failures.
    pub async fn responses_for_band_category(
        &self,
        band: AgeBand,
        category: Category,
    ) -> Result<Vec<ResponseRecord>, MilestoneError> {
        Ok(self
            .responses
            .responses_for_band_category(band, category)
            .await?)
    }

    /// Remove every cached response. Trackers pick this up on their next reload.
    ///
    /// # Errors
    ///
    /// Returns `MilestoneError::Storage` if the cache cannot be cleared.
    pub async fn clear_all(&self) -> Result<(), MilestoneError> {
        self.responses.clear_all().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use milestone_core::time::fixed_now;
    use storage::repository::InMemoryRepository;

    fn service(repo: &InMemoryRepository) -> MilestoneService {
        MilestoneService::new(
            Clock::fixed(fixed_now()),
            Arc::new(Catalogue::standard().unwrap()),
            Arc::new(repo.clone()),
        )
    }

    #[tokio::test]
    async fn answer_persists_record_with_clock_time() {
        let repo = InMemoryRepository::new();
        let svc = service(&repo);
        let mut tracker = svc.tracker();

        let outcome = svc.answer(&mut tracker, true).await.unwrap();
        assert_eq!(outcome.record.answered_at(), fixed_now());

        let stored = repo.all_responses().await.unwrap();
        assert_eq!(stored, vec![outcome.record]);
    }

    #[tokio::test]
    async fn background_answer_resolves_after_write() {
        let repo = InMemoryRepository::new();
        let svc = service(&repo);
        let mut tracker = svc.tracker();

        let pending = svc.answer_in_background(&mut tracker, false).unwrap();
        assert_eq!(tracker.response_count(), 1);
        let outcome = pending.wait().await.unwrap();
        assert!(!outcome.record.answer());
        assert_eq!(repo.all_responses().await.unwrap().len(), 1);
    }

    #[test]
    fn background_answer_needs_runtime() {
        let repo = InMemoryRepository::new();
        let svc = service(&repo);
        let mut tracker = svc.tracker();

        let err = svc.answer_in_background(&mut tracker, true).unwrap_err();
        assert!(matches!(err, MilestoneError::NoRuntime));
        assert_eq!(tracker.response_count(), 0);
    }
}
