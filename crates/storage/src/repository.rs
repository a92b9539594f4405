use async_trait::async_trait;
use milestone_core::model::{AgeBand, Category, ResponseKey, ResponseRecord};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tokio::sync::watch;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Revision counter bumped after every committed write or clear.
///
/// Subscribers see only the latest revision; intermediate bumps coalesce.
#[derive(Debug, Clone)]
pub struct ChangeNotifier {
    tx: Arc<watch::Sender<u64>>,
}

impl ChangeNotifier {
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(0);
        Self { tx: Arc::new(tx) }
    }

    pub fn bump(&self) {
        self.tx.send_modify(|rev| *rev = rev.wrapping_add(1));
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.tx.subscribe()
    }
}

impl Default for ChangeNotifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Local cache of milestone answers, keyed by band, category and question.
#[async_trait]
pub trait ResponseRepository: Send + Sync {
    /// Insert or overwrite the answer for the record's key.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be stored.
    async fn save_response(&self, record: &ResponseRecord) -> Result<(), StorageError>;

    /// Every cached answer, ordered by band, category and question text.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on read or decode failures.
    async fn all_responses(&self) -> Result<Vec<ResponseRecord>, StorageError>;

    /// Cached answers for one band, in the same order as `all_responses`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on read or decode failures.
    async fn responses_for_band(&self, band: AgeBand) -> Result<Vec<ResponseRecord>, StorageError>;

    /// Cached answers for one band and category, ordered by question text.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on read or decode failures.
    async fn responses_for_band_category(
        &self,
        band: AgeBand,
        category: Category,
    ) -> Result<Vec<ResponseRecord>, StorageError>;

    /// Remove every cached answer.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the cache cannot be cleared.
    async fn clear_all(&self) -> Result<(), StorageError>;

    /// Subscribe to cache revisions. The receiver reports a change after
    /// each successful save or clear.
    fn subscribe(&self) -> watch::Receiver<u64>;
}

pub(crate) fn sort_records(records: &mut [ResponseRecord]) {
    records.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    responses: Arc<Mutex<HashMap<ResponseKey, ResponseRecord>>>,
    changes: ChangeNotifier,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn collect(
        &self,
        keep: impl Fn(&ResponseRecord) -> bool,
    ) -> Result<Vec<ResponseRecord>, StorageError> {
        let guard = self
            .responses
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let mut out: Vec<ResponseRecord> = guard.values().filter(|r| keep(r)).cloned().collect();
        sort_records(&mut out);
        Ok(out)
    }
}

#[async_trait]
impl ResponseRepository for InMemoryRepository {
    async fn save_response(&self, record: &ResponseRecord) -> Result<(), StorageError> {
        {
            let mut guard = self
                .responses
                .lock()
                .map_err(|e| StorageError::Connection(e.to_string()))?;
            guard.insert(record.key(), record.clone());
        }
        self.changes.bump();
        Ok(())
    }

    async fn all_responses(&self) -> Result<Vec<ResponseRecord>, StorageError> {
        self.collect(|_| true)
    }

    async fn responses_for_band(&self, band: AgeBand) -> Result<Vec<ResponseRecord>, StorageError> {
        self.collect(|r| r.age_band() == band)
    }

    async fn responses_for_band_category(
        &self,
        band: AgeBand,
        category: Category,
    ) -> Result<Vec<ResponseRecord>, StorageError> {
        self.collect(|r| r.age_band() == band && r.category() == category)
    }

    async fn clear_all(&self) -> Result<(), StorageError> {
        {
            let mut guard = self
                .responses
                .lock()
                .map_err(|e| StorageError::Connection(e.to_string()))?;
            guard.clear();
        }
        self.changes.bump();
        Ok(())
    }

    fn subscribe(&self) -> watch::Receiver<u64> {
        self.changes.subscribe()
    }
}

/// Holds the response repository behind a trait object for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub responses: Arc<dyn ResponseRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let responses: Arc<dyn ResponseRepository> = Arc::new(InMemoryRepository::new());
        Self { responses }
    }
}
