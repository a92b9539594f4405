use chrono::{DateTime, Utc};
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::sync::Arc;

use milestone_core::model::{AgeBand, Category, ResponseKey, ResponseRecord};
use milestone_core::{BandProgress, Catalogue, ProgressReport};

use crate::error::TrackerError;

//
// ─── POSITION ──────────────────────────────────────────────────────────────────
//

/// Where the tracker is within the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Question {
        band: AgeBand,
        category: Category,
        index: usize,
    },
    /// All four categories of the band have been walked.
    BandComplete { band: AgeBand },
}

impl Position {
    #[must_use]
    pub fn band(&self) -> AgeBand {
        match self {
            Position::Question { band, .. } | Position::BandComplete { band } => *band,
        }
    }

    /// Active category, or `None` once the band is exhausted.
    #[must_use]
    pub fn category(&self) -> Option<Category> {
        match self {
            Position::Question { category, .. } => Some(*category),
            Position::BandComplete { .. } => None,
        }
    }
}

/// Result of answering the current question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub record: ResponseRecord,
    /// Position after advancing.
    pub position: Position,
    /// True only on the answer that first completed the band.
    pub band_completed: bool,
}

/// Counts from replacing the response table with a cached snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RestoreReport {
    pub applied: usize,
    /// Records whose key names no catalogue question.
    pub skipped: usize,
}

//
// ─── TRACKER ───────────────────────────────────────────────────────────────────
//

/// In-memory milestone questionnaire.
///
/// Walks one band at a time: questions in order, then the next category,
/// until all four categories are exhausted. Answers live in a table keyed by
/// band, category and question; percentages are rebuilt from that table by a
/// full rescan after every change.
pub struct MilestoneTracker {
    catalogue: Arc<Catalogue>,
    position: Position,
    responses: HashMap<ResponseKey, ResponseRecord>,
    completed: BTreeSet<AgeBand>,
    progress: ProgressReport,
}

impl MilestoneTracker {
    #[must_use]
    pub fn new(catalogue: Arc<Catalogue>) -> Self {
        let band = catalogue.bands().next().unwrap_or(AgeBand::FIRST);
        let progress = ProgressReport::empty(&catalogue);
        Self {
            catalogue,
            position: Position::Question {
                band,
                category: Category::first(),
                index: 0,
            },
            responses: HashMap::new(),
            completed: BTreeSet::new(),
            progress,
        }
    }

    #[must_use]
    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Switch to another band, starting at its first category and question.
    ///
    /// Numbers that do not name a catalogue band are ignored; the return
    /// value tells whether the switch happened.
    pub fn select_age_band(&mut self, number: u8) -> bool {
        let Some(band) = AgeBand::new(number)
            .ok()
            .filter(|band| self.catalogue.contains_band(*band))
        else {
            tracing::debug!(number, "ignoring selection of unknown age band");
            return false;
        };
        self.position = Position::Question {
            band,
            category: Category::first(),
            index: 0,
        };
        true
    }

    /// Switch category within the current band and restart at its first question.
    pub fn select_category(&mut self, category: Category) {
        self.position = Position::Question {
            band: self.position.band(),
            category,
            index: 0,
        };
    }

    /// Jump to a question within the active category. Out-of-range indexes
    /// and an exhausted band leave the position unchanged.
    pub fn select_question(&mut self, index: usize) -> bool {
        let Position::Question { band, category, .. } = self.position else {
            return false;
        };
        if self.catalogue.question(band, category, index).is_err() {
            return false;
        }
        self.position = Position::Question {
            band,
            category,
            index,
        };
        true
    }

    /// Text of the question at the current position.
    #[must_use]
    pub fn current_question(&self) -> Option<&str> {
        match self.position {
            Position::Question {
                band,
                category,
                index,
            } => self.catalogue.question(band, category, index).ok(),
            Position::BandComplete { .. } => None,
        }
    }

    /// Record an answer for the current question and advance.
    ///
    /// `answered_at` should come from the services layer clock.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::BandExhausted` when the band has no current
    /// question left.
    pub fn answer(
        &mut self,
        yes: bool,
        answered_at: DateTime<Utc>,
    ) -> Result<AnswerOutcome, TrackerError> {
        let (band, category, index) = match self.position {
            Position::Question {
                band,
                category,
                index,
            } => (band, category, index),
            Position::BandComplete { band } => return Err(TrackerError::BandExhausted { band }),
        };

        let text = self.catalogue.question(band, category, index)?;
        let record = ResponseRecord::new(band, category, text, yes, answered_at)?;
        self.responses.insert(record.key(), record.clone());
        self.recompute();

        self.advance(band, category, index);
        let band_completed = self.mark_if_complete(band);
        tracing::debug!(
            band = %band,
            category = %category,
            index,
            yes,
            "recorded milestone answer"
        );

        Ok(AnswerOutcome {
            record,
            position: self.position,
            band_completed,
        })
    }

    fn advance(&mut self, band: AgeBand, category: Category, index: usize) {
        let len = self
            .catalogue
            .questions(band, category)
            .map_or(0, <[String]>::len);
        if index + 1 < len {
            self.position = Position::Question {
                band,
                category,
                index: index + 1,
            };
            return;
        }

        if let Some(next) = category.next() {
            self.position = Position::Question {
                band,
                category: next,
                index: 0,
            };
            return;
        }

        self.position = Position::BandComplete { band };
    }

    /// Adds `band` to the completed set once all of its questions have an
    /// answer. Returns true only for the first addition.
    fn mark_if_complete(&mut self, band: AgeBand) -> bool {
        let answered = self
            .progress
            .band(band)
            .is_some_and(BandProgress::is_fully_answered);
        if !answered || !self.completed.insert(band) {
            return false;
        }
        tracing::info!(band = %band, "age band completed");
        true
    }

    /// Previously recorded answer, or `None` if the question is unanswered.
    #[must_use]
    pub fn get_response(&self, band: AgeBand, category: Category, question: &str) -> Option<bool> {
        let key = ResponseKey::new(band, category, question).ok()?;
        self.responses.get(&key).map(ResponseRecord::answer)
    }

    /// Replace the response table with a cached snapshot and recompute.
    ///
    /// The position is left alone. Bands whose questions are all answered are
    /// marked complete; an empty snapshot also clears the completed set.
    pub fn restore(&mut self, records: impl IntoIterator<Item = ResponseRecord>) -> RestoreReport {
        let mut table = HashMap::new();
        let mut skipped = 0;
        for record in records {
            let key = record.key();
            if !self.catalogue.contains(&key) {
                tracing::warn!(
                    band = %key.age_band,
                    category = %key.category,
                    question = %key.question,
                    "skipping cached response with no catalogue question"
                );
                skipped += 1;
                continue;
            }
            table.insert(key, record);
        }

        let applied = table.len();
        self.responses = table;
        self.recompute();

        if self.responses.is_empty() {
            self.completed.clear();
        }
        for band in self.progress.bands().iter().filter(|b| b.is_fully_answered()) {
            self.completed.insert(band.band);
        }

        RestoreReport { applied, skipped }
    }

    fn recompute(&mut self) {
        self.progress = ProgressReport::compute(&self.catalogue, self.responses.values());
    }

    #[must_use]
    pub fn category_percentage(&self, category: Category) -> u8 {
        self.progress.category_percentage(category)
    }

    #[must_use]
    pub fn overall_percentage(&self) -> u8 {
        self.progress.overall_percentage()
    }

    #[must_use]
    pub fn progress(&self) -> &ProgressReport {
        &self.progress
    }

    #[must_use]
    pub fn is_band_complete(&self, band: AgeBand) -> bool {
        self.completed.contains(&band)
    }

    /// Completed bands, ascending.
    pub fn completed_bands(&self) -> impl Iterator<Item = AgeBand> + '_ {
        self.completed.iter().copied()
    }

    /// Recorded answers ordered by band, category and question text.
    #[must_use]
    pub fn responses(&self) -> Vec<&ResponseRecord> {
        let mut out: Vec<&ResponseRecord> = self.responses.values().collect();
        out.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        out
    }

    #[must_use]
    pub fn response_count(&self) -> usize {
        self.responses.len()
    }
}

impl fmt::Debug for MilestoneTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MilestoneTracker")
            .field("position", &self.position)
            .field("responses_len", &self.responses.len())
            .field("completed", &self.completed)
            .field("overall", &self.progress.overall_percentage())
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
