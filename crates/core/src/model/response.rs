use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{AgeBand, Category};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ResponseError {
    #[error("question text cannot be empty")]
    EmptyQuestion,
}

/// Identity of a recorded answer: one question within one band and category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ResponseKey {
    pub age_band: AgeBand,
    pub category: Category,
    pub question: String,
}

impl ResponseKey {
    /// Build a key, trimming the question text.
    ///
    /// # Errors
    ///
    /// Returns `ResponseError::EmptyQuestion` if the question is blank.
    pub fn new(
        age_band: AgeBand,
        category: Category,
        question: impl Into<String>,
    ) -> Result<Self, ResponseError> {
        let raw = question.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ResponseError::EmptyQuestion);
        }
        Ok(Self {
            age_band,
            category,
            question: trimmed.to_string(),
        })
    }
}

/// A parent's yes/no answer to a single milestone question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseRecord {
    age_band: AgeBand,
    category: Category,
    question: String,
    answer: bool,
    answered_at: DateTime<Utc>,
}

impl ResponseRecord {
    /// Create a validated response record.
    ///
    /// # Errors
    ///
    /// Returns `ResponseError::EmptyQuestion` if the question is blank.
    pub fn new(
        age_band: AgeBand,
        category: Category,
        question: impl Into<String>,
        answer: bool,
        answered_at: DateTime<Utc>,
    ) -> Result<Self, ResponseError> {
        let key = ResponseKey::new(age_band, category, question)?;
        Ok(Self::from_key(key, answer, answered_at))
    }

    #[must_use]
    pub fn from_key(key: ResponseKey, answer: bool, answered_at: DateTime<Utc>) -> Self {
        Self {
            age_band: key.age_band,
            category: key.category,
            question: key.question,
            answer,
            answered_at,
        }
    }

    #[must_use]
    pub fn age_band(&self) -> AgeBand {
        self.age_band
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn answer(&self) -> bool {
        self.answer
    }

    #[must_use]
    pub fn answered_at(&self) -> DateTime<Utc> {
        self.answered_at
    }

    #[must_use]
    pub fn key(&self) -> ResponseKey {
        ResponseKey {
            age_band: self.age_band,
            category: self.category,
            question: self.question.clone(),
        }
    }

    /// Borrowed ordering key: band, then category walk order, then question text.
    #[must_use]
    pub fn sort_key(&self) -> (AgeBand, Category, &str) {
        (self.age_band, self.category, self.question.as_str())
    }
}
