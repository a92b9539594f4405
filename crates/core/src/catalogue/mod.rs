//! Milestone question catalogue.
//!
//! The catalogue maps each age band and category to an ordered list of yes/no
//! questions. It is built once, validated up front, and never mutated.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::model::{AgeBand, Category, ResponseKey};

mod data;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogueError {
    #[error("catalogue has no age bands")]
    Empty,

    #[error("age band {band} is listed more than once for category {category}")]
    DuplicateEntry { band: AgeBand, category: Category },

    #[error("age band {band} has no questions for category {category}")]
    MissingEntry { band: AgeBand, category: Category },

    #[error("blank question at index {index} in band {band}, category {category}")]
    BlankQuestion {
        band: AgeBand,
        category: Category,
        index: usize,
    },

    #[error("question {question:?} repeats in band {band}, category {category}")]
    DuplicateQuestion {
        band: AgeBand,
        category: Category,
        question: String,
    },

    #[error("no questions for band {band}, category {category}")]
    NotFound { band: AgeBand, category: Category },

    #[error("no question at index {index} for band {band}, category {category}")]
    QuestionNotFound {
        band: AgeBand,
        category: Category,
        index: usize,
    },

    #[error(transparent)]
    AgeBand(#[from] crate::model::AgeBandError),
}

//
// ─── CATALOGUE ─────────────────────────────────────────────────────────────────
//

/// Immutable, validated question table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalogue {
    bands: BTreeMap<AgeBand, [Vec<String>; Category::COUNT]>,
}

impl Catalogue {
    /// Builds the built-in ten-band catalogue.
    ///
    /// # Errors
    ///
    /// Returns `CatalogueError` if the built-in table fails validation.
    pub fn standard() -> Result<Self, CatalogueError> {
        let mut entries = Vec::with_capacity(data::LEAPS.len() * Category::COUNT);
        for (number, lists) in data::LEAPS {
            let band = AgeBand::new(*number)?;
            for (category, questions) in Category::ALL.into_iter().zip(lists.iter()) {
                let questions = questions.iter().map(|q| (*q).to_string()).collect();
                entries.push((band, category, questions));
            }
        }
        Self::from_entries(entries)
    }

    /// Builds and validates a catalogue from `(band, category, questions)` rows.
    ///
    /// Every listed band must carry all four categories. Question text is
    /// trimmed; blank or repeated questions within one list are rejected.
    ///
    /// # Errors
    ///
    /// Returns the first `CatalogueError` found.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (AgeBand, Category, Vec<String>)>,
    ) -> Result<Self, CatalogueError> {
        let mut staged: BTreeMap<AgeBand, [Option<Vec<String>>; Category::COUNT]> =
            BTreeMap::new();

        for (band, category, questions) in entries {
            let slot = &mut staged.entry(band).or_default()[category.index()];
            if slot.is_some() {
                return Err(CatalogueError::DuplicateEntry { band, category });
            }
            *slot = Some(validate_list(band, category, questions)?);
        }

        if staged.is_empty() {
            return Err(CatalogueError::Empty);
        }

        let mut bands = BTreeMap::new();
        for (band, lists) in staged {
            let mut checked: [Vec<String>; Category::COUNT] = Default::default();
            for category in Category::ALL {
                match &lists[category.index()] {
                    Some(list) if !list.is_empty() => {
                        checked[category.index()].clone_from(list);
                    }
                    _ => return Err(CatalogueError::MissingEntry { band, category }),
                }
            }
            bands.insert(band, checked);
        }

        Ok(Self { bands })
    }

    /// Bands present in the catalogue, ascending.
    pub fn bands(&self) -> impl Iterator<Item = AgeBand> + '_ {
        self.bands.keys().copied()
    }

    #[must_use]
    pub fn contains_band(&self, band: AgeBand) -> bool {
        self.bands.contains_key(&band)
    }

    /// Ordered questions for a band and category.
    ///
    /// # Errors
    ///
    /// Returns `CatalogueError::NotFound` if the band is not in the catalogue.
    pub fn questions(&self, band: AgeBand, category: Category) -> Result<&[String], CatalogueError> {
        self.bands
            .get(&band)
            .map(|lists| lists[category.index()].as_slice())
            .ok_or(CatalogueError::NotFound { band, category })
    }

    /// A single question by position.
    ///
    /// # Errors
    ///
    /// Returns `CatalogueError::NotFound` for an unknown band and
    /// `CatalogueError::QuestionNotFound` for an index past the end.
    pub fn question(
        &self,
        band: AgeBand,
        category: Category,
        index: usize,
    ) -> Result<&str, CatalogueError> {
        self.questions(band, category)?
            .get(index)
            .map(String::as_str)
            .ok_or(CatalogueError::QuestionNotFound {
                band,
                category,
                index,
            })
    }

    /// Whether a response key names a question in this catalogue.
    #[must_use]
    pub fn contains(&self, key: &ResponseKey) -> bool {
        self.questions(key.age_band, key.category)
            .is_ok_and(|list| list.iter().any(|q| q == &key.question))
    }

    /// Question count for a category summed over every band.
    #[must_use]
    pub fn total_for(&self, category: Category) -> usize {
        self.bands
            .values()
            .map(|lists| lists[category.index()].len())
            .sum()
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        Category::ALL.iter().map(|c| self.total_for(*c)).sum()
    }
}

fn validate_list(
    band: AgeBand,
    category: Category,
    questions: Vec<String>,
) -> Result<Vec<String>, CatalogueError> {
    let mut out: Vec<String> = Vec::with_capacity(questions.len());
    for (index, raw) in questions.into_iter().enumerate() {
        let text = raw.trim();
        if text.is_empty() {
            return Err(CatalogueError::BlankQuestion {
                band,
                category,
                index,
            });
        }
        if out.iter().any(|existing| existing == text) {
            return Err(CatalogueError::DuplicateQuestion {
                band,
                category,
                question: text.to_string(),
            });
        }
        out.push(text.to_string());
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn band(n: u8) -> AgeBand {
        AgeBand::new(n).unwrap()
    }

    fn full_band(n: u8) -> Vec<(AgeBand, Category, Vec<String>)> {
        Category::ALL
            .into_iter()
            .map(|c| (band(n), c, vec![format!("{c} one"), format!("{c} two")]))
            .collect()
    }

    #[test]
    fn standard_catalogue_has_ten_full_bands() {
        let catalogue = Catalogue::standard().unwrap();
        assert_eq!(catalogue.bands().count(), AgeBand::COUNT);
        for b in catalogue.bands() {
            for c in Category::ALL {
                let len = catalogue.questions(b, c).unwrap().len();
                assert!((3..=6).contains(&len), "band {b} {c} has {len} questions");
            }
        }
    }

    #[test]
    fn first_band_motor_has_three_questions() {
        let catalogue = Catalogue::standard().unwrap();
        assert_eq!(catalogue.questions(band(1), Category::Motor).unwrap().len(), 3);
    }

    #[test]
    fn unknown_band_is_not_found_instead_of_empty() {
        let catalogue = Catalogue::from_entries(full_band(1)).unwrap();
        let err = catalogue.questions(band(2), Category::Motor).unwrap_err();
        assert_eq!(
            err,
            CatalogueError::NotFound {
                band: band(2),
                category: Category::Motor
            }
        );
    }

    #[test]
    fn question_index_past_end_is_reported() {
        let catalogue = Catalogue::from_entries(full_band(1)).unwrap();
        assert_eq!(catalogue.question(band(1), Category::Sensory, 1).unwrap(), "sensory two");
        assert!(matches!(
            catalogue.question(band(1), Category::Sensory, 2),
            Err(CatalogueError::QuestionNotFound { index: 2, .. })
        ));
    }

    #[test]
    fn missing_category_fails_validation() {
        let mut entries = full_band(1);
        entries.retain(|(_, c, _)| *c != Category::Feeding);
        assert_eq!(
            Catalogue::from_entries(entries).unwrap_err(),
            CatalogueError::MissingEntry {
                band: band(1),
                category: Category::Feeding
            }
        );
    }

    #[test]
    fn empty_list_counts_as_missing() {
        let mut entries = full_band(1);
        entries[0].2.clear();
        assert!(matches!(
            Catalogue::from_entries(entries),
            Err(CatalogueError::MissingEntry { .. })
        ));
    }

    #[test]
    fn duplicate_question_fails_validation() {
        let mut entries = full_band(1);
        entries[1].2.push("sensory one ".into());
        assert!(matches!(
            Catalogue::from_entries(entries),
            Err(CatalogueError::DuplicateQuestion { .. })
        ));
    }

    #[test]
    fn blank_question_fails_validation() {
        let mut entries = full_band(1);
        entries[2].2.insert(0, "  ".into());
        assert!(matches!(
            Catalogue::from_entries(entries),
            Err(CatalogueError::BlankQuestion { index: 0, .. })
        ));
    }

    #[test]
    fn repeated_band_category_row_fails_validation() {
        let mut entries = full_band(1);
        entries.push((band(1), Category::Motor, vec!["again".into()]));
        assert!(matches!(
            Catalogue::from_entries(entries),
            Err(CatalogueError::DuplicateEntry { .. })
        ));
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(
            Catalogue::from_entries(Vec::new()).unwrap_err(),
            CatalogueError::Empty
        );
    }

    #[test]
    fn totals_sum_over_bands() {
        let mut entries = full_band(1);
        entries.extend(full_band(2));
        let catalogue = Catalogue::from_entries(entries).unwrap();
        assert_eq!(catalogue.total_for(Category::Motor), 4);
        assert_eq!(catalogue.total_questions(), 16);
    }

    #[test]
    fn contains_checks_question_text() {
        let catalogue = Catalogue::from_entries(full_band(1)).unwrap();
        let known = ResponseKey::new(band(1), Category::Motor, "motor one").unwrap();
        let stale = ResponseKey::new(band(1), Category::Motor, "retired question").unwrap();
        let other_band = ResponseKey::new(band(3), Category::Motor, "motor one").unwrap();
        assert!(catalogue.contains(&known));
        assert!(!catalogue.contains(&stale));
        assert!(!catalogue.contains(&other_band));
    }
}
