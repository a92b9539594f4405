use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CategoryError {
    #[error("unknown category: {0}")]
    Unknown(String),
}

/// Developmental domain used to group milestone questions.
///
/// Declaration order is the order questions are walked within a band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Motor,
    Sensory,
    /// Communication and cognitive milestones.
    Communication,
    Feeding,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Motor,
        Category::Sensory,
        Category::Communication,
        Category::Feeding,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// Stable code used in storage.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Motor => "motor",
            Category::Sensory => "sensory",
            Category::Communication => "communication",
            Category::Feeding => "feeding",
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Category::Motor => "Motor",
            Category::Sensory => "Sensory",
            Category::Communication => "Communication & cognitive",
            Category::Feeding => "Feeding",
        }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        match self {
            Category::Motor => 0,
            Category::Sensory => 1,
            Category::Communication => 2,
            Category::Feeding => 3,
        }
    }

    #[must_use]
    pub fn first() -> Self {
        Category::Motor
    }

    /// The category walked after this one, or `None` after `Feeding`.
    #[must_use]
    pub fn next(&self) -> Option<Self> {
        Self::ALL.get(self.index() + 1).copied()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CategoryError;

    /// Accepts the storage code, the single-letter shorthand or the label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "motor" | "m" => Ok(Category::Motor),
            "sensory" | "s" => Ok(Category::Sensory),
            "communication" | "cognitive" | "communication & cognitive" | "c" => {
                Ok(Category::Communication)
            }
            "feeding" | "f" => Ok(Category::Feeding),
            _ => Err(CategoryError::Unknown(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn next_walks_declaration_order() {
        assert_eq!(Category::first().next(), Some(Category::Sensory));
        assert_eq!(Category::Sensory.next(), Some(Category::Communication));
        assert_eq!(Category::Communication.next(), Some(Category::Feeding));
        assert_eq!(Category::Feeding.next(), None);
    }

    #[test]
    fn index_matches_all_position() {
        for (pos, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), pos);
        }
    }

    #[test]
    fn unknown_code_is_rejected() {
        let err = "sleep".parse::<Category>().unwrap_err();
        assert_eq!(err, CategoryError::Unknown("sleep".into()));
    }
}
