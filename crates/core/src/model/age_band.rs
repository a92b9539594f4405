use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Typical onset of each leap, in weeks after the due date.
const ONSET_WEEKS: [u16; AgeBand::COUNT] = [5, 8, 12, 19, 26, 37, 46, 55, 64, 75];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AgeBandError {
    #[error("age band must be between 1 and {max}, got {provided}")]
    OutOfRange { provided: i64, max: u8 },

    #[error("failed to parse age band from {raw:?}")]
    Parse { raw: String },
}

/// A developmental age window ("leap"), numbered from 1.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct AgeBand(u8);

impl AgeBand {
    /// Number of age bands known to the tracker.
    pub const COUNT: usize = 10;

    pub const FIRST: AgeBand = AgeBand(1);

    /// Creates a validated `AgeBand`.
    ///
    /// # Errors
    ///
    /// Returns `AgeBandError::OutOfRange` unless `number` is in `1..=COUNT`.
    pub fn new(number: u8) -> Result<Self, AgeBandError> {
        Self::try_from(i64::from(number))
    }

    /// Returns the 1-based band number.
    #[must_use]
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Zero-based position of the band, usable as an array index.
    #[must_use]
    pub fn index(&self) -> usize {
        usize::from(self.0 - 1)
    }

    /// Typical onset age in weeks.
    #[must_use]
    pub fn onset_weeks(&self) -> u16 {
        ONSET_WEEKS[self.index()]
    }

    #[must_use]
    pub fn label(&self) -> String {
        format!("Leap {}", self.0)
    }

    /// All bands in ascending order.
    pub fn all() -> impl Iterator<Item = AgeBand> {
        (1..=Self::max_value()).map(AgeBand)
    }

    fn max_value() -> u8 {
        // COUNT is a small constant; the cast cannot truncate.
        #[allow(clippy::cast_possible_truncation)]
        let max = Self::COUNT as u8;
        max
    }
}

impl TryFrom<i64> for AgeBand {
    type Error = AgeBandError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        let max = Self::max_value();
        if value < 1 || value > i64::from(max) {
            return Err(AgeBandError::OutOfRange {
                provided: value,
                max,
            });
        }
        u8::try_from(value)
            .map(AgeBand)
            .map_err(|_| AgeBandError::OutOfRange {
                provided: value,
                max,
            })
    }
}

impl TryFrom<u8> for AgeBand {
    type Error = AgeBandError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AgeBand> for u8 {
    fn from(band: AgeBand) -> Self {
        band.0
    }
}

impl fmt::Debug for AgeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AgeBand({})", self.0)
    }
}

impl fmt::Display for AgeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AgeBand {
    type Err = AgeBandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let digits = raw
            .strip_prefix("leap")
            .or_else(|| raw.strip_prefix("Leap"))
            .unwrap_or(raw)
            .trim();
        let number = digits.parse::<i64>().map_err(|_| AgeBandError::Parse {
            raw: s.to_string(),
        })?;
        Self::try_from(number)
    }
}
