use chrono::{DateTime, Utc};

/// Source of answer timestamps. Services take one so tests can pin time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Clock {
    #[default]
    System,
    Fixed(DateTime<Utc>),
}

impl Clock {
    #[must_use]
    pub fn system() -> Self {
        Self::System
    }

    #[must_use]
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self::Fixed(at)
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Fixed(at) => *at,
        }
    }
}

/// 2023-11-14T22:13:20Z, the timestamp every test answer carries.
///
/// # Panics
///
/// Never in practice; the constant is well inside chrono's range.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    const SECONDS: i64 = 1_700_000_000;
    DateTime::<Utc>::from_timestamp(SECONDS, 0).expect("timestamp in range")
}
