//! Injectable clock for calendar dates.

use chrono::{Local, NaiveDate, Utc};
use shaku::{Component, Interface};

/// Source of the current calendar date.
pub trait Clock: Interface + Send + Sync {
    /// Returns today's date.
    fn today(&self) -> NaiveDate;
}

/// Clock reading the system time.
#[derive(Component, Debug, Default)]
#[shaku(interface = Clock)]
pub struct SystemClock {
    /// Use the UTC date instead of the local date.
    #[shaku(default)]
    use_utc: bool,
}

impl SystemClock {
    /// Creates a clock reporting the local date.
    #[must_use]
    pub const fn local() -> Self {
        Self { use_utc: false }
    }

    /// Creates a clock reporting the UTC date.
    #[must_use]
    pub const fn utc() -> Self {
        Self { use_utc: true }
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        if self.use_utc {
            Utc::now().date_naive()
        } else {
            Local::now().date_naive()
        }
    }
}

/// Clock pinned to a single date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    date: NaiveDate,
}

impl FixedClock {
    /// Creates a clock that always reports `date`.
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self { date }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date
    }
}
