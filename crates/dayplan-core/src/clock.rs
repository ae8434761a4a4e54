//! Wall-clock abstraction used to derive "today".
//!
//! The engine never reads the system clock directly. Every public operation
//! asks its [`Clock`] for the current calendar date, which keeps day rollover
//! testable: [`ManualClock`] can be moved forward between calls to simulate a
//! day change.

use std::sync::{Mutex, PoisonError};

use jiff::{Timestamp, ToSpan, civil::Date, tz::TimeZone};

/// Source of the current instant and calendar date.
pub trait Clock: Send + Sync {
    /// Current instant, used for item timestamps.
    fn now(&self) -> Timestamp;

    /// Current calendar date, the engine's single notion of "today".
    fn today(&self) -> Date;
}

/// Clock backed by the system time, resolving dates in a fixed time zone.
#[derive(Debug, Clone)]
pub struct SystemClock {
    tz: TimeZone,
}

impl SystemClock {
    /// Calendar days roll over at UTC midnight.
    pub fn utc() -> Self {
        Self { tz: TimeZone::UTC }
    }

    /// Calendar days roll over at midnight in the system time zone.
    pub fn local() -> Self {
        Self {
            tz: TimeZone::system(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::utc()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }

    fn today(&self) -> Date {
        Timestamp::now().to_zoned(self.tz.clone()).date()
    }
}

/// Clock pinned to a date that only moves when told to.
///
/// `now()` still reports real time so that created/updated timestamps stay
/// meaningful; only the calendar date is frozen.
#[derive(Debug)]
pub struct ManualClock {
    date: Mutex<Date>,
}

impl ManualClock {
    pub fn new(date: Date) -> Self {
        Self {
            date: Mutex::new(date),
        }
    }

    /// Pin the clock to a new date.
    pub fn set(&self, date: Date) {
        *self.date.lock().unwrap_or_else(PoisonError::into_inner) = date;
    }

    /// Move the pinned date forward (or backward, for negative `days`).
    ///
    /// Dates past the end of the supported calendar range saturate at the
    /// current value.
    pub fn advance_days(&self, days: i32) -> Date {
        let mut current = self.date.lock().unwrap_or_else(PoisonError::into_inner);
        if let Ok(next) = current.checked_add(days.days()) {
            *current = next;
        }
        *current
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }

    fn today(&self) -> Date {
        *self.date.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
