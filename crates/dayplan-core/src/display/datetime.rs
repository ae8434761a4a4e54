//! Timestamp rendering for item metadata.

use std::fmt;

use jiff::{Timestamp, tz::TimeZone};

/// Item timestamp shown in the system time zone at minute precision,
/// e.g. `2026-10-18 09:30 CEST`.
///
/// Plan and history dates are plain calendar dates and never go through
/// this type; only `createdAt`/`updatedAt` do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalDateTime(pub Timestamp);

impl From<Timestamp> for LocalDateTime {
    fn from(timestamp: Timestamp) -> Self {
        Self(timestamp)
    }
}

impl fmt::Display for LocalDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let zoned = self.0.to_zoned(TimeZone::system());
        write!(f, "{}", zoned.strftime("%Y-%m-%d %H:%M %Z"))
    }
}
