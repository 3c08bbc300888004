use crate::types::weekday::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One block of time within the week, in minutes of day.
///
/// Ranges are half-open: an interval ending at 09:00 does not collide with
/// one starting at 09:00.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct TimeInterval {
    pub weekday: Weekday,
    pub start: u16,
    pub end: u16,
}

impl TimeInterval {
    pub fn new(weekday: Weekday, start: u16, end: u16) -> Self {
        TimeInterval {
            weekday,
            start,
            end,
        }
    }

    pub fn overlaps(&self, other: &TimeInterval) -> bool {
        self.weekday == other.weekday && self.start < other.end && other.start < self.end
    }

    pub fn duration_minutes(&self) -> u16 {
        self.end.saturating_sub(self.start)
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:02}:{:02}-{:02}:{:02}",
            self.weekday,
            self.start / 60,
            self.start % 60,
            self.end / 60,
            self.end % 60
        )
    }
}
