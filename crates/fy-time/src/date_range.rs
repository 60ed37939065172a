//! `DateRange`: an inclusive span of calendar days.

use serde::{Deserialize, Serialize};

use crate::date::Date;

/// The inclusive range `[start, end]`.
///
/// A range with `start > end` is empty: it contains no dates and iterates
/// nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// First day of the range.
    pub start: Date,
    /// Last day of the range.
    pub end: Date,
}

impl DateRange {
    /// Create the range `[start, end]`.
    pub fn new(start: Date, end: Date) -> Self {
        Self { start, end }
    }

    /// Return `true` if the range contains no dates.
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Return `true` if `date` lies in `[start, end]`.
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of days in the range, both ends included.
    pub fn len_days(&self) -> u32 {
        if self.is_empty() {
            0
        } else {
            self.start.days_between(self.end) as u32 + 1
        }
    }

    /// Iterate over every day in the range, in order.
    pub fn days(&self) -> Days {
        Days {
            next: (!self.is_empty()).then_some(self.start),
            end: self.end,
        }
    }

    /// Return the `(start, end)` pair.
    pub fn as_tuple(&self) -> (Date, Date) {
        (self.start, self.end)
    }
}

impl IntoIterator for DateRange {
    type Item = Date;
    type IntoIter = Days;

    fn into_iter(self) -> Days {
        self.days()
    }
}

/// Iterator over the days of a [`DateRange`].
#[derive(Debug, Clone)]
pub struct Days {
    next: Option<Date>,
    end: Date,
}

impl Iterator for Days {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        let current = self.next?;
        self.next = current.succ().filter(|d| *d <= self.end);
        Some(current)
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}
