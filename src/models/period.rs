//! Budget period representation
//!
//! A budget period is one cycle of the household budget: it starts on the
//! configured month-start day and ends exactly one calendar month later,
//! minus one millisecond. Both boundaries are inclusive.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An inclusive budget cycle `[start, end]` with millisecond precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BudgetPeriod {
    /// First instant of the cycle (midnight on the month-start day)
    pub start: NaiveDateTime,

    /// Last instant of the cycle (start + 1 month - 1 ms)
    pub end: NaiveDateTime,
}

impl BudgetPeriod {
    /// Create a period from explicit boundaries
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Check if an instant falls within this period (both ends inclusive)
    pub fn contains(&self, t: NaiveDateTime) -> bool {
        t >= self.start && t <= self.end
    }

    /// Check if a calendar date falls within this period
    ///
    /// The date is taken at midnight, so a date-only expense on the period's
    /// last calendar day is inside (the end boundary is 23:59:59.999).
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.contains(start_of_day(date))
    }

    /// Period length in whole days (minimum 1)
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days().max(1)
    }

    /// First calendar date of the period
    pub fn start_date(&self) -> NaiveDate {
        self.start.date()
    }

    /// Last calendar date of the period
    pub fn end_date(&self) -> NaiveDate {
        self.end.date()
    }
}

impl fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start_date(), self.end_date())
    }
}

/// Midnight on the given date
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_opt(0, 0, 0).expect("midnight is always valid")
}
