//! Budget period service
//!
//! Computes budget cycle boundaries from an anchor instant and the
//! configured month-start day. With the start day confined to 1-28 every
//! computed boundary is a valid calendar date, February included.

use chrono::{Datelike, Duration, Local, Months, NaiveDate, NaiveDateTime};

use crate::config::Settings;
use crate::models::period::start_of_day;
use crate::models::BudgetPeriod;

/// Compute the budget period containing `anchor`
///
/// If the anchor's day-of-month is on or after `month_start_day`, the cycle
/// starts in the anchor's month; otherwise it started in the previous
/// month. The end boundary is start + 1 calendar month - 1 ms, so cycle
/// length is invariant across calendar month lengths.
pub fn period_for(anchor: NaiveDateTime, month_start_day: u8) -> BudgetPeriod {
    let day = u32::from(month_start_day);
    let anchor_date = anchor.date();

    // day <= 28, so with_day and the month shift below never fail
    let start_this_month = anchor_date
        .with_day(day)
        .unwrap_or(anchor_date);
    let start_date = if anchor_date.day() >= day {
        start_this_month
    } else {
        start_this_month
            .checked_sub_months(Months::new(1))
            .unwrap_or(start_this_month)
    };

    let start = start_of_day(start_date);
    let end = start_of_day(next_cycle_start(start_date)) - Duration::milliseconds(1);
    BudgetPeriod::new(start, end)
}

/// Inclusive-both-ends range test
pub fn is_within(t: NaiveDateTime, period: &BudgetPeriod) -> bool {
    period.contains(t)
}

fn next_cycle_start(start_date: NaiveDate) -> NaiveDate {
    start_date
        .checked_add_months(Months::new(1))
        .unwrap_or(start_date)
}

/// Service for budget period queries against the current settings
pub struct PeriodService<'a> {
    settings: &'a Settings,
}

impl<'a> PeriodService<'a> {
    /// Create a new period service
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Get the period containing a specific instant
    pub fn period_for(&self, anchor: NaiveDateTime) -> BudgetPeriod {
        period_for(anchor, self.settings.month_start_day)
    }

    /// Get the current period based on the local clock
    pub fn current_period(&self) -> BudgetPeriod {
        self.period_for(Local::now().naive_local())
    }

    /// Get the period immediately before the given one
    pub fn previous_period(&self, period: &BudgetPeriod) -> BudgetPeriod {
        self.period_for(period.start - Duration::milliseconds(1))
    }

    /// Whether a calendar date falls in the current budget month
    pub fn is_in_current_period(&self, date: NaiveDate) -> bool {
        self.current_period().contains_date(date)
    }
}
