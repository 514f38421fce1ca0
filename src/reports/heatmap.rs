//! Spending heatmap
//!
//! Daily totals bucketed into calendar weeks for a contribution-graph
//! style view. Weeks start on Sunday and the newest week is the one
//! containing `today`.

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::{Expense, Money};

/// One Sunday-to-Saturday week of daily totals
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapWeek {
    /// The week's Sunday
    pub start: NaiveDate,
    /// Daily totals indexed 0 = Sunday through 6 = Saturday
    pub days: [Money; 7],
}

impl HeatmapWeek {
    fn empty(start: NaiveDate) -> Self {
        Self {
            start,
            days: [Money::zero(); 7],
        }
    }
}

/// The `weeks` most recent calendar weeks of daily totals, oldest first
///
/// The last element covers the week containing `today`. Expenses outside
/// the covered range are ignored; future-dated entries inside the current
/// week still land in their day slot.
pub fn weekly_heatmap(expenses: &[Expense], weeks: usize, today: NaiveDate) -> Vec<HeatmapWeek> {
    let current_week_start =
        today - Duration::days(today.weekday().num_days_from_sunday() as i64);

    let mut grid: Vec<HeatmapWeek> = (0..weeks)
        .rev()
        .map(|offset| {
            HeatmapWeek::empty(current_week_start - Duration::days(7 * offset as i64))
        })
        .collect();

    if grid.is_empty() {
        return grid;
    }

    let range_start = grid[0].start;
    for expense in expenses {
        if expense.date < range_start {
            continue;
        }
        let days_in = (expense.date - range_start).num_days();
        let week_idx = (days_in / 7) as usize;
        if week_idx >= grid.len() {
            continue;
        }
        grid[week_idx].days[(days_in % 7) as usize] += expense.amount;
    }

    grid
}
