//! Trend reports
//!
//! Per-category breakdowns and week-by-week totals within a budget period.

use chrono::{Duration, NaiveDate};

use crate::models::{BudgetPeriod, Category, Expense, Money};

/// Aggregate spending for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySummary {
    pub category: Category,
    pub total: Money,
    pub count: usize,
    /// Share of the grand total, rounded to whole percent
    pub percent: i32,
}

/// Per-category totals within the period, largest first
///
/// Only categories with at least one expense appear. When the grand total
/// is zero every share is reported as 0%.
pub fn category_totals(expenses: &[Expense], period: &BudgetPeriod) -> Vec<CategorySummary> {
    let in_period: Vec<&Expense> = expenses
        .iter()
        .filter(|e| period.contains_date(e.date))
        .collect();

    let grand_total: Money = in_period.iter().map(|e| e.amount).sum();

    let mut summaries: Vec<CategorySummary> = Category::ALL
        .iter()
        .filter_map(|&category| {
            let matching: Vec<&&Expense> =
                in_period.iter().filter(|e| e.category == category).collect();
            if matching.is_empty() {
                return None;
            }

            let total: Money = matching.iter().map(|e| e.amount).sum();
            let percent = if grand_total.is_zero() {
                0
            } else {
                (total.as_units_f64() / grand_total.as_units_f64() * 100.0).round() as i32
            };

            Some(CategorySummary {
                category,
                total,
                count: matching.len(),
                percent,
            })
        })
        .collect();

    summaries.sort_by(|a, b| b.total.cmp(&a.total));
    summaries
}

/// Total spending for one seven-day window
#[derive(Debug, Clone, PartialEq)]
pub struct WeekBucket {
    /// First day of the window
    pub start: NaiveDate,
    /// Last day of the window, inclusive; the final bucket is truncated to
    /// the period end
    pub end: NaiveDate,
    pub total: Money,
}

/// Week-by-week totals across the period, optionally for one category
///
/// Windows run in consecutive 7-day steps from the period start; the last
/// window is cut short at the period end rather than spilling past it.
pub fn weekly_trend(
    expenses: &[Expense],
    category: Option<Category>,
    period: &BudgetPeriod,
) -> Vec<WeekBucket> {
    let period_end = period.end_date();
    let mut buckets = Vec::new();
    let mut window_start = period.start_date();

    while window_start <= period_end {
        let window_end = (window_start + Duration::days(6)).min(period_end);

        let total: Money = expenses
            .iter()
            .filter(|e| category.map_or(true, |c| e.category == c))
            .filter(|e| e.date >= window_start && e.date <= window_end)
            .map(|e| e.amount)
            .sum();

        buckets.push(WeekBucket {
            start: window_start,
            end: window_end,
            total,
        });

        window_start += Duration::days(7);
    }

    buckets
}
