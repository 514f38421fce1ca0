//! Dashboard report
//!
//! Pure read-side projections over the expense collection for the current
//! budget period: total spent, remaining budget, month-over-month movement,
//! and burn rate. Nothing here holds state; everything is re-derived from
//! the collection on each call.

use chrono::NaiveDate;

use crate::config::Settings;
use crate::models::{BudgetPeriod, Expense, Money};

/// Sum of amounts whose date falls within the period
pub fn total_in_period(expenses: &[Expense], period: &BudgetPeriod) -> Money {
    expenses
        .iter()
        .filter(|e| period.contains_date(e.date))
        .map(|e| e.amount)
        .sum()
}

/// Budget remaining after the period's spending (may be negative)
pub fn remaining_budget(budget: Money, total: Money) -> Money {
    budget - total
}

/// Month-over-month spending delta in rounded percent
///
/// Both periods zero means no movement (0%). A previous period of zero with
/// current spending reports 100% rather than dividing by zero.
pub fn month_over_month_delta(previous: Money, current: Money) -> i32 {
    if previous.is_zero() {
        return if current.is_zero() { 0 } else { 100 };
    }
    let prev = previous.as_units_f64();
    let cur = current.as_units_f64();
    ((cur - prev) / prev * 100.0).round() as i32
}

/// Spending pace over the period
#[derive(Debug, Clone, PartialEq)]
pub struct BurnRate {
    /// Period length in whole days (minimum 1)
    pub period_days: i64,
    /// Days elapsed so far, clamped into the period (minimum 1)
    pub elapsed_days: i64,
    /// Budget divided evenly over the period, per day
    pub daily_ideal: f64,
    /// Actual spending per elapsed day
    pub daily_actual: f64,
    /// Actual minus ideal; positive means overspending
    pub delta: f64,
    /// Remaining budget spread over the remaining days, or 0 when the
    /// period is over
    pub remaining_daily_target: f64,
}

/// Compute the burn rate for a period as of `today`
pub fn burn_rate(
    total: Money,
    budget: Money,
    period: &BudgetPeriod,
    today: NaiveDate,
) -> BurnRate {
    let period_days = period.days();
    let elapsed_days = (today - period.start_date()).num_days().clamp(1, period_days);

    let daily_ideal = budget.as_units_f64() / period_days as f64;
    let daily_actual = total.as_units_f64() / elapsed_days as f64;

    let remaining_days = period_days - elapsed_days;
    let remaining_daily_target = if remaining_days > 0 {
        (budget - total).as_units_f64() / remaining_days as f64
    } else {
        0.0
    };

    BurnRate {
        period_days,
        elapsed_days,
        daily_ideal,
        daily_actual,
        delta: daily_actual - daily_ideal,
        remaining_daily_target,
    }
}

/// The most recent `n` expenses within the period, newest first
pub fn recent(expenses: &[Expense], period: &BudgetPeriod, n: usize) -> Vec<Expense> {
    let mut in_period: Vec<Expense> = expenses
        .iter()
        .filter(|e| period.contains_date(e.date))
        .cloned()
        .collect();
    in_period.sort_by(|a, b| b.date.cmp(&a.date));
    in_period.truncate(n);
    in_period
}

/// Everything the dashboard shows for one budget period
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub period: BudgetPeriod,
    pub total: Money,
    pub budget: Money,
    pub remaining: Money,
    pub previous_total: Money,
    pub delta_percent: i32,
    pub burn_rate: BurnRate,
}

impl DashboardSummary {
    /// Derive the summary from the collection and settings
    pub fn generate(
        expenses: &[Expense],
        settings: &Settings,
        period: BudgetPeriod,
        previous_period: &BudgetPeriod,
        today: NaiveDate,
    ) -> Self {
        let total = total_in_period(expenses, &period);
        let previous_total = total_in_period(expenses, previous_period);
        let budget = settings.monthly_budget;

        Self {
            total,
            budget,
            remaining: remaining_budget(budget, total),
            previous_total,
            delta_percent: month_over_month_delta(previous_total, total),
            burn_rate: burn_rate(total, budget, &period, today),
            period,
        }
    }
}
