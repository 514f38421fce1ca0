//! Core data models for kakeibo
//!
//! This module contains all the data structures that represent the
//! household-expense domain: expenses, money, budget periods, and
//! recurring templates.

pub mod expense;
pub mod ids;
pub mod money;
pub mod period;
pub mod recurring;

pub use expense::{Category, Expense, ExpensePatch, NewExpense};
pub use ids::{DraftId, ExpenseId, IdGenerator, IdStrategy, RecurringId};
pub use money::Money;
pub use period::BudgetPeriod;
pub use recurring::{Cadence, NewRecurring, Recurring, RecurringDraft};
