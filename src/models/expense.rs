//! Expense model
//!
//! Represents a single household expense: when it happened, what kind of
//! spending it was, how much, and an optional free-text memo.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::ExpenseId;
use super::money::Money;

/// Fixed expense category set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Rent,
    Utilities,
    Transport,
    #[default]
    Other,
}

impl Category {
    /// All categories, in display order
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Rent,
        Category::Utilities,
        Category::Transport,
        Category::Other,
    ];

    /// The lowercase wire name used in CSV and persisted JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Rent => "rent",
            Self::Utilities => "utilities",
            Self::Transport => "transport",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "food" => Ok(Self::Food),
            "rent" => Ok(Self::Rent),
            "utilities" => Ok(Self::Utilities),
            "transport" => Ok(Self::Transport),
            "other" => Ok(Self::Other),
            other => Err(format!("unknown category: {}", other)),
        }
    }
}

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier within the ledger
    pub id: ExpenseId,

    /// Calendar date of the expense
    pub date: NaiveDate,

    /// Spending category
    pub category: Category,

    /// Amount spent (non-negative)
    pub amount: Money,

    /// Optional free-text memo
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

/// Input for creating an expense; the store assigns the id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExpense {
    pub date: NaiveDate,
    pub category: Category,
    pub amount: Money,
    pub memo: Option<String>,
}

impl NewExpense {
    /// Create a new expense input without a memo
    pub fn new(date: NaiveDate, category: Category, amount: Money) -> Self {
        Self {
            date,
            category,
            amount,
            memo: None,
        }
    }

    /// Attach a memo
    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = Some(memo.into());
        self
    }

    /// Materialize into a stored expense with the given id
    pub fn into_expense(self, id: ExpenseId) -> Expense {
        Expense {
            id,
            date: self.date,
            category: self.category,
            amount: self.amount,
            memo: self.memo,
        }
    }
}

/// A partial update to an expense
///
/// Each field is independently absent-or-set; `memo` is doubly optional so
/// a patch can distinguish "leave the memo alone" (`None`) from "clear it"
/// (`Some(None)`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpensePatch {
    pub date: Option<NaiveDate>,
    pub category: Option<Category>,
    pub amount: Option<Money>,
    pub memo: Option<Option<String>>,
}

impl ExpensePatch {
    /// True when the patch sets nothing
    pub fn is_empty(&self) -> bool {
        self.date.is_none() && self.category.is_none() && self.amount.is_none() && self.memo.is_none()
    }
}

impl Expense {
    /// Merge a patch into this expense, field by field
    pub fn apply_patch(&mut self, patch: ExpensePatch) {
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(memo) = patch.memo {
            self.memo = memo;
        }
    }
}
