//! Recurring expense templates and drafts
//!
//! A `Recurring` is a template ("rent, 80000, monthly from 2025-01-01").
//! Templates are expanded on demand into `RecurringDraft` entries for a
//! concrete date range; drafts are ephemeral and never persisted, they are
//! discarded when applied to the ledger or when the range is regenerated.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::expense::Category;
use super::ids::{DraftId, RecurringId};
use super::money::Money;

/// How often a recurring expense repeats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cadence {
    Monthly,
    Weekly,
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monthly => f.write_str("monthly"),
            Self::Weekly => f.write_str("weekly"),
        }
    }
}

/// A recurring expense template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recurring {
    /// Unique identifier
    pub id: RecurringId,

    /// Human-readable label; becomes the memo of applied expenses
    pub label: String,

    /// Amount per occurrence
    pub amount: Money,

    /// Spending category
    pub category: Category,

    /// Repeat cadence
    pub cadence: Cadence,

    /// First date the template is active
    pub start_at: NaiveDate,

    /// Last date the template is active, if bounded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_at: Option<NaiveDate>,
}

impl Recurring {
    /// Whether this template produces drafts for a range starting at `range_start`
    ///
    /// Active means the template has begun by the range start and has not
    /// ended before it.
    pub fn is_active_at(&self, range_start: NaiveDate) -> bool {
        if range_start < self.start_at {
            return false;
        }
        match self.end_at {
            Some(end) => end >= range_start,
            None => true,
        }
    }
}

/// Input for creating a recurring template; the store assigns the id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecurring {
    pub label: String,
    pub amount: Money,
    pub category: Category,
    pub cadence: Cadence,
    pub start_at: NaiveDate,
    pub end_at: Option<NaiveDate>,
}

impl NewRecurring {
    /// Materialize into a stored template with the given id
    pub fn into_recurring(self, id: RecurringId) -> Recurring {
        Recurring {
            id,
            label: self.label,
            amount: self.amount,
            category: self.category,
            cadence: self.cadence,
            start_at: self.start_at,
            end_at: self.end_at,
        }
    }
}

/// A concrete draft entry expanded from a template for one date
///
/// `source_id` may reference a template that has since been deleted; stale
/// references are tolerated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurringDraft {
    pub id: DraftId,
    pub source_id: RecurringId,
    pub date: NaiveDate,
    pub label: String,
    pub amount: Money,
    pub category: Category,
}
