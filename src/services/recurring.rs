//! Recurring-expense store and draft generation
//!
//! Owns the recurring templates and the ephemeral drafts expanded from
//! them. Drafts live only in memory: regenerating a month replaces that
//! month's drafts, and applying them moves their content into the ledger
//! and discards them.

use chrono::{Datelike, Duration, NaiveDate};

use crate::error::KakeiboResult;
use crate::models::{
    Cadence, Expense, IdGenerator, NewExpense, NewRecurring, Recurring, RecurringDraft,
    RecurringId,
};
use crate::store::LedgerStore;

/// Store for recurring templates and their generated drafts
pub struct RecurringStore {
    templates: Vec<Recurring>,
    drafts: Vec<RecurringDraft>,
    ids: IdGenerator,
}

impl RecurringStore {
    /// Create an empty store
    pub fn new(ids: IdGenerator) -> Self {
        Self {
            templates: Vec::new(),
            drafts: Vec::new(),
            ids,
        }
    }

    /// The registered templates
    pub fn templates(&self) -> &[Recurring] {
        &self.templates
    }

    /// The currently generated drafts
    pub fn drafts(&self) -> &[RecurringDraft] {
        &self.drafts
    }

    /// Register a template, assigning it a fresh id
    pub fn add_template(&mut self, input: NewRecurring) -> &Recurring {
        let template = input.into_recurring(self.ids.recurring_id());
        self.templates.push(template);
        self.templates.last().expect("just pushed")
    }

    /// Remove a template
    ///
    /// Returns whether a template was found and removed. Drafts already
    /// generated from it are left alone; their source reference goes stale,
    /// which is tolerated.
    pub fn remove_template(&mut self, id: &RecurringId) -> bool {
        let before = self.templates.len();
        self.templates.retain(|t| &t.id != id);
        self.templates.len() != before
    }

    /// Drop all drafts dated in the given calendar month
    pub fn clear_drafts_for_month(&mut self, year: i32, month: u32) {
        self.drafts
            .retain(|d| !(d.date.year() == year && d.date.month() == month));
    }

    /// Expand active templates into drafts for `[start, end)`
    ///
    /// Previously generated drafts in `start`'s calendar month are discarded
    /// first, so regenerating the same month is idempotent. A template is
    /// active when it has started by `start` and has not ended before it.
    /// Monthly templates emit one draft dated at `start`; weekly templates
    /// emit one draft per 7-day step from `start` up to (but not including)
    /// `end`.
    pub fn generate_drafts_for_range(&mut self, start: NaiveDate, end: NaiveDate) {
        self.clear_drafts_for_month(start.year(), start.month());

        let mut generated = Vec::new();
        for template in &self.templates {
            if !template.is_active_at(start) {
                continue;
            }

            match template.cadence {
                Cadence::Monthly => {
                    generated.push(draft_from(template, start, &self.ids));
                }
                Cadence::Weekly => {
                    let mut cursor = start;
                    while cursor < end {
                        generated.push(draft_from(template, cursor, &self.ids));
                        cursor += Duration::days(7);
                    }
                }
            }
        }

        self.drafts.extend(generated);
    }

    /// Bulk-insert all current drafts into the ledger, then discard them
    ///
    /// The template label becomes the expense memo. One history commit
    /// covers the whole batch, so a single undo removes every applied
    /// entry. Calling this twice around a regeneration duplicates entries;
    /// guarding against a double invocation is the caller's job.
    pub fn apply_drafts(&mut self, ledger: &mut LedgerStore) -> KakeiboResult<Vec<Expense>> {
        if self.drafts.is_empty() {
            return Ok(Vec::new());
        }

        let inputs: Vec<NewExpense> = self
            .drafts
            .iter()
            .map(|d| {
                NewExpense::new(d.date, d.category, d.amount).with_memo(d.label.clone())
            })
            .collect();

        ledger.commit();
        let created = ledger.add_many(inputs)?;
        self.drafts.clear();
        Ok(created)
    }
}

fn draft_from(template: &Recurring, date: NaiveDate, ids: &IdGenerator) -> RecurringDraft {
    RecurringDraft {
        id: ids.draft_id(),
        source_id: template.id.clone(),
        date,
        label: template.label.clone(),
        amount: template.amount,
        category: template.category,
    }
}
