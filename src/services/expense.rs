//! Expense use cases
//!
//! The thin layer UI code calls into. Each mutating use case validates its
//! input, snapshots the collection onto the undo stack, and then performs
//! the mutation through the ledger store. The history snapshot is taken
//! unconditionally, before the store reports whether the target record even
//! exists.

use crate::error::{KakeiboError, KakeiboResult};
use crate::models::{Expense, ExpenseId, ExpensePatch, NewExpense};
use crate::store::LedgerStore;

/// Validate and record a new expense
pub fn add_expense(store: &mut LedgerStore, mut input: NewExpense) -> KakeiboResult<Expense> {
    validate_amount(&input)?;
    input.memo = normalize_memo(input.memo);

    store.commit();
    store.add(input)
}

/// Merge a patch into an existing expense
///
/// Returns `Ok(None)` when the id is absent.
pub fn update_expense(
    store: &mut LedgerStore,
    id: &ExpenseId,
    mut patch: ExpensePatch,
) -> KakeiboResult<Option<Expense>> {
    if let Some(amount) = patch.amount {
        if amount.is_negative() {
            return Err(KakeiboError::Validation(
                "amount must be non-negative".into(),
            ));
        }
    }
    if let Some(memo) = patch.memo.take() {
        patch.memo = Some(normalize_memo(memo));
    }

    store.commit();
    store.update(id, patch)
}

/// Delete an expense
///
/// Returns whether a record was found and removed.
pub fn delete_expense(store: &mut LedgerStore, id: &ExpenseId) -> KakeiboResult<bool> {
    store.commit();
    store.remove(id)
}

/// Replace the whole collection
pub fn replace_expenses(store: &mut LedgerStore, expenses: Vec<Expense>) -> KakeiboResult<()> {
    store.commit();
    store.set_all(expenses)
}

/// Empty the collection
pub fn clear_expenses(store: &mut LedgerStore) -> KakeiboResult<()> {
    store.commit();
    store.clear()
}

fn validate_amount(input: &NewExpense) -> KakeiboResult<()> {
    if input.amount.is_negative() {
        return Err(KakeiboError::Validation(
            "amount must be non-negative".into(),
        ));
    }
    Ok(())
}

/// Trim the memo; an empty or whitespace-only memo becomes absent
fn normalize_memo(memo: Option<String>) -> Option<String> {
    match memo {
        Some(m) => {
            let trimmed = m.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        None => None,
    }
}
