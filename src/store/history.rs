//! Undo/redo history for the expense collection
//!
//! Two unbounded stacks of full-collection snapshots. The contract: every
//! mutating use case calls `commit` with the pre-mutation collection before
//! it mutates, which also invalidates any redo history. Snapshots are deep
//! value copies, so later mutation of the live collection cannot corrupt a
//! snapshot.

use crate::models::Expense;

/// Past/future snapshot stacks
#[derive(Debug, Default)]
pub struct HistoryStack {
    past: Vec<Vec<Expense>>,
    future: Vec<Vec<Expense>>,
}

impl HistoryStack {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Push the pre-mutation snapshot onto the past stack and clear the
    /// future stack (a new action invalidates redo history)
    pub fn commit(&mut self, current: &[Expense]) {
        self.past.push(current.to_vec());
        self.future.clear();
    }

    /// Step back: swap the live collection with the most recent past
    /// snapshot, pushing the live state onto the future stack
    ///
    /// Returns false (and leaves `live` untouched) if there is nothing to
    /// undo.
    pub fn undo(&mut self, live: &mut Vec<Expense>) -> bool {
        match self.past.pop() {
            Some(prev) => {
                let current = std::mem::replace(live, prev);
                self.future.push(current);
                true
            }
            None => false,
        }
    }

    /// Step forward: mirror of `undo` using the future stack
    pub fn redo(&mut self, live: &mut Vec<Expense>) -> bool {
        match self.future.pop() {
            Some(next) => {
                let current = std::mem::replace(live, next);
                self.past.push(current);
                true
            }
            None => false,
        }
    }

    /// Whether an undo step is available
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    /// Whether a redo step is available
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Drop all snapshots
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }
}
