//! The expense ledger store
//!
//! An explicit store object owning the ordered expense collection, its
//! undo/redo history, and a subscriber list, instantiated once per
//! application context rather than living as ambient global state.
//!
//! Every mutation is synchronous: it persists the entire collection to the
//! repository, then notifies subscribers. The store is the sole writer of
//! the ledger blob, so mutations never interleave at the sub-record level.

use crate::error::KakeiboResult;
use crate::models::{Expense, ExpenseId, ExpensePatch, IdGenerator, NewExpense};
use crate::storage::LedgerRepository;

use super::history::HistoryStack;

/// Handle returned by `subscribe`, used to unsubscribe
pub type SubscriberId = u64;

type Subscriber = Box<dyn FnMut(&[Expense])>;

/// In-memory ordered expense collection with persistence, history, and
/// synchronous change notification
pub struct LedgerStore {
    items: Vec<Expense>,
    history: HistoryStack,
    ids: IdGenerator,
    repo: LedgerRepository,
    subscribers: Vec<(SubscriberId, Subscriber)>,
    next_subscriber: SubscriberId,
}

impl LedgerStore {
    /// Open a store over the given repository, loading any persisted ledger
    ///
    /// A missing or corrupt blob starts the store empty.
    pub fn open(repo: LedgerRepository, ids: IdGenerator) -> KakeiboResult<Self> {
        let items = repo.load()?;
        Ok(Self {
            items,
            history: HistoryStack::new(),
            ids,
            repo,
            subscribers: Vec::new(),
            next_subscriber: 0,
        })
    }

    /// The ordered expense collection
    pub fn expenses(&self) -> &[Expense] {
        &self.items
    }

    /// Number of records in the ledger
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the ledger is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up a record by id
    pub fn get(&self, id: &ExpenseId) -> Option<&Expense> {
        self.items.iter().find(|e| &e.id == id)
    }

    /// Append a new expense, assigning it a fresh unique id
    ///
    /// Returns the stored record.
    pub fn add(&mut self, input: NewExpense) -> KakeiboResult<Expense> {
        let expense = input.into_expense(self.ids.expense_id());
        self.items.push(expense.clone());
        self.persist_and_notify()?;
        Ok(expense)
    }

    /// Merge a patch into the record with the given id
    ///
    /// Returns `Ok(None)` when no record has that id; absence is a normal
    /// outcome, not an error.
    pub fn update(&mut self, id: &ExpenseId, patch: ExpensePatch) -> KakeiboResult<Option<Expense>> {
        let updated = match self.items.iter_mut().find(|e| &e.id == id) {
            Some(expense) => {
                expense.apply_patch(patch);
                Some(expense.clone())
            }
            None => return Ok(None),
        };
        self.persist_and_notify()?;
        Ok(updated)
    }

    /// Remove the record with the given id
    ///
    /// Returns whether a record was found and removed.
    pub fn remove(&mut self, id: &ExpenseId) -> KakeiboResult<bool> {
        let before = self.items.len();
        self.items.retain(|e| &e.id != id);
        if self.items.len() == before {
            return Ok(false);
        }
        self.persist_and_notify()?;
        Ok(true)
    }

    /// Append many expenses at once, assigning each a fresh id
    ///
    /// Returns the stored records. A single persist covers the whole batch.
    pub fn add_many(&mut self, inputs: Vec<NewExpense>) -> KakeiboResult<Vec<Expense>> {
        let created: Vec<Expense> = inputs
            .into_iter()
            .map(|input| input.into_expense(self.ids.expense_id()))
            .collect();
        self.items.extend(created.iter().cloned());
        self.persist_and_notify()?;
        Ok(created)
    }

    /// Replace the whole collection
    pub fn set_all(&mut self, expenses: Vec<Expense>) -> KakeiboResult<()> {
        self.items = expenses;
        self.persist_and_notify()
    }

    /// Empty the collection
    pub fn clear(&mut self) -> KakeiboResult<()> {
        self.items.clear();
        self.persist_and_notify()
    }

    /// Snapshot the current collection onto the undo stack
    ///
    /// Must be called by every mutating use case before it mutates.
    pub fn commit(&mut self) {
        self.history.commit(&self.items);
    }

    /// Undo the most recent committed mutation
    ///
    /// No-op returning false when there is nothing to undo; otherwise the
    /// restored collection is persisted and subscribers are notified.
    pub fn undo(&mut self) -> KakeiboResult<bool> {
        if !self.history.undo(&mut self.items) {
            return Ok(false);
        }
        self.persist_and_notify()?;
        Ok(true)
    }

    /// Redo the most recently undone mutation
    pub fn redo(&mut self) -> KakeiboResult<bool> {
        if !self.history.redo(&mut self.items) {
            return Ok(false);
        }
        self.persist_and_notify()?;
        Ok(true)
    }

    /// Whether an undo step is available
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether a redo step is available
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Drop all undo/redo history
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Register a callback invoked synchronously after every mutation with
    /// the post-mutation collection
    pub fn subscribe(&mut self, callback: impl FnMut(&[Expense]) + 'static) -> SubscriberId {
        let id = self.next_subscriber;
        self.next_subscriber += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a previously registered subscriber
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    fn persist_and_notify(&mut self) -> KakeiboResult<()> {
        self.repo.save(&self.items)?;
        for (_, callback) in &mut self.subscribers {
            callback(&self.items);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, IdStrategy, Money};
    use chrono::NaiveDate;
    use std::cell::RefCell;
    use std::rc::Rc;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn open_store(dir: &TempDir) -> LedgerStore {
        let repo = LedgerRepository::new(dir.path().join("ledger.json"));
        LedgerStore::open(repo, IdGenerator::default()).unwrap()
    }

    fn lunch(units: i64) -> NewExpense {
        NewExpense::new(date(2025, 1, 15), Category::Food, Money::from_units(units))
            .with_memo("lunch")
    }

    #[test]
    fn test_add_assigns_unique_ids() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        let a = store.add(lunch(1000)).unwrap();
        let b = store.add(lunch(2000)).unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_mutations_persist_across_reopen() {
        let dir = TempDir::new().unwrap();
        let added = {
            let mut store = open_store(&dir);
            store.add(lunch(1000)).unwrap()
        };

        let store = open_store(&dir);
        assert_eq!(store.expenses(), &[added]);
    }

    #[test]
    fn test_update_merges_and_returns_record() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        let added = store.add(lunch(1000)).unwrap();

        let updated = store
            .update(
                &added.id,
                ExpensePatch {
                    amount: Some(Money::from_units(1500)),
                    ..Default::default()
                },
            )
            .unwrap()
            .unwrap();

        assert_eq!(updated.amount, Money::from_units(1500));
        assert_eq!(updated.memo.as_deref(), Some("lunch"));
        assert_eq!(store.get(&added.id).unwrap().amount, Money::from_units(1500));
    }

    #[test]
    fn test_update_missing_id_returns_none() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        let result = store
            .update(&ExpenseId::from_raw("nope"), ExpensePatch::default())
            .unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn test_remove_reports_found() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        let added = store.add(lunch(1000)).unwrap();

        assert!(store.remove(&added.id).unwrap());
        assert!(!store.remove(&added.id).unwrap());
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_many_assigns_ids_to_each() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        let created = store.add_many(vec![lunch(100), lunch(200), lunch(300)]).unwrap();

        assert_eq!(created.len(), 3);
        assert_ne!(created[0].id, created[1].id);
        assert_eq!(store.expenses(), created.as_slice());
    }

    #[test]
    fn test_set_all_and_clear() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        store.add(lunch(1000)).unwrap();

        let replacement =
            vec![lunch(5).into_expense(ExpenseId::from_raw("x")), lunch(6).into_expense(ExpenseId::from_raw("y"))];
        store.set_all(replacement.clone()).unwrap();
        assert_eq!(store.expenses(), replacement.as_slice());

        store.clear().unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_commit_undo_redo_through_store() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        store.commit();
        store.add(lunch(1000)).unwrap();
        let after = store.expenses().to_vec();

        assert!(store.can_undo());
        assert!(store.undo().unwrap());
        assert!(store.is_empty());
        assert!(store.can_redo());

        assert!(store.redo().unwrap());
        assert_eq!(store.expenses(), after.as_slice());
    }

    #[test]
    fn test_undo_restores_persisted_state() {
        let dir = TempDir::new().unwrap();
        {
            let mut store = open_store(&dir);
            store.commit();
            store.add(lunch(1000)).unwrap();
            store.undo().unwrap();
        }

        // The undone (empty) state is what landed on disk
        let store = open_store(&dir);
        assert!(store.is_empty());
    }

    #[test]
    fn test_undo_with_no_history_is_noop() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        store.add(lunch(1000)).unwrap();

        assert!(!store.undo().unwrap());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_subscriber_fires_once_per_mutation() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        let seen: Rc<RefCell<Vec<usize>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |items| sink.borrow_mut().push(items.len()));

        store.add(lunch(1000)).unwrap();
        store.add(lunch(2000)).unwrap();
        store.clear().unwrap();

        assert_eq!(*seen.borrow(), vec![1, 2, 0]);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        let seen: Rc<RefCell<usize>> = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&seen);
        let id = store.subscribe(move |_| *sink.borrow_mut() += 1);

        store.add(lunch(1000)).unwrap();
        assert!(store.unsubscribe(id));
        store.add(lunch(2000)).unwrap();

        assert_eq!(*seen.borrow(), 1);
        assert!(!store.unsubscribe(id));
    }
}
