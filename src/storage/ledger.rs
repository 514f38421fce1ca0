//! Ledger repository for JSON storage
//!
//! Persists the whole ordered expense collection as one versioned blob in
//! ledger.json. The collection is always written in full; there is no
//! partial-write state.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::KakeiboResult;
use crate::models::Expense;

use super::file_io::{read_json_or_default, write_json_atomic};

/// Current on-disk schema version
pub const LEDGER_SCHEMA_VERSION: u32 = 1;

/// Serializable ledger blob
#[derive(Debug, Clone, Serialize, Deserialize)]
struct LedgerData {
    schema_version: u32,
    expenses: Vec<Expense>,
}

impl Default for LedgerData {
    fn default() -> Self {
        Self {
            schema_version: LEDGER_SCHEMA_VERSION,
            expenses: Vec::new(),
        }
    }
}

/// Repository for expense-collection persistence
#[derive(Debug, Clone)]
pub struct LedgerRepository {
    path: PathBuf,
}

impl LedgerRepository {
    /// Create a repository backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the full collection from disk
    ///
    /// A missing or corrupt file yields an empty collection.
    pub fn load(&self) -> KakeiboResult<Vec<Expense>> {
        let data: LedgerData = read_json_or_default(&self.path)?;
        Ok(data.expenses)
    }

    /// Save the full collection to disk atomically
    pub fn save(&self, expenses: &[Expense]) -> KakeiboResult<()> {
        let data = LedgerData {
            schema_version: LEDGER_SCHEMA_VERSION,
            expenses: expenses.to_vec(),
        };
        write_json_atomic(&self.path, &data)?;
        tracing::debug!(path = %self.path.display(), count = expenses.len(), "ledger saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, ExpenseId, Money, NewExpense};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn sample_expense(id: &str) -> Expense {
        NewExpense::new(
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            Category::Food,
            Money::from_units(1000),
        )
        .with_memo("lunch")
        .into_expense(ExpenseId::from_raw(id))
    }

    #[test]
    fn test_load_missing_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let repo = LedgerRepository::new(temp_dir.path().join("ledger.json"));

        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_and_load_preserves_order() {
        let temp_dir = TempDir::new().unwrap();
        let repo = LedgerRepository::new(temp_dir.path().join("ledger.json"));

        let expenses = vec![sample_expense("b"), sample_expense("a"), sample_expense("c")];
        repo.save(&expenses).unwrap();

        let loaded = repo.load().unwrap();
        assert_eq!(loaded, expenses);
    }

    #[test]
    fn test_corrupt_file_loads_as_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.json");
        std::fs::write(&path, "garbage").unwrap();

        let repo = LedgerRepository::new(path);
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_blob_carries_schema_version() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.json");
        let repo = LedgerRepository::new(path.clone());

        repo.save(&[sample_expense("a")]).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["schema_version"], LEDGER_SCHEMA_VERSION);
    }
}
