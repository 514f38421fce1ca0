//! Storage layer for kakeibo
//!
//! JSON file storage with atomic writes. Two independent persisted entries:
//! the ledger blob (owned by `LedgerRepository`) and the settings blob
//! (owned by `config::Settings`). Corrupt data is recovered as empty rather
//! than surfaced as fatal.

pub mod file_io;
pub mod ledger;

pub use file_io::{read_json_or_default, write_json_atomic};
pub use ledger::{LedgerRepository, LEDGER_SCHEMA_VERSION};
