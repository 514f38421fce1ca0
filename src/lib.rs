//! kakeibo - Household expense ledger core
//!
//! This library provides the state-management core for a household
//! expense tracker: an owned in-memory ledger with JSON persistence,
//! snapshot-based undo/redo, budget periods anchored to a configurable
//! month start day, recurring-expense drafts, analytics reports, and a
//! CSV import/export codec.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Settings and data path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, money, periods, recurring)
//! - `storage`: JSON file storage layer
//! - `store`: Ledger store with history and change notification
//! - `services`: Business logic layer
//! - `reports`: Read-side analytics
//! - `export`: CSV serialization
//!
//! # Example
//!
//! ```rust,ignore
//! use kakeibo::config::{paths::KakeiboPaths, settings::Settings};
//! use kakeibo::models::IdGenerator;
//! use kakeibo::storage::LedgerRepository;
//! use kakeibo::store::LedgerStore;
//!
//! let paths = KakeiboPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let repo = LedgerRepository::new(paths.ledger_file());
//! let mut store = LedgerStore::open(repo, IdGenerator::default())?;
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod store;

pub use error::KakeiboError;
