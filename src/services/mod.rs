//! Service layer for kakeibo
//!
//! Use cases that sit between callers and the stores: expense mutations
//! with history commits, budget period resolution, settings management,
//! recurring-expense drafts, and CSV import.

pub mod expense;
pub mod import;
pub mod period;
pub mod recurring;
pub mod settings;

pub use import::CsvImport;
pub use period::PeriodService;
pub use recurring::RecurringStore;
pub use settings::SettingsStore;
