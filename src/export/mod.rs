//! Export functionality for kakeibo
//!
//! CSV serialization of the expense collection for download or backup.

pub mod csv;

pub use csv::{write_expenses, CSV_HEADER};
