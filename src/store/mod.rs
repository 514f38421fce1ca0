//! State stores for kakeibo
//!
//! The ledger store owns the expense collection; the history stack gives it
//! snapshot-based undo/redo. Stores are plain objects the embedding
//! application instantiates once, with a synchronous publish-subscribe
//! surface for UI code.

pub mod history;
pub mod ledger;

pub use history::HistoryStack;
pub use ledger::{LedgerStore, SubscriberId};
