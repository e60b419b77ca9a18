//! Oneiro Store — bounded dream-history persistence.
//!
//! The history is a short, newest-first list of records persisted to a
//! single JSON file behind the [`HistoryStore`] repository interface,
//! with a versioned-upgrade step run once at load.

pub mod history;
pub mod migrate;
pub mod types;

pub use history::{HistoryStore, JsonHistoryStore, MAX_HISTORY};
pub use types::DreamRecord;
