//! Mood-journaling domain: the entry model, a file-backed journal store, and
//! the weekly mood analytics routine that turns a week of entries into a
//! summary with rule-based advice.

use thiserror::Error;

pub mod advice;
pub mod analyzer;
pub mod entry;
pub mod quotes;
pub mod store;
pub mod week;

pub use analyzer::{MoodSummary, analyze_week, analyze_week_with};
pub use entry::MoodEntry;
pub use store::JournalStore;
pub use week::WeekConvention;

#[derive(Debug, Error)]
pub enum JournalError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("not found: {0}")]
    NotFound(String),
}

/// Result type alias for journal operations.
pub type JournalResult<T> = Result<T, JournalError>;
