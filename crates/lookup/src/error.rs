//! Error types produced by the lookup crate.
//!
//! Query errors ([`LookupError`]) are cloneable and comparable so callers
//! can branch on them precisely: a miss is a normal, expected outcome and
//! must stay distinguishable from an internal fault. Load errors
//! ([`DatasetError`]) carry the offending line or I/O source and are fatal
//! at startup; nothing is retried, since loading and querying are both
//! deterministic.

use thiserror::Error;

/// Errors produced by [`LookupEngine`](crate::LookupEngine).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LookupError {
    /// No element matched exactly or within its tolerance band.
    #[error("value not found")]
    NotFound,
    /// Construction was attempted over a dataset with zero elements. The
    /// engine must never become queryable while empty.
    #[error("dataset is empty")]
    EmptyDataset,
    /// The tolerance divisor must be positive. A zero divisor would turn
    /// into a division error on the first query, so it is rejected here.
    #[error("tolerance divisor must be positive, got {0}")]
    InvalidDivisor(i64),
}

/// Errors produced while loading a [`Dataset`](crate::Dataset).
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The source file is missing or unreadable.
    #[error("read dataset: {0}")]
    Io(#[from] std::io::Error),
    /// A line failed integer parsing. Carries the 1-based line number and
    /// the offending text.
    #[error("line {line}: not an integer: {content:?}")]
    InvalidLine { line: usize, content: String },
    /// The source parsed cleanly but contained zero values.
    #[error("dataset contains no values")]
    Empty,
}
