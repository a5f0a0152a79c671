//! # nearval lookup (`lookup`)
//!
//! ## Purpose
//!
//! `lookup` answers point queries of the form "what is the closest known
//! value to X, and at what position?" over an immutable, ascending dataset
//! of signed integers. It is the computational core of nearval: a classic
//! binary search extended with a tolerance-band fallback that returns the
//! nearest bracketing neighbor when no exact match exists.
//!
//! In a typical deployment you will:
//! - Load a newline-delimited integer file into a [`Dataset`] once at
//!   startup.
//! - Build a [`LookupEngine`] from that dataset and a tolerance divisor.
//! - Share the engine behind an `Arc` and service [`ValueLookup::find`]
//!   calls from any number of concurrent readers.
//!
//! ## Core Types
//!
//! - [`Dataset`]: the in-memory value sequence plus its file/reader loader.
//! - [`LookupEngine`]: owns the dataset and the tolerance divisor; answers
//!   queries with exact-or-nearest semantics.
//! - [`ValueLookup`]: the one-method capability trait the wider system
//!   depends on. Everything behind it is replaceable.
//! - [`Entry`]: a result pair of dataset index and stored value.
//! - [`LookupError`] / [`DatasetError`]: typed query and load failures.
//!
//! ## Tolerance Semantics
//!
//! A query that misses every stored value exactly may still match one of
//! the two elements bracketing the binary-search landing point. The match
//! window scales with the query: `tolerance = target / conformation` using
//! truncating integer division, so larger queries tolerate a wider
//! absolute gap, and targets small enough to truncate to zero never match
//! approximately. The lower-index candidate is always checked first.
//!
//! ## Example Usage
//!
//! ```
//! use lookup::{Dataset, LookupEngine};
//!
//! let engine = LookupEngine::new(Dataset::new(vec![10, 100]), 10).expect("engine");
//!
//! // Exact hit.
//! let entry = engine.find(100).expect("stored value");
//! assert_eq!((entry.index, entry.value), (1, 100));
//!
//! // 105 lies within 105 / 10 = 10 of the stored 100.
//! let entry = engine.find(105).expect("within tolerance");
//! assert_eq!((entry.index, entry.value), (1, 100));
//!
//! // 9 / 10 truncates to a zero-width band, so nothing matches.
//! assert!(engine.find(9).is_err());
//! ```
//!
//! ## Concurrency
//!
//! The dataset is immutable after construction and the engine holds no
//! interior mutability, so a single engine value may be shared read-only
//! across threads or async tasks without locking. [`ValueLookup::find`] is
//! pure, non-blocking, and idempotent.
//!
//! This crate takes no logging dependency at all; observability belongs to
//! the request-handling layer that wraps it.

pub mod dataset;
pub mod engine;
pub mod error;
pub mod types;

pub use crate::dataset::Dataset;
pub use crate::engine::{LookupEngine, ValueLookup};
pub use crate::error::{DatasetError, LookupError};
pub use crate::types::Entry;
