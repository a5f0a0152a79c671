use serde::{Deserialize, Serialize};

/// A lookup result: which dataset element answered a query and where it
/// sits in the sequence.
///
/// Entries are transient values produced per query; the engine never
/// retains them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Zero-based position of the matched element in the dataset.
    pub index: usize,
    /// The stored value at `index`. For an approximate match this is the
    /// neighbor that satisfied its tolerance band, not the queried value.
    pub value: i64,
}
