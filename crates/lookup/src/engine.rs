//! The approximate-lookup engine.
//!
//! Exact matches are found by classic binary search. On a miss, the index
//! where the search last probed (the landing point) anchors exactly two
//! candidates, and each is checked against a tolerance band proportional
//! to the query: `tolerance = target / conformation`, truncating integer
//! division. The below-candidate is checked before the above-candidate, so
//! when both qualify the lower index wins. This is not
//! nearest-in-metric-space search; both band checks are one-sided.

use crate::dataset::Dataset;
use crate::error::LookupError;
use crate::types::Entry;

#[cfg(test)]
mod tests;

/// The single capability the wider system depends on: resolve an integer
/// query to the dataset entry that answers it, or report a miss.
pub trait ValueLookup {
    fn find(&self, target: i64) -> Result<Entry, LookupError>;
}

/// Answers point queries over an immutable ascending dataset with
/// exact-or-nearest semantics.
///
/// Construction consumes the dataset; afterwards nothing is ever written,
/// so one engine may be shared read-only across any number of concurrent
/// callers. Sortedness of the dataset is a precondition inherited from
/// [`Dataset`], not validated here.
#[derive(Debug)]
pub struct LookupEngine {
    values: Vec<i64>,
    conformation: i64,
}

impl LookupEngine {
    /// Build an engine over `dataset` with the given tolerance divisor.
    ///
    /// Fails with [`LookupError::EmptyDataset`] on a zero-element dataset
    /// and [`LookupError::InvalidDivisor`] on a non-positive divisor; both
    /// are configuration errors and nothing is queryable after either.
    pub fn new(dataset: Dataset, conformation: i64) -> Result<Self, LookupError> {
        if conformation <= 0 {
            return Err(LookupError::InvalidDivisor(conformation));
        }
        if dataset.is_empty() {
            return Err(LookupError::EmptyDataset);
        }

        Ok(Self {
            values: dataset.into_values(),
            conformation,
        })
    }

    /// Find the entry answering `target`: its exact position if stored,
    /// otherwise the nearest bracketing neighbor whose tolerance band
    /// covers it.
    pub fn find(&self, target: i64) -> Result<Entry, LookupError> {
        let len = self.values.len() as i64;
        let (mut low, mut mid, mut high) = (0_i64, 0_i64, len - 1);

        while low <= high {
            mid = low + (high - low) / 2;
            let probed = self.values[mid as usize];

            if probed == target {
                return Ok(Entry {
                    index: mid as usize,
                    value: probed,
                });
            }

            if probed > target {
                high = mid - 1;
            } else {
                low = mid + 1;
            }
        }

        // No exact match; `mid` is the landing point. `lower` becomes the
        // index of the largest value at or just below where `target` would
        // sit.
        let mut lower = mid;
        if mid > 0 && self.values[mid as usize] > target {
            lower = mid - 1;
        }

        let tolerance = target / self.conformation;
        if tolerance == 0 {
            // Queries that truncate to a zero-width band never match
            // approximately.
            return Err(LookupError::NotFound);
        }

        // Candidate below first; lower index wins when both would qualify.
        if lower >= 0 && target - tolerance <= self.values[lower as usize] {
            return Ok(Entry {
                index: lower as usize,
                value: self.values[lower as usize],
            });
        }

        let upper = lower + 1;
        if upper < len && target + tolerance >= self.values[upper as usize] {
            return Ok(Entry {
                index: upper as usize,
                value: self.values[upper as usize],
            });
        }

        Err(LookupError::NotFound)
    }

    /// Number of values the engine serves. Never zero.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The configured tolerance divisor.
    pub fn conformation(&self) -> i64 {
        self.conformation
    }
}

impl ValueLookup for LookupEngine {
    fn find(&self, target: i64) -> Result<Entry, LookupError> {
        LookupEngine::find(self, target)
    }
}
