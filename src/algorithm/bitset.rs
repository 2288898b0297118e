use bitvec::prelude::{BitVec, bitvec};
use std::fmt;

/// Fixed-size bitset tracking which cell values are in use
///
/// Uses 1-based indexing to match cell values throughout the system.
/// Provides O(1) membership testing during the backtracking search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValueBitset {
    bits: BitVec,
    max_value: usize,
}

impl ValueBitset {
    /// Create a bitset with no values present
    pub fn new(max_value: usize) -> Self {
        Self {
            bits: bitvec![0; max_value],
            max_value,
        }
    }

    /// Insert a value
    ///
    /// Takes 1-based values, storing at value-1 internally
    pub fn insert(&mut self, value: usize) {
        if value > 0 && value <= self.max_value {
            self.bits.set(value - 1, true);
        }
    }

    /// Remove a value
    pub fn remove(&mut self, value: usize) {
        if value > 0 && value <= self.max_value {
            self.bits.set(value - 1, false);
        }
    }

    /// Test value membership
    pub fn contains(&self, value: usize) -> bool {
        if value > 0 {
            self.bits.get(value - 1).as_deref() == Some(&true)
        } else {
            false
        }
    }

    /// Test if no values are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count values in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Extract all values as a vector
    ///
    /// Returns 1-based values matching the cell value range
    pub fn to_vec(&self) -> Vec<usize> {
        self.bits.iter_ones().map(|index| index + 1).collect()
    }
}

impl fmt::Display for ValueBitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ValueBitset({} values: {:?})", self.count(), self.to_vec())
    }
}
