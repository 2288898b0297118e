//! Grid coordinates and Latin-square value storage
//!
//! A [`Grid`] holds the solved values of one generation attempt. It is
//! constructed valid-by-shape and checked against the Latin-square invariant
//! (every row and column a permutation of `1..=size`) before it is embedded
//! in a published puzzle.

use ndarray::Array2;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::io::error::{Result, invalid_grid};

/// A single grid coordinate
///
/// Identity is the coordinate pair; ordering is row-major so sorted cell
/// lists are canonical.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// Zero-based row index
    pub row: usize,
    /// Zero-based column index
    pub col: usize,
}

impl Cell {
    /// Create a cell coordinate
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major flat index used by the normalized wire form
    pub const fn flat_index(self, size: usize) -> usize {
        self.row * size + self.col
    }

    /// Recover a coordinate from its row-major flat index
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero
    pub const fn from_flat_index(index: usize, size: usize) -> Self {
        Self {
            row: index / size,
            col: index % size,
        }
    }

    /// Test 4-directional adjacency with another cell
    pub const fn is_adjacent(self, other: Self) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }

    /// In-bounds 4-neighbors of this cell
    pub fn neighbors(self, size: usize) -> Vec<Self> {
        let mut out = Vec::with_capacity(4);
        if self.row > 0 {
            out.push(Self::new(self.row - 1, self.col));
        }
        if self.col > 0 {
            out.push(Self::new(self.row, self.col - 1));
        }
        if self.row + 1 < size {
            out.push(Self::new(self.row + 1, self.col));
        }
        if self.col + 1 < size {
            out.push(Self::new(self.row, self.col + 1));
        }
        out
    }
}

/// A solved `size x size` grid of values in `1..=size`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    values: Array2<u8>,
}

impl Grid {
    /// Build a grid from row-major nested vectors, validating shape and range
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::InvalidGrid`](crate::PuzzleError::InvalidGrid)
    /// if the rows do not form a non-empty square or any value falls outside
    /// `1..=size`. The Latin property itself is checked separately by
    /// [`is_latin`](Self::is_latin).
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(invalid_grid("grid must contain at least one row"));
        }
        if size > usize::from(u8::MAX) {
            return Err(invalid_grid(format!(
                "grid size {size} exceeds the supported value range"
            )));
        }
        for row in &rows {
            if row.len() != size {
                return Err(invalid_grid(format!(
                    "expected {size} columns per row, found {}",
                    row.len()
                )));
            }
            for &value in row {
                if value == 0 || usize::from(value) > size {
                    return Err(invalid_grid(format!(
                        "value {value} is outside 1..={size}"
                    )));
                }
            }
        }

        let flat: Vec<u8> = rows.into_iter().flatten().collect();
        let values = Array2::from_shape_vec((size, size), flat)
            .map_err(|err| invalid_grid(err.to_string()))?;
        Ok(Self { values })
    }

    /// Wrap an already-shaped value matrix
    pub(crate) const fn from_array(values: Array2<u8>) -> Self {
        Self { values }
    }

    /// Edge length of the grid
    pub fn size(&self) -> usize {
        self.values.nrows()
    }

    /// Value at a cell, or `0` when the coordinate is out of bounds
    pub fn value(&self, cell: Cell) -> u8 {
        self.values
            .get([cell.row, cell.col])
            .copied()
            .unwrap_or(0)
    }

    /// Test the Latin-square invariant
    ///
    /// Every row and every column must contain each value in `1..=size`
    /// exactly once.
    pub fn is_latin(&self) -> bool {
        let size = self.size();
        self.values
            .rows()
            .into_iter()
            .all(|lane| is_permutation(lane.iter().copied(), size))
            && self
                .values
                .columns()
                .into_iter()
                .all(|lane| is_permutation(lane.iter().copied(), size))
    }

    /// Copy out the values as row-major nested vectors
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.values
            .rows()
            .into_iter()
            .map(|lane| lane.to_vec())
            .collect()
    }
}

/// Check that an iterator yields each value in `1..=size` exactly once
fn is_permutation(values: impl Iterator<Item = u8>, size: usize) -> bool {
    let mut seen = vec![false; size];
    for value in values {
        let index = usize::from(value);
        if index == 0 || index > size {
            return false;
        }
        match seen.get_mut(index - 1) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    seen.into_iter().all(|slot| slot)
}

impl Serialize for Grid {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.to_rows())
    }
}

impl<'de> Deserialize<'de> for Grid {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rows = Vec::<Vec<u8>>::deserialize(deserializer)?;
        Self::from_rows(rows).map_err(D::Error::custom)
    }
}
