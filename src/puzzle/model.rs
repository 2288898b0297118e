//! Schema-shaped puzzle artifacts and the normalized wire view
//!
//! [`PuzzleModel`] is the generator's final output: the solved grid plus the
//! cage set a renderer shows the player (withholding `solution`). The
//! normalized variant stores cage elements as row-major flat indices for
//! wire transport; the two forms round-trip losslessly.

use serde::{Deserialize, Serialize};

use crate::io::error::{Result, invalid_cage, invalid_grid};
use crate::puzzle::cage::{Cage, Operator};
use crate::puzzle::grid::{Cell, Grid};

/// A complete generated puzzle: size, solved grid, and cage constraints
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleModel {
    size: usize,
    solution: Grid,
    cages: Vec<Cage>,
}

impl PuzzleModel {
    /// Assemble and validate a puzzle from a solved grid and its cages
    ///
    /// # Errors
    ///
    /// Returns the first violation found by [`validate`](Self::validate).
    pub fn new(solution: Grid, cages: Vec<Cage>) -> Result<Self> {
        let model = Self {
            size: solution.size(),
            solution,
            cages,
        };
        model.validate()?;
        Ok(model)
    }

    /// Edge length of the puzzle grid
    pub const fn size(&self) -> usize {
        self.size
    }

    /// The solved grid
    pub const fn solution(&self) -> &Grid {
        &self.solution
    }

    /// The cage constraints
    pub fn cages(&self) -> &[Cage] {
        &self.cages
    }

    /// Check every structural invariant of the puzzle
    ///
    /// The solution must be a Latin square, the cages must partition the
    /// grid exactly into connected regions, and recomputing each cage target
    /// from the solution must reproduce the stored value.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::InvalidGrid`](crate::PuzzleError::InvalidGrid)
    /// or [`PuzzleError::InvalidCage`](crate::PuzzleError::InvalidCage)
    /// describing the first violation found.
    pub fn validate(&self) -> Result<()> {
        if self.size != self.solution.size() {
            return Err(invalid_grid(format!(
                "declared size {} does not match the {}x{} solution",
                self.size,
                self.solution.size(),
                self.solution.size()
            )));
        }
        if !self.solution.is_latin() {
            return Err(invalid_grid(
                "rows and columns must each contain every value exactly once",
            ));
        }

        let mut covered = vec![false; self.size * self.size];
        for cage in &self.cages {
            for cell in cage.cells() {
                if cell.row >= self.size || cell.col >= self.size {
                    return Err(invalid_cage(format!(
                        "cell ({}, {}) is outside the {}x{} grid",
                        cell.row, cell.col, self.size, self.size
                    )));
                }
                match covered.get_mut(cell.flat_index(self.size)) {
                    Some(slot) if !*slot => *slot = true,
                    _ => {
                        return Err(invalid_cage(format!(
                            "cell ({}, {}) belongs to more than one cage",
                            cell.row, cell.col
                        )));
                    }
                }
            }
        }
        if !covered.into_iter().all(|slot| slot) {
            return Err(invalid_cage("cages do not cover every grid cell"));
        }

        for cage in &self.cages {
            if !cage.is_connected() {
                return Err(invalid_cage(
                    "cage cells must form a connected region",
                ));
            }
            let values: Vec<u8> = cage
                .cells()
                .iter()
                .map(|&cell| self.solution.value(cell))
                .collect();
            let expected = cage.operator().apply(&values)?;
            if expected != u64::from(cage.value()) {
                return Err(invalid_cage(format!(
                    "cage target {} does not match its cells (expected {expected})",
                    cage.value()
                )));
            }
        }

        Ok(())
    }

    /// Produce the flat-index wire form of this puzzle
    pub fn normalize(&self) -> NormalizedPuzzle {
        let cages = self
            .cages
            .iter()
            .map(|cage| NormalizedCage {
                operator: cage.operator(),
                elements: cage
                    .cells()
                    .iter()
                    .map(|cell| cell.flat_index(self.size))
                    .collect(),
                value: cage.value(),
            })
            .collect();

        NormalizedPuzzle {
            size: self.size,
            solution: self.solution.clone(),
            cages,
        }
    }
}

/// A cage with its elements stored as row-major flat indices
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedCage {
    /// Operator tag, serialized as a symbol or `null`
    pub operator: Operator,
    /// Row-major flat indices of the member cells
    pub elements: Vec<usize>,
    /// The arithmetic target of the cage
    pub value: u32,
}

/// A puzzle with flat-index cages, used at the system boundary
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedPuzzle {
    /// Edge length of the puzzle grid
    pub size: usize,
    /// The solved grid
    pub solution: Grid,
    /// The cage constraints in flat-index form
    pub cages: Vec<NormalizedCage>,
}

impl NormalizedPuzzle {
    /// Recover the coordinate form, revalidating every invariant
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::InvalidCage`](crate::PuzzleError::InvalidCage)
    /// for out-of-range flat indices, or any violation found while
    /// reassembling the coordinate-form puzzle.
    pub fn denormalize(&self) -> Result<PuzzleModel> {
        let size = self.solution.size();
        let cell_count = size * size;

        let cages = self
            .cages
            .iter()
            .map(|cage| {
                let cells = cage
                    .elements
                    .iter()
                    .map(|&index| {
                        if index < cell_count {
                            Ok(Cell::from_flat_index(index, size))
                        } else {
                            Err(invalid_cage(format!(
                                "flat index {index} is outside the {size}x{size} grid"
                            )))
                        }
                    })
                    .collect::<Result<Vec<Cell>>>()?;
                Cage::new(cage.operator, cells, cage.value)
            })
            .collect::<Result<Vec<Cage>>>()?;

        PuzzleModel::new(self.solution.clone(), cages)
    }
}
