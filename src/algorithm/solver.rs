//! Blind uniqueness verification via pruned backtracking search
//!
//! The solver receives the grid size and the cage constraints, never the
//! solution, and counts satisfying assignments, stopping as soon as a
//! second one is found. Cells are assigned in row-major order; candidates
//! are filtered through row and column used-value sets and each cage's
//! running partial aggregate, so infeasible branches are cut long before a
//! cage is fully assigned.

use crate::algorithm::bitset::ValueBitset;
use crate::io::configuration::DEFAULT_NODE_BUDGET;
use crate::io::error::{PuzzleError, Result, invalid_cage};
use crate::puzzle::{Cage, Operator};

/// Outcome of a uniqueness search over a cage constraint set
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// No assignment satisfies the constraints
    Unsatisfiable,
    /// Exactly one satisfying assignment exists
    Unique,
    /// At least two satisfying assignments exist
    Multiple,
}

/// Search control signal threaded through the recursion
///
/// Budget exhaustion is cooperative: the signal propagates outward through
/// the normal return path so every partial cage aggregate is unwound before
/// the search is abandoned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    /// Keep exploring siblings
    Continue,
    /// A second solution was found; the verdict is settled
    Settled,
    /// The node budget ran out mid-search
    Exhausted,
}

/// Backtracking solver certifying solution-count verdicts
#[derive(Clone, Copy, Debug)]
pub struct UniquenessSolver {
    node_budget: u64,
}

impl Default for UniquenessSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl UniquenessSolver {
    /// Create a solver with the default node budget
    pub const fn new() -> Self {
        Self {
            node_budget: DEFAULT_NODE_BUDGET,
        }
    }

    /// Create a solver with a custom node budget
    pub const fn with_budget(node_budget: u64) -> Self {
        Self { node_budget }
    }

    /// Determine how many assignments satisfy the cage constraints
    ///
    /// The cages must partition the `size x size` grid exactly; the solved
    /// grid is deliberately not an input, so a `Unique` verdict proves
    /// blind solvability.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::InvalidCage`](crate::PuzzleError::InvalidCage)
    /// if the cages do not partition the grid, and
    /// [`PuzzleError::SolverBudget`](crate::PuzzleError::SolverBudget) if
    /// the search exceeds the node budget before reaching a verdict.
    pub fn verify(&self, size: usize, cages: &[Cage]) -> Result<Verdict> {
        let mut search = Search::build(size, cages, self.node_budget)?;
        search.run()
    }
}

/// Per-cage running aggregate updated as cells are assigned
#[derive(Clone, Debug)]
struct CageState {
    operator: Operator,
    target: u64,
    cell_count: usize,
    assigned: usize,
    sum: u64,
    product: u64,
    /// First operand of a subtraction pair awaiting its partner
    pending: Option<u64>,
}

impl CageState {
    fn from_cage(cage: &Cage) -> Self {
        Self {
            operator: cage.operator(),
            target: u64::from(cage.value()),
            cell_count: cage.len(),
            assigned: 0,
            sum: 0,
            product: 1,
            pending: None,
        }
    }

    /// Try to fold `value` into the aggregate, checking partial feasibility
    ///
    /// Returns false and leaves the state untouched when no completion of
    /// the cage can reach the target. All bounds rely on every unassigned
    /// cell holding a value in `1..=size`, so a fully assigned cage passes
    /// exactly when its aggregate equals the target.
    fn place(&mut self, value: u64, size: u64) -> bool {
        let remaining = (self.cell_count - self.assigned - 1) as u64;
        let feasible = match self.operator {
            Operator::Nop => value == self.target,
            Operator::Add => {
                let sum = self.sum + value;
                sum + remaining <= self.target && sum + remaining * size >= self.target
            }
            Operator::Mul => self
                .product
                .checked_mul(value)
                .is_some_and(|product| {
                    product <= self.target
                        && self.target % product == 0
                        && bounded_power(product, size, remaining) >= self.target
                }),
            Operator::Sub => match self.pending {
                None => value + self.target <= size || value > self.target,
                Some(first) => first.abs_diff(value) == self.target,
            },
        };

        if feasible {
            self.assigned += 1;
            match self.operator {
                Operator::Add => self.sum += value,
                Operator::Mul => self.product = self.product.saturating_mul(value),
                Operator::Sub if self.pending.is_none() => self.pending = Some(value),
                _ => {}
            }
        }
        feasible
    }

    /// Undo the most recent `place` of `value`
    fn unplace(&mut self, value: u64) {
        self.assigned -= 1;
        match self.operator {
            Operator::Add => self.sum -= value,
            Operator::Mul => self.product /= value,
            Operator::Sub if self.assigned == 0 => self.pending = None,
            _ => {}
        }
    }
}

/// `base * factor^exponent`, saturating instead of wrapping
fn bounded_power(base: u64, factor: u64, exponent: u64) -> u64 {
    let mut result = base;
    for _ in 0..exponent {
        result = result.saturating_mul(factor);
    }
    result
}

/// One uniqueness search over an exact cage partition
struct Search {
    size: usize,
    cell_count: usize,
    /// Flat cell index to owning cage index
    cage_of: Vec<usize>,
    cages: Vec<CageState>,
    row_used: Vec<ValueBitset>,
    col_used: Vec<ValueBitset>,
    nodes: u64,
    node_budget: u64,
    solutions: u8,
}

impl Search {
    fn build(size: usize, cages: &[Cage], node_budget: u64) -> Result<Self> {
        let cell_count = size * size;
        let mut cage_of = vec![usize::MAX; cell_count];

        for (cage_index, cage) in cages.iter().enumerate() {
            for cell in cage.cells() {
                if cell.row >= size || cell.col >= size {
                    return Err(invalid_cage(format!(
                        "cell ({}, {}) is outside the {size}x{size} grid",
                        cell.row, cell.col
                    )));
                }
                match cage_of.get_mut(cell.flat_index(size)) {
                    Some(slot) if *slot == usize::MAX => *slot = cage_index,
                    _ => {
                        return Err(invalid_cage(format!(
                            "cell ({}, {}) belongs to more than one cage",
                            cell.row, cell.col
                        )));
                    }
                }
            }
        }
        if cage_of.iter().any(|&owner| owner == usize::MAX) {
            return Err(invalid_cage("cages do not cover every grid cell"));
        }

        Ok(Self {
            size,
            cell_count,
            cage_of,
            cages: cages.iter().map(CageState::from_cage).collect(),
            row_used: (0..size).map(|_| ValueBitset::new(size)).collect(),
            col_used: (0..size).map(|_| ValueBitset::new(size)).collect(),
            nodes: 0,
            node_budget,
            solutions: 0,
        })
    }

    fn run(&mut self) -> Result<Verdict> {
        match self.descend(0) {
            Flow::Exhausted => Err(PuzzleError::SolverBudget { nodes: self.nodes }),
            Flow::Continue | Flow::Settled => Ok(match self.solutions {
                0 => Verdict::Unsatisfiable,
                1 => Verdict::Unique,
                _ => Verdict::Multiple,
            }),
        }
    }

    /// Depth-first assignment of the cell at `index` in row-major order
    fn descend(&mut self, index: usize) -> Flow {
        if index == self.cell_count {
            // A complete assignment satisfies every cage: the per-cage
            // bounds collapse to equality once the last cell is placed.
            self.solutions += 1;
            return if self.solutions >= 2 {
                Flow::Settled
            } else {
                Flow::Continue
            };
        }

        self.nodes += 1;
        if self.nodes > self.node_budget {
            return Flow::Exhausted;
        }

        let row = index / self.size;
        let col = index % self.size;
        let cage_index = self.cage_of.get(index).copied().unwrap_or(0);
        let max_value = self.size as u64;

        for value in 1..=self.size {
            if self
                .row_used
                .get(row)
                .is_some_and(|used| used.contains(value))
                || self
                    .col_used
                    .get(col)
                    .is_some_and(|used| used.contains(value))
            {
                continue;
            }

            let placed = self
                .cages
                .get_mut(cage_index)
                .is_some_and(|state| state.place(value as u64, max_value));
            if !placed {
                continue;
            }
            if let Some(used) = self.row_used.get_mut(row) {
                used.insert(value);
            }
            if let Some(used) = self.col_used.get_mut(col) {
                used.insert(value);
            }

            let flow = self.descend(index + 1);

            if let Some(used) = self.row_used.get_mut(row) {
                used.remove(value);
            }
            if let Some(used) = self.col_used.get_mut(col) {
                used.remove(value);
            }
            if let Some(state) = self.cages.get_mut(cage_index) {
                state.unplace(value as u64);
            }

            if flow != Flow::Continue {
                return flow;
            }
        }

        Flow::Continue
    }
}
