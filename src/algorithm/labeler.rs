//! Operator assignment and target computation for partitioned cages

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

use crate::io::error::{Result, computation_error};
use crate::puzzle::{Cage, Cell, Grid, Operator};

// Subtraction is only order independent as a two-cell absolute difference,
// so larger cages draw from the commutative operators alone.
const PAIR_OPERATORS: [Operator; 3] = [Operator::Add, Operator::Sub, Operator::Mul];
const GROUP_OPERATORS: [Operator; 2] = [Operator::Add, Operator::Mul];

/// Label one partitioned region with an operator and its target value
///
/// Singletons get no operator and reveal their cell value; two-cell cages
/// choose uniformly among `{+, -, x}`; larger cages choose uniformly
/// between `{+, x}`. The target is computed from the solved grid with
/// overflow-checked arithmetic.
///
/// # Errors
///
/// Returns [`PuzzleError::Computation`](crate::PuzzleError::Computation) if
/// the target exceeds the schema's 32-bit value range, or
/// [`PuzzleError::InvalidCage`](crate::PuzzleError::InvalidCage) if the
/// region violates a cage construction contract.
pub fn label_cage(grid: &Grid, cells: Vec<Cell>, rng: &mut StdRng) -> Result<Cage> {
    let operator = match cells.len() {
        1 => Operator::Nop,
        2 => PAIR_OPERATORS.choose(rng).copied().unwrap_or(Operator::Add),
        _ => GROUP_OPERATORS.choose(rng).copied().unwrap_or(Operator::Add),
    };

    let values: Vec<u8> = cells.iter().map(|&cell| grid.value(cell)).collect();
    let target = operator.apply(&values)?;
    let value = u32::try_from(target).map_err(|_| {
        computation_error("cage target", &"target exceeds the 32-bit schema range")
    })?;

    Cage::new(operator, cells, value)
}
