//! Latin-square sampling by symmetry composition

use ndarray::Array2;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::puzzle::Grid;

/// Sample a random Latin square of the given size
///
/// Starts from the cyclic canonical square `(r + c) mod size + 1` and
/// composes a random row permutation, a random column permutation, and a
/// random symbol relabeling. Each transform preserves the Latin property,
/// so the result is valid by construction for any `size >= 1` and no
/// rejection sampling is needed.
pub fn sample_latin_square(size: usize, rng: &mut StdRng) -> Grid {
    let mut row_order: Vec<usize> = (0..size).collect();
    let mut col_order: Vec<usize> = (0..size).collect();
    let mut symbols: Vec<u8> = (1..=size).map(|value| value as u8).collect();
    row_order.shuffle(rng);
    col_order.shuffle(rng);
    symbols.shuffle(rng);

    let values = Array2::from_shape_fn((size, size), |(row, col)| {
        let source_row = row_order.get(row).copied().unwrap_or(0);
        let source_col = col_order.get(col).copied().unwrap_or(0);
        symbols
            .get((source_row + source_col) % size.max(1))
            .copied()
            .unwrap_or(1)
    });

    Grid::from_array(values)
}
