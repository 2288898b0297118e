//! Randomized region growing into connected cages
//!
//! Repeatedly seeds a new cage at a random unassigned cell, draws a target
//! size from the configured weight table, and greedily absorbs random
//! unassigned 4-neighbors until the target is reached or the region is
//! boxed in. Every cell ends up in exactly one cage, every cage is
//! connected, and a cage that cannot grow is accepted as a singleton.

use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::io::configuration::{CAGE_SIZE_TAIL_WEIGHT, CAGE_SIZE_WEIGHTS};
use crate::puzzle::Cell;

/// Partitions solved grids into connected cage regions
#[derive(Clone, Copy, Debug)]
pub struct CagePartitioner {
    max_cage_size: usize,
}

impl CagePartitioner {
    /// Create a partitioner with the given cage size cap
    ///
    /// A cap of zero is treated as one: every cage becomes a singleton.
    pub const fn new(max_cage_size: usize) -> Self {
        Self {
            max_cage_size: if max_cage_size == 0 { 1 } else { max_cage_size },
        }
    }

    /// Partition the cells of a `size x size` grid into connected regions
    ///
    /// Operates on coordinates only; the solved values play no role in the
    /// partition shape.
    pub fn partition(&self, size: usize, rng: &mut StdRng) -> Vec<Vec<Cell>> {
        let cell_count = size * size;
        let mut assigned = vec![false; cell_count];
        let mut seeds: Vec<usize> = (0..cell_count).collect();
        seeds.shuffle(rng);

        let mut regions = Vec::new();
        for &seed in &seeds {
            if assigned.get(seed).copied().unwrap_or(true) {
                continue;
            }

            let target = self.weighted_target_size(rng);
            let mut region = vec![Cell::from_flat_index(seed, size)];
            if let Some(slot) = assigned.get_mut(seed) {
                *slot = true;
            }

            while region.len() < target {
                let frontier = collect_frontier(&region, &assigned, size);
                if frontier.is_empty() {
                    break;
                }
                let picked = rng.random_range(0..frontier.len());
                let Some(&cell) = frontier.get(picked) else {
                    break;
                };
                if let Some(slot) = assigned.get_mut(cell.flat_index(size)) {
                    *slot = true;
                }
                region.push(cell);
            }

            regions.push(region);
        }

        regions
    }

    /// Draw a cage target size from the configured weight table
    fn weighted_target_size(&self, rng: &mut StdRng) -> usize {
        let weights: Vec<f64> = (0..self.max_cage_size)
            .map(|index| {
                CAGE_SIZE_WEIGHTS
                    .get(index)
                    .copied()
                    .unwrap_or(CAGE_SIZE_TAIL_WEIGHT)
            })
            .collect();
        weighted_choice(&weights, rng) + 1
    }
}

/// Unassigned 4-neighbors of a region, deduplicated
fn collect_frontier(region: &[Cell], assigned: &[bool], size: usize) -> Vec<Cell> {
    let mut frontier = Vec::new();
    for cell in region {
        for neighbor in cell.neighbors(size) {
            let taken = assigned
                .get(neighbor.flat_index(size))
                .copied()
                .unwrap_or(true);
            if !taken && !frontier.contains(&neighbor) {
                frontier.push(neighbor);
            }
        }
    }
    frontier
}

/// Generic weighted random selection
///
/// Returns an index into the weights array using the cumulative
/// distribution; a non-positive total falls back to index zero.
fn weighted_choice(weights: &[f64], rng: &mut StdRng) -> usize {
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return 0;
    }

    let mut rand_val = rng.random::<f64>() * total;
    for (index, &weight) in weights.iter().enumerate() {
        rand_val -= weight;
        if rand_val <= 0.0 {
            return index;
        }
    }
    weights.len().saturating_sub(1)
}
