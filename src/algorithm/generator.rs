//! Generation orchestration: sample, partition, label, verify, retry
//!
//! Each attempt is fully independent (a fresh grid and a fresh partition),
//! so a failed attempt is discarded wholesale rather than patched. The
//! solver's budget error counts as a failed attempt, never as a terminal
//! failure.

use rand::rngs::{OsRng, StdRng};
use rand::{SeedableRng, TryRngCore};

use crate::algorithm::labeler::label_cage;
use crate::algorithm::partition::CagePartitioner;
use crate::algorithm::sampler::sample_latin_square;
use crate::algorithm::solver::{UniquenessSolver, Verdict};
use crate::io::configuration::{
    DEFAULT_GRID_SIZE, DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_CAGE_SIZE, DEFAULT_NODE_BUDGET,
    MAX_GRID_SIZE, MIN_GRID_SIZE,
};
use crate::io::error::{PuzzleError, Result, invalid_parameter};
use crate::puzzle::{Cage, PuzzleModel};

/// Configuration for puzzle generation
#[derive(Clone, Copy, Debug)]
pub struct GeneratorConfig {
    /// Grid edge length
    pub size: usize,
    /// Upper bound on cells per cage
    pub max_cage_size: usize,
    /// Maximum attempts before giving up
    pub max_attempts: usize,
    /// Node budget handed to the uniqueness solver per attempt
    pub node_budget: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::for_size(DEFAULT_GRID_SIZE)
    }
}

impl GeneratorConfig {
    /// Default configuration for the given grid size
    pub const fn for_size(size: usize) -> Self {
        Self {
            size,
            max_cage_size: DEFAULT_MAX_CAGE_SIZE,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            node_budget: DEFAULT_NODE_BUDGET,
        }
    }

    /// Reject out-of-range parameters before any work begins
    fn validate(&self) -> Result<()> {
        if self.size < MIN_GRID_SIZE || self.size > MAX_GRID_SIZE {
            return Err(invalid_parameter(
                "size",
                &self.size,
                &format!("must be between {MIN_GRID_SIZE} and {MAX_GRID_SIZE}"),
            ));
        }
        if self.max_cage_size == 0 {
            return Err(invalid_parameter(
                "max_cage_size",
                &self.max_cage_size,
                &"must be at least 1",
            ));
        }
        if self.max_attempts == 0 {
            return Err(invalid_parameter(
                "max_attempts",
                &self.max_attempts,
                &"must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Outcome metadata for a successful generation
#[derive(Clone, Copy, Debug)]
pub struct GenerationReport {
    /// Attempts consumed, including the successful one
    pub attempts: usize,
}

/// Retry-loop generator producing uniqueness-certified puzzles
pub struct PuzzleGenerator {
    config: GeneratorConfig,
    partitioner: CagePartitioner,
    solver: UniquenessSolver,
    rng: StdRng,
}

impl PuzzleGenerator {
    /// Create a generator seeded from OS entropy
    ///
    /// # Errors
    ///
    /// Returns
    /// [`PuzzleError::InvalidParameter`](crate::PuzzleError::InvalidParameter)
    /// for out-of-range configuration values.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        let mut seed_source = OsRng;
        let seed = seed_source.try_next_u64().unwrap_or(0x5eed_cafe);
        Self::with_seed(config, seed)
    }

    /// Create a generator with a fixed seed for reproducible puzzles
    ///
    /// # Errors
    ///
    /// Returns
    /// [`PuzzleError::InvalidParameter`](crate::PuzzleError::InvalidParameter)
    /// for out-of-range configuration values.
    pub fn with_seed(config: GeneratorConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            partitioner: CagePartitioner::new(config.max_cage_size),
            solver: UniquenessSolver::with_budget(config.node_budget),
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// The active configuration
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate one uniqueness-certified puzzle
    ///
    /// # Errors
    ///
    /// Returns
    /// [`PuzzleError::GenerationFailed`](crate::PuzzleError::GenerationFailed)
    /// after `max_attempts` discarded attempts; other errors indicate a
    /// violated internal contract.
    pub fn generate(&mut self) -> Result<PuzzleModel> {
        self.generate_with_report().map(|(model, _)| model)
    }

    /// Generate one puzzle along with attempt metadata
    ///
    /// # Errors
    ///
    /// See [`generate`](Self::generate).
    pub fn generate_with_report(&mut self) -> Result<(PuzzleModel, GenerationReport)> {
        for attempt in 1..=self.config.max_attempts {
            let grid = sample_latin_square(self.config.size, &mut self.rng);
            let regions = self.partitioner.partition(self.config.size, &mut self.rng);
            let cages = regions
                .into_iter()
                .map(|cells| label_cage(&grid, cells, &mut self.rng))
                .collect::<Result<Vec<Cage>>>()?;

            match self.solver.verify(self.config.size, &cages) {
                Ok(Verdict::Unique) => {
                    let model = PuzzleModel::new(grid, cages)?;
                    return Ok((model, GenerationReport { attempts: attempt }));
                }
                // Non-unique or indeterminate: discard the whole attempt
                Ok(Verdict::Unsatisfiable | Verdict::Multiple)
                | Err(PuzzleError::SolverBudget { .. }) => {}
                Err(err) => return Err(err),
            }
        }

        Err(PuzzleError::GenerationFailed {
            attempts: self.config.max_attempts,
            size: self.config.size,
        })
    }
}
