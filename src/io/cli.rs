//! Command-line interface for batch puzzle generation

use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

use crate::algorithm::generator::{GeneratorConfig, PuzzleGenerator};
use crate::io::configuration::{
    DEFAULT_GRID_SIZE, DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_CAGE_SIZE, OUTPUT_FILE_STEM,
};
use crate::io::error::{PuzzleError, Result};
use crate::io::export::{model_to_json, write_model};
use crate::io::progress::ProgressManager;

#[derive(Parser)]
#[command(name = "calcugen")]
#[command(
    author,
    version,
    about = "Generate cage-based arithmetic grid puzzles"
)]
/// Command-line arguments for the puzzle generation tool
pub struct Cli {
    /// Grid edge length
    #[arg(short = 'n', long, default_value_t = DEFAULT_GRID_SIZE)]
    pub size: usize,

    /// Number of puzzles to generate
    #[arg(short, long, default_value_t = 1)]
    pub count: usize,

    /// Random seed for reproducible generation
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Maximum cells per cage
    #[arg(short = 'm', long, default_value_t = DEFAULT_MAX_CAGE_SIZE)]
    pub max_cage_size: usize,

    /// Maximum generation attempts per puzzle
    #[arg(short, long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub attempts: usize,

    /// Directory for puzzle JSON files (prints to stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Store cage elements as flat indices for wire transport
    #[arg(long)]
    pub normalized: bool,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet && self.output.is_some()
    }

    /// Translate the arguments into a generator configuration
    pub const fn generator_config(&self) -> GeneratorConfig {
        let mut config = GeneratorConfig::for_size(self.size);
        config.max_cage_size = self.max_cage_size;
        config.max_attempts = self.attempts;
        config
    }
}

/// Orchestrates batch generation with progress tracking
pub struct BatchGenerator {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl BatchGenerator {
    /// Create a new batch generator from CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate puzzles according to the CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if parameter validation, generation, or output
    /// writing fails
    pub fn process(&mut self) -> Result<()> {
        let config = self.cli.generator_config();
        let mut generator = match self.cli.seed {
            Some(seed) => PuzzleGenerator::with_seed(config, seed),
            None => PuzzleGenerator::new(config),
        }?;

        if let Some(dir) = &self.cli.output {
            std::fs::create_dir_all(dir).map_err(|source| PuzzleError::FileSystem {
                path: dir.clone(),
                operation: "create directory",
                source,
            })?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(self.cli.count);
        }

        for index in 0..self.cli.count {
            self.generate_one(&mut generator, index)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    // Allow print for emitting puzzles on stdout when no output directory is given
    #[allow(clippy::print_stdout)]
    fn generate_one(&self, generator: &mut PuzzleGenerator, index: usize) -> Result<()> {
        let start_time = Instant::now();

        if let Some(ref pm) = self.progress_manager {
            pm.start_puzzle(index, self.cli.size);
        }

        let (model, report) = generator.generate_with_report()?;

        match &self.cli.output {
            Some(dir) => {
                let path = dir.join(format!("{OUTPUT_FILE_STEM}_{:03}.json", index + 1));
                write_model(&model, &path, self.cli.normalized, self.cli.pretty)?;
            }
            None => {
                let json = model_to_json(&model, self.cli.normalized, self.cli.pretty)?;
                println!("{json}");
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.complete_puzzle(index, report.attempts, start_time.elapsed());
        }

        Ok(())
    }
}
