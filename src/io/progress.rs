//! Batch progress tracking with automatic batching for large runs

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

use crate::io::configuration::{MAX_INDIVIDUAL_PROGRESS_BARS, PROGRESS_BAR_WIDTH};

/// Coordinates progress display for batch generation
///
/// Shows one spinner per puzzle for small batches and a single batch bar
/// for large ones, so long runs don't spam the terminal.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    puzzle_bars: Vec<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Puzzles: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            puzzle_bars: Vec::new(),
        }
    }

    /// Initialize progress display based on puzzle count
    pub fn initialize(&mut self, puzzle_count: usize) {
        if puzzle_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let batch_bar = ProgressBar::new(puzzle_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
            return;
        }

        for _ in 0..puzzle_count {
            let bar = ProgressBar::new_spinner();
            bar.set_style(SPINNER_STYLE.clone());
            self.puzzle_bars.push(self.multi_progress.add(bar));
        }
    }

    /// Mark a puzzle as started
    pub fn start_puzzle(&self, index: usize, size: usize) {
        if let Some(bar) = self.puzzle_bars.get(index) {
            bar.set_message(format!("puzzle {} ({size}x{size})", index + 1));
            bar.enable_steady_tick(Duration::from_millis(100));
        }
    }

    /// Mark a puzzle as finished
    pub fn complete_puzzle(&self, index: usize, attempts: usize, elapsed: Duration) {
        if let Some(bar) = self.puzzle_bars.get(index) {
            bar.finish_with_message(format!(
                "puzzle {}: {attempts} attempt{} in {:.2}s",
                index + 1,
                if attempts == 1 { "" } else { "s" },
                elapsed.as_secs_f64()
            ));
        }
        if let Some(bar) = &self.batch_bar {
            bar.inc(1);
        }
    }

    /// Finish all remaining bars
    pub fn finish(&self) {
        if let Some(bar) = &self.batch_bar {
            bar.finish();
        }
    }
}
