use std::num::NonZero;
use std::thread;

use log::info;
use rayon::prelude::*;

use crate::catalog::PuzzleCatalog;
use crate::iterator::{DigitQuadruple, all_quadruples};
use crate::solver::aggregate::merge_catalogs;
use crate::solver::constants::MAX_WORKERS;
use crate::solver::errors::SolverError;
use crate::solver::search::search_quadruples;
use crate::utils::split_into_chunks;

/// Configuration for the partitioned search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub workers: usize,
}

impl SearchConfig {
    /// Use `workers` partitions, clamped to `1..=MAX_WORKERS`
    pub fn with_workers(workers: usize) -> Self {
        Self {
            workers: workers.clamp(1, MAX_WORKERS),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        let available = thread::available_parallelism()
            .map(NonZero::get)
            .unwrap_or(1);
        Self::with_workers(available)
    }
}

/// Runs the catalog search for one target across a fixed number of workers
pub struct PuzzleSolver {
    config: SearchConfig,
}

impl PuzzleSolver {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Build the catalog for `target` over every enumerated quadruple
    ///
    /// # Errors
    ///
    /// Returns an error if the worker pool cannot start or partitions overlap.
    pub fn solve(&self, target: u32) -> Result<PuzzleCatalog, SolverError> {
        self.solve_quadruples(&all_quadruples(), target)
    }

    /// Split `quadruples` into one contiguous chunk per worker, search each
    /// chunk independently and join before merging.
    ///
    /// # Errors
    ///
    /// Returns an error if the worker pool cannot start or partitions overlap.
    pub fn solve_quadruples(
        &self,
        quadruples: &[DigitQuadruple],
        target: u32,
    ) -> Result<PuzzleCatalog, SolverError> {
        let workers = self.config.workers;
        let chunks = split_into_chunks(quadruples, workers)?;

        info!(
            "Searching {} quadruples for target {} across {} workers",
            quadruples.len(),
            target,
            workers
        );

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|idx| format!("primecards-search-{}", idx))
            .build()?;

        let target = i64::from(target);
        let partials: Vec<PuzzleCatalog> = pool.install(|| {
            chunks
                .par_iter()
                .map(|chunk| search_quadruples(chunk, target))
                .collect()
        });

        merge_catalogs(partials)
    }
}

impl Default for PuzzleSolver {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}
