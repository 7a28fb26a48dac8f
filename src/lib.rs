//! Primecards - build catalogs of four-digit arithmetic puzzles for a prime target
//!
//! For every digit quadruple the search tries all operator triples, digit
//! orderings and parenthesization shapes, and records which expressions hit
//! the target. Catalogs are computed in parallel and cached per target.

pub mod cache;
pub mod catalog;
pub mod expression;
pub mod iterator;
pub mod service;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use cache::{CacheError, PuzzleCache, PuzzleStore};
pub use catalog::{PuzzleCatalog, Solution};
pub use expression::{ExpressionError, Operator, Shape, evaluate};
pub use iterator::{DigitQuadruple, QuadrupleIterator};
pub use service::{PuzzleService, ServiceError};
pub use solver::{PuzzleSolver, SearchConfig, SolverError};
pub use utils::{ALLOWED_TARGETS, UtilsError, validate_target};

/// Compute the catalog for `target` without touching any cache
///
/// # Arguments
///
/// * `target` - One of [`ALLOWED_TARGETS`]
/// * `workers` - Number of partitions searched in parallel, clamped to `1..=16`
///
/// # Errors
///
/// This function will return an error if:
/// * `target` is not an allowed prime
/// * The search workers cannot be started
/// * Partitions overlap while merging (an internal bug)
///
/// # Examples
///
/// ```no_run
/// use primecards::find_catalog;
///
/// match find_catalog(7, 4) {
///     Ok(catalog) => println!("{} quadruples can make 7", catalog.len()),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn find_catalog(target: i64, workers: usize) -> Result<PuzzleCatalog, SolverError> {
    let target = validate_target(target)?;

    let solver = PuzzleSolver::new(SearchConfig::with_workers(workers));
    solver.solve(target)
}
