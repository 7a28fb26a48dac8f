use log::{error, info};

use crate::catalog::PuzzleCatalog;
use crate::solver::errors::SolverError;

/// Union per-partition catalogs, then order by descending solution count.
///
/// Partitions are expected to cover disjoint quadruples; ties in the final
/// order keep the order the partials were given in.
///
/// # Errors
///
/// Returns [`SolverError::OverlappingPartitions`] if two partials share a key.
pub fn merge_catalogs(partials: Vec<PuzzleCatalog>) -> Result<PuzzleCatalog, SolverError> {
    let partial_count = partials.len();
    let mut merged = PuzzleCatalog::new();

    for partial in partials {
        for (key, solutions) in partial {
            if merged.contains_key(&key) {
                error!("Quadruple '{}' appeared in two partitions", key);
                return Err(SolverError::OverlappingPartitions(key));
            }
            merged.insert(key, solutions);
        }
    }

    merged.sort_by_solution_count();
    info!(
        "Merged {} partitions into {} quadruples ({} solutions)",
        partial_count,
        merged.len(),
        merged.solution_count()
    );
    Ok(merged)
}
