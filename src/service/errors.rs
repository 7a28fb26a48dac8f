use thiserror::Error;

use crate::solver::SolverError;
use crate::utils::UtilsError;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Search failed: {0}")]
    SolverError(#[from] SolverError),
    #[error("Invalid request: {0}")]
    UtilsError(#[from] UtilsError),
    #[error("Puzzle store lock was poisoned by a panicked request")]
    LockPoisoned,
}
