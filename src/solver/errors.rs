use thiserror::Error;

use crate::utils::UtilsError;

#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Quadruple '{0}' was produced by more than one partition")]
    OverlappingPartitions(String),
    #[error("Failed to start search workers: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    #[error("Utils error: {0}")]
    UtilsError(#[from] UtilsError),
}
