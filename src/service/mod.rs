//! Query entry point tying the solver to the puzzle store

mod core;
mod errors;

pub use self::core::PuzzleService;
pub use errors::ServiceError;
