//! Per-target catalog of solving expressions

mod core;
mod solution;

pub use self::core::PuzzleCatalog;
pub use solution::Solution;
