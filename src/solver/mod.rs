pub mod constants;
mod aggregate;
mod core;
mod errors;
mod search;

pub use self::core::{PuzzleSolver, SearchConfig};
pub use aggregate::merge_catalogs;
pub use errors::SolverError;
pub use search::{first_matching_shape, search_quadruples};
