pub mod constants;
pub mod core;
pub mod types;

pub use constants::{MAX_DIGIT, OPERATOR_TRIPLES, PERMUTATIONS};
pub use self::core::{QuadrupleIterator, all_quadruples};
pub use types::DigitQuadruple;

#[cfg(test)]
mod tests;
