//! Utils module split into submodules

mod errors;
mod partitions;
mod validation;

pub use errors::UtilsError;
pub use partitions::{split_into_chunks, split_ranges};
pub use validation::{ALLOWED_TARGETS, validate_target};
