//! Durable per-target catalog storage

mod core;
mod errors;
mod store;

pub use self::core::PuzzleCache;
pub use errors::CacheError;
pub use store::PuzzleStore;
