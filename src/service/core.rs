use std::sync::{Mutex, MutexGuard};

use log::info;

use crate::cache::{PuzzleCache, PuzzleStore};
use crate::catalog::PuzzleCatalog;
use crate::service::errors::ServiceError;
use crate::solver::{PuzzleSolver, SearchConfig};
use crate::utils::validate_target;

/// Answers catalog requests, serving repeats from the store.
///
/// The store is loaded on the first request and only touched under its
/// lock, outside the search itself; workers never see it. Without a
/// [`PuzzleCache`] the store lives in memory only.
pub struct PuzzleService {
    solver: PuzzleSolver,
    cache: Option<PuzzleCache>,
    store: Mutex<Option<PuzzleStore>>,
}

impl PuzzleService {
    pub fn new(config: SearchConfig, cache: Option<PuzzleCache>) -> Self {
        Self {
            solver: PuzzleSolver::new(config),
            cache,
            store: Mutex::new(None),
        }
    }

    /// Catalog for `target`, computed at most once per store
    ///
    /// # Errors
    ///
    /// Returns an error for a target outside the allowed set or a failed search.
    pub fn request_catalog(&self, target: i64) -> Result<PuzzleCatalog, ServiceError> {
        let target = validate_target(target)?;

        if let Some(catalog) = self.with_store(|store| store.get(target).cloned())? {
            info!("Serving target {} from cache ({} quadruples)", target, catalog.len());
            return Ok(catalog);
        }

        info!("No cached catalog for target {}", target);
        self.compute_and_store(target)
    }

    /// Recompute the catalog for `target`, replacing any cached one
    ///
    /// # Errors
    ///
    /// Returns an error for a target outside the allowed set or a failed search.
    pub fn refresh_catalog(&self, target: i64) -> Result<PuzzleCatalog, ServiceError> {
        let target = validate_target(target)?;
        info!("Refreshing catalog for target {}", target);
        self.compute_and_store(target)
    }

    fn compute_and_store(&self, target: u32) -> Result<PuzzleCatalog, ServiceError> {
        let catalog = self.solver.solve(target)?;

        self.with_store(|store| match &self.cache {
            Some(cache) => cache.put(store, target, catalog.clone()),
            None => {
                store.insert(target, catalog.clone());
            }
        })?;

        Ok(catalog)
    }

    fn with_store<T>(&self, f: impl FnOnce(&mut PuzzleStore) -> T) -> Result<T, ServiceError> {
        let mut guard = self.lock_store()?;
        let store = guard.get_or_insert_with(|| {
            self.cache
                .as_ref()
                .map(PuzzleCache::load)
                .unwrap_or_default()
        });
        Ok(f(store))
    }

    fn lock_store(&self) -> Result<MutexGuard<'_, Option<PuzzleStore>>, ServiceError> {
        self.store.lock().map_err(|_| ServiceError::LockPoisoned)
    }
}

impl Default for PuzzleService {
    fn default() -> Self {
        Self::new(SearchConfig::default(), None)
    }
}
