use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::PuzzleCatalog;

/// Every computed catalog, keyed by target. Serialized as one JSON object
/// whose keys are the targets as text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PuzzleStore {
    catalogs: BTreeMap<u32, PuzzleCatalog>,
}

impl PuzzleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, target: u32) -> Option<&PuzzleCatalog> {
        self.catalogs.get(&target)
    }

    /// Add or overwrite the catalog for `target`
    pub fn insert(&mut self, target: u32, catalog: PuzzleCatalog) -> Option<PuzzleCatalog> {
        self.catalogs.insert(target, catalog)
    }

    /// Take over catalogs from `other` for targets this store lacks
    pub fn absorb_missing(&mut self, other: PuzzleStore) {
        for (target, catalog) in other.catalogs {
            self.catalogs.entry(target).or_insert(catalog);
        }
    }

    pub fn targets(&self) -> impl Iterator<Item = u32> + '_ {
        self.catalogs.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.catalogs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalogs.is_empty()
    }
}
