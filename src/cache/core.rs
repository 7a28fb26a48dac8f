use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use tempfile::NamedTempFile;

use crate::cache::errors::CacheError;
use crate::cache::store::PuzzleStore;
use crate::catalog::PuzzleCatalog;

/// File-backed persistence for a [`PuzzleStore`].
///
/// Reads never fail the caller: a missing file is an empty store and an
/// unreadable or corrupt one is logged and treated the same way. Writes
/// re-read the document first and replace it whole, so entries written by
/// other processes sharing the file survive.
#[derive(Debug, Clone)]
pub struct PuzzleCache {
    path: PathBuf,
}

impl PuzzleCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the store, degrading to an empty one on any failure
    pub fn load(&self) -> PuzzleStore {
        match self.try_load() {
            Ok(store) => {
                info!(
                    "Loaded {} cached target(s) from {}",
                    store.len(),
                    self.path.display()
                );
                store
            }
            Err(err) => {
                warn!("Ignoring puzzle store: {}", err);
                PuzzleStore::default()
            }
        }
    }

    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn try_load(&self) -> Result<PuzzleStore, CacheError> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("No puzzle store at {}", self.path.display());
                return Ok(PuzzleStore::default());
            }
            Err(source) => {
                return Err(CacheError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        serde_json::from_slice(&data).map_err(|source| CacheError::Json {
            path: self.path.clone(),
            source,
        })
    }

    /// Record `catalog` for `target` and write the whole store back.
    ///
    /// The document on disk is re-read first and `store` is refreshed from
    /// it, keeping in-memory entries the document lacks. If the re-read
    /// fails, the in-memory store is written as is. A failed write is
    /// logged; the in-memory store keeps the new entry.
    pub fn put(&self, store: &mut PuzzleStore, target: u32, catalog: PuzzleCatalog) {
        match self.try_load() {
            Ok(mut on_disk) => {
                on_disk.absorb_missing(std::mem::take(store));
                *store = on_disk;
            }
            Err(err) => warn!("Writing in-memory store over unreadable document: {}", err),
        }

        store.insert(target, catalog);
        if let Err(err) = self.persist(store) {
            warn!("Catalog for {} was not persisted: {}", target, err);
        }
    }

    /// Write `store` to a uniquely named temporary file next to the store
    /// path, then rename it over the store path.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization, the write or the rename fails.
    pub fn persist(&self, store: &PuzzleStore) -> Result<(), CacheError> {
        let data = serde_json::to_vec_pretty(store).map_err(|source| CacheError::Json {
            path: self.path.clone(),
            source,
        })?;

        let dir = self.staging_dir();
        let io_error = |source| CacheError::Io {
            path: dir.to_path_buf(),
            source,
        };
        let mut staging = NamedTempFile::new_in(dir).map_err(io_error)?;
        staging.write_all(&data).map_err(io_error)?;
        staging
            .persist(&self.path)
            .map_err(|err| CacheError::Io {
                path: self.path.clone(),
                source: err.error,
            })?;

        info!(
            "Persisted {} target(s) to {}",
            store.len(),
            self.path.display()
        );
        Ok(())
    }

    fn staging_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}
