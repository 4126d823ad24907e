// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! File-backed favorites store.
//!
//! The whole document is rewritten on every change. Writes go to a
//! uniquely named temporary file in the same directory which is then
//! renamed over the target, so readers never see a half-written document.
//! Each read-modify-write holds a lock shared by every store in the process
//! that was opened on the same path.

use crate::models::{FavoriteKind, Favorites};
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};
use tempfile::NamedTempFile;

/// Default document location, relative to the working directory.
pub const DEFAULT_FAVORITES_PATH: &str = "favorites.json";

/// Favorites persisted as one JSON document.
#[derive(Debug)]
pub struct FavoritesStore {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl FavoritesStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        let path = path.into();
        let lock = path_lock(&path);
        Self { path, lock }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the document, creating an empty one if it does not exist yet.
    pub fn load(&self) -> Result<Favorites, FavoritesError> {
        let _guard = self.lock();
        self.load_locked()
    }

    /// Overwrite the document with `favorites`.
    pub fn save(&self, favorites: &Favorites) -> Result<(), FavoritesError> {
        let _guard = self.lock();
        self.save_locked(favorites)
    }

    /// Add `id` to the `kind` list. Adding an existing id leaves the
    /// document untouched. Returns the resulting document.
    pub fn add(&self, kind: FavoriteKind, id: &str) -> Result<Favorites, FavoritesError> {
        let _guard = self.lock();
        let mut favorites = self.load_locked()?;

        if favorites.insert(kind, id) {
            self.save_locked(&favorites)?;
            tracing::info!(kind = %kind, id, "Added favorite");
        } else {
            tracing::debug!(kind = %kind, id, "Favorite already present");
        }
        Ok(favorites)
    }

    /// Remove `id` from the `kind` list. The document is rewritten even when
    /// `id` was not present. Returns the resulting document.
    pub fn remove(&self, kind: FavoriteKind, id: &str) -> Result<Favorites, FavoritesError> {
        let _guard = self.lock();
        let mut favorites = self.load_locked()?;

        let removed = favorites.remove(kind, id);
        self.save_locked(&favorites)?;
        tracing::info!(kind = %kind, id, removed, "Removed favorite");
        Ok(favorites)
    }

    /// Membership check. Load failures count as "not a favorite".
    pub fn is_favorite(&self, kind: FavoriteKind, id: &str) -> bool {
        match self.load() {
            Ok(favorites) => favorites.contains(kind, id),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    kind = %kind,
                    id,
                    "Favorites check failed, treating as not favorite"
                );
                false
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, ()> {
        // The guarded value is (), so a poisoned lock carries no bad state.
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn load_locked(&self) -> Result<Favorites, FavoritesError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                let favorites = Favorites::default();
                self.save_locked(&favorites)?;
                tracing::info!(path = %self.path.display(), "Created empty favorites document");
                return Ok(favorites);
            }
            Err(e) => {
                return Err(FavoritesError::IoError(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        let mut favorites: Favorites = serde_json::from_str(&data)
            .map_err(|e| FavoritesError::ParseError(format!("{}: {}", self.path.display(), e)))?;
        if favorites.dedup() {
            tracing::warn!(path = %self.path.display(), "Dropped duplicate favorites ids");
        }
        Ok(favorites)
    }

    fn save_locked(&self, favorites: &Favorites) -> Result<(), FavoritesError> {
        let data = to_pretty_json(favorites)?;
        write_atomic(&self.path, &data)
            .map_err(|e| FavoritesError::IoError(format!("{}: {}", self.path.display(), e)))
    }
}

/// Lock shared by all stores opened on `path` in this process.
fn path_lock(path: &Path) -> Arc<Mutex<()>> {
    static LOCKS: OnceLock<Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>> = OnceLock::new();

    let mut locks = LOCKS
        .get_or_init(Default::default)
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    locks.entry(path.to_path_buf()).or_default().clone()
}

/// Serialize with 4-space indentation and fixed field order.
pub fn to_pretty_json(favorites: &Favorites) -> Result<Vec<u8>, FavoritesError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    favorites
        .serialize(&mut serializer)
        .map_err(|e| FavoritesError::SerializeError(e.to_string()))?;
    Ok(buf)
}

/// Write `data` to a sibling temp file, sync it, then rename over `path`.
/// The temp file is removed if any step fails.
fn write_atomic(path: &Path, data: &[u8]) -> io::Result<()> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    fs::create_dir_all(parent)?;

    let mut temp = NamedTempFile::new_in(parent)?;
    temp.write_all(data)?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Errors from favorites persistence.
#[derive(Debug, thiserror::Error)]
pub enum FavoritesError {
    #[error("Failed to access favorites file: {0}")]
    IoError(String),

    #[error("Malformed favorites document: {0}")]
    ParseError(String),

    #[error("Failed to encode favorites: {0}")]
    SerializeError(String),
}
