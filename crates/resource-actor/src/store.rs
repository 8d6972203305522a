//! # Collection Stores
//!
//! A [`CollectionStore`] persists a whole collection of entities at once. There is no
//! indexing: every `load` returns the complete collection and every `save` rewrites it.
//!
//! - [`JsonFileStore`] keeps the collection in a single JSON document shaped
//!   `{ "<collection>": [ ... ] }` and replaces the file atomically on save.
//! - [`MemoryStore`] keeps it in process, for tests and demos.

use crate::entity::ActorEntity;
use crate::error::StoreError;
use async_trait::async_trait;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Storage backend owned by a `ResourceActor`.
#[async_trait]
pub trait CollectionStore<T: ActorEntity>: Send + Sync + 'static {
    /// Loads the full collection, in stored order.
    async fn load(&self) -> Result<Vec<T>, StoreError>;

    /// Replaces the full collection. Either everything is written or nothing is.
    async fn save(&self, items: &[T]) -> Result<(), StoreError>;
}

// =============================================================================
// JSON FILE STORE
// =============================================================================

/// Serializes `{ key: items }` without going through `serde_json::Value`,
/// so entity fields keep their declaration order in the file.
struct Document<'a, T> {
    key: &'a str,
    items: &'a [T],
}

impl<T: Serialize> Serialize for Document<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.key, self.items)?;
        map.end()
    }
}

/// Persists a collection as one pretty-printed JSON document.
#[derive(Debug, Clone)]
pub struct JsonFileStore<T> {
    path: PathBuf,
    _entity: PhantomData<fn() -> T>,
}

impl<T: ActorEntity> JsonFileStore<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _entity: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes an empty collection document if no file exists yet.
    ///
    /// Returns `true` when a document was created.
    pub async fn initialize_if_missing(&self) -> Result<bool, StoreError> {
        if tokio::fs::try_exists(&self.path)
            .await
            .map_err(|source| self.io_error(source))?
        {
            return Ok(false);
        }
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| self.io_error(source))?;
        }
        self.save(&[]).await?;
        info!(
            path = %self.path.display(),
            collection = T::COLLECTION,
            "Initialized empty collection"
        );
        Ok(true)
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn malformed(&self, source: serde_json::Error) -> StoreError {
        StoreError::Malformed {
            path: self.path.clone(),
            source,
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl<T: ActorEntity> CollectionStore<T> for JsonFileStore<T> {
    async fn load(&self) -> Result<Vec<T>, StoreError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| self.io_error(source))?;
        let mut document: HashMap<String, serde_json::Value> =
            serde_json::from_str(&raw).map_err(|source| self.malformed(source))?;
        let items = document
            .remove(T::COLLECTION)
            .ok_or_else(|| StoreError::MissingCollection {
                path: self.path.clone(),
                key: T::COLLECTION.to_string(),
            })?;
        let items: Vec<T> = serde_json::from_value(items).map_err(|source| self.malformed(source))?;
        debug!(path = %self.path.display(), count = items.len(), "Loaded collection");
        Ok(items)
    }

    async fn save(&self, items: &[T]) -> Result<(), StoreError> {
        let document = Document {
            key: T::COLLECTION,
            items,
        };
        let bytes = serde_json::to_vec_pretty(&document).map_err(|source| StoreError::Encode {
            path: self.path.clone(),
            source,
        })?;

        let tmp = self.temp_path();
        if let Err(source) = replace_file(&tmp, &self.path, &bytes).await {
            // The target is untouched; only the temporary file may be left over.
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(self.io_error(source));
        }
        debug!(path = %self.path.display(), count = items.len(), "Saved collection");
        Ok(())
    }
}

/// Writes `bytes` to `tmp`, flushes it to disk, then renames it over `target`.
async fn replace_file(tmp: &Path, target: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = tokio::fs::File::create(tmp).await?;
    file.write_all(bytes).await?;
    file.sync_all().await?;
    drop(file);
    tokio::fs::rename(tmp, target).await
}

// =============================================================================
// MEMORY STORE
// =============================================================================

/// In-process store. Clones share the same underlying collection.
#[derive(Debug, Clone)]
pub struct MemoryStore<T> {
    items: Arc<Mutex<Vec<T>>>,
}

impl<T: ActorEntity> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T: ActorEntity> MemoryStore<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: Arc::new(Mutex::new(items)),
        }
    }

    /// Returns what is currently persisted.
    pub async fn snapshot(&self) -> Vec<T> {
        self.items.lock().await.clone()
    }
}

#[async_trait]
impl<T: ActorEntity> CollectionStore<T> for MemoryStore<T> {
    async fn load(&self) -> Result<Vec<T>, StoreError> {
        Ok(self.items.lock().await.clone())
    }

    async fn save(&self, items: &[T]) -> Result<(), StoreError> {
        *self.items.lock().await = items.to_vec();
        Ok(())
    }
}
