//! Local key/value storage for the cart snapshot.

use super::error::CartError;
use std::collections::HashMap;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Key the cart snapshot is stored under.
pub const CART_KEY: &str = "local_cart";

/// A synchronous string key/value store, in the manner of browser local storage.
pub trait CartStorage: Send + Sync {
    /// Returns the stored value, or `None` when nothing was stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>, CartError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), CartError>;
}

/// Process-local storage. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // A poisoned map still holds the last completed write.
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl CartStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, CartError> {
        Ok(self.entries().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CartError> {
        self.entries().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl CartStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, CartError> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(CartError::Storage { path, source }),
        }
    }

    /// Replaces the file atomically: a crash leaves either the old value or the new one.
    fn set(&self, key: &str, value: &str) -> Result<(), CartError> {
        let path = self.path_for(key);
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        if let Err(source) = replace_file(&self.dir, &tmp, &path, value.as_bytes()) {
            let _ = std::fs::remove_file(&tmp);
            return Err(CartError::Storage { path, source });
        }
        Ok(())
    }
}

fn replace_file(dir: &Path, tmp: &Path, target: &Path, bytes: &[u8]) -> std::io::Result<()> {
    std::fs::create_dir_all(dir)?;
    let mut file = std::fs::File::create(tmp)?;
    file.write_all(bytes)?;
    file.sync_all()?;
    drop(file);
    std::fs::rename(tmp, target)
}
