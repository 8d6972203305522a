use resource_actor::IdPolicy;
use std::path::PathBuf;

/// Storefront configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Catalog document (`CATALOG_PATH`)
    pub catalog_path: PathBuf,
    /// Directory backing the cart's local storage (`CART_STORAGE_DIR`)
    pub cart_storage_dir: PathBuf,
    /// Id assignment for new products (`ID_POLICY`: `sequential` | `max-plus-one`)
    pub id_policy: IdPolicy,
    /// Product actor mailbox capacity (`ACTOR_BUFFER`)
    pub actor_buffer: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("data/catalog.json"),
            cart_storage_dir: PathBuf::from("data/local_storage"),
            id_policy: IdPolicy::default(),
            actor_buffer: 32,
        }
    }
}

impl Config {
    /// Unset or unparsable variables keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            catalog_path: var("CATALOG_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.catalog_path),
            cart_storage_dir: var("CART_STORAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.cart_storage_dir),
            id_policy: var("ID_POLICY")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.id_policy),
            actor_buffer: var("ACTOR_BUFFER")
                .and_then(|n| n.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(defaults.actor_buffer),
        }
    }
}
