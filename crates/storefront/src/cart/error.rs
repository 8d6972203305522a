//! Error types for the cart.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CartError {
    /// The local storage backend refused a read or write.
    #[error("Cart storage error on {path}: {source}")]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The snapshot could not be encoded.
    #[error("Cart serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
