//! # Framework Errors
//!
//! This module defines the common error types used throughout the resource framework.
//! By centralizing error definitions, we ensure consistent error handling across
//! all actors and clients.

use std::path::PathBuf;

/// Errors raised while reading or writing a persisted collection.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed document {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Document {path} has no `{key}` collection")]
    MissingCollection { path: PathBuf, key: String },
    #[error("Could not encode collection for {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors that can occur within the resource framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Id already in use: {0}")]
    IdConflict(String),
    #[error("No ids left to assign in {0}")]
    IdsExhausted(&'static str),
    #[error("Storage failure: {0}")]
    Storage(#[from] StoreError),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
