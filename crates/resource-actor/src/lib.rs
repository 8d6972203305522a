//! # Resource Actor
//!
//! This crate provides the building blocks for serving a persisted collection of resources
//! through an actor. It implements a **Resource-Oriented Architecture (ROA)** pattern on top
//! of the **Actor Model**: one actor owns one collection and its store, and every request
//! for that collection goes through it.
//!
//! ## Why an actor in front of a file?
//!
//! The collection is persisted as a single document that is loaded in full and rewritten in
//! full on every mutation. Two writers that both read, modify and write the document can
//! lose each other's changes. Routing every request through one sequential actor removes
//! that interleaving for everything inside the process without any lock around the file.
//!
//! ## Core Concepts
//!
//! - [`ActorEntity`]: what a resource must provide (id access, construction, overlay).
//! - [`CollectionStore`]: where a collection lives ([`JsonFileStore`], [`MemoryStore`]).
//! - [`IdPolicy`]: how ids are assigned on create.
//! - [`ResourceActor`]: the sequential server loop (load → modify → save → reply).
//! - [`ResourceClient`]: the cloneable async handle; [`ActorClient`] for domain wrappers.
//! - [`FrameworkError`] / [`StoreError`]: what can go wrong.
//!
//! ## Testing
//!
//! Actors can run over a [`MemoryStore`] for fast tests, or over a [`JsonFileStore`] in a
//! temporary directory. Client wrappers can be tested against [`mock::MockClient`] without
//! any actor at all.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod ids;
pub mod message;
pub mod mock;
pub mod store;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::{FrameworkError, StoreError};
pub use ids::IdPolicy;
pub use message::{ResourceRequest, Response};
pub use store::{CollectionStore, JsonFileStore, MemoryStore};
