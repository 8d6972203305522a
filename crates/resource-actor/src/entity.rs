//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract that every resource (Product, ...) must
//! implement to be managed by the generic `ResourceActor`. It specifies associated types for
//! IDs, creation and update payloads, and errors, and the two hooks the actor calls while
//! mutating a collection (`from_create_params`, `on_update`).
//!
//! # Architecture Note
//! The actor owns the read-modify-write cycle against the store. The entity only knows how
//! to build itself from a payload and how to overlay an update onto itself. This keeps the
//! persistence and id bookkeeping in one place for every resource type.
//!
//! We use "Associated Types" (type Id, type Create, etc.) to enforce type safety.
//! A `Product` entity requires a `ProductDraft` payload, and you can't accidentally send it
//! a payload meant for another resource.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// Entities are persisted as a whole collection, so they must round-trip through serde.
pub trait ActorEntity: Clone + Debug + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Ids are numeric so the actor can assign them from the collection (`len + 1`, `max + 1`).
    type Id: Eq + Hash + Ord + Copy + Send + Sync + Display + Debug + From<u32> + Into<u32>;

    /// The data required to create a new instance (DTO - Data Transfer Object).
    type Create: Send + Sync + Debug;

    /// The data overlaid onto an existing instance by `update` and `patch`.
    type Update: Send + Sync + Debug;

    /// The error type for this entity.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Key under which the collection is stored in its JSON document
    /// (e.g. `"products"` for `{ "products": [...] }`).
    const COLLECTION: &'static str;

    /// Returns the id currently held by this entity.
    fn id(&self) -> Self::Id;

    /// Overwrites the id. Used by the actor to re-assert the stored id after a patch.
    fn set_id(&mut self, id: Self::Id);

    /// Construct the full Entity from the assigned ID and the creation payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Overlays an update onto this entity. Fields absent from the payload are retained.
    fn on_update(&mut self, update: Self::Update) -> Result<(), Self::Error>;
}
