//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns a collection's store
//! and applies every request against it. It implements the "Server" side of the Actor
//! Model, processing messages sequentially and ensuring exclusive access to the store.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::ids::IdPolicy;
use crate::message::ResourceRequest;
use crate::store::CollectionStore;
use std::marker::PhantomData;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a persisted collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the store and the receiver end
/// of the channel.
///
/// **Concurrency Model**:
/// The actor processes its messages *sequentially*. Every request performs a complete
/// load → modify → save cycle before the next one starts, so two writers in the same
/// process can never interleave their read-modify-write cycles and lose an update.
/// No `Mutex` is needed around the file: the actor is its only writer.
///
/// Nothing is cached between requests; each request sees what the store holds right now.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Run**: Spawn the actor's run loop in a background task.
/// 3.  **Use**: Clone the client wherever requests originate.
///
/// ```rust
/// use resource_actor::{ActorEntity, IdPolicy, MemoryStore, ResourceActor};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Debug, Serialize, Deserialize)]
/// struct Tag { id: u32, label: String }
/// #[derive(Debug, thiserror::Error)] #[error("tag error")] struct TagError;
///
/// impl ActorEntity for Tag {
///     type Id = u32; type Create = String; type Update = String; type Error = TagError;
///     const COLLECTION: &'static str = "tags";
///     fn id(&self) -> u32 { self.id }
///     fn set_id(&mut self, id: u32) { self.id = id; }
///     fn from_create_params(id: u32, label: String) -> Result<Self, TagError> { Ok(Self { id, label }) }
///     fn on_update(&mut self, label: String) -> Result<(), TagError> { self.label = label; Ok(()) }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Tag, _>::new(10, MemoryStore::default(), IdPolicy::Sequential);
///     tokio::spawn(actor.run());
///
///     let tag = client.create("sale".to_string()).await.unwrap();
///     assert_eq!(tag.id, 1);
/// }
/// ```
pub struct ResourceActor<T: ActorEntity, S: CollectionStore<T>> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: S,
    id_policy: IdPolicy,
    _entity: PhantomData<fn() -> T>,
}

impl<T: ActorEntity, S: CollectionStore<T>> ResourceActor<T, S> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    /// * `store` - Where the collection lives between requests.
    /// * `id_policy` - How ids for new entities are derived.
    pub fn new(buffer_size: usize, store: S, id_policy: IdPolicy) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store,
            id_policy,
            _entity: PhantomData,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self) {
        let entity_type = entity_type::<T>();
        info!(entity_type, collection = T::COLLECTION, policy = ?self.id_policy, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::List { respond_to } => {
                    let result = self.store.load().await.map_err(FrameworkError::from);
                    match &result {
                        Ok(items) => debug!(entity_type, count = items.len(), "List"),
                        Err(e) => warn!(entity_type, error = %e, "List failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let result = self.get(id).await;
                    match &result {
                        Ok(item) => debug!(entity_type, %id, found = item.is_some(), "Get"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Get failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let result = self.create(params).await;
                    if let Err(e) = &result {
                        warn!(entity_type, error = %e, "Create failed");
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let result = self.overlay(id, update, false).await;
                    if let Err(e) = &result {
                        warn!(entity_type, %id, error = %e, "Update failed");
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Patch {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Patch");
                    let result = self.overlay(id, update, true).await;
                    if let Err(e) = &result {
                        warn!(entity_type, %id, error = %e, "Patch failed");
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let result = self.delete(id).await;
                    if let Err(e) = &result {
                        warn!(entity_type, %id, error = %e, "Delete failed");
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, "Shutdown");
    }

    async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        let items = self.store.load().await?;
        Ok(items.into_iter().find(|item| item.id() == id))
    }

    async fn create(&self, params: T::Create) -> Result<T, FrameworkError> {
        let mut items = self.store.load().await?;
        let id = self
            .id_policy
            .next_id(&items)
            .ok_or(FrameworkError::IdsExhausted(T::COLLECTION))?;
        if items.iter().any(|item| item.id() == id) {
            return Err(FrameworkError::IdConflict(id.to_string()));
        }

        let item = T::from_create_params(id, params)
            .map_err(|e| FrameworkError::EntityError(Box::new(e)))?;
        items.push(item.clone());
        self.store.save(&items).await?;

        info!(entity_type = entity_type::<T>(), %id, size = items.len(), "Created");
        Ok(item)
    }

    /// Shared body of `Update` and `Patch`.
    ///
    /// With `keep_id` the stored id is written back after the overlay. Without it, an id
    /// carried by the payload is accepted as long as no other entity already holds it.
    async fn overlay(
        &self,
        id: T::Id,
        update: T::Update,
        keep_id: bool,
    ) -> Result<T, FrameworkError> {
        let mut items = self.store.load().await?;
        let index = position(&items, id)?;

        let mut merged = items[index].clone();
        merged
            .on_update(update)
            .map_err(|e| FrameworkError::EntityError(Box::new(e)))?;
        if keep_id {
            merged.set_id(id);
        }

        let new_id = merged.id();
        if new_id != id && items.iter().any(|item| item.id() == new_id) {
            return Err(FrameworkError::IdConflict(new_id.to_string()));
        }

        items[index] = merged.clone();
        self.store.save(&items).await?;

        info!(entity_type = entity_type::<T>(), %id, "Updated");
        Ok(merged)
    }

    async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        let mut items = self.store.load().await?;
        let index = position(&items, id)?;

        items.remove(index);
        self.store.save(&items).await?;

        info!(entity_type = entity_type::<T>(), %id, size = items.len(), "Deleted");
        Ok(())
    }
}

fn position<T: ActorEntity>(items: &[T], id: T::Id) -> Result<usize, FrameworkError> {
    items
        .iter()
        .position(|item| item.id() == id)
        .ok_or_else(|| FrameworkError::NotFound(id.to_string()))
}

/// Extract just the type name (e.g., "Product" instead of "storefront::model::product::Product").
fn entity_type<T>() -> &'static str {
    std::any::type_name::<T>()
        .split("::")
        .last()
        .unwrap_or("Unknown")
}
