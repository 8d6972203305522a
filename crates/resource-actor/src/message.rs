//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `ResourceClient` and `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// # The CRUD Pattern
/// The variants map directly to the operations of a resource collection:
///
/// - **List**: the whole collection, in stored order.
/// - **Get**: one entity by ID, `None` when absent.
/// - **Create**: assigns an ID and appends a new entity built from [`ActorEntity::Create`].
/// - **Update**: overlays [`ActorEntity::Update`] onto an entity; an ID in the payload is honored.
/// - **Patch**: same overlay, but the stored ID always survives.
/// - **Delete**: removes an entity.
///
/// `Update` and `Patch` are deliberately separate requests even though they share a payload.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    List {
        respond_to: Response<Vec<T>>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Patch {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
}
