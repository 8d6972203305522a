//! # Product Actor
//!
//! This module wires the [`Product`] catalog to the generic resource framework.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`] and its mapping from framework errors
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use resource_actor::{IdPolicy, MemoryStore};
//! use storefront::clients::ProductClient;
//! use storefront::model::ProductDraft;
//! use storefront::product_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = product_actor::new(32, MemoryStore::default(), IdPolicy::Sequential);
//!     let client = ProductClient::new(generic_client);
//!     tokio::spawn(actor.run());
//!
//!     let widget = client
//!         .create_product(ProductDraft::default().with_name("Widget").with_price(9.99))
//!         .await?;
//!     assert_eq!(widget.id.0, 1);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Product;
use resource_actor::{CollectionStore, IdPolicy, ResourceActor, ResourceClient};

/// Creates a new Product actor over `store` and its client.
pub fn new<S: CollectionStore<Product>>(
    buffer_size: usize,
    store: S,
    id_policy: IdPolicy,
) -> (ResourceActor<Product, S>, ResourceClient<Product>) {
    ResourceActor::new(buffer_size, store, id_policy)
}
