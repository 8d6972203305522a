//! Entity trait implementation for the Product domain type.
//!
//! Both create and update take a [`ProductDraft`]; the overlay itself lives on the draft
//! so the HTTP-facing payload and the stored record share one field list.

use super::error::ProductError;
use crate::model::{Product, ProductDraft, ProductId};
use resource_actor::ActorEntity;

impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductDraft;
    type Update = ProductDraft;
    type Error = ProductError;
    const COLLECTION: &'static str = "products";

    fn id(&self) -> ProductId {
        self.id
    }

    fn set_id(&mut self, id: ProductId) {
        self.id = id;
    }

    /// Builds a Product from the assigned id and the draft. Any id in the draft is ignored.
    fn from_create_params(id: ProductId, draft: ProductDraft) -> Result<Self, ProductError> {
        Ok(draft.into_product(id))
    }

    /// Overlays the present draft fields. Payloads are accepted as-is.
    fn on_update(&mut self, draft: ProductDraft) -> Result<(), ProductError> {
        draft.apply_to(self);
        Ok(())
    }
}
