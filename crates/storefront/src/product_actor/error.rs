//! Error types for the Product actor.

use resource_actor::FrameworkError;
use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// The id a request would produce is already held by another product.
    #[error("Product id already in use: {0}")]
    IdConflict(String),

    /// Every id the policy could hand out is taken.
    #[error("No product ids left to assign")]
    IdsExhausted,

    /// The catalog could not be read or written.
    #[error("Catalog storage failure: {0}")]
    StorageFailure(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl ProductError {
    /// HTTP status an outer surface should answer with.
    pub fn status(&self) -> u16 {
        match self {
            ProductError::NotFound(_) => 404,
            ProductError::IdConflict(_) | ProductError::IdsExhausted => 409,
            ProductError::StorageFailure(_) | ProductError::ActorCommunicationError(_) => 500,
        }
    }
}

impl From<FrameworkError> for ProductError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => ProductError::NotFound(id),
            FrameworkError::IdConflict(id) => ProductError::IdConflict(id),
            FrameworkError::IdsExhausted(_) => ProductError::IdsExhausted,
            FrameworkError::Storage(source) => ProductError::StorageFailure(source.to_string()),
            other => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resource_actor::StoreError;

    #[test]
    fn test_framework_errors_map_to_boundary_statuses() {
        let missing = ProductError::from(FrameworkError::NotFound("4".to_string()));
        let clash = ProductError::from(FrameworkError::IdConflict("3".to_string()));
        let storage = ProductError::from(FrameworkError::Storage(StoreError::MissingCollection {
            path: "catalog.json".into(),
            key: "products".to_string(),
        }));
        let closed = ProductError::from(FrameworkError::ActorClosed);
        let exhausted = ProductError::from(FrameworkError::IdsExhausted("products"));

        assert_eq!(missing, ProductError::NotFound("4".to_string()));
        assert_eq!(
            (missing.status(), clash.status(), storage.status(), closed.status()),
            (404, 409, 500, 500)
        );
        assert!(matches!(storage, ProductError::StorageFailure(msg) if msg.contains("products")));
        assert!(matches!(closed, ProductError::ActorCommunicationError(_)));
        assert_eq!(exhausted, ProductError::IdsExhausted);
        assert_eq!(exhausted.status(), 409);
    }
}
