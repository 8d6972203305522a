//! # Product Client
//!
//! The Product Resource Service boundary. It wraps a `ResourceClient<Product>` and exposes
//! the six catalog operations with [`ProductError`] as the error type, ready to be mapped
//! onto an HTTP status by [`ProductError::status`].
use crate::model::{Product, ProductDraft, ProductId};
use crate::product_actor::ProductError;
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        ProductError::from(e)
    }
}

impl ProductClient {
    /// The whole catalog, in stored order.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, ProductError> {
        self.list().await
    }

    /// Looks a product up by id. A miss is `NotFound`.
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: ProductId) -> Result<Product, ProductError> {
        self.get(id)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    /// Appends a new product. The id comes from the store; a draft id is ignored.
    #[instrument(skip(self))]
    pub async fn create_product(&self, draft: ProductDraft) -> Result<Product, ProductError> {
        debug!("Sending request");
        Ok(self.inner.create(draft).await?)
    }

    /// Overlays `draft` onto the stored product. An id in the draft is honored
    /// unless another product already holds it.
    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: ProductId,
        draft: ProductDraft,
    ) -> Result<Product, ProductError> {
        debug!("Sending request");
        Ok(self.inner.update(id, draft).await?)
    }

    /// Overlays `draft` onto the stored product, keeping the stored id.
    #[instrument(skip(self))]
    pub async fn patch_product(
        &self,
        id: ProductId,
        draft: ProductDraft,
    ) -> Result<Product, ProductError> {
        debug!("Sending request");
        Ok(self.inner.patch(id, draft).await?)
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: ProductId) -> Result<(), ProductError> {
        self.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resource_actor::mock::{
        create_mock_client, expect_create, expect_get, expect_patch, MockClient,
    };

    fn widget(id: u32) -> Product {
        Product::new(ProductId(id), "Widget", 9.99)
    }

    #[tokio::test]
    async fn test_create_product_forwards_draft() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let create_task = tokio::spawn(async move {
            product_client
                .create_product(ProductDraft::default().with_name("Widget").with_price(9.99))
                .await
        });

        let (draft, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(draft.name.as_deref(), Some("Widget"));
        assert_eq!(draft.price, Some(9.99));
        responder.send(Ok(draft.into_product(ProductId(5)))).unwrap();

        let created = create_task.await.unwrap().unwrap();
        assert_eq!(created, widget(5));
    }

    #[tokio::test]
    async fn test_get_product_turns_a_miss_into_not_found() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let get_task = tokio::spawn(async move { product_client.get_product(ProductId(9)).await });

        let (id, responder) = expect_get(&mut receiver)
            .await
            .expect("Expected Get request");
        assert_eq!(id, ProductId(9));
        responder.send(Ok(None)).unwrap();

        let result = get_task.await.unwrap();
        assert_eq!(result, Err(ProductError::NotFound("9".to_string())));
        assert_eq!(result.unwrap_err().status(), 404);
    }

    #[tokio::test]
    async fn test_patch_product_sends_payload_to_stored_id() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let patch_task = tokio::spawn(async move {
            product_client
                .patch_product(ProductId(2), ProductDraft::default().with_price(1.5))
                .await
        });

        let (id, draft, responder) = expect_patch(&mut receiver)
            .await
            .expect("Expected Patch request");
        assert_eq!(id, ProductId(2));
        let mut patched = widget(2);
        draft.apply_to(&mut patched);
        responder.send(Ok(patched)).unwrap();

        assert_eq!(patch_task.await.unwrap().unwrap().price, 1.5);
    }

    #[tokio::test]
    async fn test_framework_errors_are_mapped() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_list().return_ok(vec![widget(1), widget(2)]);
        mock.expect_update(ProductId(1))
            .return_err(FrameworkError::IdConflict("2".to_string()));
        mock.expect_delete(ProductId(3))
            .return_err(FrameworkError::NotFound("3".to_string()));
        mock.expect_create().return_err(FrameworkError::ActorClosed);

        let client = ProductClient::new(mock.client());

        assert_eq!(client.list_products().await.unwrap().len(), 2);
        let clash = client
            .update_product(ProductId(1), ProductDraft::default())
            .await
            .unwrap_err();
        assert_eq!(clash, ProductError::IdConflict("2".to_string()));
        assert_eq!(clash.status(), 409);
        assert_eq!(
            client.delete_product(ProductId(3)).await,
            Err(ProductError::NotFound("3".to_string()))
        );
        assert!(matches!(
            client.create_product(ProductDraft::default()).await,
            Err(ProductError::ActorCommunicationError(_))
        ));

        mock.verify();
    }
}
