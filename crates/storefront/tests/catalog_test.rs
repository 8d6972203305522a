use resource_actor::{ActorClient, IdPolicy, JsonFileStore, MemoryStore};
use storefront::config::Config;
use storefront::lifecycle::StorefrontSystem;
use storefront::model::{InventoryStatus, Product, ProductDraft, ProductId};
use storefront::product_actor::ProductError;
use std::path::Path;

const SEED: &str = r#"{
  "products": [
    { "id": 1, "code": "f230fh0g3", "name": "Bamboo Watch", "description": "Product Description", "price": 65, "quantity": 24, "inventoryStatus": "INSTOCK", "category": "Accessories", "image": "bamboo-watch.jpg", "rating": 5 },
    { "id": 2, "code": "nvklal433", "name": "Black Watch", "description": "Product Description", "price": 72, "quantity": 61, "inventoryStatus": "INSTOCK", "category": "Accessories", "image": "black-watch.jpg", "rating": 4 },
    { "id": 3, "code": "zz21cz3c1", "name": "Blue Band", "description": "Product Description", "price": 79, "quantity": 2, "inventoryStatus": "LOWSTOCK", "category": "Fitness", "image": "blue-band.jpg", "rating": 3 }
  ]
}"#;

fn config_for(dir: &Path, id_policy: IdPolicy) -> Config {
    Config {
        catalog_path: dir.join("catalog.json"),
        cart_storage_dir: dir.join("local_storage"),
        id_policy,
        actor_buffer: 8,
    }
}

async fn seeded(dir: &Path, id_policy: IdPolicy) -> StorefrontSystem {
    let config = config_for(dir, id_policy);
    std::fs::write(&config.catalog_path, SEED).unwrap();
    StorefrontSystem::new(config).await.unwrap()
}

fn widget() -> ProductDraft {
    ProductDraft::default().with_name("Widget").with_price(9.99)
}

fn stored(dir: &Path) -> serde_json::Value {
    serde_json::from_str(&std::fs::read_to_string(dir.join("catalog.json")).unwrap()).unwrap()
}

#[tokio::test]
async fn test_get_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let system = seeded(dir.path(), IdPolicy::Sequential).await;

    let first = system.product_client.get_product(ProductId(2)).await.unwrap();
    let second = system.product_client.get_product(ProductId(2)).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first.name, "Black Watch");
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_create_appends_with_next_id_and_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let system = seeded(dir.path(), IdPolicy::Sequential).await;
    let client = &system.product_client;
    let before = client.list_products().await.unwrap().len();

    let created = client.create_product(widget()).await.unwrap();

    assert_eq!(created.id, ProductId(before as u32 + 1));
    assert_eq!(client.list_products().await.unwrap().len(), before + 1);
    assert_eq!(
        client.get_product(created.id).await.unwrap(),
        widget().into_product(created.id)
    );
    assert_eq!(stored(dir.path())["products"][3]["name"], "Widget");
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_patch_changes_only_given_fields_and_keeps_id() {
    let dir = tempfile::tempdir().unwrap();
    let system = seeded(dir.path(), IdPolicy::Sequential).await;
    let client = &system.product_client;
    let before = client.get_product(ProductId(1)).await.unwrap();

    let patch = ProductDraft {
        id: Some(ProductId(99)),
        price: Some(12.0),
        ..ProductDraft::default()
    };
    let patched = client.patch_product(ProductId(1), patch).await.unwrap();

    assert_eq!(patched, Product { price: 12.0, ..before });
    assert!(matches!(
        client.get_product(ProductId(99)).await,
        Err(ProductError::NotFound(_))
    ));
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_update_overlays_and_may_move_the_id() {
    let dir = tempfile::tempdir().unwrap();
    let system = seeded(dir.path(), IdPolicy::Sequential).await;
    let client = &system.product_client;

    let renamed = client
        .update_product(
            ProductId(3),
            ProductDraft {
                inventory_status: Some(InventoryStatus::OutOfStock),
                ..ProductDraft::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(renamed.name, "Blue Band");
    assert_eq!(renamed.inventory_status, InventoryStatus::OutOfStock);
    assert_eq!(stored(dir.path())["products"][2]["inventoryStatus"], "OUTOFSTOCK");

    let moved = client
        .update_product(
            ProductId(3),
            ProductDraft {
                id: Some(ProductId(30)),
                ..ProductDraft::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(moved.id, ProductId(30));

    let clash = client
        .update_product(
            ProductId(30),
            ProductDraft {
                id: Some(ProductId(1)),
                ..ProductDraft::default()
            },
        )
        .await;
    assert_eq!(clash, Err(ProductError::IdConflict("1".to_string())));
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let system = seeded(dir.path(), IdPolicy::Sequential).await;
    let client = &system.product_client;

    client.delete_product(ProductId(2)).await.unwrap();

    let missing = client.get_product(ProductId(2)).await.unwrap_err();
    assert_eq!(missing.status(), 404);
    assert_eq!(client.delete_product(ProductId(2)).await.unwrap_err().status(), 404);
    assert_eq!(client.list().await.unwrap().len(), 2);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_sequential_ids_collide_after_deleting_from_the_front() {
    let dir = tempfile::tempdir().unwrap();
    let system = seeded(dir.path(), IdPolicy::Sequential).await;
    let client = &system.product_client;

    client.delete_product(ProductId(1)).await.unwrap();
    let result = client.create_product(widget()).await;

    // len + 1 == 3, which Blue Band still holds.
    assert_eq!(result, Err(ProductError::IdConflict("3".to_string())));
    assert_eq!(stored(dir.path())["products"].as_array().unwrap().len(), 2);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_max_plus_one_ids_stay_unique_after_delete() {
    let dir = tempfile::tempdir().unwrap();
    let system = seeded(dir.path(), IdPolicy::MaxPlusOne).await;
    let client = &system.product_client;

    client.delete_product(ProductId(1)).await.unwrap();
    let created = client.create_product(widget()).await.unwrap();

    assert_eq!(created.id, ProductId(4));
    let ids: Vec<ProductId> = client
        .list_products()
        .await
        .unwrap()
        .iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, vec![ProductId(2), ProductId(3), ProductId(4)]);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_top_id_refuses_create_without_killing_the_catalog() {
    let store = MemoryStore::new(vec![Product::new(ProductId(u32::MAX), "Last", 1.0)]);
    let config = Config {
        id_policy: IdPolicy::MaxPlusOne,
        ..Config::default()
    };
    let system = StorefrontSystem::with_store(store.clone(), config);

    let result = system.product_client.create_product(widget()).await;

    assert_eq!(result, Err(ProductError::IdsExhausted));
    assert_eq!(system.product_client.list_products().await.unwrap().len(), 1);
    system.shutdown().await.unwrap();
    assert_eq!(store.snapshot().await.len(), 1);
}

#[tokio::test]
async fn test_broken_catalog_is_a_storage_failure() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path(), IdPolicy::Sequential);
    std::fs::write(&config.catalog_path, "{ \"products\": [").unwrap();
    let system = StorefrontSystem::new(config).await.unwrap();

    let error = system.product_client.list_products().await.unwrap_err();

    assert!(matches!(error, ProductError::StorageFailure(_)));
    assert_eq!(error.status(), 500);
    assert!(matches!(
        system.product_client.create_product(widget()).await,
        Err(ProductError::StorageFailure(_))
    ));
    assert_eq!(
        std::fs::read_to_string(dir.path().join("catalog.json")).unwrap(),
        "{ \"products\": ["
    );
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_new_system_starts_with_an_empty_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path(), IdPolicy::Sequential);
    let system = StorefrontSystem::new(config).await.unwrap();

    assert!(system.product_client.list_products().await.unwrap().is_empty());
    let created = system.product_client.create_product(widget()).await.unwrap();
    assert_eq!(created.id, ProductId(1));
    system.shutdown().await.unwrap();

    let reopened = JsonFileStore::<Product>::new(dir.path().join("catalog.json"));
    let system =
        StorefrontSystem::with_store(reopened, config_for(dir.path(), IdPolicy::Sequential));
    assert_eq!(
        system.product_client.get_product(ProductId(1)).await.unwrap().name,
        "Widget"
    );
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_patches_are_all_kept() {
    let dir = tempfile::tempdir().unwrap();
    let system = seeded(dir.path(), IdPolicy::Sequential).await;

    let mut tasks = Vec::new();
    for (id, price) in [(1, 1.0), (2, 2.0), (3, 3.0)] {
        let client = system.product_client.clone();
        tasks.push(tokio::spawn(async move {
            client
                .patch_product(ProductId(id), ProductDraft::default().with_price(price))
                .await
        }));
    }
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    let prices: Vec<f64> = system
        .product_client
        .list_products()
        .await
        .unwrap()
        .iter()
        .map(|p| p.price)
        .collect();
    assert_eq!(prices, vec![1.0, 2.0, 3.0]);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_memory_backed_system() {
    let store = MemoryStore::<Product>::default();
    let system = StorefrontSystem::with_store(store.clone(), Config::default());

    system.product_client.create_product(widget()).await.unwrap();
    system.shutdown().await.unwrap();

    assert_eq!(store.snapshot().await.len(), 1);
}
