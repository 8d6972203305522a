//! # Storefront demo
//!
//! Runs the catalog actor over `CATALOG_PATH`, adds a product, adjusts it, puts it in the
//! cart stored under `CART_STORAGE_DIR` and submits a contact form.
//!
//! ```bash
//! RUST_LOG=info cargo run -p storefront
//! ```

use resource_actor::tracing::setup_tracing;
use storefront::config::Config;
use storefront::contact::ContactForm;
use storefront::lifecycle::StorefrontSystem;
use storefront::model::{InventoryStatus, ProductDraft};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = Config::from_env();
    info!(catalog = %config.catalog_path.display(), "Starting storefront");

    let system = StorefrontSystem::new(config)
        .await
        .map_err(|e| e.to_string())?;

    let span = tracing::info_span!("catalog");
    let watch = async {
        let draft = ProductDraft {
            code: Some("f230fh0g3".to_string()),
            category: Some("Accessories".to_string()),
            quantity: Some(24),
            ..ProductDraft::default()
                .with_name("Bamboo Watch")
                .with_price(65.0)
        };
        let created = system
            .product_client
            .create_product(draft)
            .await
            .map_err(|e| e.to_string())?;
        info!(product_id = %created.id, "Product created");

        let low_stock = ProductDraft {
            quantity: Some(3),
            inventory_status: Some(InventoryStatus::LowStock),
            ..ProductDraft::default()
        };
        system
            .product_client
            .patch_product(created.id, low_stock)
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await;

    let watch = match watch {
        Ok(product) => product,
        Err(e) => {
            error!(error = %e, "Catalog update failed");
            system.shutdown().await?;
            return Err(e);
        }
    };

    let products = system
        .product_client
        .list_products()
        .await
        .map_err(|e| e.to_string())?;
    info!(count = products.len(), "Catalog listed");

    let mut cart = system.open_cart();
    cart.subscribe(|items| info!(lines = items.len(), "Cart changed"));
    cart.add_to_cart(&watch).map_err(|e| e.to_string())?;
    cart.add_to_cart(&watch).map_err(|e| e.to_string())?;
    info!(items = cart.get_item_count(), total = cart.get_total(), "Cart ready");

    match ContactForm::new("visitor@example.com", "Is the bamboo watch waterproof?").submit() {
        Ok(receipt) => info!(confirmation = receipt.confirmation, "Contact acknowledged"),
        Err(e) => error!(error = %e, "Contact form rejected"),
    }

    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
