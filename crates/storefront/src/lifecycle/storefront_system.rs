use crate::cart::{CartManager, FileStorage};
use crate::clients::ProductClient;
use crate::config::Config;
use crate::model::Product;
use crate::product_actor;
use resource_actor::{CollectionStore, JsonFileStore, StoreError};
use tracing::{error, info};

/// The runtime orchestrator for the storefront.
///
/// # Example
///
/// ```ignore
/// let system = StorefrontSystem::new(Config::from_env()).await?;
///
/// let products = system.product_client.list_products().await?;
///
/// system.shutdown().await?;
/// ```
pub struct StorefrontSystem {
    /// Client for the catalog actor
    pub product_client: ProductClient,

    config: Config,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl StorefrontSystem {
    /// Starts the catalog actor over the JSON document at `config.catalog_path`.
    ///
    /// An empty catalog is written first if the file does not exist yet.
    pub async fn new(config: Config) -> Result<Self, StoreError> {
        let store = JsonFileStore::<Product>::new(&config.catalog_path);
        if store.initialize_if_missing().await? {
            info!(path = %config.catalog_path.display(), "Created empty catalog");
        }
        Ok(Self::with_store(store, config))
    }

    /// Starts the catalog actor over any store, e.g. a `MemoryStore` in tests.
    pub fn with_store<S: CollectionStore<Product>>(store: S, config: Config) -> Self {
        let (product_actor, product_client) =
            product_actor::new(config.actor_buffer, store, config.id_policy);
        let product_handle = tokio::spawn(product_actor.run());

        info!(policy = ?config.id_policy, "Storefront started");
        Self {
            product_client: ProductClient::new(product_client),
            config,
            handles: vec![product_handle],
        }
    }

    /// Rehydrates the cart from `config.cart_storage_dir`.
    pub fn open_cart(&self) -> CartManager<FileStorage> {
        CartManager::load(FileStorage::new(&self.config.cart_storage_dir))
    }

    /// Drops the clients and waits for every actor to finish.
    ///
    /// Returns an error if an actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down storefront...");
        drop(self.product_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Storefront shutdown complete.");
        Ok(())
    }
}
