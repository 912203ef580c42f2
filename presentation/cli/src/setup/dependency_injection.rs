use std::sync::Arc;

use business::application::cart::store::{CartStore, CartStoreDependencies};
use business::domain::cart::service::CartService;
use business::domain::logger::Logger;
use logger::TracingLogger;
use persistence::cart::repository::CartRepositoryKeyValue;
use persistence::storage::file::FileKeyValueStore;
use persistence::storage::key_value::KeyValueStore;
use persistence::storage::memory::InMemoryKeyValueStore;

use crate::catalog::source::Catalog;
use crate::config::app_config::AppConfig;
use crate::screens::badge::CartBadge;

use super::failure_reporter::ConsoleFailureReporter;

pub struct DependencyContainer {
    pub cart: Arc<CartStore>,
    pub catalog: Catalog,
    pub badge: Arc<CartBadge>,
}

impl DependencyContainer {
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        // Infrastructure adapters
        let store: Arc<dyn KeyValueStore> = if config.storage.ephemeral {
            logger.info("Using in-memory cart storage");
            Arc::new(InMemoryKeyValueStore::new())
        } else {
            logger.info(&format!(
                "Using cart storage in {}",
                config.storage.data_dir.display()
            ));
            Arc::new(FileKeyValueStore::new(config.storage.data_dir.clone()))
        };
        let repository = Arc::new(CartRepositoryKeyValue::new(
            store,
            config.storage.cart_key.clone(),
            logger.clone(),
        ));

        // Cart store, shared by every screen
        let cart = Arc::new(
            CartStore::open(CartStoreDependencies {
                repository,
                reporter: Arc::new(ConsoleFailureReporter),
                logger: logger.clone(),
                policy: config.persistence.policy(),
            })
            .await,
        );
        let badge = Arc::new(CartBadge::new(&cart.snapshot()));
        cart.subscribe(badge.clone());

        // Catalog data source
        let catalog = match &config.catalog.path {
            Some(path) => Catalog::load(path).await?,
            None => Catalog::demo()?,
        };
        logger.info(&format!(
            "Catalog loaded with {} products",
            catalog.products().len()
        ));

        Ok(Self {
            cart,
            catalog,
            badge,
        })
    }
}
