use std::sync::Arc;

use async_trait::async_trait;

use business::domain::cart::model::Cart;
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;
use business::domain::logger::Logger;

use super::entity::{decode_cart, encode_cart};
use crate::storage::error::StorageError;
use crate::storage::key_value::KeyValueStore;

/// Storage key of the cart record.
pub const DEFAULT_CART_KEY: &str = "@cart";

pub struct CartRepositoryKeyValue {
    store: Arc<dyn KeyValueStore>,
    key: String,
    logger: Arc<dyn Logger>,
}

impl CartRepositoryKeyValue {
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>, logger: Arc<dyn Logger>) -> Self {
        Self {
            store,
            key: key.into(),
            logger,
        }
    }
}

#[async_trait]
impl CartRepository for CartRepositoryKeyValue {
    async fn load(&self) -> Result<Cart, RepositoryError> {
        let raw = match self.store.get(&self.key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                self.logger
                    .debug(&format!("No cart record under {}", self.key));
                return Ok(Cart::new());
            }
            Err(StorageError::Encoding(e)) => {
                self.logger.warn(&format!(
                    "Discarding malformed cart record under {}: {}",
                    self.key, e
                ));
                return Ok(Cart::new());
            }
            Err(e) => {
                self.logger
                    .error(&format!("Reading cart record {} failed: {}", self.key, e));
                return Err(RepositoryError::StorageUnavailable);
            }
        };

        match decode_cart(&raw) {
            Ok(cart) => Ok(cart),
            Err(e) => {
                self.logger.warn(&format!(
                    "Discarding malformed cart record under {}: {}",
                    self.key, e
                ));
                Ok(Cart::new())
            }
        }
    }

    async fn save(&self, cart: &Cart) -> Result<(), RepositoryError> {
        let raw = encode_cart(cart).map_err(|_| RepositoryError::Serialization)?;

        self.store.set(&self.key, &raw).await.map_err(|e| {
            self.logger
                .error(&format!("Writing cart record {} failed: {}", self.key, e));
            RepositoryError::Persistence
        })
    }
}
