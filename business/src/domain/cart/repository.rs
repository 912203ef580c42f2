use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Cart;

/// Durable storage for the cart. Every save is a full-state overwrite.
#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Reads the stored cart. A missing or malformed record is an empty
    /// cart, not an error; only an unreadable store is reported.
    async fn load(&self) -> Result<Cart, RepositoryError>;
    async fn save(&self, cart: &Cart) -> Result<(), RepositoryError>;
}
