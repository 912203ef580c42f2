use std::sync::Arc;

use crate::domain::product::model::Product;
use crate::domain::product::value_objects::ProductId;

use super::model::Cart;
use super::observer::{CartObserver, SubscriptionId};

/// The cart operations offered to display surfaces.
///
/// Each mutation returns the snapshot it produced. Operations targeting a
/// product that is not in the cart are no-ops and return the current
/// snapshot.
pub trait CartService: Send + Sync {
    fn add(&self, product: &Product) -> Arc<Cart>;
    fn increase_quantity(&self, product_id: &ProductId) -> Arc<Cart>;
    fn decrease_quantity(&self, product_id: &ProductId) -> Arc<Cart>;
    fn remove(&self, product_id: &ProductId) -> Arc<Cart>;
    fn clear(&self) -> Arc<Cart>;
    fn snapshot(&self) -> Arc<Cart>;
    fn subscribe(&self, observer: Arc<dyn CartObserver>) -> SubscriptionId;
    fn unsubscribe(&self, id: SubscriptionId) -> bool;
}
